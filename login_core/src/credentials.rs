use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user typed into the login form. These are read fresh every time
/// the form is submitted and are never stored anywhere.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username, exactly as entered.
    pub username: String,

    /// Plaintext password, exactly as entered.
    pub password: String,
}

impl Credentials {
    /// Construct a new set of credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_the_wire_field_names() {
        let creds = Credentials::new("alice", "hunter2");

        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({"username": "alice", "password": "hunter2"})
        );
    }

    #[test]
    fn debug_hides_password() {
        let shown = format!("{:?}", Credentials::new("alice", "hunter2"));

        assert!(shown.contains("alice"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn does_not_trim_or_normalize() {
        let creds = Credentials::new("  Alice ", "p\u{e4}ss\"word\n");

        let round: Credentials =
            serde_json::from_str(&serde_json::to_string(&creds).unwrap()).unwrap();

        assert_eq!(round.username, "  Alice ");
        assert_eq!(round.password, "p\u{e4}ss\"word\n");
    }
}
