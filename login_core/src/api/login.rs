use crate::Credentials;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The request to log into the server.
pub type Req = Credentials;

/// Result of logging in.
///
/// Servers are loose about the shape of this, so decoding is too: `success`
/// is read for truthiness the way a browser script would read it, and
/// `message` takes whatever the server put there.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Resp {
    /// Whether the server accepted the credentials. Missing, `null`, `false`,
    /// `0` and `""` all mean no.
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,

    /// Why the server rejected the credentials. Servers may leave this out
    /// when `success` is true. Non-string values are kept as their JSON text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/login";

/// Read any JSON value as a boolean, with JavaScript truthiness.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Read any JSON value as a string. `null` is empty; other non-strings are
/// rendered as JSON.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(body: &str) -> Resp {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn message_is_optional_on_success() {
        assert_eq!(
            parse(r#"{"success": true}"#),
            Resp {
                success: true,
                message: String::new()
            }
        );
    }

    #[test]
    fn ignores_extra_fields() {
        let resp = parse(r#"{"success": false, "message": "nope", "code": 7}"#);

        assert!(!resp.success);
        assert_eq!(resp.message, "nope");
    }

    #[test]
    fn missing_success_is_a_rejection() {
        let resp = parse(r#"{"message": "bad"}"#);

        assert!(!resp.success);
        assert_eq!(resp.message, "bad");
    }

    #[test]
    fn falsy_values_are_rejections() {
        for success in ["null", "false", "0", "0.0", "-0", r#""""#] {
            let resp = parse(&format!(r#"{{"success": {success}}}"#));

            assert!(!resp.success, "{success} should be falsy");
        }
    }

    #[test]
    fn truthy_values_are_acceptances() {
        for success in ["true", "1", "-3", "0.5", r#""yes""#, r#""false""#, "[]", "{}"] {
            let resp = parse(&format!(r#"{{"success": {success}}}"#));

            assert!(resp.success, "{success} should be truthy");
        }
    }

    #[test]
    fn null_message_is_empty() {
        let resp = parse(r#"{"success": false, "message": null}"#);

        assert!(!resp.success);
        assert_eq!(resp.message, "");
    }

    #[test]
    fn non_string_message_is_kept_as_text() {
        assert_eq!(parse(r#"{"success": false, "message": 42}"#).message, "42");
        assert_eq!(
            parse(r#"{"success": false, "message": ["a"]}"#).message,
            r#"["a"]"#
        );
    }

    #[test]
    fn non_object_body_is_an_error() {
        assert!(serde_json::from_str::<Resp>("true").is_err());
    }
}
