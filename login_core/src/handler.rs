use crate::api::{error, login};
use crate::Credentials;
use std::future::Future;

/// Where the user ends up after a successful login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Whatever the user did to submit the form (a click, a key press.)
pub trait Activation {
    /// Stop the activation from doing what it normally would, e.g. submitting
    /// the form the old-fashioned way and reloading the page.
    fn prevent_default(&mut self);
}

/// A source of the values currently typed into the form.
pub trait Form {
    /// The current contents of the username field.
    fn username(&self) -> String;

    /// The current contents of the password field.
    fn password(&self) -> String;
}

/// Something that can deliver credentials to the server and tell us what it
/// thought of them.
pub trait Transport {
    /// Send one login request.
    ///
    /// ## Errors
    ///
    /// Any failure to deliver the request or to understand the reply.
    fn login(&self, credentials: &Credentials)
        -> impl Future<Output = error::Result<login::Resp>>;
}

/// Moves the user somewhere else.
pub trait Navigator {
    /// Go to `path`, leaving the form behind.
    fn navigate(&self, path: &str);
}

/// Puts a message in front of the user that they have to acknowledge.
pub trait Alerter {
    /// Show `message` exactly as given.
    fn alert(&self, message: &str);
}

/// A form never changes while we read it, so a snapshot works fine.
impl Form for Credentials {
    fn username(&self) -> String {
        self.username.clone()
    }

    fn password(&self) -> String {
        self.password.clone()
    }
}

/// What a single submission ended up doing.
#[derive(Debug)]
pub enum Outcome {
    /// The server accepted the credentials and we navigated away.
    Navigated(&'static str),

    /// The server rejected the credentials and we showed its message.
    Alerted(String),

    /// We never got an answer we could use. Nothing was shown to the user.
    Failed(error::Error),
}

/// Read the form for an activation, suppressing the activation's default
/// behavior first. This is the synchronous half of a submission: shells that
/// can only prevent defaults while the event is being dispatched (browsers)
/// call this directly and run `LoginFormHandler::submit` later.
pub fn collect(activation: &mut impl Activation, form: &impl Form) -> Credentials {
    activation.prevent_default();

    Credentials {
        username: form.username(),
        password: form.password(),
    }
}

/// Handles submissions of the login form. Holds nothing but its
/// capabilities, so every submission starts from scratch. Submissions are
/// not serialized: if the user submits again before the first one resolves,
/// both requests go out and whichever finishes last has the final say.
#[derive(Debug, Clone)]
pub struct LoginFormHandler<T, N, A> {
    /// Delivers credentials
    transport: T,

    /// Handles successful logins
    navigator: N,

    /// Handles rejected logins
    alerter: A,
}

impl<T, N, A> LoginFormHandler<T, N, A>
where
    T: Transport,
    N: Navigator,
    A: Alerter,
{
    /// Wire up a handler.
    pub fn new(transport: T, navigator: N, alerter: A) -> Self {
        Self {
            transport,
            navigator,
            alerter,
        }
    }

    /// Handle an activation from start to finish.
    pub async fn activate(&self, activation: &mut impl Activation, form: &impl Form) -> Outcome {
        let credentials = collect(activation, form);

        self.submit(&credentials).await
    }

    /// Send credentials that were already collected and react to the answer.
    /// Failures are logged and otherwise swallowed; the returned `Outcome`
    /// is for the caller's information only.
    #[tracing::instrument(skip_all, fields(username = %credentials.username))]
    pub async fn submit(&self, credentials: &Credentials) -> Outcome {
        match self.transport.login(credentials).await {
            Ok(resp) if resp.success => {
                tracing::info!(path = DASHBOARD_PATH, "login accepted");
                self.navigator.navigate(DASHBOARD_PATH);

                Outcome::Navigated(DASHBOARD_PATH)
            }
            Ok(resp) => {
                tracing::info!(message = %resp.message, "login rejected");
                self.alerter.alert(&resp.message);

                Outcome::Alerted(resp.message)
            }
            Err(err) => {
                tracing::error!(?err, "login request failed");

                Outcome::Failed(err)
            }
        }
    }
}
