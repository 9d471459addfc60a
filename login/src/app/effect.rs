use super::Action;
use login_core::{
    api::{Client, HttpTransport},
    handler::{Alerter, Navigator},
    Credentials, LoginFormHandler, Outcome,
};
use tokio::sync::mpsc::UnboundedSender;

/// Shows handler results to the user by feeding them back into the app as
/// `Action`s.
#[derive(Debug, Clone)]
pub struct ChannelUi {
    /// Where the app reads actions from
    actions: UnboundedSender<Action>,
}

impl ChannelUi {
    /// Send an action, ignoring a closed channel (we're shutting down.)
    fn send(&self, action: Action) {
        if self.actions.send(action).is_err() {
            tracing::debug!("action channel closed, dropping action");
        }
    }
}

impl Navigator for ChannelUi {
    fn navigate(&self, path: &str) {
        self.send(Action::Navigated(path.to_string()));
    }
}

impl Alerter for ChannelUi {
    fn alert(&self, message: &str) {
        self.send(Action::Alerted(message.to_string()));
    }
}

/// The login form handler as wired up for the terminal
pub type Handler = LoginFormHandler<HttpTransport, ChannelUi, ChannelUi>;

/// Connections to external services that effects use. We keep these around
/// to have some level of connection sharing for the app as a whole.
pub struct EffectContext {
    /// Submits logins and reports back over the action channel
    handler: Handler,
}

impl EffectContext {
    /// Get a new `EffectContext`
    pub fn new(server: String, http: reqwest::Client, actions: UnboundedSender<Action>) -> Self {
        let ui = ChannelUi { actions };

        Self {
            handler: LoginFormHandler::new(
                HttpTransport::with_http(Client::new(server), http),
                ui.clone(),
                ui,
            ),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Send these credentials to the server
    LogIn(Credentials),
}

impl Effect {
    /// Perform the side-effectful portions of this effect. Results come back
    /// to the app through the context's action channel.
    pub async fn run(self, ctx: &EffectContext) {
        match self {
            Self::LogIn(credentials) => {
                tracing::debug!("running login effect");

                // Failures were already logged by the handler and are not
                // shown to the user.
                if let Outcome::Failed(_) = ctx.handler.submit(&credentials).await {
                    tracing::debug!("login effect finished without a result");
                }
            }
        }
    }
}
