use super::error::{self, Error};
use super::login;
use crate::handler::Transport;
use crate::Credentials;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the login API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://chat.your-domain.com`. Any path is replaced by the endpoint's.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Log into the server.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`, plus `Error::UrlParse` if
    /// `server` is not a valid base URL.
    pub async fn login(
        &self,
        client: &reqwest::Client,
        req: &login::Req,
    ) -> error::Result<login::Resp> {
        let url = Url::parse(&self.server)?.join(login::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Send a request and read its body as JSON.
    ///
    /// The login endpoint reports rejected credentials in the body, sometimes
    /// alongside a 4xx status, so the status is logged but does not decide
    /// the result.
    ///
    /// ## Errors
    ///
    /// - `Error::Http` if the request could not be sent or the body could not
    ///   be read
    /// - `Error::Json` if the body is not the JSON we expected
    async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, "non-success status from server, reading body anyway");
        }

        let body = resp.bytes().await?;

        serde_json::from_slice(&body).map_err(Error::from)
    }
}

/// A `Client` paired with the HTTP connection pool it sends requests over.
/// This is what the login form handler uses in the real world.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Where requests go
    client: Client,

    /// Shared connections
    http: reqwest::Client,
}

impl HttpTransport {
    /// Get a transport for the given server with a fresh connection pool.
    pub fn new(server: String) -> Self {
        Self::with_http(Client::new(server), reqwest::Client::new())
    }

    /// Get a transport that shares an existing connection pool.
    pub fn with_http(client: Client, http: reqwest::Client) -> Self {
        Self { client, http }
    }

    /// The server this transport talks to.
    pub fn server(&self) -> &str {
        &self.client.server
    }
}

impl Transport for HttpTransport {
    async fn login(&self, credentials: &Credentials) -> error::Result<login::Resp> {
        self.client.login(&self.http, credentials).await
    }
}
