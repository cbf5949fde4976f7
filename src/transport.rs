//! Panel transport and session.
//!
//! A [`Session`] holds the panel base address, the targeted server id and the
//! session cookie. Every panel operation is a single GET issued through a
//! [`Transport`]; nothing is retried and no timeout is imposed here.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::error_handling::{PanelError, Result, TransportSource};

/// Performs one GET request and returns the raw response body.
///
/// Implementations must send `cookie` verbatim as the `Cookie` header and must
/// not treat a non-2xx status as an error: the decoder decides whether such a
/// body is still usable.
pub trait Transport {
    /// Fetches `url`, returning the body text.
    fn get(
        &self,
        url: &str,
        cookie: &str,
    ) -> impl Future<Output = std::result::Result<String, TransportSource>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Arc<reqwest::Client>,
}

impl HttpTransport {
    /// Wraps an existing client (see [`crate::initialization::init_client`]).
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, cookie: &str) -> std::result::Result<String, TransportSource> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Panel answered {status} for {url}; passing body through");
        }

        Ok(response.text().await?)
    }
}

/// Connection details for one panel, immutable after construction.
///
/// All operations take `&self`, so a session can be shared read-only between
/// callers as long as its transport allows concurrent use.
#[derive(Clone)]
pub struct Session<T = HttpTransport> {
    base_address: String,
    target_server_id: String,
    session_token: String,
    transport: T,
}

impl<T> Session<T> {
    /// Creates a session. A trailing `/` on `base_address` is dropped so that
    /// endpoints (which start with `/`) can be appended verbatim.
    pub fn new(
        base_address: &str,
        target_server_id: &str,
        session_token: &str,
        transport: T,
    ) -> Self {
        Self {
            base_address: base_address.trim_end_matches('/').to_string(),
            target_server_id: target_server_id.to_string(),
            session_token: session_token.to_string(),
            transport,
        }
    }

    /// Panel base address without a trailing slash.
    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Identifier of the game server this session targets.
    pub fn target_server_id(&self) -> &str {
        &self.target_server_id
    }

    /// The transport requests are issued through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Session<T> {
    /// Issues a GET for `endpoint` (path and query, appended verbatim to the
    /// base address) and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::Transport` when the network call fails.
    pub async fn request(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_address, endpoint);
        debug!("GET {url}");
        self.transport
            .get(&url, &self.session_token)
            .await
            .map_err(|source| PanelError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_address", &self.base_address)
            .field("target_server_id", &self.target_server_id)
            .field("session_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn http_session(server: &Server, cookie: &str) -> Session<HttpTransport> {
        let base = server.url("/").to_string();
        Session::new(
            &base,
            "1",
            cookie,
            HttpTransport::new(Arc::new(reqwest::Client::new())),
        )
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let session = Session::new("http://panel:1624/", "7", "c", ());
        assert_eq!(session.base_address(), "http://panel:1624");
        assert_eq!(session.target_server_id(), "7");
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("http://panel", "7", "secret-cookie", ());
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-cookie"));
        assert!(rendered.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_request_sends_cookie_header() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/info"),
                request::headers(contains(("cookie", ".AspNetCore.Cookies=abc"))),
            ])
            .respond_with(status_code(200).body("{}")),
        );

        let session = http_session(&server, ".AspNetCore.Cookies=abc");
        let body = session.request("/api/info").await.unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn test_request_passes_non_success_body_through() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/Admin/AuditLog"))
                .respond_with(status_code(401).body("<html>login</html>")),
        );

        let session = http_session(&server, "c");
        let body = session.request("/Admin/AuditLog").await.unwrap();
        assert_eq!(body, "<html>login</html>");
    }

    #[tokio::test]
    async fn test_request_connection_failure_is_transport_error() {
        // Nothing listens on port 9 of the loopback interface.
        let session = Session::new(
            "http://127.0.0.1:9",
            "1",
            "c",
            HttpTransport::new(Arc::new(reqwest::Client::new())),
        );
        let err = session.request("/api/status").await.unwrap_err();
        match err {
            PanelError::Transport { endpoint, .. } => assert_eq!(endpoint, "/api/status"),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
