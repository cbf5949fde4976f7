// Shared test helpers: an in-memory panel that records every request.
//
// `FakePanel` serves canned bodies keyed by endpoint (path and query) and
// fails like a refused connection for anything it does not know.

use std::collections::HashMap;
use std::sync::Mutex;

use iw4m_client::{Session, Transport, TransportSource};

/// Base address sessions are created with (trailing slash on purpose).
pub const BASE: &str = "http://panel.test/";
/// Session cookie sent by every test session.
pub const COOKIE: &str = ".AspNetCore.Cookies=test-token";

#[derive(Default)]
pub struct FakePanel {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `endpoint`.
    pub fn with_page(mut self, endpoint: &str, body: &str) -> Self {
        self.pages.insert(endpoint.to_string(), body.to_string());
        self
    }

    /// Every URL requested so far, in order.
    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Every cookie sent so far, in order.
    #[allow(dead_code)] // Used by other test files
    pub fn cookies(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .iter()
            .map(|(_, cookie)| cookie.clone())
            .collect()
    }
}

impl Transport for FakePanel {
    async fn get(&self, url: &str, cookie: &str) -> Result<String, TransportSource> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push((url.to_string(), cookie.to_string()));

        let endpoint = url
            .strip_prefix(BASE.trim_end_matches('/'))
            .unwrap_or(url);
        self.pages
            .get(endpoint)
            .cloned()
            .ok_or_else(|| format!("connection refused: {url}").into())
    }
}

/// Session over `panel` targeting server `1`.
pub fn session(panel: FakePanel) -> Session<FakePanel> {
    Session::new(BASE, "1", COOKIE, panel)
}
