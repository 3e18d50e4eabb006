use crate::warn;
use std::sync::OnceLock;
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the vehicle. It sets a
/// fixed timeout, prepends the base URL to every endpoint path and attaches
/// the bearer token once authentication has granted one.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Root URL of the vehicle, prepended to all endpoint paths.
    base_url: String,
    /// Access token granted by the authentication endpoint, set at most once.
    access_token: OnceLock<String>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build().unwrap(),
            base_url: String::from(base_url),
            access_token: OnceLock::new(),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Returns the hostname part of the base URL, without scheme or port.
    pub fn host(&self) -> &str {
        let stripped =
            self.base_url.split_once("://").map_or(self.base_url.as_str(), |(_, rest)| rest);
        let authority = stripped.split(['/', '?']).next().unwrap_or(stripped);
        authority.split(':').next().unwrap_or(authority)
    }

    /// Stores the access token attached as `Authorization: Bearer` to all
    /// subsequent requests. The token of a session never changes.
    pub fn set_access_token(&self, token: String) {
        if self.access_token.set(token).is_err() {
            warn!("Access token already set, keeping the original.");
        }
    }

    pub(super) fn access_token(&self) -> Option<&str> {
        self.access_token.get().map(String::as_str)
    }
}
