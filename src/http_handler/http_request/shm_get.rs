use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType, UrlScope};
use super::shm::ShmResponse;

/// Request type for raw shared-memory reads. These hang directly off the
/// vehicle root rather than the /api prefix.
#[derive(Debug)]
pub(crate) struct ShmRequest {
    endpoint: String,
}

impl ShmRequest {
    /// `path` is the absolute shared-memory path reported in channel image
    /// metadata, beginning with a slash.
    pub(crate) fn new(path: &str) -> Self {
        Self { endpoint: format!("/shm{path}") }
    }
}

impl NoBodyHTTPRequestType for ShmRequest {}

impl HTTPRequestType for ShmRequest {
    /// Type of the expected response.
    type Response = ShmResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    /// Shared-memory reads bypass the /api prefix.
    fn scope(&self) -> UrlScope { UrlScope::Root }
}
