use super::active_faults::ActiveFaultsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /active_faults endpoint.
#[derive(Debug)]
pub(crate) struct ActiveFaultsRequest {}

impl NoBodyHTTPRequestType for ActiveFaultsRequest {}

impl HTTPRequestType for ActiveFaultsRequest {
    /// Type of the expected response.
    type Response = ActiveFaultsResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/active_faults" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
