use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::vehicle_config::VehicleConfigResponse;

/// Configuration read from the /status endpoint. Unlike the keepalive POST,
/// a bare GET returns deploy info and proxy addresses without touching the
/// pilot session.
#[derive(Debug)]
pub(crate) struct VehicleConfigRequest {}

impl NoBodyHTTPRequestType for VehicleConfigRequest {}

impl HTTPRequestType for VehicleConfigRequest {
    /// Type of the expected response.
    type Response = VehicleConfigResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/status" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
