use super::authentication::AuthenticationResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /authentication endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct AuthenticationRequest {
    /// Stable id identifying this remote user across runs and transports.
    pub(crate) client_id: String,
    /// The requested access level, `PILOT_LEVEL` or `PHONE_LEVEL`.
    pub(crate) requested_level: u8,
    /// Whether to take the pilot seat from whoever currently holds it.
    pub(crate) commandeer: bool,
    /// Auth token content, required for simulator vehicles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) credentials: Option<String>,
}

impl AuthenticationRequest {
    /// Access level granting full flight control.
    pub(crate) const PILOT_LEVEL: u8 = 8;
    /// Access level mirroring the mobile app, without flight control.
    pub(crate) const PHONE_LEVEL: u8 = 4;
}

impl JSONBodyHTTPRequestType for AuthenticationRequest {
    /// The type of the json body.
    type Body = AuthenticationRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AuthenticationRequest {
    /// Type of the expected response.
    type Response = AuthenticationResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/authentication" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
