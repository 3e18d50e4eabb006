use super::custom_comms::CustomCommsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Request type for the /custom_comms endpoint, carrying opaque bytes to a
/// skill running on the vehicle.
#[derive(serde::Serialize, Debug)]
pub(crate) struct CustomCommsRequest {
    /// Base64-encoded payload.
    data: String,
    /// Identifier of the skill that should receive this message.
    skill_key: String,
    /// Whether the skill should skip producing a reply.
    no_response: bool,
}

impl CustomCommsRequest {
    pub(crate) fn new(skill_key: &str, payload: &[u8], no_response: bool) -> Self {
        Self {
            data: BASE64.encode(payload),
            skill_key: skill_key.to_string(),
            no_response,
        }
    }
}

impl JSONBodyHTTPRequestType for CustomCommsRequest {
    /// The type of the json body.
    type Body = CustomCommsRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for CustomCommsRequest {
    /// Type of the expected response.
    type Response = CustomCommsResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/custom_comms" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
