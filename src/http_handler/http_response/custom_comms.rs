use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Response type for the /custom_comms endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct CustomCommsResponse {
    /// Base64 payload produced by the skill, absent when it sent no reply.
    data: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for CustomCommsResponse {}

impl CustomCommsResponse {
    /// Decodes the skill payload out of its base64 wrapping.
    pub(crate) fn decode_data(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        self.data.as_deref().map(|d| BASE64.decode(d)).transpose()
    }
}
