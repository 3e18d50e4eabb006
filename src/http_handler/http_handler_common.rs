use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Configuration for the RTP video stream the vehicle can push while a pilot
/// session is active. Sent verbatim inside every keepalive status update.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamSettings {
    source: &'static str,
    port: u16,
}

impl StreamSettings {
    /// Stream straight from the native camera rig to the given UDP port.
    pub fn native(port: u16) -> Self { Self { source: "NATIVE", port } }

    pub fn port(&self) -> u16 { self.port }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { Self::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { Self::HTTPResponseError(value) }
}
