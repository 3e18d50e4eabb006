use super::channel::ChannelResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /channel/{name} endpoint.
#[derive(Debug)]
pub(crate) struct ChannelRequest {
    endpoint: String,
}

impl ChannelRequest {
    pub(crate) fn new(channel: &str) -> Self {
        Self { endpoint: format!("/channel/{channel}") }
    }
}

impl NoBodyHTTPRequestType for ChannelRequest {}

impl HTTPRequestType for ChannelRequest {
    /// Type of the expected response.
    type Response = ChannelResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
