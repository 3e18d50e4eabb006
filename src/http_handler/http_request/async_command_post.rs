use super::async_command::AsyncCommandResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /async_command endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct AsyncCommandRequest {
    command: &'static str,
}

impl AsyncCommandRequest {
    /// Lift off from the ground. Only honored in the ready-for-takeoff phase.
    pub(crate) fn ground_takeoff() -> Self { Self { command: "ground_takeoff" } }

    /// Descend and land at the current position.
    pub(crate) fn land() -> Self { Self { command: "land" } }
}

impl JSONBodyHTTPRequestType for AsyncCommandRequest {
    /// The type of the json body.
    type Body = AsyncCommandRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AsyncCommandRequest {
    /// Type of the expected response.
    type Response = AsyncCommandResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/async_command" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
