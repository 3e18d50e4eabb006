use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::runmode::RunModeResponse;

/// Request type for the /runmode endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct RunModeRequest {
    run_mode_name: String,
    action: &'static str,
}

impl RunModeRequest {
    /// Makes the mode the default without restarting the flight stack.
    pub(crate) fn set_default(mode_name: &str) -> Self {
        Self { run_mode_name: mode_name.to_string(), action: "SET_DEFAULT" }
    }

    /// Tears the current mode down and starts the given one.
    pub(crate) fn terminate_and_start(mode_name: &str) -> Self {
        Self { run_mode_name: mode_name.to_string(), action: "TERMINATE_AND_START" }
    }
}

impl JSONBodyHTTPRequestType for RunModeRequest {
    /// The type of the json body.
    type Body = RunModeRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RunModeRequest {
    /// Type of the expected response.
    type Response = RunModeResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/runmode" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
