use super::fault_override::FaultOverrideResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /set_fault_override/{id} endpoint.
#[derive(Debug)]
pub(crate) struct FaultOverrideRequest {
    endpoint: String,
    body: FaultOverrideBody,
}

#[derive(serde::Serialize, Debug)]
pub(crate) struct FaultOverrideBody {
    override_on: bool,
    fault_active: bool,
}

impl FaultOverrideRequest {
    /// Pins the given fault inactive regardless of its real state.
    pub(crate) fn suppress(fault_id: u16) -> Self {
        Self {
            endpoint: format!("/set_fault_override/{fault_id}"),
            body: FaultOverrideBody { override_on: true, fault_active: false },
        }
    }
}

impl JSONBodyHTTPRequestType for FaultOverrideRequest {
    /// The type of the json body.
    type Body = FaultOverrideBody;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for FaultOverrideRequest {
    /// Type of the expected response.
    type Response = FaultOverrideResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
