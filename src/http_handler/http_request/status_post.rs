use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::status::PilotStatusResponse;
use crate::http_handler::StreamSettings;

/// Keepalive request for the /status endpoint.
///
/// The vehicle expires the pilot session after ten seconds without one of
/// these, so the supervisor sends them continuously while connected.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PilotStatusRequest {
    in_foreground: bool,
    media_mode: &'static str,
    recording_mode: &'static str,
    takeoff_type: &'static str,
    would_accept_pilot: bool,
    /// Session handle from the previous keepalive, absent on the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_settings: Option<StreamSettings>,
}

impl PilotStatusRequest {
    pub(crate) fn new(
        session_id: Option<String>,
        stream_settings: Option<StreamSettings>,
    ) -> Self {
        Self {
            in_foreground: true,
            media_mode: "FLIGHT_CONTROL",
            recording_mode: "VIDEO_4K_30FPS",
            takeoff_type: "GROUND_TAKEOFF",
            would_accept_pilot: true,
            session_id,
            stream_settings,
        }
    }
}

impl JSONBodyHTTPRequestType for PilotStatusRequest {
    /// The type of the json body.
    type Body = PilotStatusRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for PilotStatusRequest {
    /// Type of the expected response.
    type Response = PilotStatusResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { "/status" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
