use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /status keepalive.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PilotStatusResponse {
    /// Session handle the vehicle expects back in the next keepalive.
    session_id: String,
    /// Current phase of the flight stack as a string, e.g. "FLYING". Absent
    /// while the vehicle has not settled on one.
    flight_phase: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for PilotStatusResponse {}

impl PilotStatusResponse {
    pub(crate) fn session_id(&self) -> &str { &self.session_id }
    pub(crate) fn flight_phase(&self) -> Option<&str> { self.flight_phase.as_deref() }

    pub(crate) fn into_parts(self) -> (String, Option<String>) {
        (self.session_id, self.flight_phase)
    }
}
