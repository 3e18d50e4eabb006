use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /runmode endpoint. The reply shape varies by run
/// mode, so it is kept as raw JSON for logging.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct RunModeResponse {
    reply: serde_json::Value,
}

impl SerdeJSONBodyHTTPResponseType for RunModeResponse {}

impl RunModeResponse {
    pub(crate) fn reply(&self) -> &serde_json::Value { &self.reply }
}
