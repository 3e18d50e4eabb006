use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /authentication endpoint.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthenticationResponse {
    /// The granted access level as reported by the vehicle, e.g. "PILOT".
    access_level: Option<String>,
    /// Bearer token attached to all subsequent requests.
    access_token: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for AuthenticationResponse {}

impl AuthenticationResponse {
    pub(crate) fn access_level(&self) -> Option<&str> { self.access_level.as_deref() }
    pub(crate) fn access_token(&self) -> Option<&str> { self.access_token.as_deref() }
}
