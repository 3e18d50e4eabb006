use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::HashMap;

/// Response type for the /active_faults endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ActiveFaultsResponse {
    /// Fault table keyed by fault id.
    #[serde(default)]
    faults: HashMap<String, FaultStatus>,
}

#[derive(serde::Deserialize, Debug)]
pub(crate) struct FaultStatus {
    name: String,
    /// Whether the fault currently matters for flight.
    relevant: bool,
}

impl SerdeJSONBodyHTTPResponseType for ActiveFaultsResponse {}

impl ActiveFaultsResponse {
    /// Names of the faults currently blocking flight.
    pub(crate) fn blocking_names(&self) -> Vec<&str> {
        self.faults.values().filter(|f| f.relevant).map(|f| f.name.as_str()).collect()
    }
}
