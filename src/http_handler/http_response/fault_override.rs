use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// Response type for the /set_fault_override/{id} endpoint. Only the status
/// code matters.
pub(crate) struct FaultOverrideResponse {}

impl HTTPResponseType for FaultOverrideResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
