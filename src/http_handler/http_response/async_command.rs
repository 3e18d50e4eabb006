use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// Response type for the /async_command endpoint. The body carries nothing of
/// interest beyond the status code, so it is discarded.
pub(crate) struct AsyncCommandResponse {}

impl HTTPResponseType for AsyncCommandResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
