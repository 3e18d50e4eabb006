use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// Response type for the /set_skill/{key} endpoint. Only the status code
/// matters.
pub(crate) struct SetSkillResponse {}

impl HTTPResponseType for SetSkillResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
