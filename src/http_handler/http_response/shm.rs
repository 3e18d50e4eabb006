use crate::http_handler::http_response::response_common::{
    BytesBodyHTTPResponseType, HTTPResponseType, ResponseError,
};

/// Response type for /shm reads: the raw pixel buffer.
pub(crate) struct ShmResponse {}

impl BytesBodyHTTPResponseType for ShmResponse {}

impl HTTPResponseType for ShmResponse {
    type ParsedResponseType = Vec<u8>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}
