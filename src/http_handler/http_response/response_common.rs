use strum_macros::Display;

/// Top-level wrapper the vehicle puts around every JSON reply. Only the
/// `data` field is of interest, the rest is transport metadata.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct DataEnvelope<T> {
    data: T,
}

impl<T> DataEnvelope<T> {
    pub(crate) fn into_inner(self) -> T { self.data }
}

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        let envelope = response.json::<DataEnvelope<Self::ParsedResponseType>>().await?;
        Ok(envelope.into_inner())
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

/// Response types backed by a raw byte body instead of JSON.
pub(crate) trait BytesBodyHTTPResponseType: HTTPResponseType {}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(ResponseError::InternalServer)
        } else if response.status().is_client_error() {
            Err(ResponseError::BadRequest(response.text().await?))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    BadRequest(String),
    NoConnection,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        // Connect errors also count as request errors, so test them first.
        if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_timeout() || value.is_redirect() {
            ResponseError::InternalServer
        } else if value.is_request() {
            ResponseError::BadRequest(String::new())
        } else {
            ResponseError::Unknown
        }
    }
}
