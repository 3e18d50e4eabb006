use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_handler_common::HTTPError;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

#[derive(Debug, Copy, Clone)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// URL prefix class of an endpoint. The vehicle serves its JSON API below
/// `/api`, while raw shared-memory reads hang directly off the root.
#[derive(Debug, Copy, Clone)]
pub(crate) enum UrlScope {
    Api,
    Root,
}

impl UrlScope {
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            UrlScope::Api => "/api",
            UrlScope::Root => "",
        }
    }
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// The URL prefix class this endpoint lives under.
    fn scope(&self) -> UrlScope { UrlScope::Api }
    /// Additional request-specific header fields.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Request types without a body, sent as plain GET/POST.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let request = prepare_request(self, client)?;
        let response = request.send().await.map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Request types carrying a serializable JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let request = prepare_request(self, client)?.json(self.body());
        let response = request.send().await.map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

fn prepare_request<T: HTTPRequestType + ?Sized>(
    req: &T,
    client: &HTTPClient,
) -> Result<reqwest::RequestBuilder, RequestError> {
    let url = format!("{}{}{}", client.url(), req.scope().prefix(), req.endpoint());
    Ok(client
        .client()
        .request(req.request_method().into(), url)
        .headers(common_headers(client)?)
        .headers(req.header_params()))
}

/// Headers shared by every endpoint: JSON accept plus the bearer token once
/// authentication has granted one.
fn common_headers(client: &HTTPClient) -> Result<reqwest::header::HeaderMap, RequestError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    if let Some(token) = client.access_token() {
        let bearer = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))?;
        headers.insert(reqwest::header::AUTHORIZATION, bearer);
    }
    Ok(headers)
}

#[derive(Debug, Display)]
pub enum RequestError {
    InvalidAuthHeader(reqwest::header::InvalidHeaderValue),
}

impl std::error::Error for RequestError {}

impl From<reqwest::header::InvalidHeaderValue> for RequestError {
    fn from(value: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidAuthHeader(value)
    }
}
