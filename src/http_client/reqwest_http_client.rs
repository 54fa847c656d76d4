use async_trait::async_trait;
use tracing::debug;

use crate::http_client::{
    error::Error,
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    response::Response,
};
use crate::request_id::{X_REQUEST_ID, new_request_id};

/// [`HttpClient`] backed by a shared `reqwest::Client`. Every call is tagged
/// with an `x-request-id` unless the caller supplied one.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let Request {
            method,
            url,
            mut headers,
            body,
        } = request;

        let request_id = match headers.get_ignore_case(X_REQUEST_ID.as_str()) {
            Some(request_id) => request_id.clone(),
            None => {
                let request_id = new_request_id();
                headers.insert(X_REQUEST_ID.as_str().to_string(), request_id.clone());
                request_id
            }
        };

        debug!(%request_id, "{} {}", method, url);

        let reqwest_response = self
            .client
            .request(method.into(), url)
            .headers(headers.into())
            .body(body)
            .send()
            .await?;

        let status = reqwest_response.status().as_u16();
        let headers = RequestHeaders::from(reqwest_response.headers());
        let body = reqwest_response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        debug!(%request_id, status, bytes = body.len(), "response received");

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http_client::request::RequestMethod;

    #[test]
    fn maps_every_request_method_onto_reqwest() {
        let pairs = [
            (RequestMethod::Get, reqwest::Method::GET),
            (RequestMethod::Post, reqwest::Method::POST),
            (RequestMethod::Put, reqwest::Method::PUT),
            (RequestMethod::Delete, reqwest::Method::DELETE),
            (RequestMethod::Patch, reqwest::Method::PATCH),
        ];

        for (method, expected) in pairs {
            assert_eq!(reqwest::Method::from(method), expected);
        }
    }
}
