use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http_client::response::Response;

/// Error body returned by the API for an unsuccessful call.
///
/// Every field is optional on the wire; whatever is missing stays at its
/// default. The response the error was read from travels along with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Message suitable for showing to a user.
    #[serde(rename = "error")]
    pub error_message: Option<String>,
    pub link: Option<String>,
    pub developer_message: Option<String>,
    pub error_code: Option<u32>,
    pub invalid_parameters: Vec<InvalidParameter>,
    #[serde(skip)]
    response: Option<Response>,
}

/// One rejected request parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvalidParameter {
    pub field: Option<String>,
    pub error_code: Option<u32>,
    #[serde(rename = "error")]
    pub error_message: Option<String>,
    pub developer_message: Option<String>,
}

impl ApiError {
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn with_response(mut self, response: Response) -> Self {
        self.response = Some(response);
        self
    }

    /// Status of the attached response, 0 when there is none.
    pub fn http_status_code(&self) -> u16 {
        self.response.as_ref().map_or(0, |response| response.status)
    }

    pub fn is_service_unavailable(&self) -> bool {
        self.http_status_code() == 503
    }

    pub fn error_message(&self) -> &str {
        self.error_message
            .as_deref()
            .or(self.developer_message.as_deref())
            .unwrap_or_default()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error (HTTP {})", self.http_status_code())?;
        if let Some(code) = self.error_code {
            write!(f, " [{}]", code)?;
        }
        let message = self.error_message();
        if !message.is_empty() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::{
        api_error::api_error::ApiError,
        http_client::{request::RequestHeaders, response::Response},
    };

    fn response(status: u16) -> Response {
        Response {
            status,
            headers: RequestHeaders::default(),
            body: Bytes::new(),
        }
    }

    #[test]
    fn reads_status_from_the_attached_response() {
        let detached = ApiError::default();
        let unavailable = ApiError::default().with_response(response(503));

        assert_eq!(detached.http_status_code(), 0);
        assert!(!detached.is_service_unavailable());
        assert_eq!(unavailable.http_status_code(), 503);
        assert!(unavailable.is_service_unavailable());
    }

    #[test]
    fn falls_back_to_developer_message() {
        let error = ApiError {
            developer_message: Some("The requested video could not be found".to_string()),
            ..ApiError::default()
        };

        assert_eq!(error.error_message(), "The requested video could not be found");
        assert_eq!(ApiError::default().error_message(), "");
    }

    #[test]
    fn displays_status_code_and_message() {
        let error = ApiError {
            error_message: Some("Something strange occurred.".to_string()),
            error_code: Some(2204),
            ..ApiError::default()
        }
        .with_response(response(400));

        assert_eq!(
            error.to_string(),
            "API error (HTTP 400) [2204]: Something strange occurred."
        );
        assert_eq!(ApiError::default().to_string(), "API error (HTTP 0)");
    }
}
