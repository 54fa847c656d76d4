/// Failure to get any response back. A response with an error status is
/// not an `Error`; see [`crate::extract_error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Call cancelled")]
    Cancelled,
}

/// What the transport can tell about why a call produced no response.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            return Error::Timeout;
        }
        let message = err.error_string();
        if err.is_connect() || err.is_request() {
            Error::Network(message)
        } else {
            Error::InvalidRequest(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http_client::error::{Error, MockHttpClientErrorChecker};

    fn checker(timeout: bool, connect: bool, request: bool) -> MockHttpClientErrorChecker {
        let mut mock = MockHttpClientErrorChecker::new();
        mock.expect_is_timeout().return_const(timeout);
        mock.expect_is_connect().return_const(connect);
        mock.expect_is_request().return_const(request);
        mock.expect_error_string()
            .return_const("dns error: failed to lookup api.vimeo.com".to_string());
        mock
    }

    #[test]
    fn timeouts_win_over_other_causes() {
        let error: Error = checker(true, true, false).into();

        assert!(matches!(error, Error::Timeout));
    }

    #[test]
    fn connect_and_request_failures_are_network_errors() {
        let connect: Error = checker(false, true, false).into();
        let request: Error = checker(false, false, true).into();

        assert!(matches!(connect, Error::Network(ref m) if m.contains("api.vimeo.com")));
        assert!(matches!(request, Error::Network(_)));
    }

    #[test]
    fn anything_else_is_an_invalid_request() {
        let error: Error = checker(false, false, false).into();

        assert!(matches!(error, Error::InvalidRequest(_)));
        assert_eq!(
            error.to_string(),
            "Invalid request: dns error: failed to lookup api.vimeo.com"
        );
    }
}
