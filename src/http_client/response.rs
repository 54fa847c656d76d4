use bytes::Bytes;
use http::HeaderMap;

use crate::{cache_control::cache_control::CacheControl, http_client::request::RequestHeaders};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: RequestHeaders,
    pub body: Bytes,
}

impl Response {
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of an unsuccessful response. Empty bodies count as absent.
    pub fn error_body(&self) -> Option<&Bytes> {
        if self.is_successful() || self.body.is_empty() {
            None
        } else {
            Some(&self.body)
        }
    }

    /// Cache directives the server sent with this response.
    pub fn cache_control(&self) -> CacheControl {
        CacheControl::from_headers(&HeaderMap::from(self.headers.clone()))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::http_client::{request::RequestHeaders, response::Response};

    fn response(status: u16, body: &'static str) -> Response {
        Response {
            status,
            headers: RequestHeaders::default(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn treats_only_2xx_as_successful() {
        assert!(response(200, "").is_successful());
        assert!(response(204, "").is_successful());
        assert!(response(299, "").is_successful());
        assert!(!response(199, "").is_successful());
        assert!(!response(304, "").is_successful());
        assert!(!response(404, "").is_successful());
        assert!(!response(503, "").is_successful());
    }

    #[test]
    fn exposes_error_body_only_for_failures_with_content() {
        assert_eq!(response(200, "{}").error_body(), None);
        assert_eq!(response(400, "").error_body(), None);
        assert_eq!(
            response(400, "{}").error_body(),
            Some(&Bytes::from_static(b"{}"))
        );
    }

    #[test]
    fn reads_cache_directives_from_headers() {
        let cached = Response {
            status: 200,
            headers: RequestHeaders::from([
                ("Cache-Control".to_string(), "max-age=300, no-transform".to_string()),
                ("pragma".to_string(), "no-cache".to_string()),
            ]),
            body: Bytes::new(),
        };

        let cache_control = cached.cache_control();

        assert_eq!(cache_control.max_age_seconds(), Some(300));
        assert!(cache_control.no_transform());
        assert!(cache_control.no_cache());
        assert_eq!(response(200, "").cache_control(), Default::default());
    }
}
