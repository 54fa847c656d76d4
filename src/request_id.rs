use http::HeaderName;
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Fresh id for an outgoing call so its logs can be matched against the
/// server's.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}
