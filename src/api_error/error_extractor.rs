use tracing::warn;

use crate::{
    api_error::api_error::ApiError, http_client::response::Response,
    json_codec::json_codec::JsonCodec,
};

/// Turns a finished response into an [`ApiError`] when it failed.
///
/// Returns `None` when there is no response or it was successful. Otherwise
/// the error body is decoded with `codec`; an absent or undecodable body
/// yields a default error. Either way the error carries a copy of
/// `response`.
pub fn extract_error(codec: &JsonCodec, response: Option<&Response>) -> Option<ApiError> {
    let response = response?;
    if response.is_successful() {
        return None;
    }

    let api_error = response
        .error_body()
        .and_then(|body| match codec.decode_slice::<ApiError>(body) {
            Ok(api_error) => Some(api_error),
            Err(error) => {
                warn!(
                    "Could not decode error body of HTTP {} response: {}",
                    response.status, error
                );
                None
            }
        })
        .unwrap_or_default();

    Some(api_error.with_response(response.clone()))
}
