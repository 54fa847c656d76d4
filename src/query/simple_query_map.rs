use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use tracing::warn;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Malformed escape sequence in {0:?}")]
    MalformedEscape(String),

    #[error("Escaped bytes of {0:?} are not valid UTF-8")]
    InvalidUtf8(String),
}

/// Builds a one-to-one map of query parameter names to values from `uri`.
///
/// Names that appear more than once keep only their last value, so
/// `?a=1&a=2` yields `{a: "2"}`. A parameter without `=` maps to an empty
/// value. A URI with no query, or only a fragment, yields an empty map.
///
/// Decoding stops at the first malformed parameter: the error is logged and
/// the parameters decoded before it are returned.
///
/// The map does not remember the order parameters appeared in. Callers that
/// print it should sort the keys first, as the `query` subcommand does.
pub fn simple_query_map(uri: &str) -> HashMap<String, String> {
    let mut query_pairs = HashMap::new();

    let Some((_, query)) = uri.split_once('?') else {
        return query_pairs;
    };
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));

        match (decode_component(name), decode_component(value)) {
            (Ok(name), Ok(value)) => {
                query_pairs.insert(name, value);
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!("Stopped parsing query of {}: {}", uri, error);
                break;
            }
        }
    }

    query_pairs
}

/// Form-style decoding: `+` is a space and `%XX` an escaped byte.
fn decode_component(component: &str) -> Result<String, QueryError> {
    let bytes = component.as_bytes();
    for (index, _) in component.match_indices('%') {
        let escaped = bytes.get(index + 1..index + 3);
        if !escaped.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(QueryError::MalformedEscape(component.to_string()));
        }
    }

    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QueryError::InvalidUtf8(component.to_string()))
}
