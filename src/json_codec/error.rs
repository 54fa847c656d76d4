#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid ISO-8601 date {input:?}: {source}")]
    Date {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
