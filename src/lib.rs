pub mod api_error;
pub mod cache_control;
pub mod cli_arguments;
pub mod config;
pub mod http_client;
pub mod json_codec;
pub mod query;
pub mod request_id;

pub use api_error::{
    api_error::{ApiError, InvalidParameter},
    error_extractor::extract_error,
};
pub use cache_control::cache_control::{CacheControl, CacheControlBuilder, cache_control_builder};
pub use http_client::call::{CallHandle, Cancellable, cancel_calls, spawn_call};
pub use json_codec::{field_naming::FieldNaming, json_codec::JsonCodec};
pub use query::simple_query_map::simple_query_map;
