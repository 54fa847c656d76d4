mod de;
pub mod error;
pub mod field_naming;
pub mod iso8601;
pub mod json_codec;
mod ser;
