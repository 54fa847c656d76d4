use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::json_codec::{de, error::CodecError, field_naming::FieldNaming, iso8601, ser};

/// JSON settings shared by everything talking to the API. Built once and
/// handed to whoever needs to encode or decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonCodec {
    field_naming: FieldNaming,
    pretty: bool,
}

impl JsonCodec {
    pub fn builder() -> JsonCodecBuilder {
        JsonCodecBuilder::default()
    }

    pub fn field_naming(&self) -> FieldNaming {
        self.field_naming
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let value = self.encode_to_value(value)?;
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        encoded.map_err(CodecError::Encode)
    }

    pub fn encode_to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError> {
        ser::to_value(value, self.field_naming).map_err(CodecError::Encode)
    }

    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T, CodecError> {
        self.decode_slice(json.as_bytes())
    }

    pub fn decode_slice<T: DeserializeOwned>(&self, json: &[u8]) -> Result<T, CodecError> {
        match self.field_naming {
            FieldNaming::Identity => serde_json::from_slice(json).map_err(CodecError::Decode),
            _ => {
                let value: Value = serde_json::from_slice(json).map_err(CodecError::Decode)?;
                self.decode_value(value)
            }
        }
    }

    /// Object keys are matched against the fields of each struct in `T` by
    /// their naming-policy spelling, so `developerMessage` fills
    /// `developer_message`. Keys of maps are kept as they are.
    pub fn decode_value<T: DeserializeOwned>(&self, value: Value) -> Result<T, CodecError> {
        de::from_value(value, self.field_naming).map_err(CodecError::Decode)
    }

    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        iso8601::format(date)
    }

    pub fn parse_date(&self, input: &str) -> Result<DateTime<Utc>, CodecError> {
        iso8601::parse(input)
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonCodecBuilder {
    field_naming: FieldNaming,
    pretty: bool,
}

impl JsonCodecBuilder {
    pub fn field_naming(mut self, field_naming: FieldNaming) -> Self {
        self.field_naming = field_naming;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn build(self) -> JsonCodec {
        JsonCodec {
            field_naming: self.field_naming,
            pretty: self.pretty,
        }
    }
}
