//! Deserializer over a [`Value`] that matches incoming object keys against
//! the declared fields of a struct using a [`FieldNaming`] policy. Keys of
//! maps are handed through unchanged.

use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer as _, IntoDeserializer, Visitor};
use serde_json::{Error, Value, map};

use crate::json_codec::field_naming::FieldNaming;

pub(crate) fn from_value<T: DeserializeOwned>(value: Value, naming: FieldNaming) -> Result<T, Error> {
    T::deserialize(NamingDeserializer { value, naming })
}

struct NamingDeserializer {
    value: Value,
    naming: FieldNaming,
}

impl<'de> de::Deserializer<'de> for NamingDeserializer {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        let naming = self.naming;
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(flag) => visitor.visit_bool(flag),
            Value::Number(number) => number.deserialize_any(visitor),
            Value::String(text) => visitor.visit_string(text),
            Value::Array(items) => visitor.visit_seq(Items {
                items: items.into_iter(),
                naming,
            }),
            Value::Object(object) => visitor.visit_map(Entries {
                entries: object.into_iter(),
                value: None,
                naming,
                fields: None,
            }),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.value {
            Value::Object(object) => visitor.visit_map(Entries {
                entries: object.into_iter(),
                value: None,
                naming: self.naming,
                fields: Some(fields),
            }),
            value => NamingDeserializer {
                value,
                naming: self.naming,
            }
            .deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.value {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            Value::Object(object) if object.len() == 1 => {
                let mut entries = object.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(Variant {
                        variant,
                        value,
                        naming: self.naming,
                    }),
                    None => Err(de::Error::custom("expected an enum variant")),
                }
            }
            _ => Err(de::Error::custom(
                "expected a variant name or an object with a single variant key",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct Items {
    items: std::vec::IntoIter<Value>,
    naming: FieldNaming,
}

impl<'de> de::SeqAccess<'de> for Items {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Error> {
        let naming = self.naming;
        self.items
            .next()
            .map(|value| seed.deserialize(NamingDeserializer { value, naming }))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

struct Entries {
    entries: map::IntoIter,
    value: Option<Value>,
    naming: FieldNaming,
    /// Declared fields when the object is read as a struct.
    fields: Option<&'static [&'static str]>,
}

impl<'de> de::MapAccess<'de> for Entries {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Error> {
        let Some((key, value)) = self.entries.next() else {
            return Ok(None);
        };
        self.value = Some(value);

        let key = match self.fields {
            Some(fields) => self
                .naming
                .field_for(&key, fields)
                .map_or(key, str::to_owned),
            None => key,
        };
        seed.deserialize(Value::String(key)).map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
        let value = self
            .value
            .take()
            .ok_or_else(|| de::Error::custom("map value read before its key"))?;
        seed.deserialize(NamingDeserializer {
            value,
            naming: self.naming,
        })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

struct Variant {
    variant: String,
    value: Value,
    naming: FieldNaming,
}

impl<'de> de::EnumAccess<'de> for Variant {
    type Error = Error;
    type Variant = NamingDeserializer;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, NamingDeserializer), Error> {
        let variant = seed.deserialize(Value::String(self.variant))?;
        Ok((
            variant,
            NamingDeserializer {
                value: self.value,
                naming: self.naming,
            },
        ))
    }
}

impl<'de> de::VariantAccess<'de> for NamingDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<(), Error> {
        match self.value {
            Value::Null => Ok(()),
            _ => Err(de::Error::custom("expected a unit variant")),
        }
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, Error> {
        seed.deserialize(self)
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        de::Deserializer::deserialize_seq(self, visitor)
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        de::Deserializer::deserialize_struct(self, "", fields, visitor)
    }
}
