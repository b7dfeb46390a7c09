//! Composite keys used as range endpoints and key-set members.
//!
//! A [`Key`] is an ordered list of [`KeyPart`] scalars, one per primary-key
//! column. Keys may be shorter than the table's primary key (a prefix) or empty;
//! an empty key on a range endpoint stands for the smallest possible key.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;

use serde::{
    de::{self, SeqAccess, Visitor},
    ser, Deserialize, Deserializer, Serialize, Serializer,
};

use super::proto;

/// A single typed component of a composite key.
///
/// In serialized form each part is a plain scalar: `null`, a bool, an integer,
/// a float, a string, or an array of byte values. Non-finite floats have no
/// unambiguous scalar spelling and fail to serialize.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyPart {
    /// SQL `NULL`.
    Null,
    /// Boolean component.
    Bool(bool),
    /// 64-bit signed integer component.
    Int64(i64),
    /// 64-bit floating-point component.
    Float64(f64),
    /// UTF-8 string component.
    String(String),
    /// Raw bytes component.
    Bytes(Vec<u8>),
}

impl KeyPart {
    /// Returns the component as UTF-8 if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KeyPart::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Whether this component is `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, KeyPart::Null)
    }

    /// Encode the component as a protobuf `Value`.
    ///
    /// Integers travel as decimal strings so 64-bit values survive JSON
    /// transcoding, and non-finite floats use their textual spelling.
    pub fn to_proto(&self) -> proto::Value {
        use proto::value::Kind;

        let kind = match self {
            KeyPart::Null => Kind::NullValue(proto::NullValue::NullValue as i32),
            KeyPart::Bool(v) => Kind::BoolValue(*v),
            KeyPart::Int64(v) => Kind::StringValue(v.to_string()),
            KeyPart::Float64(v) if v.is_nan() => Kind::StringValue("NaN".to_owned()),
            KeyPart::Float64(v) if v.is_infinite() => {
                let text = if v.is_sign_positive() {
                    "Infinity"
                } else {
                    "-Infinity"
                };
                Kind::StringValue(text.to_owned())
            }
            KeyPart::Float64(v) => Kind::NumberValue(*v),
            KeyPart::String(v) => Kind::StringValue(v.clone()),
            KeyPart::Bytes(v) => Kind::StringValue(BASE64.encode(v)),
        };
        proto::Value { kind: Some(kind) }
    }
}

impl Serialize for KeyPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            KeyPart::Null => serializer.serialize_unit(),
            KeyPart::Bool(v) => serializer.serialize_bool(*v),
            KeyPart::Int64(v) => serializer.serialize_i64(*v),
            KeyPart::Float64(v) if !v.is_finite() => Err(ser::Error::custom(format_args!(
                "non-finite float key part {v} has no dictionary form"
            ))),
            KeyPart::Float64(v) => serializer.serialize_f64(*v),
            KeyPart::String(v) => serializer.serialize_str(v),
            KeyPart::Bytes(v) => serializer.collect_seq(v),
        }
    }
}

struct KeyPartVisitor;

impl<'de> Visitor<'de> for KeyPartVisitor {
    type Value = KeyPart;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, a bool, an INT64 integer, a float, a string or a byte array")
    }

    fn visit_unit<E: de::Error>(self) -> Result<KeyPart, E> {
        Ok(KeyPart::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<KeyPart, E> {
        Ok(KeyPart::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<KeyPart, E> {
        Ok(KeyPart::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<KeyPart, E> {
        Ok(KeyPart::Int64(v))
    }

    // Integers past i64::MAX are rejected instead of rounded through f64.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<KeyPart, E> {
        i64::try_from(v)
            .map(KeyPart::Int64)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<KeyPart, E> {
        Ok(KeyPart::Float64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<KeyPart, E> {
        Ok(KeyPart::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<KeyPart, E> {
        Ok(KeyPart::String(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<KeyPart, E> {
        Ok(KeyPart::Bytes(v.to_vec()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<KeyPart, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(KeyPart::Bytes(bytes))
    }
}

impl<'de> Deserialize<'de> for KeyPart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyPartVisitor)
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::String(value.to_owned())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::String(value)
    }
}

impl From<&[u8]> for KeyPart {
    fn from(value: &[u8]) -> Self {
        KeyPart::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for KeyPart {
    fn from(value: Vec<u8>) -> Self {
        KeyPart::Bytes(value)
    }
}

impl<T> From<Option<T>> for KeyPart
where
    T: Into<KeyPart>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(KeyPart::Null, Into::into)
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident, $t:ty, $map:expr) => {
        impl From<$t> for KeyPart {
            fn from(value: $t) -> Self {
                KeyPart::$variant($map(value))
            }
        }
    };
}

impl_from_scalar!(Bool, bool, |v| v);
impl_from_scalar!(Int64, i8, i64::from);
impl_from_scalar!(Int64, i16, i64::from);
impl_from_scalar!(Int64, i32, i64::from);
impl_from_scalar!(Int64, i64, |v| v);
impl_from_scalar!(Int64, u8, i64::from);
impl_from_scalar!(Int64, u16, i64::from);
impl_from_scalar!(Int64, u32, i64::from);
impl_from_scalar!(Float64, f32, f64::from);
impl_from_scalar!(Float64, f64, |v| v);

/// Ordered list of key parts identifying a row or a prefix of rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key {
    parts: Vec<KeyPart>,
}

impl Key {
    /// Create a key from its parts.
    pub fn new(parts: Vec<KeyPart>) -> Self {
        Self { parts }
    }

    /// The empty key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the key parts in column order.
    pub fn parts(&self) -> &[KeyPart] {
        &self.parts
    }

    /// Consume the key and return its parts.
    pub fn into_parts(self) -> Vec<KeyPart> {
        self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the key has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Encode the key as a protobuf `ListValue`, one value per part.
    pub fn to_proto(&self) -> proto::ListValue {
        proto::ListValue {
            values: self.parts.iter().map(KeyPart::to_proto).collect(),
        }
    }
}

impl From<Vec<KeyPart>> for Key {
    fn from(parts: Vec<KeyPart>) -> Self {
        Self::new(parts)
    }
}

impl<T, const N: usize> From<[T; N]> for Key
where
    T: Into<KeyPart>,
{
    fn from(parts: [T; N]) -> Self {
        parts.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Key
where
    T: Into<KeyPart>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&Key> for proto::ListValue {
    fn from(key: &Key) -> Self {
        key.to_proto()
    }
}
