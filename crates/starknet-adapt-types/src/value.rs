use std::fmt;

use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{AdaptResult, ConversionError, Error};

/// A structured argument or result value, the counterpart of the loose
/// object a JavaScript caller would pass to a contract function.
///
/// Integers can arrive either already parsed ([`CairoValue::Number`]) or as
/// their decimal/`0x`-hex spelling ([`CairoValue::Text`]); the adapters
/// accept both wherever a felt is expected. Results are built from
/// `Number`, `Bool`, `Array` and `Object` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CairoValue {
    Number(BigInt),
    Text(String),
    Bool(bool),
    Array(Vec<CairoValue>),
    Object(IndexMap<String, CairoValue>),
}

impl CairoValue {
    pub fn as_object(&self) -> Option<&IndexMap<String, CairoValue>> {
        match self {
            CairoValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CairoValue]> {
        match self {
            CairoValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&BigInt> {
        match self {
            CairoValue::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl From<BigInt> for CairoValue {
    fn from(number: BigInt) -> Self {
        CairoValue::Number(number)
    }
}

impl From<bool> for CairoValue {
    fn from(flag: bool) -> Self {
        CairoValue::Bool(flag)
    }
}

impl From<&str> for CairoValue {
    fn from(text: &str) -> Self {
        CairoValue::Text(text.into())
    }
}

impl From<String> for CairoValue {
    fn from(text: String) -> Self {
        CairoValue::Text(text)
    }
}

macro_rules! impl_from_integer {
    ($($int_type:ty),*) => {
        $(impl From<$int_type> for CairoValue {
            fn from(number: $int_type) -> Self {
                CairoValue::Number(BigInt::from(number))
            }
        })*
    };
}

impl_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128);

impl<V: Into<CairoValue>> From<Vec<V>> for CairoValue {
    fn from(elements: Vec<V>) -> Self {
        CairoValue::Array(elements.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, CairoValue>> for CairoValue {
    fn from(entries: IndexMap<String, CairoValue>) -> Self {
        CairoValue::Object(entries)
    }
}

/// JSON is the interchange format for argument objects; integers must be
/// JSON integers or strings, since floats have no felt interpretation.
impl TryFrom<&serde_json::Value> for CairoValue {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> AdaptResult<Self> {
        match value {
            serde_json::Value::Number(number) => {
                if let Some(signed) = number.as_i64() {
                    Ok(CairoValue::Number(BigInt::from(signed)))
                } else if let Some(unsigned) = number.as_u64() {
                    Ok(CairoValue::Number(BigInt::from(unsigned)))
                } else {
                    Err(ConversionError::InvalidFormat(number.to_string()).into())
                }
            }
            serde_json::Value::String(text) => Ok(CairoValue::Text(text.clone())),
            serde_json::Value::Bool(flag) => Ok(CairoValue::Bool(*flag)),
            serde_json::Value::Array(elements) => Ok(CairoValue::Array(
                elements.iter().map(CairoValue::try_from).collect::<AdaptResult<_>>()?,
            )),
            serde_json::Value::Object(entries) => {
                let mut converted = IndexMap::with_capacity(entries.len());
                for (key, entry) in entries {
                    converted.insert(key.clone(), CairoValue::try_from(entry)?);
                }
                Ok(CairoValue::Object(converted))
            }
            serde_json::Value::Null => {
                Err(ConversionError::InvalidFormat("null".into()).into())
            }
        }
    }
}

impl TryFrom<serde_json::Value> for CairoValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> AdaptResult<Self> {
        CairoValue::try_from(&value)
    }
}

/// Numbers serialize as decimal strings: a felt does not fit the integer
/// range every JSON consumer supports.
impl Serialize for CairoValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CairoValue::Number(number) => serializer.serialize_str(&number.to_string()),
            CairoValue::Text(text) => serializer.serialize_str(text),
            CairoValue::Bool(flag) => serializer.serialize_bool(*flag),
            CairoValue::Array(elements) => {
                let mut sequence = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    sequence.serialize_element(element)?;
                }
                sequence.end()
            }
            CairoValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, entry) in entries {
                    map.serialize_entry(key, entry)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for CairoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
