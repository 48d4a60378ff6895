//! Defines the cell type of a feature matrix and the label type.
use serde::{Serialize, Deserialize};
use serde_json::Value as JsonValue;

use crate::errors::{CartError, Result};

use std::fmt;


/// A single feature value.
/// Integers and strings are discrete values,
/// floats are continuous values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A textual token.
    Token(String),
}


/// A class label.
/// The same type is used for the exact value of a discrete question,
/// so it can never hold a float.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// An integer label.
    Int(i64),
    /// A textual label.
    Token(String),
}


impl Value {
    /// Returns the numeric value of `self` as `f64`.
    /// Tokens have no numeric value.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            Value::Token(_) => None,
        }
    }
}


impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}


impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}


impl From<Label> for Value {
    #[inline]
    fn from(label: Label) -> Self {
        match label {
            Label::Int(i) => Self::Int(i),
            Label::Token(t) => Self::Token(t),
        }
    }
}


impl From<i64> for Label {
    #[inline]
    fn from(label: i64) -> Self {
        Self::Int(label)
    }
}


impl From<i32> for Label {
    #[inline]
    fn from(label: i32) -> Self {
        Self::Int(label as i64)
    }
}


impl From<&str> for Label {
    #[inline]
    fn from(label: &str) -> Self {
        Self::Token(label.to_string())
    }
}


impl From<String> for Label {
    #[inline]
    fn from(label: String) -> Self {
        Self::Token(label)
    }
}


impl TryFrom<Value> for Label {
    type Error = CartError;
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(Self::Int(i)),
            Value::Token(t) => Ok(Self::Token(t)),
            Value::Float(x) => Err(CartError::UnsupportedValueType(
                format!("float label {x:?}")
            )),
        }
    }
}


impl TryFrom<&JsonValue> for Value {
    type Error = CartError;
    fn try_from(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if n.is_f64() {
                    // `is_f64` guarantees `as_f64` succeeds.
                    n.as_f64()
                        .map(Self::Float)
                        .ok_or_else(|| unsupported(value))
                } else {
                    Err(CartError::UnsupportedValueType(
                        format!("integer {n} out of the range of i64")
                    ))
                }
            },
            JsonValue::String(s) => Ok(Self::Token(s.clone())),
            _ => Err(unsupported(value)),
        }
    }
}


impl TryFrom<&JsonValue> for Label {
    type Error = CartError;
    fn try_from(value: &JsonValue) -> Result<Self> {
        Value::try_from(value)?.try_into()
    }
}


/// Returns the `UnsupportedValueType` error for a JSON value.
fn unsupported(value: &JsonValue) -> CartError {
    let kind = match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    };
    CartError::UnsupportedValueType(kind.to_string())
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Token(t) => write!(f, "{t}"),
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{i}"),
            Label::Token(t) => write!(f, "{t}"),
        }
    }
}
