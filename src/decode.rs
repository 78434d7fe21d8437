use crate::shape::{Primitive, Shape};
use crate::value::{self, Value};
use crate::JsonValue;
use thiserror::Error;

/// A reason a JSON value failed to decode.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The value's runtime shape does not match the expected shape.
    #[error("invalid JSON")]
    InvalidJson,
    /// An element of an array failed against the element shape.
    #[error("invalid array element")]
    InvalidArrayElement,
    /// A named field was missing or failed against its field shape.
    #[error("invalid property: {key}")]
    InvalidProperty { key: Box<str> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validates `value` against `shape`, returning the decoded value.
pub fn decode(shape: &Shape, value: &JsonValue) -> Result<Value> {
    shape.decode(value)
}

impl Shape {
    /// Validates a JSON value against this shape.
    ///
    /// Decoding is a pure, type-directed walk over the two trees. The first
    /// mismatch aborts the surrounding composite: no partial value is
    /// produced and errors are returned, never panicked.
    pub fn decode(&self, value: &JsonValue) -> Result<Value> {
        match self {
            Shape::Primitive(kind) => kind.decode(value),
            Shape::Array { inner } => {
                let elements = value.as_array().ok_or(Error::InvalidJson)?;
                let decoded = elements
                    .iter()
                    .map(|element| inner.decode(element).map_err(|_| Error::InvalidArrayElement))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(decoded))
            }
            Shape::Object { fields } => {
                let object = value.as_object().ok_or(Error::InvalidJson)?;
                let mut decoded = Vec::with_capacity(fields.len());
                for field in fields.iter() {
                    // An absent name fails exactly like a present-but-invalid
                    // one; undeclared input names are dropped.
                    let property = object.get(&*field.name).ok_or_else(|| invalid_property(&field.name))?;
                    let property = field
                        .shape
                        .decode(property)
                        .map_err(|_| invalid_property(&field.name))?;
                    decoded.push((field.name.clone(), property));
                }
                Ok(Value::Object(decoded))
            }
            Shape::Union { members } => members
                .iter()
                .find_map(|member| member.decode(value).ok())
                .ok_or(Error::InvalidJson),
            Shape::Intersection { members } => {
                let mut merged = Vec::new();
                for member in members.iter() {
                    // Every member must accept the value, and must produce an
                    // object for the merge to mean anything.
                    match member.decode(value)? {
                        Value::Object(fields) => value::merge_fields(&mut merged, fields),
                        _ => return Err(Error::InvalidJson),
                    }
                }
                Ok(Value::Object(merged))
            }
        }
    }
}

impl Primitive {
    fn decode(self, value: &JsonValue) -> Result<Value> {
        match (self, value) {
            (Primitive::String, JsonValue::String(value)) => Ok(Value::String(value.as_str().into())),
            (Primitive::Number, JsonValue::Number(value)) => {
                let value = value.as_f64().ok_or(Error::InvalidJson)?;
                Ok(Value::Number(value))
            }
            (Primitive::Boolean, JsonValue::Bool(value)) => Ok(Value::Bool(*value)),
            (Primitive::Null, JsonValue::Null) => Ok(Value::Null),
            // Bigints and undefined have no JSON literal, so nothing decodes
            // against them; everything else is a plain kind mismatch.
            _ => Err(Error::InvalidJson),
        }
    }
}

fn invalid_property(key: &str) -> Error {
    Error::InvalidProperty { key: key.into() }
}
