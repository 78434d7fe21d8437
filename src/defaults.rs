use crate::shape::{Primitive, Shape};
use crate::value::{self, Value};
use num_bigint::BigInt;

/// Synthesizes the zero value for `shape`.
pub fn default_value(shape: &Shape) -> Value {
    shape.default_value()
}

impl Shape {
    /// Synthesizes the canonical zero value for this shape.
    ///
    /// Total over every well-formed shape: it consumes no input and cannot
    /// fail. The match carries no wildcard arm, so a new `Shape` variant
    /// does not compile until it gets a rule here.
    pub fn default_value(&self) -> Value {
        match self {
            Shape::Primitive(Primitive::String) => Value::String("".into()),
            Shape::Primitive(Primitive::Number) => Value::Number(0.0),
            Shape::Primitive(Primitive::Boolean) => Value::Bool(false),
            Shape::Primitive(Primitive::BigInt) => Value::BigInt(BigInt::default()),
            Shape::Primitive(Primitive::Null) => Value::Null,
            Shape::Primitive(Primitive::Undefined) => Value::Undefined,
            // The element shape is never consulted: the default for any
            // array is the empty sequence.
            Shape::Array { .. } => Value::Array(Vec::new()),
            Shape::Object { fields } => Value::Object(
                fields
                    .iter()
                    .map(|field| (field.name.clone(), field.shape.default_value()))
                    .collect(),
            ),
            // The first member alone decides the default.
            Shape::Union { members } => members[0].default_value(),
            // Members whose default is not an object contribute nothing to
            // the merge.
            Shape::Intersection { members } => {
                let mut merged = Vec::new();
                for member in members.iter() {
                    if let Value::Object(fields) = member.default_value() {
                        value::merge_fields(&mut merged, fields);
                    }
                }
                Value::Object(merged)
            }
        }
    }
}
