use crate::JsonValue;
use num_bigint::BigInt;

/// A decoded or synthesized value.
///
/// This is JSON's value grammar extended with the two kinds the algebra
/// names but JSON cannot write: arbitrary-precision integers and the absent
/// value. Object fields keep their insertion order.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// A UTF-8 string.
    String(Box<str>),
    /// A sequence of values.
    Array(Vec<Value>),
    /// Named fields, in insertion order.
    Object(Vec<(Box<str>, Value)>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(Box<str>, Value)]> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up an object field by name.
    ///
    /// Returns `None` for non-objects and absent names alike.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(field, _)| &**field == name)
            .map(|(_, value)| value)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Shallow-merges `fields` into `out`, overwriting on name collision.
/// An overwritten field keeps its original position.
pub(crate) fn merge_fields(out: &mut Vec<(Box<str>, Value)>, fields: Vec<(Box<str>, Value)>) {
    for (name, value) in fields {
        match out.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => out.push((name, value)),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(value) => Value::Bool(*value),
            // `as_f64` cannot fail for numbers parsed without the
            // `arbitrary_precision` feature.
            JsonValue::Number(value) => Value::Number(value.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(value) => Value::String(value.as_str().into()),
            JsonValue::Array(values) => Value::Array(values.iter().map(Value::from).collect()),
            JsonValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.as_str().into(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn merge_overwrites_in_place() {
        let mut out = vec![
            ("a".into(), Value::Number(1.0)),
            ("b".into(), Value::Number(2.0)),
        ];
        merge_fields(
            &mut out,
            vec![("a".into(), Value::Number(9.0)), ("c".into(), Value::Number(3.0))],
        );
        assert_eq!(
            out,
            vec![
                ("a".into(), Value::Number(9.0)),
                ("b".into(), Value::Number(2.0)),
                ("c".into(), Value::Number(3.0)),
            ]
        );
    }

    #[test]
    fn from_json_preserves_object_order() {
        let value = Value::from(&serde_json::json!({ "b": 1, "a": 2 }));
        let fields = value.as_object().unwrap();
        assert_eq!(&*fields[0].0, "b");
        assert_eq!(&*fields[1].0, "a");
    }

    #[test]
    fn field_lookup() {
        let value = Value::from(&serde_json::json!({ "a": "x" }));
        assert_eq!(value.get("a"), Some(&Value::String("x".into())));
        assert_eq!(value.get("b"), None);
        assert_eq!(Value::Null.get("a"), None);
    }
}
