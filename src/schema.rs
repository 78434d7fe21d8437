use crate::decode;
use crate::reflect::Reflect;
use crate::shape::Shape;
use crate::value::Value;
use crate::JsonValue;

/// A handle to an immutable shape, with the two interpreters attached.
///
/// A schema owns its shape and carries no other state, so it is cheap to
/// clone relative to its payload and safe to share across threads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Schema {
    shape: Shape,
}

impl Schema {
    /// Wraps a shape.
    pub fn new(shape: Shape) -> Schema {
        Schema { shape }
    }

    /// The schema of a host type that can describe itself.
    pub fn of<T: Reflect>() -> Schema {
        Schema::new(T::shape())
    }

    pub fn string() -> Schema {
        Schema::new(Shape::STRING)
    }

    pub fn number() -> Schema {
        Schema::new(Shape::NUMBER)
    }

    pub fn boolean() -> Schema {
        Schema::new(Shape::BOOLEAN)
    }

    pub fn bigint() -> Schema {
        Schema::new(Shape::BIGINT)
    }

    pub fn null() -> Schema {
        Schema::new(Shape::NULL)
    }

    pub fn undefined() -> Schema {
        Schema::new(Shape::UNDEFINED)
    }

    /// An array schema from its element schema.
    pub fn array(element: Schema) -> Schema {
        Schema::new(Shape::array(element.shape))
    }

    /// An object schema from `(name, schema)` pairs.
    pub fn object<K: Into<Box<str>>>(fields: impl IntoIterator<Item = (K, Schema)>) -> Schema {
        Schema::new(Shape::object(
            fields.into_iter().map(|(name, schema)| (name, schema.shape)),
        ))
    }

    /// A union schema. The first member is the canonical one.
    pub fn union(members: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::new(Shape::union(members.into_iter().map(|schema| schema.shape)))
    }

    /// An intersection schema.
    pub fn intersection(members: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::new(Shape::intersection(members.into_iter().map(|schema| schema.shape)))
    }

    /// The underlying shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Either `self` or `other`, with `self` as the canonical branch.
    pub fn or(self, other: Schema) -> Schema {
        Schema::new(Shape::union([self.shape, other.shape]))
    }

    /// Both `self` and `other`, with `other`'s fields winning collisions.
    pub fn and(self, other: Schema) -> Schema {
        Schema::new(Shape::intersection([self.shape, other.shape]))
    }

    /// Validates a JSON value against this schema.
    pub fn from_json(&self, value: &JsonValue) -> decode::Result<Value> {
        self.shape.decode(value)
    }

    /// Synthesizes this schema's zero value, on demand. Nothing is cached.
    pub fn default_value(&self) -> Value {
        self.shape.default_value()
    }
}
