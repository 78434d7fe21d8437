/// A structural type descriptor.
///
/// A `Shape` is a finite, immutable tree. Two independently built trees
/// describing the same structure compare equal, and nothing mutates a tree
/// after construction, so shapes can be shared freely across threads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Shape {
    /// A scalar with no children.
    Primitive(Primitive),
    /// A homogenous sequence of values.
    Array {
        /// The shape of every element in the sequence.
        inner: Box<Shape>,
    },
    /// A structure containing named fields.
    Object {
        /// The fields comprising the object, in declaration order.
        fields: Box<[Field]>,
    },
    /// One of several alternative shapes.
    ///
    /// Member order is load-bearing: decoding tries members first to last,
    /// and the first member alone decides the default value.
    Union {
        /// The alternatives, in declaration order. Never empty.
        members: Box<[Shape]>,
    },
    /// The combination of several object shapes, merged left to right.
    Intersection {
        /// The combined shapes, in declaration order. Never empty.
        members: Box<[Shape]>,
    },
}

/// The scalar kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Primitive {
    /// A UTF-8 string.
    String,
    /// A number. JSON draws no integer/float distinction, so neither do we.
    Number,
    /// A boolean.
    Boolean,
    /// An arbitrary-precision integer. JSON has no literal for it.
    BigInt,
    /// The null value.
    Null,
    /// The absent value. JSON has no literal for it.
    Undefined,
}

/// A named object field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    /// The name of the field.
    pub name: Box<str>,
    /// The shape of the field's value.
    pub shape: Shape,
}

impl Shape {
    pub const STRING: Shape = Shape::Primitive(Primitive::String);
    pub const NUMBER: Shape = Shape::Primitive(Primitive::Number);
    pub const BOOLEAN: Shape = Shape::Primitive(Primitive::Boolean);
    pub const BIGINT: Shape = Shape::Primitive(Primitive::BigInt);
    pub const NULL: Shape = Shape::Primitive(Primitive::Null);
    pub const UNDEFINED: Shape = Shape::Primitive(Primitive::Undefined);

    /// Builds a scalar shape.
    pub fn primitive(kind: Primitive) -> Shape {
        Shape::Primitive(kind)
    }

    /// Builds an array shape from its element shape.
    pub fn array(inner: Shape) -> Shape {
        Shape::Array { inner: inner.into() }
    }

    /// Builds an object shape from `(name, shape)` pairs, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name.
    pub fn object<K: Into<Box<str>>>(fields: impl IntoIterator<Item = (K, Shape)>) -> Shape {
        let fields: Box<[Field]> = fields
            .into_iter()
            .map(|(name, shape)| Field { name: name.into(), shape })
            .collect();
        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|earlier| earlier.name == field.name) {
                panic!("duplicate object field: {}", field.name);
            }
        }
        Shape::Object { fields }
    }

    /// Builds a union shape.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty.
    pub fn union(members: impl IntoIterator<Item = Shape>) -> Shape {
        let members: Box<[Shape]> = members.into_iter().collect();
        assert!(!members.is_empty(), "a union must have at least one member");
        Shape::Union { members }
    }

    /// Builds an intersection shape.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty.
    pub fn intersection(members: impl IntoIterator<Item = Shape>) -> Shape {
        let members: Box<[Shape]> = members.into_iter().collect();
        assert!(!members.is_empty(), "an intersection must have at least one member");
        Shape::Intersection { members }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Shape::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Shape::Array { .. })
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Shape::Object { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Shape::Union { .. })
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, Shape::Intersection { .. })
    }
}

#[macro_export]
macro_rules! array_def {
    ($shape:expr) => {
        $crate::shape::Shape::array($shape)
    };
}

#[macro_export]
macro_rules! object_def {
    ({
        // Comma-separated name-shape pairs
        $($name:literal : $shape:expr),*
        // Allows trailing commas
        $(,)?
    }) => {{
        let fields: Vec<(&str, $crate::shape::Shape)> = vec![
            $(($name, $shape)),*
        ];
        $crate::shape::Shape::object(fields)
    }};
}

// The one-or-more grammar rules out empty member lists before the
// constructors get a chance to panic over them.
#[macro_export]
macro_rules! union_def {
    ($($member:expr),+ $(,)?) => {
        $crate::shape::Shape::union(vec![$($member),+])
    };
}

#[macro_export]
macro_rules! intersection_def {
    ($($member:expr),+ $(,)?) => {
        $crate::shape::Shape::intersection(vec![$($member),+])
    };
}
