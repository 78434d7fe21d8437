use crate::shape::Shape;
use num_bigint::BigInt;

/// Host types that can describe their own shape.
///
/// The runtime core never inspects host types; this trait is the optional
/// bridge for callers who want a schema derived from a Rust type instead of
/// spelling one out with the constructors or macros.
pub trait Reflect {
    /// The shape describing this type's JSON structure.
    fn shape() -> Shape;
}

macro_rules! reflect_primitive {
    ($shape:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    $shape
                }
            }
        )+
    };
}

reflect_primitive!(Shape::STRING => String, &str, Box<str>);
reflect_primitive!(Shape::NUMBER => f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
reflect_primitive!(Shape::BIGINT => i128, u128, BigInt);
reflect_primitive!(Shape::BOOLEAN => bool);
// The unit type has no payload, which is as close to null as Rust gets;
// serde draws the same equivalence.
reflect_primitive!(Shape::NULL => ());

/// `None` decodes from absence, so an option is its payload or undefined.
impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::union([T::shape(), Shape::UNDEFINED])
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::array(T::shape())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::array(T::shape())
    }
}
