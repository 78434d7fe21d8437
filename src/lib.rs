pub mod decode;
pub mod defaults;
pub mod reflect;
pub mod schema;
pub mod shape;
pub mod value;

pub type JsonValue = serde_json::Value;
