//! BSON binary values and their subtype tags.

pub mod subtype;
pub mod value;

pub use subtype::BinarySubtype;
pub use value::BinaryValue;
