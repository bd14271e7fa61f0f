//! Property values attached to layers, groups and features.

mod properties;
pub use properties::*;

mod property_value;
pub use property_value::*;
