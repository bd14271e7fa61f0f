//! Contains the unit-aware scale/resolution math, the zoom resolver and the property value types
//! shared by the scene model.

pub mod types;

pub mod units;

pub use types::*;
pub use units::*;
