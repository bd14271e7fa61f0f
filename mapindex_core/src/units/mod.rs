//! Conversions between cartographic scale, map resolution and discrete zoom levels.

mod linear_unit;
pub use linear_unit::*;

mod scale;
pub use scale::*;

mod zoom;
pub use zoom::*;
