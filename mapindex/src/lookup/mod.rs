//! Lookups of layers and interactions in a scene.

mod interactions;
pub use interactions::*;

mod layers;
pub use layers::*;

mod resolution;
pub use resolution::*;
