//! Traversal of the layer tree.

mod flatten;
pub use flatten::*;

mod position;
pub use position::*;
