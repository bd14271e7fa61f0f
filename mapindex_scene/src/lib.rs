//! The object model of a map scene: a map with its view, a tree of layer groups and leaf layers,
//! the data sources of those layers and the features they render.
//!
//! Scenes can be built in code or loaded from YAML via [`config::MapConfig`].
//!
//! ```
//! use mapindex_scene::{Layer, LayerGroup, Map, Source};
//!
//! let map = Map::new(vec![
//!     Layer::new("basemap").into(),
//!     LayerGroup::new("overlays", vec![
//!         Layer::new("roads")
//!             .with_source(Source::image_wms("https://example.org/wms", &[("LAYERS", "ns:roads")]))
//!             .into(),
//!     ])
//!     .into(),
//! ]);
//! assert_eq!(map.layers().len(), 2);
//! ```

pub mod config;

mod feature;
pub use feature::*;

mod geometry;
pub use geometry::*;

mod group;
pub use group::*;

mod interaction;
pub use interaction::*;

mod layer;
pub use layer::*;

mod map;
pub use map::*;

mod node;
pub use node::*;

mod source;
pub use source::*;

mod uid;
pub use uid::*;

mod view;
pub use view::*;
