//! # mapindex
//!
//! Answers structural and numeric questions about a live map scene that the scene itself does
//! not answer directly:
//! - which layer renders a feature, or carries a name, request parameter or property
//! - where a layer sits in the nested group tree
//! - which resolution matches a scale and which zoom level matches a scale best
//! - which `GetLegendGraphic` URL shows the symbology of a WMS layer
//!
//! Every query is a pure, synchronous read of the scene and is recomputed on each call.
//! Results are snapshots; after the scene changes they have to be queried again.
//!
//! ## Usage Example
//!
//! ```rust
//! use mapindex::{core::*, scene::*, *};
//!
//! let roads = Layer::new("roads")
//!     .with_source(Source::image_wms("https://example.org/wms", &[("LAYERS", "topp:roads")]))
//!     .with_resolution_range(0.0, 100.0);
//! let roads_uid = roads.uid();
//!
//! let map = Map::new(vec![
//!     Layer::new("basemap").into(),
//!     LayerGroup::new("overlays", vec![roads.into()]).into(),
//! ])
//! .with_view(View::new(50.0).with_resolutions(vec![100.0, 50.0, 25.0]));
//!
//! let layer = layer_by_name(&map, "roads").unwrap();
//! assert!(layer_in_resolution_range(Some(layer), map.view.as_ref()));
//!
//! let position = position_info(&map, roads_uid).unwrap();
//! assert_eq!(position.group.name(), Some("overlays"));
//!
//! let scale = round_scale(map.view.as_ref().unwrap().scale().unwrap());
//! assert_eq!(scale, 178_600.0);
//!
//! let url = legend_url(Some(layer), &[]).unwrap();
//! assert!(url.starts_with("https://example.org/wms?LAYER=topp:roads&"));
//! ```

mod legend;
mod lookup;
mod walker;

pub use legend::*;
pub use lookup::*;
pub use walker::*;

pub use mapindex_core as core;
pub use mapindex_scene as scene;
