//! YAML scene descriptions.
//!
//! - [`MapConfig`]: top-level loader, builds a [`Map`](crate::Map)
//! - [`ViewConfig`]: resolution, zoom ladder and units of the view
//! - [`LayerConfig`]: a leaf layer or a group of further nodes
//! - [`SourceConfig`]: the data source of a leaf layer
//!
//! ```yaml
//! view:
//!   resolution: 50
//!   resolutions: [100, 50, 25, 12.5]
//!   units: m
//! layers:
//!   - name: basemap
//!     source:
//!       type: tile_wms
//!       urls: ["https://example.org/wms"]
//!       params: { LAYERS: "osm:base" }
//!   - name: overlays
//!     layers:
//!       - name: roads
//! ```

mod layer;
mod map;
mod source;
mod view;

pub use layer::LayerConfig;
pub use map::{InteractionConfig, MapConfig};
pub use source::SourceConfig;
pub use view::ViewConfig;
