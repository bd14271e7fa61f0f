//! `GetLegendGraphic` request URLs for WMS layers.

mod options;
pub use options::*;

mod query;
pub use query::*;

mod url;
pub use url::*;
