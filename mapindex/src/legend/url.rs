use super::{LegendOptions, append_query, encode_query};
use mapindex_scene::{LAYERS_PARAM, Layer, Source};

/// Builds the `GetLegendGraphic` URL for `layer` with the default [`LegendOptions`].
///
/// See [`legend_url_with_options`].
///
/// # Examples
///
/// ```
/// use mapindex::{legend_url, scene::{Layer, Source}};
///
/// let layer = Layer::new("roads").with_source(Source::tile_wms(&["http://x/wms"], &[("LAYERS", "foo")]));
/// assert_eq!(
///     legend_url(Some(&layer), &[]).unwrap(),
///     "http://x/wms?LAYER=foo&VERSION=1.3.0&SERVICE=WMS&REQUEST=getLegendGraphic&FORMAT=image/png"
/// );
/// ```
pub fn legend_url(layer: Option<&Layer>, extra_params: &[(&str, &str)]) -> Option<String> {
	legend_url_with_options(layer, extra_params, &LegendOptions::default())
}

/// Builds the `GetLegendGraphic` URL for `layer`.
///
/// Tiled WMS sources use their first URL (an empty base if none is configured), single-image
/// WMS sources their only URL. The request names the layer from the source's `LAYERS`
/// parameter; `extra_params` are applied on top and replace parameters with the same key.
///
/// Returns `None` and logs a warning if the layer is missing, has no WMS source, or its source
/// has no `LAYERS` parameter.
pub fn legend_url_with_options(
	layer: Option<&Layer>,
	extra_params: &[(&str, &str)],
	options: &LegendOptions,
) -> Option<String> {
	let Some(layer) = layer else {
		log::warn!("no layer given, can not build legend url");
		return None;
	};
	let label = layer.name().unwrap_or("<unnamed>");

	let Some(source) = &layer.source else {
		log::warn!("layer '{label}' has no source, can not build legend url");
		return None;
	};

	let (base_url, params) = match source {
		Source::TileWms(s) => (s.urls.first().map_or("", String::as_str), &s.params),
		Source::ImageWms(s) => (s.url.as_deref().unwrap_or(""), &s.params),
		Source::Xyz { .. } | Source::Vector { .. } => {
			log::warn!("layer '{label}' has an unsupported {source} source, can not build legend url");
			return None;
		}
	};

	let Some(layers) = params.get(LAYERS_PARAM) else {
		log::warn!("source of layer '{label}' has no {LAYERS_PARAM} parameter, can not build legend url");
		return None;
	};

	let mut query: Vec<(String, String)> = vec![
		("LAYER".to_string(), layers.clone()),
		("VERSION".to_string(), options.version.clone()),
		("SERVICE".to_string(), options.service.clone()),
		("REQUEST".to_string(), options.request.clone()),
		("FORMAT".to_string(), options.format.clone()),
	];
	for (key, value) in extra_params {
		match query.iter_mut().find(|(k, _)| k == key) {
			Some(entry) => entry.1 = (*value).to_string(),
			None => query.push(((*key).to_string(), (*value).to_string())),
		}
	}

	Some(append_query(base_url, &encode_query(&query)))
}
