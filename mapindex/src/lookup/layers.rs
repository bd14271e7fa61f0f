//! Queries over the leaf layers of a tree.
//!
//! Names, request parameters and properties are not guaranteed to be unique. Single-result
//! lookups return the first match in depth-first pre-order, so a layer earlier in the tree
//! shadows later ones with the same name.

use crate::{flatten, leaf_layers};
use mapindex_core::PropertyValue;
use mapindex_scene::{FeatureTypeName, Layer, LayerCollection};

/// Returns the first leaf layer whose `name` property equals `name`.
pub fn layer_by_name<'a, C>(root: &'a C, name: &str) -> Option<&'a Layer>
where
	C: LayerCollection + ?Sized,
{
	leaf_layers(root).into_iter().find(|layer| layer.name() == Some(name))
}

/// Returns the first leaf layer whose source sends `LAYERS={value}`.
pub fn layer_by_request_param<'a, C>(root: &'a C, value: &str) -> Option<&'a Layer>
where
	C: LayerCollection + ?Sized,
{
	leaf_layers(root)
		.into_iter()
		.find(|layer| layer.source.as_ref().and_then(|s| s.layers_param()) == Some(value))
}

/// Returns the layer that renders `feature`.
///
/// The feature's unqualified type name is prefixed with each namespace in turn, and the first
/// `{namespace}:{type name}` that matches a `LAYERS` parameter wins. The order of `namespaces`
/// therefore decides between layers of equally named types in different namespaces.
///
/// # Examples
///
/// ```
/// use mapindex::{layer_by_feature, scene::{Feature, Geometry, Layer, Map, Source}};
///
/// let map = Map::new(vec![
///     Layer::new("roads")
///         .with_source(Source::image_wms("https://example.org/wms", &[("LAYERS", "topp:roads")]))
///         .into(),
/// ]);
///
/// let mut feature = Feature::new(Geometry::Point([7.1, 50.7]));
/// feature.set_id("roads.42");
///
/// let layer = layer_by_feature(&map, &feature, &["osm", "topp"]).unwrap();
/// assert_eq!(layer.name(), Some("roads"));
/// ```
pub fn layer_by_feature<'a, C, F>(root: &'a C, feature: &F, namespaces: &[&str]) -> Option<&'a Layer>
where
	C: LayerCollection + ?Sized,
	F: FeatureTypeName + ?Sized,
{
	let type_name = feature.feature_type_name()?;
	namespaces
		.iter()
		.find_map(|namespace| layer_by_request_param(root, &format!("{namespace}:{type_name}")))
}

/// Returns all leaf layers whose property `key` equals `value`.
///
/// Returns `None` if `key` is empty, and an empty list if nothing matches.
pub fn layers_by_property<'a, C>(root: &'a C, key: &str, value: &PropertyValue) -> Option<Vec<&'a Layer>>
where
	C: LayerCollection + ?Sized,
{
	if key.is_empty() {
		return None;
	}
	Some(flatten(root, |layer| layer.get(key) == Some(value)))
}

/// Returns the leaf layer with the unique identifier `uid`, given in its string form.
pub fn layer_by_uid<'a, C>(root: &'a C, uid: &str) -> Option<&'a Layer>
where
	C: LayerCollection + ?Sized,
{
	leaf_layers(root).into_iter().find(|layer| layer.uid().to_string() == uid)
}
