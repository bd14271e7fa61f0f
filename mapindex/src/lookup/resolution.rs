use crate::flatten;
use mapindex_scene::{Layer, LayerCollection, View};

/// Checks whether the view resolution lies in the resolution range of `layer`.
///
/// The range is `[min_resolution, max_resolution)`: the lower bound is inclusive, the upper
/// bound exclusive. If the layer, the view or the view resolution is missing the answer can not
/// be determined and `false` is returned.
///
/// # Examples
///
/// ```
/// use mapindex::{layer_in_resolution_range, scene::{Layer, View}};
///
/// let layer = Layer::new("roads").with_resolution_range(10.0, 20.0);
/// assert!(layer_in_resolution_range(Some(&layer), Some(&View::new(10.0))));
/// assert!(!layer_in_resolution_range(Some(&layer), Some(&View::new(20.0))));
/// assert!(!layer_in_resolution_range(Some(&layer), Some(&View::default())));
/// ```
pub fn layer_in_resolution_range(layer: Option<&Layer>, view: Option<&View>) -> bool {
	let (Some(layer), Some(resolution)) = (layer, view.and_then(|v| v.resolution)) else {
		return false;
	};
	resolution >= layer.min_resolution && resolution < layer.max_resolution
}

/// Returns the leaf layers that are switched on and in resolution range of `view`.
pub fn visible_layers<'a, C>(root: &'a C, view: Option<&View>) -> Vec<&'a Layer>
where
	C: LayerCollection + ?Sized,
{
	flatten(root, |layer| layer.visible && layer_in_resolution_range(Some(layer), view))
}

#[cfg(test)]
mod tests {
	use super::*;
	use mapindex_scene::Map;
	use rstest::rstest;

	#[rstest]
	#[case(10.0, true)]
	#[case(15.0, true)]
	#[case(19.999, true)]
	#[case(20.0, false)]
	#[case(9.999, false)]
	#[case(100.0, false)]
	fn bounds(#[case] resolution: f64, #[case] expected: bool) {
		let layer = Layer::new("l").with_resolution_range(10.0, 20.0);
		assert_eq!(
			layer_in_resolution_range(Some(&layer), Some(&View::new(resolution))),
			expected
		);
	}

	#[test]
	fn unset_bounds_cover_everything() {
		let layer = Layer::new("l");
		assert!(layer_in_resolution_range(Some(&layer), Some(&View::new(0.0))));
		assert!(layer_in_resolution_range(Some(&layer), Some(&View::new(1e12))));
	}

	#[test]
	fn missing_input_is_not_in_range() {
		let layer = Layer::new("l");
		assert!(!layer_in_resolution_range(None, Some(&View::new(1.0))));
		assert!(!layer_in_resolution_range(Some(&layer), None));
		assert!(!layer_in_resolution_range(Some(&layer), Some(&View::default())));
	}

	#[test]
	fn visible_layers_checks_flag_and_range() {
		let map = Map::new(vec![
			Layer::new("always").into(),
			Layer::new("hidden").with_visible(false).into(),
			Layer::new("detail").with_resolution_range(0.0, 5.0).into(),
			Layer::new("overview").with_resolution_range(5.0, 500.0).into(),
		]);

		let names: Vec<_> = visible_layers(&map, Some(&View::new(50.0)))
			.iter()
			.filter_map(|l| l.name())
			.collect();
		assert_eq!(names, vec!["always", "overview"]);

		assert!(visible_layers(&map, None).is_empty());
	}
}
