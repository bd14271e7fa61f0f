use mapindex_scene::{Interaction, Map};

/// Returns all interactions of `map` registered under `name`, in insertion order.
pub fn interactions_by_name<'a>(map: &'a Map, name: &str) -> Vec<&'a Interaction> {
	map.interactions
		.iter()
		.filter(|i| i.name.as_deref() == Some(name))
		.collect()
}

/// Returns all interactions of `map` of the given kind, e.g. `DragPan`, in insertion order.
pub fn interactions_by_kind<'a>(map: &'a Map, kind: &str) -> Vec<&'a Interaction> {
	map.interactions.iter().filter(|i| i.kind == kind).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn example_map() -> Map {
		Map::default()
			.with_interaction(Interaction::new("DragPan").with_name("pan"))
			.with_interaction(Interaction::new("Draw").with_name("measure"))
			.with_interaction(Interaction::new("Draw").with_name("sketch"))
			.with_interaction(Interaction::new("MouseWheelZoom"))
	}

	#[test]
	fn by_name() {
		let map = example_map();
		let found = interactions_by_name(&map, "measure");
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].kind, "Draw");
		assert!(interactions_by_name(&map, "select").is_empty());
	}

	#[test]
	fn by_kind() {
		let map = example_map();
		let names: Vec<_> = interactions_by_kind(&map, "Draw")
			.iter()
			.filter_map(|i| i.name.as_deref())
			.collect();
		assert_eq!(names, vec!["measure", "sketch"]);
		assert_eq!(interactions_by_kind(&map, "MouseWheelZoom").len(), 1);
	}
}
