use std::fmt::Debug;

/// A coordinate pair `[x, y]` in map units.
pub type Coordinate = [f64; 2];

/// Geometry of a feature.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Coordinate),
	LineString(Vec<Coordinate>),
	Polygon(Vec<Vec<Coordinate>>),
}

impl Geometry {
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_names() {
		let point = Geometry::Point([1.0, 2.0]);
		let line = Geometry::LineString(vec![[3.0, 4.0], [5.0, 6.0]]);
		let polygon = Geometry::Polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]);

		assert_eq!(point.type_name(), "Point");
		assert_eq!(line.type_name(), "LineString");
		assert_eq!(polygon.type_name(), "Polygon");
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Geometry::Point([1.0, 2.0])), "Point([1.0, 2.0])");
	}
}
