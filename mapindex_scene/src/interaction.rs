/// A user interaction registered on a map, such as panning or drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
	pub name: Option<String>,
	/// The interaction type, e.g. `DragPan` or `Draw`.
	pub kind: String,
	pub active: bool,
}

impl Interaction {
	pub fn new(kind: &str) -> Self {
		Self {
			name: None,
			kind: kind.to_string(),
			active: true,
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: &str) -> Self {
		self.name = Some(name.to_string());
		self
	}
}
