use std::{
	fmt::{self, Display},
	sync::atomic::{AtomicU64, Ordering},
};

static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier assigned to every layer and group when it is created.
///
/// Identifiers are never reused within a process, so they stay valid while nodes are moved
/// between groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
	pub fn next() -> Uid {
		Uid(NEXT_UID.fetch_add(1, Ordering::Relaxed))
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

impl Display for Uid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
