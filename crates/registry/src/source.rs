//! Registration provenance.

/// Where a recipe registration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrySource {
	/// Part of the application's own menu, no contributing crate to name.
	Builtin,
	/// Submitted to an inventory collection; carries the submitting crate's
	/// name, which the `request_crate_*` discovery passes filter on.
	Crate(&'static str),
	/// Added through `add_recipe` after the book was constructed.
	Runtime,
}

impl RegistrySource {
	/// Returns true if this registration was contributed by the named crate.
	#[inline]
	pub fn is_crate(self, name: &str) -> bool {
		matches!(self, Self::Crate(c) if c == name)
	}
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn crate_filter_matches_exact_name() {
		let source = RegistrySource::Crate("larder-demo-recipes");
		assert!(source.is_crate("larder-demo-recipes"));
		assert!(!source.is_crate("larder-demo"));
		assert!(!RegistrySource::Runtime.is_crate("larder-demo-recipes"));
	}

	#[test]
	fn display_forms() {
		assert_eq!(RegistrySource::Builtin.to_string(), "builtin");
		assert_eq!(RegistrySource::Crate("demo").to_string(), "crate:demo");
		assert_eq!(RegistrySource::Runtime.to_string(), "runtime");
	}
}
