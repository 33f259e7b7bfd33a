//! Name normalization helpers.
//!
//! Lookup keys are stored in fold-cased (lowercase) form; the display form
//! capitalizes only the first character. The display transform never feeds
//! back into lookup.

/// Normalizes a recipe name to its storage form.
#[inline]
pub fn fold_case(name: &str) -> String {
	name.to_lowercase()
}

/// Capitalizes the first character of a name, leaving the rest unchanged.
pub fn to_first_upper(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Returns the unqualified name of `T`: no module path, no generic
/// parameters.
///
/// Backed by [`core::any::type_name`], so the result is suitable as a
/// registration key only; it is not stable enough for serialization.
pub fn short_type_name<T: ?Sized>() -> &'static str {
	let full = core::any::type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn fold_case_lowers_everything() {
		assert_eq!(fold_case("Grill"), "grill");
		assert_eq!(fold_case("STEW"), "stew");
		assert_eq!(fold_case("already"), "already");
	}

	#[test]
	fn to_first_upper_touches_only_the_first_character() {
		assert_eq!(to_first_upper("grill"), "Grill");
		assert_eq!(to_first_upper("Grill"), "Grill");
		assert_eq!(to_first_upper("sTEW"), "STEW");
		assert_eq!(to_first_upper(""), "");
		assert_eq!(to_first_upper("échalote"), "Échalote");
	}

	#[test]
	fn short_type_name_strips_path_and_generics() {
		struct Grilled;
		assert_eq!(short_type_name::<Grilled>(), "Grilled");
		assert_eq!(short_type_name::<Vec<String>>(), "Vec");
		assert_eq!(short_type_name::<u32>(), "u32");
	}
}
