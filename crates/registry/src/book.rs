//! The recipe book: the name→recipe mapping plus the guaranteed default.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap as HashMap;

use crate::key::{fold_case, short_type_name, to_first_upper};
use crate::source::RegistrySource;

/// Zero-argument recipe: constructs one object of the managed type.
pub type Recipe<T> = fn() -> T;

/// Single-argument recipe: constructs one object from a set of ingredients.
pub type RecipeWith<T, A> = fn(A) -> T;

/// Result of a registration attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; recipe inserted.
	InsertedNew,
	/// Key already registered; the first registration was kept.
	KeptExisting,
}

/// Record of a dropped duplicate registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// Fold-cased key both registrations mapped to.
	pub key: Box<str>,
	/// Provenance of the rejected registration.
	pub source: RegistrySource,
}

/// Stores recipes for constructing objects of type `T`, keyed by fold-cased
/// name, plus the default recipe every lookup can fall back on.
///
/// `R` is the recipe shape; the factories in [`crate::factory`] fix it to
/// [`Recipe<T>`] or [`RecipeWith<T, A>`]. The mapping is append-only:
/// the first registration for a key wins and removal is not part of the
/// contract. Dropped duplicates are retained in [`collisions`](Self::collisions)
/// for diagnostics.
///
/// All population takes `&mut self` and all lookup takes `&self`, so the
/// populate-then-read phase separation is enforced by the borrow checker.
/// A populated book behind `Arc` is safe for unsynchronized concurrent reads.
pub struct RecipeBook<T, R> {
	label: &'static str,
	recipes: HashMap<Box<str>, R>,
	default: Recipe<T>,
	collisions: Vec<Collision>,
}

impl<T, R> RecipeBook<T, R> {
	/// Creates an empty book with the given diagnostic label and default
	/// recipe.
	pub fn new(label: &'static str, default: Recipe<T>) -> Self {
		Self {
			label,
			recipes: HashMap::default(),
			default,
			collisions: Vec::new(),
		}
	}

	/// Registers `recipe` under the fold-cased form of `name`.
	///
	/// The first registration for a key wins; a later duplicate is dropped
	/// without error and recorded as a [`Collision`].
	pub fn add_recipe(&mut self, recipe: R, name: &str) -> InsertAction {
		self.insert(recipe, name, RegistrySource::Runtime)
	}

	/// Registers `recipe` under the short type name of `D`, so a type named
	/// `Grilled` registers under `"grilled"`.
	pub fn add_recipe_as<D>(&mut self, recipe: R) -> InsertAction {
		self.insert(recipe, short_type_name::<D>(), RegistrySource::Runtime)
	}

	pub(crate) fn insert(
		&mut self,
		recipe: R,
		name: &str,
		source: RegistrySource,
	) -> InsertAction {
		let key = fold_case(name).into_boxed_str();
		match self.recipes.entry(key) {
			Entry::Vacant(vacant) => {
				tracing::debug!(
					registry = self.label,
					key = %vacant.key(),
					%source,
					"recipe registered"
				);
				vacant.insert(recipe);
				InsertAction::InsertedNew
			}
			Entry::Occupied(occupied) => {
				tracing::debug!(
					registry = self.label,
					key = %occupied.key(),
					%source,
					"duplicate recipe dropped"
				);
				self.collisions.push(Collision {
					key: occupied.key().clone(),
					source,
				});
				InsertAction::KeptExisting
			}
		}
	}

	/// Looks up the recipe registered under the fold-cased form of `name`.
	#[inline]
	pub fn find(&self, name: &str) -> Option<&R> {
		self.recipes.get(fold_case(name).as_str())
	}

	/// Returns true if a recipe is registered under `name`.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.find(name).is_some()
	}

	/// Returns registered names in presentation form (first character
	/// capitalized). Order follows map iteration and is not meaningful.
	pub fn recipe_names(&self) -> Vec<String> {
		self.recipes.keys().map(|key| to_first_upper(key)).collect()
	}

	/// The default recipe supplied at construction.
	#[inline]
	pub fn default_recipe(&self) -> Recipe<T> {
		self.default
	}

	/// Duplicate registrations dropped so far.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Diagnostic label given at construction.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Number of registered recipes, the default excluded.
	#[inline]
	pub fn len(&self) -> usize {
		self.recipes.len()
	}

	/// Returns true if no recipe has been registered yet.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.recipes.is_empty()
	}
}
