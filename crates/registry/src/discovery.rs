//! Link-time recipe discovery.
//!
//! The linker assembles the candidate set: every contributor submits an
//! entry to an [`inventory`] collection, and a discovery pass iterates that
//! collection and populates a [`RecipeBook`]. Two strategies are supported:
//!
//! - **Activation** ([`RecipeInit`]): the entry is a registration hook and
//!   the contributor registers itself by calling
//!   [`RecipeBook::add_recipe`] from the hook.
//! - **Static values** ([`StaticRecipe`]): the entry carries the recipe as
//!   data and the pass registers it directly; an entry without a recipe
//!   value is skipped.
//!
//! Discovery is a setup-phase operation. Passes are idempotent: re-running
//! one re-submits the same registrations, which first-write-wins absorbs.
//! Each entry carries the contributing crate's name, so the `request_crate_*`
//! variants can restrict a pass to one crate's contributions.

use crate::book::RecipeBook;
use crate::source::RegistrySource;

/// A link-time registration hook.
///
/// Collections of hooks are declared with [`crate::recipe_init_collection!`]
/// and submitted to with [`crate::recipe_init!`].
pub trait RecipeInit<B> {
	/// Provenance of this registration.
	fn source(&self) -> RegistrySource;

	/// Runs the contributor's self-registration against `book`.
	fn init(&self, book: &mut B);
}

/// A link-time recipe value.
///
/// Collections of values are declared with [`crate::recipe_collection!`] and
/// submitted to with [`crate::recipe!`].
pub trait StaticRecipe<R> {
	/// Provenance of this registration.
	fn source(&self) -> RegistrySource;

	/// Name the recipe registers under (fold-cased on insertion).
	fn name(&self) -> &'static str;

	/// The declared recipe, or `None` for a contributor without one.
	fn recipe(&self) -> Option<R>;
}

impl<T, R> RecipeBook<T, R> {
	/// Runs every registration hook in collection `C`, regardless of the
	/// crate that submitted it.
	pub fn request_recipes<C>(&mut self)
	where
		C: inventory::Collect + RecipeInit<Self>,
	{
		self.drive_init::<C>(None);
	}

	/// Runs only the registration hooks in collection `C` that were
	/// submitted by `crate_name`.
	pub fn request_crate_recipes<C>(&mut self, crate_name: &str)
	where
		C: inventory::Collect + RecipeInit<Self>,
	{
		self.drive_init::<C>(Some(crate_name));
	}

	/// Registers every recipe value in collection `C`, regardless of the
	/// crate that submitted it. Entries without a recipe value are skipped.
	pub fn request_static_recipes<C>(&mut self)
	where
		C: inventory::Collect + StaticRecipe<R>,
	{
		self.drive_static::<C>(None);
	}

	/// Registers only the recipe values in collection `C` that were
	/// submitted by `crate_name`.
	pub fn request_crate_static_recipes<C>(&mut self, crate_name: &str)
	where
		C: inventory::Collect + StaticRecipe<R>,
	{
		self.drive_static::<C>(Some(crate_name));
	}

	fn drive_init<C>(&mut self, filter: Option<&str>)
	where
		C: inventory::Collect + RecipeInit<Self>,
	{
		let mut hooks = 0usize;
		for entry in inventory::iter::<C> {
			if let Some(name) = filter
				&& !entry.source().is_crate(name)
			{
				continue;
			}
			entry.init(self);
			hooks += 1;
		}
		tracing::debug!(registry = self.label(), hooks, "activation discovery pass");
	}

	fn drive_static<C>(&mut self, filter: Option<&str>)
	where
		C: inventory::Collect + StaticRecipe<R>,
	{
		let mut added = 0usize;
		let mut skipped = 0usize;
		for entry in inventory::iter::<C> {
			if let Some(name) = filter
				&& !entry.source().is_crate(name)
			{
				continue;
			}
			match entry.recipe() {
				Some(recipe) => {
					self.insert(recipe, entry.name(), entry.source());
					added += 1;
				}
				None => {
					tracing::debug!(
						registry = self.label(),
						name = entry.name(),
						source = %entry.source(),
						"contributor without recipe value skipped"
					);
					skipped += 1;
				}
			}
		}
		tracing::debug!(
			registry = self.label(),
			added,
			skipped,
			"static discovery pass"
		);
	}
}
