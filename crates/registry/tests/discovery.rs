//! Link-time discovery over inventory collections.

use larder_registry::{
	Recipe, RecipeBook, recipe, recipe_collection, recipe_init, recipe_init_collection,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Gadget(&'static str);

recipe_collection! {
	/// Static gadget recipes.
	GadgetRecipes: Recipe<Gadget>
}

recipe!(GadgetRecipes, Widget, || Gadget("widget"));
recipe!(GadgetRecipes, Sprocket, || Gadget("sprocket"));
// Declares no recipe value; every pass must skip it.
recipe!(GadgetRecipes, Prototype);

recipe_init_collection! {
	/// Self-registration hooks for gadget books.
	GadgetInit: RecipeBook<Gadget, Recipe<Gadget>>
}

recipe_init!(GadgetInit, |book| {
	book.add_recipe(|| Gadget("cog"), "Cog");
});

mod parts {
	use larder_registry::{Recipe, recipe_collection};

	use super::Gadget;

	recipe_collection! {
		/// Gadget recipes grouped under a submodule.
		pub PartRecipes: Recipe<Gadget>
	}
}

// Collections may be named by a qualified path, not just a bare identifier.
recipe!(parts::PartRecipes, Flange, || Gadget("flange"));

fn book() -> RecipeBook<Gadget, Recipe<Gadget>> {
	RecipeBook::new("gadgets", || Gadget("default"))
}

#[test]
fn static_discovery_registers_declared_values() {
	let mut book = book();
	book.request_static_recipes::<GadgetRecipes>();
	assert_eq!(book.len(), 2);
	assert!(book.contains("widget"));
	assert!(book.contains("SPROCKET"));
	assert!(
		!book.contains("prototype"),
		"value-less contributor must be skipped"
	);
}

#[test]
fn static_discovery_is_idempotent() {
	let mut book = book();
	book.request_static_recipes::<GadgetRecipes>();
	book.request_static_recipes::<GadgetRecipes>();
	assert_eq!(book.len(), 2);
	// The second pass re-submitted both values; first-write-wins dropped them.
	assert_eq!(book.collisions().len(), 2);
	assert_eq!((book.find("widget").unwrap())(), Gadget("widget"));
}

#[test]
fn crate_filtered_discovery_matches_submitting_crate() {
	let mut book = book();
	book.request_crate_static_recipes::<GadgetRecipes>("no-such-crate");
	assert!(book.is_empty());

	// Submissions in this test binary are stamped with the package name.
	book.request_crate_static_recipes::<GadgetRecipes>(env!("CARGO_PKG_NAME"));
	assert_eq!(book.len(), 2);
}

#[test]
fn module_qualified_collections_accept_submissions() {
	let mut book = book();
	book.request_static_recipes::<parts::PartRecipes>();
	assert_eq!(book.len(), 1);
	assert_eq!((book.find("flange").unwrap())(), Gadget("flange"));
}

#[test]
fn activation_discovery_runs_registration_hooks() {
	let mut book = book();
	book.request_recipes::<GadgetInit>();
	assert_eq!(book.len(), 1);
	assert_eq!((book.find("cog").unwrap())(), Gadget("cog"));
}

#[test]
fn activation_discovery_is_idempotent() {
	let mut book = book();
	book.request_recipes::<GadgetInit>();
	book.request_recipes::<GadgetInit>();
	assert_eq!(book.len(), 1);
	assert_eq!(book.collisions().len(), 1);
}

#[test]
fn zero_submission_collection_is_a_noop_pass() {
	recipe_collection! {
		/// Nobody contributes to this one.
		EmptyRecipes: Recipe<Gadget>
	}

	let mut book = book();
	book.request_static_recipes::<EmptyRecipes>();
	assert!(book.is_empty());
	assert!(book.collisions().is_empty());
}
