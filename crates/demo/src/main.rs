//! Builds the demo meal factories, runs both discovery strategies, and
//! serves a few orders.
//!
//! Run with `RUST_LOG=debug` to watch registrations and dropped duplicates.

use larder_demo_recipes::{Meal, MealInitHooks, MealRecipes};
use larder_registry::{ArgFactory, ArgRecipeFactory, Factory, RecipeFactory, recipe};

// This crate's own contribution, distinguishable from the library's by the
// crate name stamped on the submission.
recipe!(MealRecipes, Ramen, || Meal::plain("ramen"));

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	// Everything linked into the binary.
	let mut menu = RecipeFactory::new("menu", || Meal::plain("bread"));
	menu.request_static_recipes::<MealRecipes>();
	menu.add_recipe(|| Meal::plain("soup of the day"), "Special");

	let mut names = menu.recipe_names();
	names.sort();
	println!("menu: {names:?}");
	for order in ["Salad", "grilled", "special", "Experimental"] {
		println!("  {order} -> {:?}", menu.get(order));
	}

	// Only this crate's contributions.
	let mut house_menu = RecipeFactory::new("house-menu", || Meal::plain("bread"));
	house_menu.request_crate_static_recipes::<MealRecipes>(env!("CARGO_PKG_NAME"));
	println!("house menu: {:?}", house_menu.recipe_names());

	// Activation strategy over ingredient-driven recipes.
	let mut kitchen = ArgRecipeFactory::new("kitchen", || Meal::plain("bread"));
	kitchen.request_recipes::<MealInitHooks>();

	let stew = kitchen.get("Stew", vec!["carrot".into(), "beef".into()]);
	println!("stew -> {stew:?}");
	let fallback = kitchen.get("ramen", vec!["noodles".into()]);
	println!("ramen (unknown to the kitchen) -> {fallback:?}");
}
