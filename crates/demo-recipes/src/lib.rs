//! Demo meal domain: the shared object type, its recipe collections, and
//! the recipes this crate contributes at link time.

use larder_registry::{
	Recipe, RecipeBook, RecipeWith, recipe, recipe_collection, recipe_init,
	recipe_init_collection,
};

/// A prepared meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
	pub name: String,
	pub ingredients: Vec<String>,
}

impl Meal {
	/// A meal with no ingredient list.
	pub fn plain(name: &str) -> Self {
		Self {
			name: name.to_string(),
			ingredients: Vec::new(),
		}
	}

	/// A meal built from a set of ingredients.
	pub fn from_ingredients(name: &str, ingredients: Vec<String>) -> Self {
		Self {
			name: name.to_string(),
			ingredients,
		}
	}
}

recipe_collection! {
	/// Zero-argument meal recipes, contributed as static values.
	pub MealRecipes: Recipe<Meal>
}

recipe_init_collection! {
	/// Self-registration hooks over ingredient-driven meal books.
	pub MealInitHooks: RecipeBook<Meal, RecipeWith<Meal, Vec<String>>>
}

recipe!(MealRecipes, Salad, || Meal::plain("salad"));
recipe!(MealRecipes, Grilled, || Meal::plain("grilled"));
// Listed on the menu draft but not cookable yet; discovery skips it.
recipe!(MealRecipes, Experimental);

recipe_init!(MealInitHooks, |book| {
	book.add_recipe(
		|ingredients| Meal::from_ingredients("stew", ingredients),
		"Stew",
	);
	book.add_recipe(
		|ingredients| Meal::from_ingredients("soup", ingredients),
		"Soup",
	);
});
