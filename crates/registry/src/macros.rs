//! Registration macros for link-time recipe contribution.
//!
//! Consumers depend on [`inventory`] directly; the expansions reference it
//! by its crate name.

/// Declares an [`inventory`] collection of static recipe values for one
/// recipe shape.
///
/// ```ignore
/// larder_registry::recipe_collection! {
/// 	/// Zero-argument meal recipes.
/// 	pub MealRecipes: Recipe<Meal>
/// }
/// ```
#[macro_export]
macro_rules! recipe_collection {
	($(#[$attr:meta])* $vis:vis $name:ident: $recipe:ty) => {
		$(#[$attr])*
		$vis struct $name {
			source: $crate::RegistrySource,
			name: &'static str,
			recipe: ::core::option::Option<$recipe>,
		}

		impl $name {
			#[doc(hidden)]
			pub const fn new(
				source: $crate::RegistrySource,
				name: &'static str,
				recipe: ::core::option::Option<$recipe>,
			) -> Self {
				Self { source, name, recipe }
			}
		}

		impl $crate::StaticRecipe<$recipe> for $name {
			fn source(&self) -> $crate::RegistrySource {
				self.source
			}

			fn name(&self) -> &'static str {
				self.name
			}

			fn recipe(&self) -> ::core::option::Option<$recipe> {
				self.recipe
			}
		}

		inventory::collect!($name);
	};
}

/// Submits a static recipe value to a collection declared with
/// [`recipe_collection!`].
///
/// The identifier doubles as the recipe name, the way a concrete type named
/// `Grilled` registers under `"grilled"` after fold-casing. The submitting
/// crate's name is stamped on the entry for crate-filtered discovery.
///
/// The form without a recipe expression declares a contributor that carries
/// no recipe value; discovery passes skip it.
///
/// ```ignore
/// larder_registry::recipe!(MealRecipes, Grilled, || Meal::plain("grilled"));
/// larder_registry::recipe!(MealRecipes, Experimental);
/// ```
#[macro_export]
macro_rules! recipe {
	($collection:path, $name:ident, $recipe:expr) => {
		inventory::submit! {
			<$collection>::new(
				$crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				stringify!($name),
				::core::option::Option::Some($recipe),
			)
		}
	};
	($collection:path, $name:ident) => {
		inventory::submit! {
			<$collection>::new(
				$crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				stringify!($name),
				::core::option::Option::None,
			)
		}
	};
}

/// Declares an [`inventory`] collection of self-registration hooks over one
/// concrete book type.
///
/// ```ignore
/// larder_registry::recipe_init_collection! {
/// 	/// Hooks over ingredient-driven meal books.
/// 	pub MealInitHooks: RecipeBook<Meal, RecipeWith<Meal, Vec<String>>>
/// }
/// ```
#[macro_export]
macro_rules! recipe_init_collection {
	($(#[$attr:meta])* $vis:vis $name:ident: $book:ty) => {
		$(#[$attr])*
		$vis struct $name {
			source: $crate::RegistrySource,
			init: fn(&mut $book),
		}

		impl $name {
			#[doc(hidden)]
			pub const fn new(source: $crate::RegistrySource, init: fn(&mut $book)) -> Self {
				Self { source, init }
			}
		}

		impl $crate::RecipeInit<$book> for $name {
			fn source(&self) -> $crate::RegistrySource {
				self.source
			}

			fn init(&self, book: &mut $book) {
				(self.init)(book);
			}
		}

		inventory::collect!($name);
	};
}

/// Submits a self-registration hook to a collection declared with
/// [`recipe_init_collection!`]. The hook calls
/// [`RecipeBook::add_recipe`](crate::RecipeBook::add_recipe) for the
/// contributor when a discovery pass drives it.
///
/// ```ignore
/// larder_registry::recipe_init!(MealInitHooks, |book| {
/// 	book.add_recipe(|ingredients| Meal::stew(ingredients), "Stew");
/// });
/// ```
#[macro_export]
macro_rules! recipe_init {
	($collection:path, $init:expr) => {
		inventory::submit! {
			<$collection>::new(
				$crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				$init,
			)
		}
	};
}
