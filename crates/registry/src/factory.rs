//! Public construction contracts over a populated recipe book.

use std::ops::{Deref, DerefMut};

use crate::book::{Recipe, RecipeBook, RecipeWith};

/// Abstract factory producing `T` from a recipe name.
pub trait Factory<T> {
	/// Builds an object for `name`, falling back to the default recipe when
	/// the name is unknown. Never fails.
	fn get(&self, name: &str) -> T;
}

/// Abstract factory producing `T` from a recipe name and ingredients `A`.
pub trait ArgFactory<T, A> {
	/// Builds an object for `name` from `args`.
	///
	/// An unknown name falls back to the argument-less default recipe,
	/// which ignores `args`. The asymmetry is deliberate: the fallback
	/// path must work for every lookup, and only the default recipe is
	/// guaranteed to exist.
	fn get(&self, name: &str, args: A) -> T;
}

/// Factory over zero-argument recipes.
///
/// Thin wrapper: it adds no state beyond its [`RecipeBook`], and derefs to
/// it so registration and discovery run through the same value.
pub struct RecipeFactory<T> {
	book: RecipeBook<T, Recipe<T>>,
}

impl<T> RecipeFactory<T> {
	/// Creates a factory with an empty book and the given default recipe.
	pub fn new(label: &'static str, default: Recipe<T>) -> Self {
		Self {
			book: RecipeBook::new(label, default),
		}
	}

	/// The underlying book.
	#[inline]
	pub fn book(&self) -> &RecipeBook<T, Recipe<T>> {
		&self.book
	}
}

impl<T> Factory<T> for RecipeFactory<T> {
	fn get(&self, name: &str) -> T {
		match self.book.find(name) {
			Some(recipe) => recipe(),
			None => (self.book.default_recipe())(),
		}
	}
}

impl<T> Deref for RecipeFactory<T> {
	type Target = RecipeBook<T, Recipe<T>>;

	fn deref(&self) -> &Self::Target {
		&self.book
	}
}

impl<T> DerefMut for RecipeFactory<T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.book
	}
}

/// Factory over single-argument recipes.
pub struct ArgRecipeFactory<T, A> {
	book: RecipeBook<T, RecipeWith<T, A>>,
}

impl<T, A> ArgRecipeFactory<T, A> {
	/// Creates a factory with an empty book and the given default recipe.
	///
	/// The default is always argument-less, whatever the registered recipe
	/// shape is.
	pub fn new(label: &'static str, default: Recipe<T>) -> Self {
		Self {
			book: RecipeBook::new(label, default),
		}
	}

	/// The underlying book.
	#[inline]
	pub fn book(&self) -> &RecipeBook<T, RecipeWith<T, A>> {
		&self.book
	}
}

impl<T, A> ArgFactory<T, A> for ArgRecipeFactory<T, A> {
	fn get(&self, name: &str, args: A) -> T {
		match self.book.find(name) {
			Some(recipe) => recipe(args),
			None => (self.book.default_recipe())(),
		}
	}
}

impl<T, A> Deref for ArgRecipeFactory<T, A> {
	type Target = RecipeBook<T, RecipeWith<T, A>>;

	fn deref(&self) -> &Self::Target {
		&self.book
	}
}

impl<T, A> DerefMut for ArgRecipeFactory<T, A> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.book
	}
}
