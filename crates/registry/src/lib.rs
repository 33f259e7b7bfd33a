//! String-keyed recipe registry and object factory.
//!
//! A [`RecipeBook`] maps fold-cased names to constructor functions (recipes)
//! for one object type, plus a default recipe every lookup can fall back on.
//! A [`RecipeFactory`] (or [`ArgRecipeFactory`] for recipes that take
//! ingredients) wraps a book and exposes the construction contract:
//! [`Factory::get`] builds an object by name and never fails, because an
//! unknown name invokes the default recipe.
//!
//! # Mental model
//!
//! 1. **Construction:** a factory is created around an empty book and a
//!    default recipe. An absent default is unrepresentable; even the empty
//!    book answers every lookup.
//! 2. **Population:** [`RecipeBook::add_recipe`] calls and discovery passes
//!    fill the book. Keys are fold-cased; the first registration for a key
//!    wins and later duplicates are silently dropped.
//! 3. **Lookup:** `get` fold-cases the name and invokes the matching recipe,
//!    or the default when no recipe matches.
//!
//! # Discovery
//!
//! Contributor crates register recipes at link time through [`inventory`]
//! collections, in one of two shapes:
//!
//! - **Registration hooks** ([`recipe_init_collection!`] / [`recipe_init!`]):
//!   each contributor submits a hook that calls `add_recipe` for itself, and
//!   [`RecipeBook::request_recipes`] drives every hook in the collection.
//! - **Static values** ([`recipe_collection!`] / [`recipe!`]): each
//!   contributor declares its recipe as data, and
//!   [`RecipeBook::request_static_recipes`] registers the declared values
//!   directly. A contributor without a recipe value is skipped.
//!
//! Every submission carries the contributing crate's name, so the
//! `request_crate_*` variants can populate a book from a single crate's
//! contributions instead of everything linked into the binary.
//!
//! # Concurrency
//!
//! Population takes `&mut self` and lookup takes `&self`, so the
//! populate-then-read phase separation is enforced by the borrow checker.
//! Once populated, a book or factory shared behind `Arc` is safe for
//! unsynchronized concurrent reads.

pub mod book;
pub mod discovery;
pub mod factory;
pub mod key;
mod macros;
pub mod source;

pub use book::{Collision, InsertAction, Recipe, RecipeBook, RecipeWith};
pub use discovery::{RecipeInit, StaticRecipe};
pub use factory::{ArgFactory, ArgRecipeFactory, Factory, RecipeFactory};
pub use key::{fold_case, short_type_name, to_first_upper};
pub use source::RegistrySource;
