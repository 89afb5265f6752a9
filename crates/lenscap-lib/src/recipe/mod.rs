//! Recipe catalog, product mix, and the chamber conversion constants.
//!
//! - [`catalog`] - the fixed table of coating recipes and name lookup
//! - [`mix`] - participation shares applied to the catalog
//! - [`constants`] - chamber-to-unit conversion factors
//!
//! # Example
//!
//! ```
//! use lenscap_lib::recipe::{ProductMix, RECIPES};
//!
//! let mix = ProductMix::from_pairs(&[("Sapphire", 60.0), ("SuperH", 40.0)]).unwrap();
//! assert_eq!(mix.shares()[0], 60.0);
//! assert_eq!(RECIPES[3].name, "Super Hidrofobico");
//! ```

pub mod catalog;
pub mod constants;
pub mod mix;

pub use catalog::{find_recipe, fuzzy_recipe_matches, recipe_index, Recipe, RECIPES, RECIPE_COUNT};
pub use constants::{JOBS_PER_CHAMBER, LENSES_PER_CHAMBER};
pub use mix::ProductMix;
