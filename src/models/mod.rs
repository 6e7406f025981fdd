pub mod ingredient;
pub mod preferences;
pub mod recipe;
pub mod servings;

pub use ingredient::{IngredientEntry, IngredientList, Unit};
pub use preferences::{CookingTime, Language, MealType, Preferences};
pub use recipe::{ErrorBody, GeneratedRecipe, Recipe, RecipeRequest, RecipeYield};
pub use servings::Servings;
