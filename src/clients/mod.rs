pub mod recipe_client;

pub use recipe_client::{RecipeClient, RecipeService};
