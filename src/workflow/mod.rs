pub mod orchestrator;
pub mod request_state;

pub use orchestrator::{RecipeOrchestrator, LOADING_MESSAGE};
pub use request_state::RequestState;
