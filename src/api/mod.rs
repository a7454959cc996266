//! HTTP facade.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ErrorResponse;
pub use handlers::{ChatRequest, ChatResponse, HealthResponse};
pub use routes::create_router;
pub use state::AppState;
