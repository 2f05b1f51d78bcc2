pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::domain_cache_control;
pub use routes::create_api_routes;
pub use state::AppState;
