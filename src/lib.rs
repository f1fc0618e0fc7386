pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod types;

pub use db::TableAccess;
pub use error::AppError;
pub use router::{AppState, app_router};
