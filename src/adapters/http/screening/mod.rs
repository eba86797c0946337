//! HTTP surface for the screening catalog and submissions.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ScreeningHandlers;
pub use routes::screening_routes;
