//! HTTP surface for the task service.
//!
//! [`routes::create_router`] mounts the task endpoints under `/api/tasks`;
//! handlers translate between JSON and [`crate::task::services::TaskService`]
//! calls, and [`error::ApiError`] renders every failure as
//! `{"error": "<message>"}`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::create_router;
