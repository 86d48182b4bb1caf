//! tasktrack: a small task-tracking HTTP service.
//!
//! Clients create, read, update, complete and delete task records, list them
//! with optional filters, and read aggregate statistics.
//!
//! # Architecture
//!
//! tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters and service
//! - [`api`]: axum handlers and router
//! - [`config`]: Environment-driven configuration
//! - [`server`]: Listener and graceful shutdown

pub mod api;
pub mod config;
pub mod server;
pub mod task;
