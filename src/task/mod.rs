//! Task tracking for tasktrack.
//!
//! Tasks are created, read, partially updated, completed and deleted through
//! [`services::TaskService`], which validates raw requests before touching the
//! store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
