//! Step definitions for task lifecycle scenarios.

pub mod world;

mod given;
