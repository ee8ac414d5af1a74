//! # World Catalog
//!
//! The persisted contracts of the enrichment tool: entities, the style library,
//! cultures, the style/culture configuration file and task-queue records.
//! This crate holds data only and contains no resolution logic.

pub mod config;
pub mod cultures;
pub mod entities;
pub mod queue;
pub mod styles;

pub use config::*;
pub use cultures::*;
pub use entities::*;
pub use queue::*;
pub use styles::*;
