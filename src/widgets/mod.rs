//! Lotte Vegetable Widgets Domain Module
//!
//! This module contains everything the MCP layer serves, including:
//! - Asset resolution (widget HTML lookup and caching)
//! - Widget definitions and the registry built from them
//! - The tool dispatch table (schemas, validation, handlers)
//! - Application state and static file routes

pub mod assets;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod state;
pub mod tools;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
