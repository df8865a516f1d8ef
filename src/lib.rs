//! Lotte Widgets Library
//!
//! This library serves the Lotte vegetable album and vegetable list widgets
//! over MCP (Model Context Protocol) for the OpenAI Apps SDK.

// Domain modules
pub mod mcp;
pub mod widgets;

// Infrastructure
pub mod config;
pub mod router;
