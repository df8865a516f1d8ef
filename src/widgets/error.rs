//! Widget Domain Errors
//!
//! Startup errors (`AssetError`, `RegistryError`) are fatal and stop the
//! server before it binds. `ToolError` is per request and is rendered back
//! to the caller as an `isError` tool result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving widget HTML from the assets directory.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Neither `<name>.html` nor any `<name>-*.html` exists.
    #[error(
        "Widget HTML for \"{name}\" not found in {}. Build the widget assets before starting the server.",
        .dir.display()
    )]
    NotFound { name: String, dir: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while building the widget registry and tool table.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Widget \"{0}\" resolved to empty markup")]
    EmptyMarkup(String),

    #[error("Duplicate widget identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Duplicate widget template URI: {0}")]
    DuplicateTemplateUri(String),

    /// A tool definition names a widget that is not registered.
    #[error("Tool \"{0}\" has no matching widget")]
    ToolWithoutWidget(String),

    /// A registered widget has no tool definition.
    #[error("Widget \"{0}\" has no matching tool")]
    WidgetWithoutTool(String),
}

/// Per-request tool failures.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Input validation error: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
