//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use super::models::WIDGET_MIME_TYPE;
use crate::widgets::models::WidgetDescriptor;
use serde_json::{json, Value};

/// Constructs the metadata the OpenAI widget system reads from tool and
/// resource descriptors.
pub fn widget_meta(widget: &WidgetDescriptor) -> Value {
    json!({
        "openai/outputTemplate": widget.template_uri,
        "openai/toolInvocation/invoking": widget.invoking,
        "openai/toolInvocation/invoked": widget.invoked,
        "openai/widgetAccessible": true,
        "openai/resultCanProduceWidget": true,
    })
}

/// The widget inlined as an embedded resource, attached to tool results.
pub fn embedded_widget_resource(widget: &WidgetDescriptor) -> Value {
    json!({
        "type": "resource",
        "resource": {
            "uri": widget.template_uri,
            "mimeType": WIDGET_MIME_TYPE,
            "text": &*widget.html,
            "title": widget.title,
        }
    })
}

/// Description used in resource listings.
pub fn resource_description(widget: &WidgetDescriptor) -> String {
    format!("{} widget markup", widget.title)
}

/// A tool result carrying only an error message.
pub fn tool_error_result(message: impl Into<String>) -> Value {
    json!({
        "content": [{ "type": "text", "text": message.into() }],
        "isError": true
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
