//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the widget
//! server. Each handler is a pure translation from the widget registry and
//! tool table to MCP message shapes; none of them mutate state.

use super::{helpers::*, models::*};
use crate::widgets::{error::ToolError, AppState, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);

    info!("MCP call: {} (id: {})", req.method, id);

    let response_body = match dispatch(&state, &req.method, params) {
        Ok(result) => rpc_success(id, result),
        Err((code, message)) => rpc_error(id, code, message),
    };

    Json(response_body).into_response()
}

/// Routes a JSON-RPC method to its handler.
///
/// Errors are `(code, message)` pairs for the JSON-RPC envelope. Tool and
/// resource lookup failures are not errors at this level; they come back as
/// ordinary results.
pub fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, (i32, String)> {
    match method {
        "initialize" => Ok(handle_initialize()),
        "notifications/initialized" | "ping" => Ok(json!({})),
        "tools/list" => Ok(handle_tools_list(state)),
        "resources/list" => Ok(handle_resources_list(state)),
        "resources/templates/list" => Ok(handle_resource_templates_list(state)),
        "resources/read" => {
            let params: ReadResourceParams = parse_params(params)?;
            Ok(handle_resources_read(state, &params.uri))
        }
        "tools/call" => {
            let params: CallToolParams = parse_params(params)?;
            Ok(handle_tool_call(state, &params.name, params.arguments))
        }
        _ => {
            warn!("Unknown method: {}", method);
            Err((METHOD_NOT_FOUND, "Method not found".to_string()))
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, (i32, String)> {
    serde_json::from_value(params).map_err(|e| (INVALID_PARAMS, format!("Invalid params: {e}")))
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
pub fn handle_tools_list(state: &AppState) -> Value {
    let tools: Vec<Value> = state
        .registry
        .widgets()
        .iter()
        .filter_map(|widget| {
            let tool = state.tools.get(&widget.identifier)?;
            Some(json!({
                "name": widget.identifier,
                "title": widget.title,
                "description": widget.title,
                "inputSchema": tool.input_schema,
                "_meta": widget_meta(widget),
                "annotations": {
                    "destructiveHint": false,
                    "openWorldHint": false,
                    "readOnlyHint": true
                }
            }))
        })
        .collect();

    json!({ "tools": tools })
}

/// Handles `resources/list` request.
pub fn handle_resources_list(state: &AppState) -> Value {
    let resources: Vec<Value> = state
        .registry
        .widgets()
        .iter()
        .map(|widget| {
            json!({
                "name": widget.title,
                "title": widget.title,
                "uri": widget.template_uri,
                "description": resource_description(widget),
                "mimeType": WIDGET_MIME_TYPE,
                "_meta": widget_meta(widget)
            })
        })
        .collect();

    json!({ "resources": resources })
}

/// Handles `resources/templates/list` request.
pub fn handle_resource_templates_list(state: &AppState) -> Value {
    let templates: Vec<Value> = state
        .registry
        .widgets()
        .iter()
        .map(|widget| {
            json!({
                "name": widget.title,
                "title": widget.title,
                "uriTemplate": widget.template_uri,
                "description": resource_description(widget),
                "mimeType": WIDGET_MIME_TYPE,
                "_meta": widget_meta(widget)
            })
        })
        .collect();

    json!({ "resourceTemplates": templates })
}

/// Handles `resources/read` request.
///
/// An unknown URI is reported in `_meta.error` with empty contents.
pub fn handle_resources_read(state: &AppState, uri: &str) -> Value {
    let Some(widget) = state.registry.get_by_uri(uri) else {
        warn!("Unknown resource: {}", uri);
        return json!({
            "contents": [],
            "_meta": { "error": format!("Unknown resource: {uri}") }
        });
    };

    json!({
        "contents": [{
            "uri": widget.template_uri,
            "mimeType": WIDGET_MIME_TYPE,
            "text": &*widget.html,
            "_meta": widget_meta(widget)
        }]
    })
}

/// Handles `tools/call` request.
///
/// Unknown tools and invalid arguments produce `isError` results rather
/// than JSON-RPC errors.
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Value {
    let (Some(widget), Some(_)) = (state.registry.get(name), state.tools.get(name)) else {
        warn!("Unknown tool: {}", name);
        return tool_error_result(ToolError::unknown_tool(name).to_string());
    };

    let structured_content = match state
        .tools
        .validate(name, args)
        .and_then(|input| state.tools.invoke(name, input))
    {
        Ok(output) => output,
        Err(e) => {
            warn!("Tool {} rejected: {}", name, e);
            return tool_error_result(e.to_string());
        }
    };

    let mut meta = widget_meta(widget);
    meta["openai.com/widget"] = embedded_widget_resource(widget);

    json!({
        "content": [{ "type": "text", "text": widget.response_text }],
        "structuredContent": structured_content,
        "_meta": meta,
        "isError": false
    })
}
