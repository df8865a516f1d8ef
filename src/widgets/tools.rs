//! Tool Dispatch Table
//!
//! Maps each tool name to its input schema and handler. Handlers are plain
//! enum variants; adding a tool means adding a widget definition, a
//! `ToolKind` variant and its input type.

use super::{
    error::{RegistryError, ToolError},
    models::{VegiAlbumInput, VegiListInput, DEFAULT_TOPIC, VEGI_ALBUM_TOOL, VEGI_LIST_TOOL},
    registry::WidgetRegistry,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Handler selector for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    VegiAlbum,
    VegiList,
}

/// Arguments that passed a tool's schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInput {
    VegiAlbum(VegiAlbumInput),
    VegiList(VegiListInput),
}

impl ToolInput {
    fn kind(&self) -> ToolKind {
        match self {
            ToolInput::VegiAlbum(_) => ToolKind::VegiAlbum,
            ToolInput::VegiList(_) => ToolKind::VegiList,
        }
    }
}

impl ToolKind {
    /// JSON Schema advertised in `tools/list`.
    pub fn input_schema(self) -> Value {
        match self {
            ToolKind::VegiAlbum => json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Product that user is looking for.",
                        "default": DEFAULT_TOPIC
                    }
                },
                "additionalProperties": false
            }),
            ToolKind::VegiList => json!({
                "type": "object",
                "properties": {
                    "sortBy": {
                        "type": "string",
                        "enum": ["rating", "price"],
                        "description": "Field to sort the list by (e.g., rating, price).",
                        "default": "rating"
                    },
                    "order": {
                        "type": "string",
                        "enum": ["asc", "desc"],
                        "description": "Sort order: ascending or descending.",
                        "default": "asc"
                    }
                },
                "additionalProperties": false
            }),
        }
    }

    pub fn validate(self, args: Value) -> Result<ToolInput, ToolError> {
        match self {
            ToolKind::VegiAlbum => parse_args(args).map(ToolInput::VegiAlbum),
            ToolKind::VegiList => parse_args(args).map(ToolInput::VegiList),
        }
    }
}

/// Missing or `null` arguments count as an empty object.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = match args {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(ToolError::invalid_arguments(format!(
                "expected an object, got {other}"
            )))
        }
    };
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Structured output for a validated input. Both tools echo their input.
fn structured_output(input: ToolInput) -> Value {
    match input {
        ToolInput::VegiAlbum(input) => json!({ "topic": input.topic }),
        // Sorting is left to the widget; only the requested parameters go back.
        ToolInput::VegiList(input) => json!({
            "sortBy": input.sort_by,
            "order": input.order,
        }),
    }
}

/// A registered tool.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    /// Equal to the identifier of the widget this tool renders
    pub name: String,
    pub input_schema: Value,
    pub kind: ToolKind,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, kind: ToolKind) -> Self {
        Self {
            name: name.into(),
            input_schema: kind.input_schema(),
            kind,
        }
    }
}

/// Static name -> tool mapping.
#[derive(Debug)]
pub struct ToolTable {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolTable {
    /// The tools served by this process.
    pub fn standard() -> Self {
        Self::from_definitions([
            ToolDefinition::new(VEGI_ALBUM_TOOL, ToolKind::VegiAlbum),
            ToolDefinition::new(VEGI_LIST_TOOL, ToolKind::VegiList),
        ])
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ToolDefinition>) -> Self {
        let tools = definitions
            .into_iter()
            .map(|tool| (tool.name.clone(), tool))
            .collect();
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Checks that tools and widgets pair up one to one.
    pub fn check_against(&self, registry: &WidgetRegistry) -> Result<(), RegistryError> {
        if let Some(orphan) = self.tools.keys().find(|name| registry.get(name).is_none()) {
            return Err(RegistryError::ToolWithoutWidget(orphan.clone()));
        }
        if let Some(widget) = registry
            .widgets()
            .iter()
            .find(|widget| !self.tools.contains_key(&widget.identifier))
        {
            return Err(RegistryError::WidgetWithoutTool(widget.identifier.clone()));
        }
        Ok(())
    }

    /// Applies the tool's schema to raw call arguments.
    pub fn validate(&self, name: &str, args: Value) -> Result<ToolInput, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        tool.kind.validate(args)
    }

    /// Runs the tool's handler on already validated input.
    pub fn invoke(&self, name: &str, input: ToolInput) -> Result<Value, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        if tool.kind != input.kind() {
            return Err(ToolError::invalid_arguments(format!(
                "input does not belong to tool {name}"
            )));
        }
        Ok(structured_output(input))
    }
}
