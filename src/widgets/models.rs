//! Widget Domain Models
//!
//! This module contains the static widget definitions, the resolved widget
//! descriptors and the tool input payloads.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Constants
// =============================================================================

/// Tool name of the vegetable album widget
pub const VEGI_ALBUM_TOOL: &str = "롯데 판매 채소 모음";
/// Tool name of the vegetable list widget
pub const VEGI_LIST_TOOL: &str = "롯데 판매 채소 리스트 정렬";
/// Default `topic` for the album tool
pub const DEFAULT_TOPIC: &str = "채소";

// =============================================================================
// Widget Definitions
// =============================================================================

/// Static description of a widget, before its HTML is resolved.
#[derive(Debug, Clone, Copy)]
pub struct WidgetDefinition {
    pub identifier: &'static str,
    pub title: &'static str,
    pub template_uri: &'static str,
    /// Hint shown while the tool runs
    pub invoking: &'static str,
    /// Hint shown after the tool ran
    pub invoked: &'static str,
    /// Logical asset name passed to the resolver
    pub asset: &'static str,
    pub response_text: &'static str,
}

/// Widgets served by this process, in listing order.
pub const WIDGET_DEFINITIONS: &[WidgetDefinition] = &[
    WidgetDefinition {
        identifier: VEGI_ALBUM_TOOL,
        // Search keywords the model should match on
        title: "롯데 판매 채소 모음 | 채소 앨범 | 상추 | 양상추 | 로메인 | 버터헤드 | 프릴아이스 | 바타비아 | Lotte Vegetables Album | 상추 품종 종류 | 품종",
        template_uri: "ui://widget/lotte-vegi-albums.html",
        invoking: "Search and show vegetable albums such as romaine, butterhead, frillice, batavia from Lotte store.",
        invoked: "Displayed Lotte vegetable album successfully.",
        asset: "lotte-vegi-albums",
        response_text: "롯데에서 판매 중인 채소 모음이 아래에 표시됩니다. 확인해보세요 🥬",
    },
    WidgetDefinition {
        identifier: VEGI_LIST_TOOL,
        title: "롯데 채소 리스트 | 채소 정렬 | 상추 가격 비교 | Lotte Vegetable List",
        template_uri: "ui://widget/lotte-vegi-list.html",
        invoking: "Show sorted vegetable list including lettuce, romaine, butterhead, and batavia from Lotte.",
        invoked: "Displayed sorted Lotte vegetable list.",
        asset: "lotte-vegi-list",
        response_text: "롯데에서 판매 중인 채소 리스트를 정렬했어요! 확인해보세요 🥬",
    },
];

/// A widget with its markup resolved. Immutable after startup.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    /// Unique key, also the externally visible tool name
    pub identifier: String,
    pub title: String,
    /// Unique resource URI
    pub template_uri: String,
    pub invoking: String,
    pub invoked: String,
    pub html: Arc<str>,
    pub response_text: String,
}

impl WidgetDescriptor {
    pub fn new(definition: &WidgetDefinition, html: Arc<str>) -> Self {
        Self {
            identifier: definition.identifier.to_string(),
            title: definition.title.to_string(),
            template_uri: definition.template_uri.to_string(),
            invoking: definition.invoking.to_string(),
            invoked: definition.invoked.to_string(),
            html,
            response_text: definition.response_text.to_string(),
        }
    }
}

// =============================================================================
// Tool Inputs
// =============================================================================

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

/// Input for the vegetable album tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VegiAlbumInput {
    /// Product the user is looking for
    #[serde(default = "default_topic")]
    pub topic: String,
}

/// Field the vegetable list is sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Price,
}

/// Sort direction for the vegetable list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Input for the vegetable list tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VegiListInput {
    #[serde(default)]
    pub sort_by: SortBy,

    #[serde(default)]
    pub order: SortOrder,
}
