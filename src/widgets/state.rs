//! Widget Application State
//!
//! Everything request handlers read: the widget registry and the tool table.
//! Built once before the server binds and never mutated afterwards.

use super::{
    assets::AssetResolver,
    error::RegistryError,
    models::{WidgetDefinition, WIDGET_DEFINITIONS},
    registry::WidgetRegistry,
    tools::ToolTable,
};
use std::{path::Path, sync::Arc};
use tracing::info;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub registry: WidgetRegistry,
    pub tools: ToolTable,
}

impl AppState {
    /// Builds the standard widgets from `assets_dir`.
    pub async fn load(assets_dir: &Path) -> Result<Self, RegistryError> {
        let resolver = AssetResolver::new(assets_dir);
        info!("Using assets directory: {:?}", resolver.assets_dir());
        Self::build(&resolver, WIDGET_DEFINITIONS, ToolTable::standard()).await
    }

    pub async fn build(
        resolver: &AssetResolver,
        definitions: &[WidgetDefinition],
        tools: ToolTable,
    ) -> Result<Self, RegistryError> {
        let registry = WidgetRegistry::build(resolver, definitions).await?;
        tools.check_against(&registry)?;
        Ok(Self { registry, tools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::models::VEGI_ALBUM_TOOL;
    use crate::widgets::tools::{ToolDefinition, ToolKind};
    use tempfile::TempDir;

    fn standard_assets() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lotte-vegi-albums.html"), "albums").unwrap();
        std::fs::write(dir.path().join("lotte-vegi-list.html"), "list").unwrap();
        dir
    }

    #[tokio::test]
    async fn loads_standard_widgets() {
        let dir = standard_assets();
        let state = AppState::load(dir.path()).await.unwrap();
        assert_eq!(state.registry.widgets().len(), 2);
        assert!(state.tools.get(VEGI_ALBUM_TOOL).is_some());
    }

    #[tokio::test]
    async fn widget_without_tool_fails() {
        let dir = standard_assets();
        let resolver = AssetResolver::new(dir.path());
        let tools = ToolTable::from_definitions([ToolDefinition::new(
            VEGI_ALBUM_TOOL,
            ToolKind::VegiAlbum,
        )]);

        let err = AppState::build(&resolver, WIDGET_DEFINITIONS, tools)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::WidgetWithoutTool(_)));
    }

    #[tokio::test]
    async fn tool_without_widget_fails() {
        let dir = standard_assets();
        let resolver = AssetResolver::new(dir.path());
        let tools = ToolTable::from_definitions([ToolDefinition::new(
            "ghost",
            ToolKind::VegiList,
        )]);

        let err = AppState::build(&resolver, &WIDGET_DEFINITIONS[..1], tools)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::ToolWithoutWidget(name) if name == "ghost"));
    }
}
