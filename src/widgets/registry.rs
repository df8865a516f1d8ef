//! Widget Registry
//!
//! Fixed, ordered table of widget descriptors with lookup indexes by
//! identifier and by template URI. Built once at startup.

use super::{
    assets::AssetResolver,
    error::RegistryError,
    models::{WidgetDefinition, WidgetDescriptor},
};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetDescriptor>,
    by_identifier: HashMap<String, usize>,
    by_template_uri: HashMap<String, usize>,
}

impl WidgetRegistry {
    /// Resolves every definition's HTML and indexes the results.
    ///
    /// Fails on the first missing asset, empty markup or duplicate key; no
    /// partially built registry is ever returned.
    pub async fn build(
        resolver: &AssetResolver,
        definitions: &[WidgetDefinition],
    ) -> Result<Self, RegistryError> {
        let mut widgets = Vec::with_capacity(definitions.len());
        let mut by_identifier = HashMap::new();
        let mut by_template_uri = HashMap::new();

        for definition in definitions {
            let html = resolver.resolve(definition.asset).await?;
            if html.trim().is_empty() {
                return Err(RegistryError::EmptyMarkup(definition.identifier.to_string()));
            }

            let index = widgets.len();
            if by_identifier
                .insert(definition.identifier.to_string(), index)
                .is_some()
            {
                return Err(RegistryError::DuplicateIdentifier(
                    definition.identifier.to_string(),
                ));
            }
            if by_template_uri
                .insert(definition.template_uri.to_string(), index)
                .is_some()
            {
                return Err(RegistryError::DuplicateTemplateUri(
                    definition.template_uri.to_string(),
                ));
            }

            widgets.push(WidgetDescriptor::new(definition, html));
        }

        info!("Registered {} widget(s)", widgets.len());
        Ok(Self {
            widgets,
            by_identifier,
            by_template_uri,
        })
    }

    /// All widgets in definition order.
    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn get(&self, identifier: &str) -> Option<&WidgetDescriptor> {
        self.by_identifier
            .get(identifier)
            .map(|&index| &self.widgets[index])
    }

    pub fn get_by_uri(&self, template_uri: &str) -> Option<&WidgetDescriptor> {
        self.by_template_uri
            .get(template_uri)
            .map(|&index| &self.widgets[index])
    }
}
