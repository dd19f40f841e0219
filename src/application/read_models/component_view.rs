//! Flattened views of one comparison table row.

use crate::reconciliation::domain::{FieldValue, RowStatus, UnifiedComponent};
use serde::Serialize;

/// One side of a comparison row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    pub id: u64,
    pub name: String,
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_display: Option<String>,
    pub description: String,
    pub fields: Vec<FieldView>,
}

impl ComponentView {
    /// Exportable fields only, in descriptor order
    pub fn from_unified(component: &UnifiedComponent) -> Self {
        Self {
            id: component.id(),
            name: component.name().to_string(),
            label: component.label().to_string(),
            type_display: component
                .component_type()
                .map(|_| component.type_display().to_string()),
            description: component.description().to_string(),
            fields: component
                .fields()
                .filter(|(descriptor, _)| descriptor.exportable)
                .map(|(descriptor, value)| FieldView {
                    name: descriptor.name,
                    caption: descriptor.caption,
                    value: value.clone(),
                    printable: descriptor.printable,
                })
                .collect(),
        }
    }

    pub fn printable_fields(&self) -> impl Iterator<Item = &FieldView> {
        self.fields.iter().filter(|field| field.printable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    #[serde(skip)]
    pub caption: &'static str,
    pub value: FieldValue,
    #[serde(skip)]
    pub printable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub status: RowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<ComponentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentView>,
    /// Captions of the attributes that differ
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub differences: Vec<&'static str>,
}

impl RowView {
    pub fn display_name(&self) -> &str {
        self.template
            .as_ref()
            .or(self.component.as_ref())
            .map(|view| view.name.as_str())
            .unwrap_or_default()
    }
}
