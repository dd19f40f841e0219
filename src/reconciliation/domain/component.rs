use crate::reconciliation::domain::component_kind::ComponentKind;
use crate::reconciliation::domain::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type code of a typed component together with its human-readable label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentType {
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display: String,
}

impl ComponentType {
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
        }
    }

    /// Display label, falling back to the type code
    pub fn display_name(&self) -> &str {
        if self.display.is_empty() {
            &self.code
        } else {
            &self.display
        }
    }
}

/// Attributes shared by templates and live components
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentData {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    /// Kind-specific attributes keyed by field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, FieldValue>,
}

impl ComponentData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, code: impl Into<String>, display: impl Into<String>) -> Self {
        self.component_type = Some(ComponentType::new(code, display));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn type_code(&self) -> Option<&str> {
        self.component_type.as_ref().map(|t| t.code.as_str())
    }
}

/// Read-only component definition attached to a device type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    pub id: u64,
    pub device_type_id: u64,
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub data: ComponentData,
    /// Template id of the sibling this template depends on
    /// (power port template for outlets, rear port template for front ports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<u64>,
}

/// Component instantiated on a specific device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveComponent {
    pub id: u64,
    pub device_id: u64,
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub data: ComponentData,
    /// Live id of the sibling component on the same device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<u64>,
}

/// A live component that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLiveComponent {
    pub device_id: u64,
    pub kind: ComponentKind,
    pub data: ComponentData,
    pub sibling_id: Option<u64>,
}

impl NewLiveComponent {
    /// Copies every template field except identity; the description is
    /// dropped unless `copy_description` is set.
    pub fn from_template(
        template: &ComponentTemplate,
        device_id: u64,
        sibling_id: Option<u64>,
        copy_description: bool,
    ) -> Self {
        let mut data = template.data.clone();
        if !copy_description {
            data.description.clear();
        }
        Self {
            device_id,
            kind: template.kind,
            data,
            sibling_id,
        }
    }

    pub fn into_live(self, id: u64) -> LiveComponent {
        LiveComponent {
            id,
            device_id: self.device_id,
            kind: self.kind,
            data: self.data,
            sibling_id: self.sibling_id,
        }
    }
}

/// Partial update of a live component; `None` leaves a field untouched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentPatch {
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub component_type: Option<Option<ComponentType>>,
    /// Merged into the live attributes; keys absent here are kept
    pub attributes: Option<BTreeMap<String, FieldValue>>,
    pub sibling_id: Option<Option<u64>>,
}

impl ComponentPatch {
    /// Overwrites every syncable field from a template
    pub fn from_template(
        template: &ComponentTemplate,
        sibling_id: Option<u64>,
        copy_description: bool,
    ) -> Self {
        Self {
            name: Some(template.data.name.clone()),
            label: Some(template.data.label.clone()),
            description: copy_description.then(|| template.data.description.clone()),
            component_type: Some(template.data.component_type.clone()),
            attributes: Some(template.data.attributes.clone()),
            sibling_id: template.kind.dependency().map(|_| sibling_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, component: &mut LiveComponent) {
        if let Some(name) = &self.name {
            component.data.name = name.clone();
        }
        if let Some(label) = &self.label {
            component.data.label = label.clone();
        }
        if let Some(description) = &self.description {
            component.data.description = description.clone();
        }
        if let Some(component_type) = &self.component_type {
            component.data.component_type = component_type.clone();
        }
        if let Some(attributes) = &self.attributes {
            for (name, value) in attributes {
                component
                    .data
                    .attributes
                    .insert(name.clone(), value.clone());
            }
        }
        if let Some(sibling_id) = self.sibling_id {
            component.sibling_id = sibling_id;
        }
    }
}

/// Physical device owning live components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub device_type_id: u64,
}
