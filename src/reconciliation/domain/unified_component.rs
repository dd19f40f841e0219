use crate::reconciliation::domain::component::{ComponentData, ComponentTemplate, ComponentType, LiveComponent};
use crate::reconciliation::domain::component_kind::ComponentKind;
use crate::reconciliation::domain::field::{FieldDescriptor, FieldValue};

/// Comparison-ready snapshot of a template or a live component
///
/// Holds the common fields plus the kind-specific fields listed in the
/// kind's descriptor table, in descriptor order. The sibling reference of
/// outlets and front ports is carried by name, never by id, so a template
/// and a live component can be compared directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedComponent {
    id: u64,
    kind: ComponentKind,
    name: String,
    label: String,
    description: String,
    component_type: Option<ComponentType>,
    fields: Vec<FieldValue>,
    is_template: bool,
}

impl UnifiedComponent {
    /// Builds the template-side value. `sibling_name` is the name of the
    /// referenced sibling template, if any.
    pub fn from_template(template: &ComponentTemplate, sibling_name: Option<&str>) -> Self {
        Self::build(template.id, template.kind, &template.data, sibling_name, true)
    }

    /// Builds the live-side value. `sibling_name` is the name of the
    /// referenced sibling live component, if any.
    pub fn from_live(component: &LiveComponent, sibling_name: Option<&str>) -> Self {
        Self::build(component.id, component.kind, &component.data, sibling_name, false)
    }

    fn build(
        id: u64,
        kind: ComponentKind,
        data: &ComponentData,
        sibling_name: Option<&str>,
        is_template: bool,
    ) -> Self {
        let fields = kind
            .field_descriptors()
            .iter()
            .map(|descriptor| {
                if descriptor.dependency {
                    FieldValue::text(sibling_name.unwrap_or_default())
                } else {
                    data.attributes
                        .get(descriptor.name)
                        .cloned()
                        .unwrap_or_default()
                }
            })
            .collect();

        Self {
            id,
            kind,
            name: data.name.clone(),
            label: data.label.clone(),
            description: data.description.clone(),
            component_type: data.component_type.clone(),
            fields,
            is_template,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn component_type(&self) -> Option<&ComponentType> {
        self.component_type.as_ref()
    }

    pub fn type_code(&self) -> Option<&str> {
        self.component_type.as_ref().map(|t| t.code.as_str())
    }

    pub fn type_display(&self) -> &str {
        self.component_type
            .as_ref()
            .map(ComponentType::display_name)
            .unwrap_or_default()
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    /// Kind-specific fields paired with their descriptors
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &FieldValue)> {
        self.kind.field_descriptors().iter().zip(self.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields()
            .find(|(descriptor, _)| descriptor.name == name)
            .map(|(_, value)| value)
    }

    /// Name of the sibling this component depends on; empty when unset
    pub fn dependency_name(&self) -> Option<&str> {
        self.fields().find_map(|(descriptor, value)| match value {
            FieldValue::Text(name) if descriptor.dependency => Some(name.as_str()),
            _ => None,
        })
    }
}
