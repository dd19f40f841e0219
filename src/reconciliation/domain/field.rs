use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative description of one kind-specific field
///
/// The descriptor table of a kind drives equality, display and export
/// generically, so adding a field to a kind never requires touching the
/// comparison code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Attribute name as stored in the repository
    pub name: &'static str,
    /// Column caption used by formatters
    pub caption: &'static str,
    /// Whether a difference in this field counts as divergence
    pub comparable: bool,
    /// Whether formatters show this field in comparison tables
    pub printable: bool,
    /// Whether the JSON report includes this field
    pub exportable: bool,
    /// Holds the name of a sibling component rather than a stored attribute
    pub dependency: bool,
}

impl FieldDescriptor {
    /// A regular attribute: compared, printed and exported
    pub const fn attribute(name: &'static str, caption: &'static str) -> Self {
        Self {
            name,
            caption,
            comparable: true,
            printable: true,
            exportable: true,
            dependency: false,
        }
    }

    /// A name-resolved reference to a sibling component of another kind
    pub const fn dependency(name: &'static str, caption: &'static str) -> Self {
        Self {
            name,
            caption,
            comparable: true,
            printable: true,
            exportable: true,
            dependency: true,
        }
    }

    /// Same descriptor, hidden from comparison tables
    pub const fn hidden(self) -> Self {
        Self {
            printable: false,
            ..self
        }
    }
}

/// Scalar attribute value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Text(String),
    #[default]
    Null,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{}", value),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_deserializes_untagged() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[true, 24, "red", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Bool(true),
                FieldValue::Int(24),
                FieldValue::text("red"),
                FieldValue::Null,
            ]
        );
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Int(7).to_string(), "7");
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_hidden_descriptor_keeps_comparison() {
        let descriptor = FieldDescriptor::attribute("allocated_draw", "Allocated draw").hidden();
        assert!(descriptor.comparable);
        assert!(!descriptor.printable);
    }
}
