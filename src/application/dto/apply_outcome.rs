use crate::reconciliation::domain::ComponentKind;
use crate::reconciliation::services::UnmetDependencies;
use serde::Serialize;

/// Mutation counts of one apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplySummary {
    pub created: usize,
    /// Adds that landed on an existing name plus syncs with attribute drift
    pub updated: usize,
    pub deleted: usize,
    /// Renames
    pub fixed: usize,
}

impl ApplySummary {
    pub fn is_empty(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.deleted == 0 && self.fixed == 0
    }

    /// Human-readable summary built from the non-zero counts
    ///
    /// ```
    /// use device_component_sync::application::dto::ApplySummary;
    /// use device_component_sync::reconciliation::domain::ComponentKind;
    ///
    /// let summary = ApplySummary { created: 3, deleted: 1, ..Default::default() };
    /// assert_eq!(
    ///     summary.message(ComponentKind::Interface),
    ///     "Created 3 interfaces; deleted 1 interfaces"
    /// );
    /// ```
    pub fn message(&self, kind: ComponentKind) -> String {
        let plural = kind.verbose_name_plural();
        let parts: Vec<String> = [
            ("created", self.created),
            ("updated", self.updated),
            ("deleted", self.deleted),
            ("fixed", self.fixed),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(verb, count)| format!("{} {} {}", verb, count, plural))
        .collect();

        if parts.is_empty() {
            return format!("No {} changed", plural);
        }
        capitalize_first(&parts.join("; "))
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of an apply request
///
/// Rejections are values, not errors: no mutation happened and the caller
/// decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(ApplySummary),
    /// The selection held no ids at all
    NothingSelected,
    /// A required sibling component is missing on the device
    DependencyUnmet(UnmetDependencies),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied(_))
    }

    pub fn summary(&self) -> Option<&ApplySummary> {
        match self {
            ApplyOutcome::Applied(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn message(&self, kind: ComponentKind) -> String {
        match self {
            ApplyOutcome::Applied(summary) => summary.message(kind),
            ApplyOutcome::NothingSelected => {
                format!("No {} were selected", kind.verbose_name_plural())
            }
            ApplyOutcome::DependencyUnmet(unmet) => unmet.to_string(),
        }
    }
}
