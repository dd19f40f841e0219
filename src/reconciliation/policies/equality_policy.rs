use crate::reconciliation::domain::{RowStatus, UnifiedComponent};
use crate::reconciliation::policies::name_policy::NamePolicy;
use crate::reconciliation::policies::sync_options::SyncOptions;

/// Key that groups a template and a live component into one table row
///
/// Only the normalized name and, for typed kinds, the type code take part;
/// a fuzzy name collision across incompatible types stays two identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    pub name: String,
    pub component_type: Option<String>,
}

/// Field-level equality rules for unified components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualityPolicy {
    names: NamePolicy,
    compare_descriptions: bool,
}

impl EqualityPolicy {
    pub fn new(names: NamePolicy, compare_descriptions: bool) -> Self {
        Self {
            names,
            compare_descriptions,
        }
    }

    pub fn from_options(options: &SyncOptions) -> Self {
        Self::new(options.name_comparison, options.sync_descriptions)
    }

    pub fn name_policy(&self) -> &NamePolicy {
        &self.names
    }

    pub fn identity_key(&self, component: &UnifiedComponent) -> IdentityKey {
        IdentityKey {
            name: self.names.normalize(component.name()),
            component_type: component.type_code().map(str::to_string),
        }
    }

    /// True when the two values carry no divergence under this policy
    pub fn compare(&self, a: &UnifiedComponent, b: &UnifiedComponent) -> bool {
        a.kind() == b.kind()
            && self.names.normalize(a.name()) == self.names.normalize(b.name())
            && self.divergent_fields(a, b).is_empty()
    }

    /// Captions of the attributes that differ between two values of the same kind
    pub fn divergent_fields(&self, a: &UnifiedComponent, b: &UnifiedComponent) -> Vec<&'static str> {
        let mut divergent = Vec::new();
        if a.label() != b.label() {
            divergent.push("Label");
        }
        if a.type_code() != b.type_code() {
            divergent.push("Type");
        }
        for ((descriptor, left), (_, right)) in a.fields().zip(b.fields()) {
            if descriptor.comparable && left != right {
                divergent.push(descriptor.caption);
            }
        }
        if self.compare_descriptions && a.description() != b.description() {
            divergent.push("Description");
        }
        divergent
    }

    pub fn names_differ_literally(&self, a: &UnifiedComponent, b: &UnifiedComponent) -> bool {
        a.name() != b.name()
    }

    /// Classifies a pair; `None` when both sides are absent
    pub fn classify(
        &self,
        template: Option<&UnifiedComponent>,
        live: Option<&UnifiedComponent>,
    ) -> Option<RowStatus> {
        match (template, live) {
            (Some(template), Some(live)) => Some(if self.names_differ_literally(template, live) {
                RowStatus::RenameCandidate
            } else if self.compare(template, live) {
                RowStatus::InSync
            } else {
                RowStatus::Divergent
            }),
            (Some(_), None) => Some(RowStatus::Addable),
            (None, Some(_)) => Some(RowStatus::Removable),
            (None, None) => None,
        }
    }
}

impl Default for EqualityPolicy {
    fn default() -> Self {
        Self::from_options(&SyncOptions::default())
    }
}
