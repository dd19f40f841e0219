use crate::reconciliation::domain::unified_component::UnifiedComponent;
use serde::Serialize;
use std::fmt;

/// Classification of one comparison table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Both sides present and equal under the active policy
    InSync,
    /// Both sides present, attributes differ
    Divergent,
    /// Both sides present, names match only after normalization
    RenameCandidate,
    /// Template without a live counterpart
    Addable,
    /// Live component without a template counterpart
    Removable,
}

impl RowStatus {
    pub fn is_matched(self) -> bool {
        matches!(
            self,
            RowStatus::InSync | RowStatus::Divergent | RowStatus::RenameCandidate
        )
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RowStatus::InSync => "in sync",
            RowStatus::Divergent => "divergent",
            RowStatus::RenameCandidate => "rename",
            RowStatus::Addable => "missing on device",
            RowStatus::Removable => "not in device type",
        };
        write!(f, "{}", text)
    }
}

/// One identity of the comparison table
///
/// At least one side is always present; both values are kept whole so
/// callers can display every attribute difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    template: Option<UnifiedComponent>,
    live: Option<UnifiedComponent>,
    status: RowStatus,
}

impl ComparisonRow {
    pub(crate) fn new(
        template: Option<UnifiedComponent>,
        live: Option<UnifiedComponent>,
        status: RowStatus,
    ) -> Self {
        debug_assert!(template.is_some() || live.is_some());
        Self {
            template,
            live,
            status,
        }
    }

    pub fn template(&self) -> Option<&UnifiedComponent> {
        self.template.as_ref()
    }

    pub fn live(&self) -> Option<&UnifiedComponent> {
        self.live.as_ref()
    }

    pub fn status(&self) -> RowStatus {
        self.status
    }

    pub fn is_addable(&self) -> bool {
        self.template.is_some() && self.live.is_none()
    }

    pub fn is_removable(&self) -> bool {
        self.template.is_none() && self.live.is_some()
    }

    pub fn is_matched(&self) -> bool {
        self.template.is_some() && self.live.is_some()
    }

    /// Name shown for the row: the template's when present
    pub fn display_name(&self) -> &str {
        self.template
            .as_ref()
            .or(self.live.as_ref())
            .map(UnifiedComponent::name)
            .unwrap_or_default()
    }
}
