use crate::reconciliation::domain::{ComparisonRow, ComponentKind, Device, RowStatus};
use serde::Serialize;

/// Comparison counts of one component kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindOverview {
    pub kind: ComponentKind,
    pub templates: usize,
    pub components: usize,
    pub in_sync: usize,
    pub divergent: usize,
    pub rename: usize,
    pub addable: usize,
    pub removable: usize,
}

impl KindOverview {
    pub fn from_rows(
        kind: ComponentKind,
        templates: usize,
        components: usize,
        rows: &[ComparisonRow],
    ) -> Self {
        let count = |status: RowStatus| rows.iter().filter(|row| row.status() == status).count();
        Self {
            kind,
            templates,
            components,
            in_sync: count(RowStatus::InSync),
            divergent: count(RowStatus::Divergent),
            rename: count(RowStatus::RenameCandidate),
            addable: count(RowStatus::Addable),
            removable: count(RowStatus::Removable),
        }
    }

    pub fn is_in_sync(&self) -> bool {
        self.divergent == 0 && self.rename == 0 && self.addable == 0 && self.removable == 0
    }
}

/// Per-kind summary of one device against its device type
#[derive(Debug, Clone)]
pub struct DeviceOverview {
    pub device: Device,
    pub kinds: Vec<KindOverview>,
}

impl DeviceOverview {
    pub fn is_in_sync(&self) -> bool {
        self.kinds.iter().all(KindOverview::is_in_sync)
    }

    pub fn kind(&self, kind: ComponentKind) -> Option<&KindOverview> {
        self.kinds.iter().find(|overview| overview.kind == kind)
    }
}
