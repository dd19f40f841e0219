use std::collections::BTreeSet;

/// User-selected actions for one apply request
///
/// Ids are untrusted input: ids that do not belong to the scoped device
/// or device type are dropped by the planner, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Template ids to instantiate on the device
    pub to_add: BTreeSet<u64>,
    /// Live component ids to delete
    pub to_remove: BTreeSet<u64>,
    /// Live component ids to rename and re-sync from their template
    pub to_sync: BTreeSet<u64>,
}

impl Selection {
    pub fn new(
        to_add: impl IntoIterator<Item = u64>,
        to_remove: impl IntoIterator<Item = u64>,
        to_sync: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            to_add: to_add.into_iter().collect(),
            to_remove: to_remove.into_iter().collect(),
            to_sync: to_sync.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty() && self.to_sync.is_empty()
    }

    /// Whether any selected action may need a sibling component
    pub fn needs_dependencies(&self) -> bool {
        !self.to_add.is_empty() || !self.to_sync.is_empty()
    }
}
