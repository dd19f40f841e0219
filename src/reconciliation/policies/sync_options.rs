use crate::reconciliation::policies::name_policy::NamePolicy;

/// Options threaded into the diff and apply engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub name_comparison: NamePolicy,
    /// Count description differences as divergence and copy descriptions on add/sync
    pub sync_descriptions: bool,
    /// Drop virtual, bridge and LAG interfaces from interface comparisons
    pub exclude_virtual_interfaces: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            name_comparison: NamePolicy::default(),
            sync_descriptions: true,
            exclude_virtual_interfaces: true,
        }
    }
}

impl SyncOptions {
    pub fn with_sync_descriptions(mut self, sync_descriptions: bool) -> Self {
        self.sync_descriptions = sync_descriptions;
        self
    }

    pub fn with_exclude_virtual_interfaces(mut self, exclude: bool) -> Self {
        self.exclude_virtual_interfaces = exclude;
        self
    }

    pub fn with_name_comparison(mut self, name_comparison: NamePolicy) -> Self {
        self.name_comparison = name_comparison;
        self
    }
}
