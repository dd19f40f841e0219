use crate::reconciliation::domain::{ComparisonRow, ComponentKind, Device, RowStatus};

/// Ordered comparison table of one device and component kind
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    pub device: Device,
    pub kind: ComponentKind,
    pub rows: Vec<ComparisonRow>,
    /// Templates in scope after filtering
    pub template_count: usize,
    /// Live components in scope after filtering
    pub live_count: usize,
}

impl ComparisonResponse {
    pub fn addable_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_addable()).count()
    }

    pub fn removable_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_removable()).count()
    }

    /// Matched rows whose live side differs from its template
    pub fn out_of_sync_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.is_matched() && row.status() != RowStatus::InSync)
            .count()
    }
}
