use crate::reconciliation::domain::ComponentKind;

/// Request to compare one kind of components of a device against its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub device_id: u64,
    pub kind: ComponentKind,
}

impl ComparisonRequest {
    pub fn new(device_id: u64, kind: ComponentKind) -> Self {
        Self { device_id, kind }
    }
}
