use crate::reconciliation::domain::{ComponentKind, Selection};

/// Request to apply a selection of actions to one device and component kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    pub device_id: u64,
    pub kind: ComponentKind,
    pub selection: Selection,
}

impl ApplyRequest {
    pub fn new(device_id: u64, kind: ComponentKind, selection: Selection) -> Self {
        Self {
            device_id,
            kind,
            selection,
        }
    }
}
