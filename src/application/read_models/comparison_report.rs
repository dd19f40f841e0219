//! Read models for the comparison and overview reports.

use super::component_view::RowView;
use crate::application::dto::KindOverview;
use crate::reconciliation::domain::ComponentKind;
use serde::Serialize;

/// Comparison table of one device and component kind
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub metadata: ReportMetadataView,
    pub device: DeviceView,
    pub kind: ComponentKind,
    pub counts: ComparisonCounts,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonCounts {
    pub templates: usize,
    pub components: usize,
    pub addable: usize,
    pub removable: usize,
    pub out_of_sync: usize,
}

/// Per-kind summary of one device
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub metadata: ReportMetadataView,
    pub device: DeviceView,
    pub in_sync: bool,
    pub kinds: Vec<KindOverview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceView {
    pub id: u64,
    pub name: String,
    pub device_type_id: u64,
}
