use super::comparison_report::{
    ComparisonCounts, ComparisonReport, DeviceView, OverviewReport, ReportMetadataView,
};
use super::component_view::{ComponentView, RowView};
use crate::application::dto::{ComparisonResponse, DeviceOverview};
use crate::reconciliation::domain::{ComparisonRow, Device, ReportMetadata};
use crate::reconciliation::policies::EqualityPolicy;

/// Builds report read models from use case results
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the comparison report; `policy` must be the one the
    /// comparison ran with so the listed differences match the statuses.
    pub fn comparison(
        response: &ComparisonResponse,
        metadata: &ReportMetadata,
        policy: &EqualityPolicy,
    ) -> ComparisonReport {
        ComparisonReport {
            metadata: Self::metadata(metadata),
            device: Self::device(&response.device),
            kind: response.kind,
            counts: ComparisonCounts {
                templates: response.template_count,
                components: response.live_count,
                addable: response.addable_count(),
                removable: response.removable_count(),
                out_of_sync: response.out_of_sync_count(),
            },
            rows: response
                .rows
                .iter()
                .map(|row| Self::row(row, policy))
                .collect(),
        }
    }

    pub fn overview(overview: &DeviceOverview, metadata: &ReportMetadata) -> OverviewReport {
        OverviewReport {
            metadata: Self::metadata(metadata),
            device: Self::device(&overview.device),
            in_sync: overview.is_in_sync(),
            kinds: overview.kinds.clone(),
        }
    }

    fn row(row: &ComparisonRow, policy: &EqualityPolicy) -> RowView {
        let differences = match (row.template(), row.live()) {
            (Some(template), Some(live)) => policy.divergent_fields(template, live),
            _ => Vec::new(),
        };
        RowView {
            status: row.status(),
            template: row.template().map(ComponentView::from_unified),
            component: row.live().map(ComponentView::from_unified),
            differences,
        }
    }

    fn metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn device(device: &Device) -> DeviceView {
        DeviceView {
            id: device.id,
            name: device.name.clone(),
            device_type_id: device.device_type_id,
        }
    }
}
