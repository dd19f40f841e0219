use crate::reconciliation::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator stamps comparison reports with provenance
pub struct ReportGenerator;

impl ReportGenerator {
    /// Metadata with the current UTC time and a fresh `urn:uuid:` report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
