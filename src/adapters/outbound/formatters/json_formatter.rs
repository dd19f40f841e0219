use crate::application::read_models::{ComparisonReport, OverviewReport};
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter rendering reports as pretty-printed JSON
///
/// Only exportable fields appear; the document mirrors the read models.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for JsonFormatter {
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        Self::render(report)
    }

    fn format_overview(&self, report: &OverviewReport) -> Result<String> {
        Self::render(report)
    }
}
