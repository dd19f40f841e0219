use crate::application::read_models::{ComparisonReport, OverviewReport};
use crate::shared::Result;

/// ComparisonFormatter port for rendering reports
///
/// Implementations render the query-side read models; they never see
/// repository records directly.
pub trait ComparisonFormatter {
    /// Renders the comparison table of one component kind
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;

    /// Renders the per-kind summary of one device
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_overview(&self, report: &OverviewReport) -> Result<String>;
}
