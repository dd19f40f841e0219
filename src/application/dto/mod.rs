/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into use cases and results back out,
/// keeping the reconciliation core free of presentation concerns.
mod apply_outcome;
mod apply_request;
mod comparison_request;
mod comparison_response;
mod device_overview;
mod output_format;

pub use apply_outcome::{ApplyOutcome, ApplySummary};
pub use apply_request::ApplyRequest;
pub use comparison_request::ComparisonRequest;
pub use comparison_response::ComparisonResponse;
pub use device_overview::{DeviceOverview, KindOverview};
pub use output_format::OutputFormat;
