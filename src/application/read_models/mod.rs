//! Read models for the report side
//!
//! View structs give formatters a denormalized, serializable picture of
//! comparison results without exposing repository records.

pub mod comparison_report;
pub mod component_view;
pub mod report_builder;

pub use comparison_report::{
    ComparisonCounts, ComparisonReport, DeviceView, OverviewReport, ReportMetadataView,
};
pub use component_view::{ComponentView, FieldView, RowView};
pub use report_builder::ReportBuilder;
