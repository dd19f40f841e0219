/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the component inventory, the console and report output.
pub mod component_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use component_repository::ComponentRepository;
pub use formatter::ComparisonFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
