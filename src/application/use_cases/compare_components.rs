use crate::application::component_scope::ComponentScope;
use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::ports::outbound::{ComponentRepository, ProgressReporter};
use crate::reconciliation::policies::SyncOptions;
use crate::shared::Result;

/// CompareComponentsUseCase - Builds the comparison table of one kind
///
/// Read-only: never mutates the repository.
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareComponentsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    options: SyncOptions,
}

impl<R, PR> CompareComponentsUseCase<R, PR>
where
    R: ComponentRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: PR, options: SyncOptions) -> Self {
        Self {
            repository,
            progress_reporter,
            options,
        }
    }

    pub fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Comparing {} of device {}",
            request.kind.verbose_name_plural(),
            request.device_id
        ));

        let scope =
            ComponentScope::load(&self.repository, request.device_id, request.kind, &self.options)?;

        let response = ComparisonResponse {
            template_count: scope.templates.len(),
            live_count: scope.live.len(),
            device: scope.device,
            kind: scope.kind,
            rows: scope.rows,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ {}: {} to add, {} to remove, {} out of sync",
            response.device.name,
            response.addable_count(),
            response.removable_count(),
            response.out_of_sync_count()
        ));

        Ok(response)
    }
}
