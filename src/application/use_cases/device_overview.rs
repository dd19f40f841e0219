use crate::application::component_scope::ComponentScope;
use crate::application::dto::{DeviceOverview, KindOverview};
use crate::ports::outbound::{ComponentRepository, ProgressReporter};
use crate::reconciliation::domain::ComponentKind;
use crate::reconciliation::policies::SyncOptions;
use crate::shared::Result;

/// DeviceOverviewUseCase - Compares every component kind of one device
pub struct DeviceOverviewUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    options: SyncOptions,
}

impl<R, PR> DeviceOverviewUseCase<R, PR>
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

    /// Kinds are visited in dependency order
    pub fn execute(&self, device_id: u64) -> Result<DeviceOverview> {
        let device = self.repository.get_device(device_id)?;
        self.progress_reporter
            .report(&format!("🔍 Comparing all components of {}", device.name));

        let total = ComponentKind::ALL.len();
        let mut kinds = Vec::with_capacity(total);
        for (index, kind) in ComponentKind::ALL.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(kind.verbose_name_plural()));
            let scope = ComponentScope::load(&self.repository, device.id, kind, &self.options)?;
            kinds.push(KindOverview::from_rows(
                kind,
                scope.templates.len(),
                scope.live.len(),
                &scope.rows,
            ));
        }

        let overview = DeviceOverview { device, kinds };
        let out_of_sync = overview.kinds.iter().filter(|k| !k.is_in_sync()).count();
        if out_of_sync == 0 {
            self.progress_reporter
                .report_completion(&format!("✅ {} matches its device type", overview.device.name));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ {}: {} component kind(s) out of sync",
                overview.device.name, out_of_sync
            ));
        }
        Ok(overview)
    }
}
