use crate::application::component_scope::ComponentScope;
use crate::application::dto::{ApplyOutcome, ApplyRequest, ApplySummary};
use crate::ports::outbound::{ComponentRepository, ProgressReporter};
use crate::reconciliation::domain::ComponentKind;
use crate::reconciliation::policies::{EqualityPolicy, SyncOptions};
use crate::reconciliation::services::{
    ApplyPlan, ApplyPlanner, DependencyValidator, ResolvedSiblings,
};
use crate::shared::Result;
use tracing::{debug, info};

const APPLY_STEPS: usize = 4;

/// ApplyComponentsUseCase - Applies a user selection to one device
///
/// Validation happens before the first mutation: an empty selection or an
/// unmet sibling dependency returns without touching the repository.
/// Once mutation starts, repository errors propagate as-is and earlier
/// steps are not rolled back; `flush` runs only after every step succeeded.
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ApplyComponentsUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    options: SyncOptions,
}

impl<R, PR> ApplyComponentsUseCase<R, PR>
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

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    pub fn execute(&mut self, request: ApplyRequest) -> Result<ApplyOutcome> {
        let ApplyRequest {
            device_id,
            kind,
            selection,
        } = request;

        if selection.is_empty() {
            let outcome = ApplyOutcome::NothingSelected;
            self.progress_reporter.report_error(&format!("⚠️  {}", outcome.message(kind)));
            return Ok(outcome);
        }

        let scope = ComponentScope::load(&self.repository, device_id, kind, &self.options)?;

        let siblings = if selection.needs_dependencies() {
            match DependencyValidator::validate(kind, &scope.sibling_links) {
                Ok(siblings) => siblings,
                Err(unmet) => {
                    self.progress_reporter.report_error(&format!("❌ {}", unmet));
                    return Ok(ApplyOutcome::DependencyUnmet(unmet));
                }
            }
        } else {
            ResolvedSiblings::new()
        };

        let planner = ApplyPlanner::new(
            EqualityPolicy::from_options(&self.options),
            self.options.sync_descriptions,
        );
        let plan = planner.plan(scope.snapshot(), &selection, &siblings);
        debug!(
            delete = plan.delete_ids.len(),
            add_updates = plan.add_updates.len(),
            create = plan.creates.len(),
            sync = plan.sync_updates.len(),
            "Planned apply"
        );

        let summary = if plan.is_empty() {
            ApplySummary::default()
        } else {
            let summary = self.execute_plan(kind, plan)?;
            self.repository.flush()?;
            summary
        };

        info!(
            device = scope.device.name.as_str(),
            %kind,
            created = summary.created,
            updated = summary.updated,
            deleted = summary.deleted,
            fixed = summary.fixed,
            "Applied selection"
        );
        self.progress_reporter
            .report_completion(&format!("✅ {}", summary.message(kind)));

        Ok(ApplyOutcome::Applied(summary))
    }

    fn execute_plan(&mut self, kind: ComponentKind, plan: ApplyPlan) -> Result<ApplySummary> {
        let plural = kind.verbose_name_plural();
        let mut summary = ApplySummary::default();

        self.progress_reporter
            .report_progress(1, APPLY_STEPS, Some(&format!("Removing {}", plural)));
        if !plan.delete_ids.is_empty() {
            summary.deleted = self.repository.bulk_delete(kind, &plan.delete_ids)?;
        }

        self.progress_reporter
            .report_progress(2, APPLY_STEPS, Some(&format!("Updating existing {}", plural)));
        for update in &plan.add_updates {
            summary.updated += self.repository.update(kind, update.live_id, &update.patch)?;
        }

        self.progress_reporter
            .report_progress(3, APPLY_STEPS, Some(&format!("Creating {}", plural)));
        if !plan.creates.is_empty() {
            summary.created = self.repository.bulk_create(plan.creates)?;
        }

        self.progress_reporter
            .report_progress(4, APPLY_STEPS, Some(&format!("Syncing {}", plural)));
        for update in &plan.sync_updates {
            let count = self.repository.update(kind, update.live_id, &update.patch)?;
            if update.diverged {
                summary.updated += count;
            }
            if update.renamed {
                summary.fixed += count;
            }
        }

        Ok(summary)
    }
}
