use crate::reconciliation::domain::{
    ComparisonRow, ComponentPatch, ComponentTemplate, LiveComponent, NewLiveComponent, RowStatus,
    Selection,
};
use crate::reconciliation::policies::EqualityPolicy;
use crate::reconciliation::services::dependency_validator::ResolvedSiblings;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Current state of one device's components of one kind
#[derive(Debug, Clone, Copy)]
pub struct ScopeSnapshot<'a> {
    pub device_id: u64,
    pub rows: &'a [ComparisonRow],
    pub templates: &'a [ComponentTemplate],
    pub live: &'a [LiveComponent],
}

/// An update of one existing live component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpdate {
    pub live_id: u64,
    pub patch: ComponentPatch,
    /// The literal name changes
    pub renamed: bool,
    /// Attributes differ from the template under the equality policy
    pub diverged: bool,
}

/// Mutations derived from a selection, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyPlan {
    pub delete_ids: Vec<u64>,
    /// Selected templates whose name already exists on the device
    pub add_updates: Vec<PlannedUpdate>,
    pub creates: Vec<NewLiveComponent>,
    pub sync_updates: Vec<PlannedUpdate>,
}

impl ApplyPlan {
    pub fn is_empty(&self) -> bool {
        self.delete_ids.is_empty()
            && self.add_updates.is_empty()
            && self.creates.is_empty()
            && self.sync_updates.is_empty()
    }
}

/// ApplyPlanner - Turns a user selection into repository mutations
///
/// Pure service: ids outside the snapshot are dropped, rows already in
/// sync are skipped, and an add whose name already exists on the device
/// becomes an in-place update instead of a duplicate.
#[derive(Debug, Clone, Copy)]
pub struct ApplyPlanner {
    policy: EqualityPolicy,
    copy_descriptions: bool,
}

impl ApplyPlanner {
    pub fn new(policy: EqualityPolicy, copy_descriptions: bool) -> Self {
        Self {
            policy,
            copy_descriptions,
        }
    }

    pub fn plan(
        &self,
        scope: ScopeSnapshot<'_>,
        selection: &Selection,
        siblings: &ResolvedSiblings,
    ) -> ApplyPlan {
        let templates_by_id: HashMap<u64, &ComponentTemplate> =
            scope.templates.iter().map(|t| (t.id, t)).collect();
        let live_by_id: HashMap<u64, &LiveComponent> =
            scope.live.iter().map(|c| (c.id, c)).collect();

        let delete_ids: Vec<u64> = selection
            .to_remove
            .iter()
            .copied()
            .filter(|id| live_by_id.contains_key(id))
            .collect();
        let removed: HashSet<u64> = delete_ids.iter().copied().collect();

        let (add_updates, creates) =
            self.plan_additions(&scope, selection, siblings, &templates_by_id, &removed);

        let claimed: HashSet<u64> = add_updates.iter().map(|u| u.live_id).collect();
        let sync_updates = self.plan_syncs(
            &scope,
            selection,
            siblings,
            &templates_by_id,
            |live_id| removed.contains(&live_id) || claimed.contains(&live_id),
        );

        let ignored = selection
            .to_add
            .iter()
            .filter(|id| !templates_by_id.contains_key(id))
            .chain(selection.to_remove.iter().filter(|id| !live_by_id.contains_key(id)))
            .chain(selection.to_sync.iter().filter(|id| !live_by_id.contains_key(id)))
            .count();
        if ignored > 0 {
            debug!(ignored, device_id = scope.device_id, "Ignoring selected ids outside scope");
        }

        ApplyPlan {
            delete_ids,
            add_updates,
            creates,
            sync_updates,
        }
    }

    fn plan_additions(
        &self,
        scope: &ScopeSnapshot<'_>,
        selection: &Selection,
        siblings: &ResolvedSiblings,
        templates_by_id: &HashMap<u64, &ComponentTemplate>,
        removed: &HashSet<u64>,
    ) -> (Vec<PlannedUpdate>, Vec<NewLiveComponent>) {
        let names = self.policy.name_policy();
        let existing: HashMap<String, &LiveComponent> = scope
            .live
            .iter()
            .filter(|c| !removed.contains(&c.id))
            .map(|c| (names.normalize(&c.data.name), c))
            .collect();

        let mut updates = Vec::new();
        let mut creates = Vec::new();
        let mut taken: HashSet<String> = HashSet::new();

        for template_id in &selection.to_add {
            let Some(template) = templates_by_id.get(template_id) else {
                continue;
            };
            let key = names.normalize(&template.data.name);
            if !taken.insert(key.clone()) {
                warn!(
                    name = template.data.name.as_str(),
                    "Several selected templates share one name, keeping the first"
                );
                continue;
            }

            let sibling_id = siblings.get(template_id).copied();
            match existing.get(&key) {
                Some(component) => updates.push(PlannedUpdate {
                    live_id: component.id,
                    patch: ComponentPatch::from_template(template, sibling_id, self.copy_descriptions),
                    renamed: component.data.name != template.data.name,
                    diverged: true,
                }),
                None => creates.push(NewLiveComponent::from_template(
                    template,
                    scope.device_id,
                    sibling_id,
                    self.copy_descriptions,
                )),
            }
        }

        (updates, creates)
    }

    fn plan_syncs(
        &self,
        scope: &ScopeSnapshot<'_>,
        selection: &Selection,
        siblings: &ResolvedSiblings,
        templates_by_id: &HashMap<u64, &ComponentTemplate>,
        is_taken: impl Fn(u64) -> bool,
    ) -> Vec<PlannedUpdate> {
        scope
            .rows
            .iter()
            .filter(|row| row.status() != RowStatus::InSync)
            .filter_map(|row| {
                let (unified_template, unified_live) = (row.template()?, row.live()?);
                if !selection.to_sync.contains(&unified_live.id()) || is_taken(unified_live.id()) {
                    return None;
                }
                let template = templates_by_id.get(&unified_template.id())?;

                let renamed = self.policy.names_differ_literally(unified_template, unified_live);
                let diverged = !self.policy.compare(unified_template, unified_live);
                if !renamed && !diverged {
                    return None;
                }

                let sibling_id = siblings.get(&template.id).copied();
                Some(PlannedUpdate {
                    live_id: unified_live.id(),
                    patch: ComponentPatch::from_template(template, sibling_id, self.copy_descriptions),
                    renamed,
                    diverged,
                })
            })
            .collect()
    }
}
