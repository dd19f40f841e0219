use crate::reconciliation::domain::{ComparisonRow, UnifiedComponent};
use crate::reconciliation::policies::{natural_cmp, EqualityPolicy, IdentityKey};
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// DiffEngine matches templates to live components by identity
///
/// Pure service: no I/O, output depends only on its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    policy: EqualityPolicy,
}

impl DiffEngine {
    pub fn new(policy: EqualityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EqualityPolicy {
        &self.policy
    }

    /// Produces one row per identity found in either collection, in natural
    /// order of the row's display name.
    ///
    /// When two items of one collection share an identity the later one wins
    /// the slot; the dropped item is logged.
    pub fn diff(
        &self,
        templates: &[UnifiedComponent],
        live: &[UnifiedComponent],
    ) -> Vec<ComparisonRow> {
        let template_lookup = self.index(templates);
        let live_lookup = self.index(live);

        let keys: BTreeSet<&IdentityKey> =
            template_lookup.keys().chain(live_lookup.keys()).collect();

        let mut rows: Vec<(&IdentityKey, ComparisonRow)> = keys
            .into_iter()
            .filter_map(|key| {
                let template = template_lookup.get(key).copied();
                let component = live_lookup.get(key).copied();
                let status = self.policy.classify(template, component)?;
                Some((
                    key,
                    ComparisonRow::new(template.cloned(), component.cloned(), status),
                ))
            })
            .collect();

        rows.sort_by(|(left_key, left), (right_key, right)| {
            natural_cmp(left.display_name(), right.display_name())
                .then_with(|| left_key.cmp(right_key))
        });

        rows.into_iter().map(|(_, row)| row).collect()
    }

    fn index<'a>(
        &self,
        components: &'a [UnifiedComponent],
    ) -> HashMap<IdentityKey, &'a UnifiedComponent> {
        let mut lookup = HashMap::with_capacity(components.len());
        for component in components {
            if let Some(previous) = lookup.insert(self.policy.identity_key(component), component) {
                warn!(
                    kind = %component.kind(),
                    kept = component.name(),
                    dropped = previous.name(),
                    template = component.is_template(),
                    "Duplicate component identity, keeping the later entry"
                );
            }
        }
        lookup
    }
}
