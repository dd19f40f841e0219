use crate::reconciliation::domain::ComponentKind;
use crate::reconciliation::policies::natural_sort;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A template's reference to a sibling template, resolved against the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingLink {
    pub template_id: u64,
    pub sibling_template_id: u64,
    /// Name of the referenced sibling template; `None` when the reference dangles
    pub sibling_name: Option<String>,
    /// Live sibling on the device carrying exactly that name
    pub live_sibling_id: Option<u64>,
}

/// Template id to the live id of its sibling on the device
pub type ResolvedSiblings = HashMap<u64, u64>;

/// Sibling components that must be synced before the requested apply can run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetDependencies {
    pub kind: ComponentKind,
    pub dependency: ComponentKind,
    /// Names of the missing siblings, naturally sorted
    pub missing: Vec<String>,
}

impl fmt::Display for UnmetDependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dependency detected, sync {} first!",
            self.dependency.verbose_name_plural()
        )?;
        if !self.missing.is_empty() {
            write!(f, " Missing on device: {}", self.missing.join(", "))?;
        }
        Ok(())
    }
}

/// DependencyValidator - Checks dependency closure before any mutation
pub struct DependencyValidator;

impl DependencyValidator {
    /// Requires every link to resolve to a live sibling
    ///
    /// # Returns
    /// The template-to-live sibling map when every link resolves, or the
    /// list of missing sibling names otherwise. Kinds without a dependency
    /// always validate.
    pub fn validate(
        kind: ComponentKind,
        links: &[SiblingLink],
    ) -> Result<ResolvedSiblings, UnmetDependencies> {
        let Some(dependency) = kind.dependency() else {
            return Ok(ResolvedSiblings::new());
        };

        let mut resolved = ResolvedSiblings::with_capacity(links.len());
        let mut missing = BTreeSet::new();

        for link in links {
            match (link.live_sibling_id, &link.sibling_name) {
                (Some(live_id), Some(_)) => {
                    resolved.insert(link.template_id, live_id);
                }
                (_, Some(name)) => {
                    missing.insert(name.clone());
                }
                (_, None) => {
                    missing.insert(format!("template #{}", link.sibling_template_id));
                }
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            let mut missing: Vec<String> = missing.into_iter().collect();
            natural_sort(&mut missing);
            Err(UnmetDependencies {
                kind,
                dependency,
                missing,
            })
        }
    }
}
