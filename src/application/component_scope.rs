use crate::ports::outbound::ComponentRepository;
use crate::reconciliation::domain::{
    ComparisonRow, ComponentKind, ComponentTemplate, Device, LiveComponent, UnifiedComponent,
};
use crate::reconciliation::policies::{EqualityPolicy, SyncOptions};
use crate::reconciliation::services::{ComponentFilter, DiffEngine, ScopeSnapshot, SiblingLink};
use crate::shared::Result;
use std::collections::HashMap;
use tracing::debug;

/// Everything known about one device and one component kind
///
/// Loaded once per request: filtered templates and live components, the
/// sibling links of dependent kinds, and the resulting comparison table.
#[derive(Debug, Clone)]
pub struct ComponentScope {
    pub device: Device,
    pub kind: ComponentKind,
    pub templates: Vec<ComponentTemplate>,
    pub live: Vec<LiveComponent>,
    /// Empty unless the kind depends on a sibling kind
    pub sibling_links: Vec<SiblingLink>,
    pub rows: Vec<ComparisonRow>,
}

impl ComponentScope {
    pub fn load<R>(
        repository: &R,
        device_id: u64,
        kind: ComponentKind,
        options: &SyncOptions,
    ) -> Result<Self>
    where
        R: ComponentRepository + ?Sized,
    {
        let device = repository.get_device(device_id)?;
        let filter = ComponentFilter::from_options(options);

        let templates =
            filter.filter_templates(repository.list_templates(kind, device.device_type_id)?);
        let live = filter.filter_live(repository.list_live(kind, device.id)?);

        let (sibling_links, template_names, live_names) = match kind.dependency() {
            Some(dependency) => {
                let (links, names) =
                    Self::resolve_template_siblings(repository, dependency, &device, &templates)?;
                let live_names = Self::resolve_live_siblings(repository, dependency, &live)?;
                (links, names, live_names)
            }
            None => Default::default(),
        };

        let unified_templates: Vec<UnifiedComponent> = templates
            .iter()
            .map(|t| UnifiedComponent::from_template(t, lookup(&template_names, t.sibling_id)))
            .collect();
        let unified_live: Vec<UnifiedComponent> = live
            .iter()
            .map(|c| UnifiedComponent::from_live(c, lookup(&live_names, c.sibling_id)))
            .collect();

        let rows = DiffEngine::new(EqualityPolicy::from_options(options))
            .diff(&unified_templates, &unified_live);

        debug!(
            device = device.name.as_str(),
            %kind,
            templates = templates.len(),
            live = live.len(),
            rows = rows.len(),
            "Loaded component scope"
        );

        Ok(Self {
            device,
            kind,
            templates,
            live,
            sibling_links,
            rows,
        })
    }

    pub fn snapshot(&self) -> ScopeSnapshot<'_> {
        ScopeSnapshot {
            device_id: self.device.id,
            rows: &self.rows,
            templates: &self.templates,
            live: &self.live,
        }
    }

    /// Sibling template names keyed by sibling template id, plus one link
    /// per referencing template
    fn resolve_template_siblings<R>(
        repository: &R,
        dependency: ComponentKind,
        device: &Device,
        templates: &[ComponentTemplate],
    ) -> Result<(Vec<SiblingLink>, HashMap<u64, String>)>
    where
        R: ComponentRepository + ?Sized,
    {
        let mut names: HashMap<u64, Option<String>> = HashMap::new();
        let mut live_ids: HashMap<String, Option<u64>> = HashMap::new();
        let mut links = Vec::new();

        for template in templates {
            let Some(sibling_template_id) = template.sibling_id else {
                continue;
            };
            let sibling_name = match names.get(&sibling_template_id) {
                Some(name) => name.clone(),
                None => {
                    let name = repository.resolve_sibling_name(dependency, sibling_template_id)?;
                    names.insert(sibling_template_id, name.clone());
                    name
                }
            };
            let live_sibling_id = match &sibling_name {
                Some(name) => match live_ids.get(name) {
                    Some(id) => *id,
                    None => {
                        let id = repository.resolve_sibling_live_id(dependency, name, device.id)?;
                        live_ids.insert(name.clone(), id);
                        id
                    }
                },
                None => None,
            };
            links.push(SiblingLink {
                template_id: template.id,
                sibling_template_id,
                sibling_name,
                live_sibling_id,
            });
        }

        let names = names
            .into_iter()
            .filter_map(|(id, name)| name.map(|name| (id, name)))
            .collect();
        Ok((links, names))
    }

    fn resolve_live_siblings<R>(
        repository: &R,
        dependency: ComponentKind,
        live: &[LiveComponent],
    ) -> Result<HashMap<u64, String>>
    where
        R: ComponentRepository + ?Sized,
    {
        let mut names = HashMap::new();
        for sibling_id in live.iter().filter_map(|c| c.sibling_id) {
            if names.contains_key(&sibling_id) {
                continue;
            }
            if let Some(name) = repository.resolve_live_name(dependency, sibling_id)? {
                names.insert(sibling_id, name);
            }
        }
        Ok(names)
    }
}

fn lookup(names: &HashMap<u64, String>, id: Option<u64>) -> Option<&str> {
    id.and_then(|id| names.get(&id)).map(String::as_str)
}
