use crate::ports::outbound::ComponentRepository;
use crate::reconciliation::domain::{
    ComponentKind, ComponentPatch, ComponentTemplate, Device, LiveComponent, NewLiveComponent,
};
use crate::shared::error::SyncError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet};

/// InMemoryComponentRepository adapter holding the whole inventory in memory
///
/// Live component ids are allocated from one counter shared by every kind,
/// starting after the highest id ever inserted. Template and live ids are
/// separate namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryComponentRepository {
    devices: BTreeMap<u64, Device>,
    templates: BTreeMap<ComponentKind, Vec<ComponentTemplate>>,
    live: BTreeMap<ComponentKind, Vec<LiveComponent>>,
    last_live_id: u64,
}

impl InMemoryComponentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.insert_device(device);
        self
    }

    pub fn with_template(mut self, template: ComponentTemplate) -> Self {
        self.insert_template(template);
        self
    }

    pub fn with_live(mut self, component: LiveComponent) -> Self {
        self.insert_live(component);
        self
    }

    pub fn insert_device(&mut self, device: Device) {
        self.devices.insert(device.id, device);
    }

    pub fn insert_template(&mut self, template: ComponentTemplate) {
        self.templates.entry(template.kind).or_default().push(template);
    }

    /// Inserts a live component keeping its id
    pub fn insert_live(&mut self, component: LiveComponent) {
        self.last_live_id = self.last_live_id.max(component.id);
        self.live.entry(component.kind).or_default().push(component);
    }

    /// Keeps `id` from being allocated to a new live component
    pub fn reserve_live_id(&mut self, id: u64) {
        self.last_live_id = self.last_live_id.max(id);
    }

    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn templates(&self) -> impl Iterator<Item = &ComponentTemplate> {
        self.templates.values().flatten()
    }

    pub fn live_components(&self) -> impl Iterator<Item = &LiveComponent> {
        self.live.values().flatten()
    }

    fn live_of(&self, kind: ComponentKind) -> &[LiveComponent] {
        self.live.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    fn templates_of(&self, kind: ComponentKind) -> &[ComponentTemplate] {
        self.templates.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    fn check_new_component(&self, component: &NewLiveComponent) -> Result<()> {
        if !self.devices.contains_key(&component.device_id) {
            return Err(SyncError::Validation {
                message: format!(
                    "cannot create {} '{}': device {} does not exist",
                    component.kind, component.data.name, component.device_id
                ),
            }
            .into());
        }
        if let (Some(dependency), Some(sibling_id)) =
            (component.kind.dependency(), component.sibling_id)
        {
            let sibling_exists = self
                .live_of(dependency)
                .iter()
                .any(|c| c.id == sibling_id && c.device_id == component.device_id);
            if !sibling_exists {
                return Err(SyncError::Validation {
                    message: format!(
                        "cannot create {} '{}': {} {} is not on device {}",
                        component.kind,
                        component.data.name,
                        dependency,
                        sibling_id,
                        component.device_id
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl ComponentRepository for InMemoryComponentRepository {
    fn get_device(&self, device_id: u64) -> Result<Device> {
        self.devices
            .get(&device_id)
            .cloned()
            .ok_or_else(|| SyncError::DeviceNotFound { device_id }.into())
    }

    fn list_templates(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
    ) -> Result<Vec<ComponentTemplate>> {
        Ok(self
            .templates_of(kind)
            .iter()
            .filter(|t| t.device_type_id == device_type_id)
            .cloned()
            .collect())
    }

    fn list_live(&self, kind: ComponentKind, device_id: u64) -> Result<Vec<LiveComponent>> {
        Ok(self
            .live_of(kind)
            .iter()
            .filter(|c| c.device_id == device_id)
            .cloned()
            .collect())
    }

    fn get_template(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
        id: u64,
    ) -> Result<Option<ComponentTemplate>> {
        Ok(self
            .templates_of(kind)
            .iter()
            .find(|t| t.id == id && t.device_type_id == device_type_id)
            .cloned())
    }

    fn get_live(
        &self,
        kind: ComponentKind,
        device_id: u64,
        id: u64,
    ) -> Result<Option<LiveComponent>> {
        Ok(self
            .live_of(kind)
            .iter()
            .find(|c| c.id == id && c.device_id == device_id)
            .cloned())
    }

    fn create(&mut self, component: NewLiveComponent) -> Result<LiveComponent> {
        self.check_new_component(&component)?;
        self.last_live_id += 1;
        let created = component.into_live(self.last_live_id);
        self.live
            .entry(created.kind)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    /// All-or-nothing: every component is checked before any is stored
    fn bulk_create(&mut self, components: Vec<NewLiveComponent>) -> Result<usize> {
        for component in &components {
            self.check_new_component(component)?;
        }
        let count = components.len();
        for component in components {
            self.create(component)?;
        }
        Ok(count)
    }

    fn update(&mut self, kind: ComponentKind, id: u64, patch: &ComponentPatch) -> Result<usize> {
        let Some(component) = self
            .live
            .get_mut(&kind)
            .and_then(|components| components.iter_mut().find(|c| c.id == id))
        else {
            return Ok(0);
        };
        patch.apply_to(component);
        Ok(1)
    }

    fn bulk_delete(&mut self, kind: ComponentKind, ids: &[u64]) -> Result<usize> {
        let Some(components) = self.live.get_mut(&kind) else {
            return Ok(0);
        };
        let ids: HashSet<u64> = ids.iter().copied().collect();
        let before = components.len();
        components.retain(|c| !ids.contains(&c.id));
        Ok(before - components.len())
    }

    fn resolve_sibling_name(
        &self,
        kind: ComponentKind,
        sibling_template_id: u64,
    ) -> Result<Option<String>> {
        Ok(self
            .templates_of(kind)
            .iter()
            .find(|t| t.id == sibling_template_id)
            .map(|t| t.data.name.clone()))
    }

    fn resolve_live_name(&self, kind: ComponentKind, live_id: u64) -> Result<Option<String>> {
        Ok(self
            .live_of(kind)
            .iter()
            .find(|c| c.id == live_id)
            .map(|c| c.data.name.clone()))
    }
}
