use crate::reconciliation::domain::{
    ComponentKind, ComponentPatch, ComponentTemplate, Device, LiveComponent, NewLiveComponent,
};
use crate::shared::Result;

/// ComponentRepository port for the persistent component inventory
///
/// One repository serves every component kind; each call names the kind
/// it operates on. Sibling lookups take the sibling's own kind (for power
/// outlets that is `ComponentKind::PowerPort`).
///
/// Reads take `&self`. Mutations take `&mut self` and are expected to be
/// individually atomic; `flush` is called once after a complete apply.
pub trait ComponentRepository {
    /// Loads a device
    ///
    /// # Errors
    /// Returns an error if the device does not exist
    fn get_device(&self, device_id: u64) -> Result<Device>;

    /// Lists templates of one kind attached to a device type
    fn list_templates(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
    ) -> Result<Vec<ComponentTemplate>>;

    /// Lists live components of one kind attached to a device
    fn list_live(&self, kind: ComponentKind, device_id: u64) -> Result<Vec<LiveComponent>>;

    /// Fetches one template scoped to a device type
    fn get_template(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
        id: u64,
    ) -> Result<Option<ComponentTemplate>>;

    /// Fetches one live component scoped to a device
    fn get_live(&self, kind: ComponentKind, device_id: u64, id: u64)
        -> Result<Option<LiveComponent>>;

    /// Stores a new live component and returns it with its assigned id
    fn create(&mut self, component: NewLiveComponent) -> Result<LiveComponent>;

    /// Stores several new live components
    ///
    /// # Returns
    /// The number of components created
    fn bulk_create(&mut self, components: Vec<NewLiveComponent>) -> Result<usize> {
        let count = components.len();
        for component in components {
            self.create(component)?;
        }
        Ok(count)
    }

    /// Applies a patch to one live component
    ///
    /// # Returns
    /// The number of components updated (0 when the id is unknown)
    fn update(&mut self, kind: ComponentKind, id: u64, patch: &ComponentPatch) -> Result<usize>;

    /// Deletes live components by id
    ///
    /// # Returns
    /// The number of components deleted
    fn bulk_delete(&mut self, kind: ComponentKind, ids: &[u64]) -> Result<usize>;

    /// Name of a sibling template, `None` when the reference dangles
    fn resolve_sibling_name(
        &self,
        kind: ComponentKind,
        sibling_template_id: u64,
    ) -> Result<Option<String>>;

    /// Id of the live sibling on a device carrying exactly `name`
    fn resolve_sibling_live_id(
        &self,
        kind: ComponentKind,
        name: &str,
        device_id: u64,
    ) -> Result<Option<u64>> {
        Ok(self
            .list_live(kind, device_id)?
            .into_iter()
            .find(|component| component.data.name == name)
            .map(|component| component.id))
    }

    /// Name of a live sibling component
    fn resolve_live_name(&self, kind: ComponentKind, live_id: u64) -> Result<Option<String>>;

    /// Persists pending mutations
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
