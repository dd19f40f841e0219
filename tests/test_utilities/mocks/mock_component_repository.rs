use device_component_sync::reconciliation::domain::{ComponentPatch, NewLiveComponent};
use device_component_sync::prelude::*;

/// Mutating repository call recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    Create(String),
    Update(u64),
    BulkDelete(Vec<u64>),
    Flush,
}

/// Mock ComponentRepository wrapping the in-memory store
///
/// Records every mutation and can be told to fail creates or flushes.
pub struct MockComponentRepository {
    pub inner: InMemoryComponentRepository,
    pub calls: Vec<RepositoryCall>,
    pub fail_create: bool,
    pub fail_flush: bool,
}

impl MockComponentRepository {
    pub fn new(inner: InMemoryComponentRepository) -> Self {
        Self {
            inner,
            calls: Vec::new(),
            fail_create: false,
            fail_flush: false,
        }
    }

    pub fn with_failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn with_failing_flush(mut self) -> Self {
        self.fail_flush = true;
        self
    }

    pub fn mutation_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| !matches!(call, RepositoryCall::Flush))
            .count()
    }
}

impl ComponentRepository for MockComponentRepository {
    fn get_device(&self, device_id: u64) -> Result<Device> {
        self.inner.get_device(device_id)
    }

    fn list_templates(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
    ) -> Result<Vec<ComponentTemplate>> {
        self.inner.list_templates(kind, device_type_id)
    }

    fn list_live(&self, kind: ComponentKind, device_id: u64) -> Result<Vec<LiveComponent>> {
        self.inner.list_live(kind, device_id)
    }

    fn get_template(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
        id: u64,
    ) -> Result<Option<ComponentTemplate>> {
        self.inner.get_template(kind, device_type_id, id)
    }

    fn get_live(
        &self,
        kind: ComponentKind,
        device_id: u64,
        id: u64,
    ) -> Result<Option<LiveComponent>> {
        self.inner.get_live(kind, device_id, id)
    }

    fn create(&mut self, component: NewLiveComponent) -> Result<LiveComponent> {
        self.calls.push(RepositoryCall::Create(component.data.name.clone()));
        if self.fail_create {
            anyhow::bail!("Mock repository failure");
        }
        self.inner.create(component)
    }

    fn update(&mut self, kind: ComponentKind, id: u64, patch: &ComponentPatch) -> Result<usize> {
        self.calls.push(RepositoryCall::Update(id));
        self.inner.update(kind, id, patch)
    }

    fn bulk_delete(&mut self, kind: ComponentKind, ids: &[u64]) -> Result<usize> {
        self.calls.push(RepositoryCall::BulkDelete(ids.to_vec()));
        self.inner.bulk_delete(kind, ids)
    }

    fn resolve_sibling_name(
        &self,
        kind: ComponentKind,
        sibling_template_id: u64,
    ) -> Result<Option<String>> {
        self.inner.resolve_sibling_name(kind, sibling_template_id)
    }

    fn resolve_live_name(&self, kind: ComponentKind, live_id: u64) -> Result<Option<String>> {
        self.inner.resolve_live_name(kind, live_id)
    }

    fn flush(&mut self) -> Result<()> {
        self.calls.push(RepositoryCall::Flush);
        if self.fail_flush {
            anyhow::bail!("Mock flush failure");
        }
        Ok(())
    }
}
