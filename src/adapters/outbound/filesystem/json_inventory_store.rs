use crate::adapters::outbound::memory::InMemoryComponentRepository;
use crate::ports::outbound::ComponentRepository;
use crate::reconciliation::domain::{
    ComponentKind, ComponentPatch, ComponentTemplate, Device, LiveComponent, NewLiveComponent,
};
use crate::shared::error::SyncError;
use crate::shared::security::{validate_inventory_file, validate_not_symlink, MAX_INVENTORY_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// On-disk layout of an inventory file
#[derive(Debug, Default, Deserialize)]
struct InventoryDocument {
    #[serde(default)]
    devices: Vec<Device>,
    #[serde(default)]
    templates: Vec<Value>,
    #[serde(default)]
    components: Vec<Value>,
}

#[derive(Serialize)]
struct InventorySnapshot<'a> {
    devices: Vec<&'a Device>,
    templates: Vec<Value>,
    components: Vec<Value>,
}

/// JsonInventoryStore adapter backed by a JSON inventory file
///
/// The file is read once on open. Mutations go to memory and are written
/// back by `flush` through a temporary file that replaces the inventory
/// in one rename, so readers never see a half-written file. Records of
/// unknown component kinds are skipped for comparison but preserved on
/// write.
#[derive(Debug)]
pub struct JsonInventoryStore {
    path: PathBuf,
    inventory: InMemoryComponentRepository,
    unmapped_templates: Vec<Value>,
    unmapped_components: Vec<Value>,
    dirty: bool,
}

impl JsonInventoryStore {
    /// Opens and parses an inventory file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file is a symlink, not a regular file, or too large
    /// - The content is not a valid inventory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(SyncError::InventoryNotFound {
                suggestion: format!(
                    "Inventory file \"{}\" does not exist. Pass the inventory with --store.",
                    path.display()
                ),
                path,
            }
            .into());
        }
        validate_inventory_file(&path, MAX_INVENTORY_SIZE)?;

        let content = fs::read_to_string(&path).map_err(|e| SyncError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Self::from_json(path, &content)
    }

    /// Parses inventory content that will be written back to `path`
    pub fn from_json(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let document: InventoryDocument =
            serde_json::from_str(content).map_err(|e| parse_error(&path, e))?;

        let mut inventory = InMemoryComponentRepository::new();
        for device in document.devices {
            inventory.insert_device(device);
        }

        let mut unmapped_templates = Vec::new();
        for record in document.templates {
            match parse_record::<ComponentTemplate>(&path, record)? {
                Ok(template) => inventory.insert_template(template),
                Err(record) => unmapped_templates.push(record),
            }
        }

        let mut unmapped_components = Vec::new();
        for record in document.components {
            match parse_record::<LiveComponent>(&path, record)? {
                Ok(component) => inventory.insert_live(component),
                Err(record) => {
                    if let Some(id) = record.get("id").and_then(Value::as_u64) {
                        inventory.reserve_live_id(id);
                    }
                    unmapped_components.push(record);
                }
            }
        }

        debug!(
            path = %path.display(),
            devices = inventory.devices().count(),
            templates = inventory.templates().count(),
            components = inventory.live_components().count(),
            "Loaded inventory"
        );

        Ok(Self {
            path,
            inventory,
            unmapped_templates,
            unmapped_components,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inventory(&self) -> &InMemoryComponentRepository {
        &self.inventory
    }

    /// Whether mutations are waiting for `flush`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn to_json(&self) -> Result<String> {
        let snapshot = InventorySnapshot {
            devices: self.inventory.devices().collect(),
            templates: self
                .inventory
                .templates()
                .map(serde_json::to_value)
                .chain(self.unmapped_templates.iter().cloned().map(Ok))
                .collect::<std::result::Result<_, _>>()?,
            components: self
                .inventory
                .live_components()
                .map(serde_json::to_value)
                .chain(self.unmapped_components.iter().cloned().map(Ok))
                .collect::<std::result::Result<_, _>>()?,
        };
        let mut json = serde_json::to_string_pretty(&snapshot)?;
        json.push('\n');
        Ok(json)
    }

    fn write_atomically(&self, content: &str) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write")?;
        }
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_error = |details: String| SyncError::FileWriteError {
            path: self.path.clone(),
            details,
        };

        let mut file = NamedTempFile::new_in(directory).map_err(|e| write_error(e.to_string()))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        file.persist(&self.path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }

    fn mark_dirty(&mut self, count: usize) -> usize {
        if count > 0 {
            self.dirty = true;
        }
        count
    }
}

/// Splits a raw record into a typed record, or hands it back untouched
/// when its kind is not one of the known component kinds
fn parse_record<T: DeserializeOwned>(
    path: &Path,
    mut record: Value,
) -> Result<std::result::Result<T, Value>> {
    let kind_name = record
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| SyncError::InventoryParseError {
            path: path.to_path_buf(),
            details: format!("record without a 'kind': {}", record),
        })?
        .to_string();

    let Ok(kind) = ComponentKind::from_str(&kind_name) else {
        warn!(kind = kind_name.as_str(), "Skipping record of unknown component kind");
        return Ok(Err(record));
    };
    record["kind"] = serde_json::to_value(kind)?;
    let parsed = serde_json::from_value(record).map_err(|e| parse_error(path, e))?;
    Ok(Ok(parsed))
}

fn parse_error(path: &Path, error: serde_json::Error) -> anyhow::Error {
    SyncError::InventoryParseError {
        path: path.to_path_buf(),
        details: error.to_string(),
    }
    .into()
}

impl ComponentRepository for JsonInventoryStore {
    fn get_device(&self, device_id: u64) -> Result<Device> {
        self.inventory.get_device(device_id)
    }

    fn list_templates(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
    ) -> Result<Vec<ComponentTemplate>> {
        self.inventory.list_templates(kind, device_type_id)
    }

    fn list_live(&self, kind: ComponentKind, device_id: u64) -> Result<Vec<LiveComponent>> {
        self.inventory.list_live(kind, device_id)
    }

    fn get_template(
        &self,
        kind: ComponentKind,
        device_type_id: u64,
        id: u64,
    ) -> Result<Option<ComponentTemplate>> {
        self.inventory.get_template(kind, device_type_id, id)
    }

    fn get_live(
        &self,
        kind: ComponentKind,
        device_id: u64,
        id: u64,
    ) -> Result<Option<LiveComponent>> {
        self.inventory.get_live(kind, device_id, id)
    }

    fn create(&mut self, component: NewLiveComponent) -> Result<LiveComponent> {
        let created = self.inventory.create(component)?;
        self.dirty = true;
        Ok(created)
    }

    fn bulk_create(&mut self, components: Vec<NewLiveComponent>) -> Result<usize> {
        let count = self.inventory.bulk_create(components)?;
        Ok(self.mark_dirty(count))
    }

    fn update(&mut self, kind: ComponentKind, id: u64, patch: &ComponentPatch) -> Result<usize> {
        let count = self.inventory.update(kind, id, patch)?;
        Ok(self.mark_dirty(count))
    }

    fn bulk_delete(&mut self, kind: ComponentKind, ids: &[u64]) -> Result<usize> {
        let count = self.inventory.bulk_delete(kind, ids)?;
        Ok(self.mark_dirty(count))
    }

    fn resolve_sibling_name(
        &self,
        kind: ComponentKind,
        sibling_template_id: u64,
    ) -> Result<Option<String>> {
        self.inventory.resolve_sibling_name(kind, sibling_template_id)
    }

    fn resolve_live_name(&self, kind: ComponentKind, live_id: u64) -> Result<Option<String>> {
        self.inventory.resolve_live_name(kind, live_id)
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let content = self.to_json()?;
        self.write_atomically(&content)?;
        self.dirty = false;
        debug!(path = %self.path.display(), "Inventory written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::domain::ComponentData;
    use tempfile::TempDir;

    const INVENTORY: &str = r#"{
        "devices": [{"id": 1, "name": "edge-1", "device_type_id": 7}],
        "templates": [
            {"id": 1, "device_type_id": 7, "kind": "interface", "name": "Gi0/1",
             "type": {"code": "1000base-t", "display": "1000BASE-T"}},
            {"id": 2, "device_type_id": 7, "kind": "power-outlet", "name": "Outlet 1", "sibling_id": 9},
            {"id": 3, "device_type_id": 7, "kind": "fan-tray", "name": "Fan 1"}
        ],
        "components": [
            {"id": 5, "device_id": 1, "kind": "Interfaces", "name": "gi0/1",
             "type": {"code": "1000base-t"}, "attributes": {"mgmt_only": false}}
        ]
    }"#;

    fn write_inventory(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("inventory.json");
        fs::write(&path, INVENTORY).unwrap();
        path
    }

    #[test]
    fn test_open_parses_known_kinds() {
        let dir = TempDir::new().unwrap();
        let store = JsonInventoryStore::open(write_inventory(&dir)).unwrap();

        assert_eq!(store.get_device(1).unwrap().name, "edge-1");
        assert_eq!(store.list_templates(ComponentKind::Interface, 7).unwrap().len(), 1);
        assert_eq!(store.list_templates(ComponentKind::PowerOutlet, 7).unwrap()[0].sibling_id, Some(9));
        let live = store.list_live(ComponentKind::Interface, 1).unwrap();
        assert_eq!(live[0].data.type_code(), Some("1000base-t"));
        assert_eq!(store.unmapped_templates.len(), 1);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = JsonInventoryStore::open(dir.path().join("absent.json")).unwrap_err();
        assert!(error.to_string().contains("Inventory file not found"));
    }

    #[test]
    fn test_invalid_json() {
        let error = JsonInventoryStore::from_json("inventory.json", "{not json").unwrap_err();
        assert!(error.to_string().contains("Failed to parse inventory file"));
    }

    #[test]
    fn test_record_without_kind() {
        let error = JsonInventoryStore::from_json(
            "inventory.json",
            r#"{"templates": [{"id": 1, "device_type_id": 1, "name": "x"}]}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("without a 'kind'"));
    }

    #[test]
    fn test_flush_writes_mutations_and_keeps_unknown_records() {
        let dir = TempDir::new().unwrap();
        let path = write_inventory(&dir);
        let mut store = JsonInventoryStore::open(&path).unwrap();

        let created = store
            .create(NewLiveComponent {
                device_id: 1,
                kind: ComponentKind::Interface,
                data: ComponentData::new("Gi0/2"),
                sibling_id: None,
            })
            .unwrap();
        assert_eq!(created.id, 6);
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reopened = JsonInventoryStore::open(&path).unwrap();
        assert_eq!(reopened.list_live(ComponentKind::Interface, 1).unwrap().len(), 2);
        assert_eq!(reopened.unmapped_templates.len(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("\"kind\": \"interface\""));
    }

    #[test]
    fn test_new_ids_skip_unknown_kind_records() {
        let content = r#"{
            "devices": [{"id": 1, "name": "edge-1", "device_type_id": 7}],
            "templates": [],
            "components": [
                {"id": 5, "device_id": 1, "kind": "interface", "name": "Gi0/1"},
                {"id": 40, "device_id": 1, "kind": "fan-tray", "name": "Fan 1"}
            ]
        }"#;
        let mut store = JsonInventoryStore::from_json("inventory.json", content).unwrap();

        let created = store
            .create(NewLiveComponent {
                device_id: 1,
                kind: ComponentKind::Interface,
                data: ComponentData::new("Gi0/2"),
                sibling_id: None,
            })
            .unwrap();
        assert_eq!(created.id, 41);
    }

    #[test]
    fn test_flush_without_changes_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = write_inventory(&dir);
        let mut store = JsonInventoryStore::open(&path).unwrap();
        assert_eq!(store.bulk_delete(ComponentKind::Interface, &[99]).unwrap(), 0);
        store.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), INVENTORY);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_inventory_rejected() {
        let dir = TempDir::new().unwrap();
        let target = write_inventory(&dir);
        let link = dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        let error = JsonInventoryStore::open(&link).unwrap_err();
        assert!(error.to_string().contains("Security violation"));
    }
}
