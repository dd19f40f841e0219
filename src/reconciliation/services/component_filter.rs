use crate::reconciliation::domain::{ComponentData, ComponentKind, ComponentTemplate, LiveComponent};
use crate::reconciliation::policies::SyncOptions;

/// Interface type codes that have no physical counterpart
pub const VIRTUAL_INTERFACE_TYPES: &[&str] = &["virtual", "bridge", "lag"];

/// ComponentFilter - Narrows the comparison scope before diffing
///
/// With virtual interface exclusion on, virtual, bridge and LAG interfaces
/// are dropped from both sides, so they are neither offered for removal
/// nor expected from the device type.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFilter {
    exclude_virtual_interfaces: bool,
}

impl ComponentFilter {
    pub fn new(exclude_virtual_interfaces: bool) -> Self {
        Self {
            exclude_virtual_interfaces,
        }
    }

    pub fn from_options(options: &SyncOptions) -> Self {
        Self::new(options.exclude_virtual_interfaces)
    }

    pub fn is_excluded(&self, kind: ComponentKind, data: &ComponentData) -> bool {
        self.exclude_virtual_interfaces
            && kind == ComponentKind::Interface
            && data
                .type_code()
                .is_some_and(|code| VIRTUAL_INTERFACE_TYPES.contains(&code))
    }

    pub fn filter_templates(&self, templates: Vec<ComponentTemplate>) -> Vec<ComponentTemplate> {
        templates
            .into_iter()
            .filter(|t| !self.is_excluded(t.kind, &t.data))
            .collect()
    }

    pub fn filter_live(&self, components: Vec<LiveComponent>) -> Vec<LiveComponent> {
        components
            .into_iter()
            .filter(|c| !self.is_excluded(c.kind, &c.data))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(id: u64, name: &str, type_code: &str) -> LiveComponent {
        LiveComponent {
            id,
            device_id: 1,
            kind: ComponentKind::Interface,
            data: ComponentData::new(name).with_type(type_code, ""),
            sibling_id: None,
        }
    }

    #[test]
    fn test_virtual_interfaces_excluded() {
        let filter = ComponentFilter::new(true);
        let kept = filter.filter_live(vec![
            interface(1, "eth0", "1000base-t"),
            interface(2, "bond0", "lag"),
            interface(3, "br0", "bridge"),
            interface(4, "lo", "virtual"),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].data.name, "eth0");
    }

    #[test]
    fn test_exclusion_disabled_keeps_everything() {
        let filter = ComponentFilter::new(false);
        let kept = filter.filter_live(vec![
            interface(1, "eth0", "1000base-t"),
            interface(2, "bond0", "lag"),
        ]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_other_kinds_untouched() {
        let filter = ComponentFilter::new(true);
        let template = ComponentTemplate {
            id: 1,
            device_type_id: 1,
            kind: ComponentKind::ConsolePort,
            data: ComponentData::new("con0").with_type("virtual", ""),
            sibling_id: None,
        };
        assert_eq!(filter.filter_templates(vec![template]).len(), 1);
    }

    #[test]
    fn test_untyped_interface_kept() {
        let filter = ComponentFilter::new(true);
        let mut component = interface(1, "eth0", "x");
        component.data.component_type = None;
        assert!(!filter.is_excluded(component.kind, &component.data));
    }
}
