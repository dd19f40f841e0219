use crate::reconciliation::domain::field::FieldDescriptor;
use crate::shared::error::SyncError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INTERFACE_FIELDS: &[FieldDescriptor] =
    &[FieldDescriptor::attribute("mgmt_only", "Management only")];

const FRONT_PORT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::attribute("color", "Color"),
    FieldDescriptor::attribute("rear_port_position", "Position"),
    FieldDescriptor::dependency("rear_port", "Rear port"),
];

const REAR_PORT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::attribute("color", "Color"),
    FieldDescriptor::attribute("positions", "Positions"),
];

const POWER_PORT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::attribute("maximum_draw", "Maximum draw"),
    FieldDescriptor::attribute("allocated_draw", "Allocated draw").hidden(),
];

const POWER_OUTLET_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::dependency("power_port", "Power port"),
    FieldDescriptor::attribute("feed_leg", "Feed leg"),
];

/// The eight component kinds that can be reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Interface,
    FrontPort,
    RearPort,
    ConsolePort,
    ConsoleServerPort,
    PowerPort,
    PowerOutlet,
    DeviceBay,
}

impl ComponentKind {
    /// All kinds, ordered so that dependencies come before their dependents
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Interface,
        ComponentKind::ConsolePort,
        ComponentKind::ConsoleServerPort,
        ComponentKind::PowerPort,
        ComponentKind::PowerOutlet,
        ComponentKind::RearPort,
        ComponentKind::FrontPort,
        ComponentKind::DeviceBay,
    ];

    pub fn verbose_name(self) -> &'static str {
        match self {
            ComponentKind::Interface => "interface",
            ComponentKind::FrontPort => "front port",
            ComponentKind::RearPort => "rear port",
            ComponentKind::ConsolePort => "console port",
            ComponentKind::ConsoleServerPort => "console server port",
            ComponentKind::PowerPort => "power port",
            ComponentKind::PowerOutlet => "power outlet",
            ComponentKind::DeviceBay => "device bay",
        }
    }

    pub fn verbose_name_plural(self) -> &'static str {
        match self {
            ComponentKind::Interface => "interfaces",
            ComponentKind::FrontPort => "front ports",
            ComponentKind::RearPort => "rear ports",
            ComponentKind::ConsolePort => "console ports",
            ComponentKind::ConsoleServerPort => "console server ports",
            ComponentKind::PowerPort => "power ports",
            ComponentKind::PowerOutlet => "power outlets",
            ComponentKind::DeviceBay => "device bays",
        }
    }

    /// Kebab-case identifier used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            ComponentKind::Interface => "interface",
            ComponentKind::FrontPort => "front-port",
            ComponentKind::RearPort => "rear-port",
            ComponentKind::ConsolePort => "console-port",
            ComponentKind::ConsoleServerPort => "console-server-port",
            ComponentKind::PowerPort => "power-port",
            ComponentKind::PowerOutlet => "power-outlet",
            ComponentKind::DeviceBay => "device-bay",
        }
    }

    /// Whether components of this kind carry a type code
    pub fn is_typed(self) -> bool {
        !matches!(self, ComponentKind::DeviceBay)
    }

    /// The sibling kind that must exist on the device before this kind can be synced
    pub fn dependency(self) -> Option<ComponentKind> {
        match self {
            ComponentKind::PowerOutlet => Some(ComponentKind::PowerPort),
            ComponentKind::FrontPort => Some(ComponentKind::RearPort),
            _ => None,
        }
    }

    pub fn field_descriptors(self) -> &'static [FieldDescriptor] {
        match self {
            ComponentKind::Interface => INTERFACE_FIELDS,
            ComponentKind::FrontPort => FRONT_PORT_FIELDS,
            ComponentKind::RearPort => REAR_PORT_FIELDS,
            ComponentKind::PowerPort => POWER_PORT_FIELDS,
            ComponentKind::PowerOutlet => POWER_OUTLET_FIELDS,
            ComponentKind::ConsolePort
            | ComponentKind::ConsoleServerPort
            | ComponentKind::DeviceBay => &[],
        }
    }

    /// Descriptor of the field holding the sibling name, if the kind has one
    pub fn dependency_field(self) -> Option<&'static FieldDescriptor> {
        self.field_descriptors().iter().find(|d| d.dependency)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verbose_name())
    }
}

impl FromStr for ComponentKind {
    type Err = SyncError;

    /// Accepts slugs, snake_case, verbose names and plurals
    /// ("power-outlet", "power_outlets", "Power Outlets")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let singular = compact.strip_suffix('s').unwrap_or(&compact);

        match singular {
            "interface" => Ok(ComponentKind::Interface),
            "frontport" => Ok(ComponentKind::FrontPort),
            "rearport" => Ok(ComponentKind::RearPort),
            "consoleport" => Ok(ComponentKind::ConsolePort),
            "consoleserverport" => Ok(ComponentKind::ConsoleServerPort),
            "powerport" => Ok(ComponentKind::PowerPort),
            "poweroutlet" => Ok(ComponentKind::PowerOutlet),
            "devicebay" => Ok(ComponentKind::DeviceBay),
            _ => Err(SyncError::UnknownComponentKind {
                kind: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!(
            ComponentKind::from_str("power-outlet").unwrap(),
            ComponentKind::PowerOutlet
        );
        assert_eq!(
            ComponentKind::from_str("power_outlets").unwrap(),
            ComponentKind::PowerOutlet
        );
        assert_eq!(
            ComponentKind::from_str("Console Server Ports").unwrap(),
            ComponentKind::ConsoleServerPort
        );
        assert_eq!(
            ComponentKind::from_str("INTERFACES").unwrap(),
            ComponentKind::Interface
        );
    }

    #[test]
    fn test_from_str_unknown_kind() {
        let result = ComponentKind::from_str("fan-tray");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("fan-tray"));
    }

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_str(kind.slug()).unwrap(), kind);
        }
    }

    #[test]
    fn test_dependencies() {
        assert_eq!(
            ComponentKind::PowerOutlet.dependency(),
            Some(ComponentKind::PowerPort)
        );
        assert_eq!(
            ComponentKind::FrontPort.dependency(),
            Some(ComponentKind::RearPort)
        );
        assert_eq!(ComponentKind::Interface.dependency(), None);
    }

    #[test]
    fn test_dependency_kinds_precede_dependents_in_all() {
        let position = |kind| ComponentKind::ALL.iter().position(|k| *k == kind).unwrap();
        for kind in ComponentKind::ALL {
            if let Some(dependency) = kind.dependency() {
                assert!(position(dependency) < position(kind));
            }
        }
    }

    #[test]
    fn test_dependency_field_present_only_for_dependent_kinds() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.dependency_field().is_some(), kind.dependency().is_some());
        }
    }

    #[test]
    fn test_device_bay_is_untyped() {
        assert!(!ComponentKind::DeviceBay.is_typed());
        assert!(ComponentKind::RearPort.is_typed());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ComponentKind::ConsoleServerPort).unwrap();
        assert_eq!(json, "\"console_server_port\"");
    }
}
