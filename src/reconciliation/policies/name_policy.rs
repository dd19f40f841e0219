use serde::Deserialize;

/// Name canonicalization rules used to match templates to live components
///
/// Operators are inconsistent about casing and spacing ("GigabitEthernet 1"
/// vs "gigabitethernet1"), so both are ignored by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamePolicy {
    pub case_insensitive: bool,
    pub space_insensitive: bool,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            space_insensitive: true,
        }
    }
}

impl NamePolicy {
    /// Exact matching, no canonicalization
    pub fn strict() -> Self {
        Self {
            case_insensitive: false,
            space_insensitive: false,
        }
    }

    pub fn normalize(&self, name: &str) -> String {
        let mut normalized = if self.case_insensitive {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        if self.space_insensitive {
            normalized.retain(|c| c != ' ');
        }
        normalized
    }
}
