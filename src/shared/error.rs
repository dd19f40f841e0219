use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell a rejected apply apart from
/// a broken invocation or an inventory failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Comparison or apply completed
    Success = 0,
    /// Apply was rejected (unmet dependency or nothing selected); nothing was changed
    ApplyRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory I/O, unknown device, repository failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplyRejected => write!(f, "Apply Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for component synchronization.
///
/// Uses thiserror to derive Display and Error traits, keeping the
/// user-facing hints next to the failure they explain.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the inventory is valid JSON with 'devices', 'templates' and 'components' arrays")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Device {device_id} not found\n\n💡 Hint: Check the --device value against the inventory")]
    DeviceNotFound { device_id: u64 },

    #[error("Unknown component kind: {kind}\n\n💡 Hint: Use one of interface, front-port, rear-port, console-port, console-server-port, power-port, power-outlet, device-bay")]
    UnknownComponentKind { kind: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for repository input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplyRejected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::ApplyRejected), "Apply Rejected (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_inventory_not_found_display() {
        let error = SyncError::InventoryNotFound {
            path: PathBuf::from("/data/inventory.json"),
            suggestion: "Pass the inventory with --store".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Inventory file not found"));
        assert!(display.contains("/data/inventory.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("--store"));
    }

    #[test]
    fn test_inventory_parse_error_display() {
        let error = SyncError::InventoryParseError {
            path: PathBuf::from("inventory.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse inventory file"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_device_not_found_display() {
        let error = SyncError::DeviceNotFound { device_id: 42 };
        assert!(format!("{}", error).contains("Device 42 not found"));
    }

    #[test]
    fn test_unknown_component_kind_display() {
        let error = SyncError::UnknownComponentKind {
            kind: "fan-tray".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("fan-tray"));
        assert!(display.contains("power-outlet"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SyncError::SecurityError {
            path: PathBuf::from("/tmp/link.json"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
