//! device-component-sync - reconcile device components with their templates
//!
//! This library compares the components instantiated on a device (interfaces,
//! console/power/front/rear ports, power outlets, device bays) against the
//! templates of its device type, and applies user-selected additions,
//! removals and re-syncs. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`reconciliation`): Component model, name and equality
//!   policies, the diff engine and the apply planner
//! - **Application Layer** (`application`): Use cases, DTOs and report read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): JSON inventory store, formatters, console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use device_component_sync::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let repository = InMemoryComponentRepository::new()
//!     .with_device(Device {
//!         id: 1,
//!         name: "edge-1".to_string(),
//!         device_type_id: 10,
//!     })
//!     .with_template(ComponentTemplate {
//!         id: 100,
//!         device_type_id: 10,
//!         kind: ComponentKind::Interface,
//!         data: ComponentData::new("Gi0/1"),
//!         sibling_id: None,
//!     });
//!
//! let reporter = StderrProgressReporter::quiet();
//! let mut use_case = ApplyComponentsUseCase::new(repository, &reporter, SyncOptions::default());
//! let outcome = use_case.execute(ApplyRequest::new(
//!     1,
//!     ComponentKind::Interface,
//!     Selection::new([100], [], []),
//! ))?;
//!
//! assert_eq!(outcome.message(ComponentKind::Interface), "Created 1 interfaces");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod reconciliation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonInventoryStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryComponentRepository;
    pub use crate::application::dto::{
        ApplyOutcome, ApplyRequest, ApplySummary, ComparisonRequest, ComparisonResponse,
        DeviceOverview, OutputFormat,
    };
    pub use crate::application::use_cases::{
        ApplyComponentsUseCase, CompareComponentsUseCase, DeviceOverviewUseCase,
    };
    pub use crate::ports::outbound::{
        ComparisonFormatter, ComponentRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::reconciliation::domain::{
        ComparisonRow, ComponentData, ComponentKind, ComponentTemplate, Device, LiveComponent,
        RowStatus, Selection, UnifiedComponent,
    };
    pub use crate::reconciliation::policies::{EqualityPolicy, NamePolicy, SyncOptions};
    pub use crate::reconciliation::services::{ApplyPlanner, DiffEngine};
    pub use crate::shared::Result;
}
