mod apply_planner;
mod component_filter;
mod dependency_validator;
mod diff_engine;
mod report_generator;

pub use apply_planner::{ApplyPlan, ApplyPlanner, PlannedUpdate, ScopeSnapshot};
pub use component_filter::{ComponentFilter, VIRTUAL_INTERFACE_TYPES};
pub use dependency_validator::{DependencyValidator, ResolvedSiblings, SiblingLink, UnmetDependencies};
pub use diff_engine::DiffEngine;
pub use report_generator::ReportGenerator;
