pub mod comparison_row;
pub mod component;
pub mod component_kind;
pub mod field;
pub mod report_metadata;
pub mod selection;
pub mod unified_component;

pub use comparison_row::{ComparisonRow, RowStatus};
pub use component::{
    ComponentData, ComponentPatch, ComponentTemplate, ComponentType, Device, LiveComponent,
    NewLiveComponent,
};
pub use component_kind::ComponentKind;
pub use field::{FieldDescriptor, FieldValue};
pub use report_metadata::ReportMetadata;
pub use selection::Selection;
pub use unified_component::UnifiedComponent;
