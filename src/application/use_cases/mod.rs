/// Use cases orchestrating the reconciliation core through ports
mod apply_components;
mod compare_components;
mod device_overview;

pub use apply_components::ApplyComponentsUseCase;
pub use compare_components::CompareComponentsUseCase;
pub use device_overview::DeviceOverviewUseCase;
