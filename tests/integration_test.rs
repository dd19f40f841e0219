/// Integration tests for the application layer
mod test_utilities;

use device_component_sync::prelude::*;
use test_utilities::mocks::*;

const DEVICE_ID: u64 = 1;
const DEVICE_TYPE_ID: u64 = 10;

fn device() -> Device {
    Device {
        id: DEVICE_ID,
        name: "edge-sw-01".to_string(),
        device_type_id: DEVICE_TYPE_ID,
    }
}

fn template(id: u64, kind: ComponentKind, data: ComponentData) -> ComponentTemplate {
    ComponentTemplate {
        id,
        device_type_id: DEVICE_TYPE_ID,
        kind,
        data,
        sibling_id: None,
    }
}

fn live(id: u64, kind: ComponentKind, data: ComponentData) -> LiveComponent {
    LiveComponent {
        id,
        device_id: DEVICE_ID,
        kind,
        data,
        sibling_id: None,
    }
}

/// Templates Gi0/1 and Gi0/2; the device only has "gi0/1"
fn switch() -> InMemoryComponentRepository {
    InMemoryComponentRepository::new()
        .with_device(device())
        .with_template(template(100, ComponentKind::Interface, ComponentData::new("Gi0/1")))
        .with_template(template(101, ComponentKind::Interface, ComponentData::new("Gi0/2")))
        .with_live(live(1000, ComponentKind::Interface, ComponentData::new("gi0/1")))
}

/// Outlet template fed by a power port template the device does not have
fn pdu_without_power_port() -> InMemoryComponentRepository {
    InMemoryComponentRepository::new()
        .with_device(device())
        .with_template(template(200, ComponentKind::PowerPort, ComponentData::new("PSU1")))
        .with_template(ComponentTemplate {
            sibling_id: Some(200),
            ..template(300, ComponentKind::PowerOutlet, ComponentData::new("Outlet 1"))
        })
}

#[test]
fn test_compare_matches_case_insensitively_and_lists_addable() {
    let reporter = MockProgressReporter::new();
    let use_case = CompareComponentsUseCase::new(switch(), &reporter, SyncOptions::default());

    let response = use_case
        .execute(ComparisonRequest::new(DEVICE_ID, ComponentKind::Interface))
        .unwrap();

    assert_eq!(response.rows.len(), 2);
    let first = &response.rows[0];
    assert_eq!(first.template().unwrap().name(), "Gi0/1");
    assert_eq!(first.live().unwrap().name(), "gi0/1");
    assert!(first.is_matched());

    let second = &response.rows[1];
    assert_eq!(second.template().unwrap().name(), "Gi0/2");
    assert!(second.is_addable());

    assert_eq!(response.addable_count(), 1);
    assert_eq!(response.removable_count(), 0);
    assert!(!reporter.get_messages().is_empty());
}

#[test]
fn test_apply_creates_missing_interface() {
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(switch(), &reporter, SyncOptions::default());

    let outcome = use_case
        .execute(ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::Interface,
            Selection::new([101], [], []),
        ))
        .unwrap();

    assert_eq!(
        outcome,
        ApplyOutcome::Applied(ApplySummary {
            created: 1,
            ..Default::default()
        })
    );
    let names: Vec<String> = use_case
        .repository()
        .list_live(ComponentKind::Interface, DEVICE_ID)
        .unwrap()
        .into_iter()
        .map(|c| c.data.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Gi0/2".to_string()));
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m == "Completed: ✅ Created 1 interfaces"));
}

#[test]
fn test_description_differences_ignored_when_sync_disabled() {
    let repository = InMemoryComponentRepository::new()
        .with_device(device())
        .with_template(template(
            100,
            ComponentKind::Interface,
            ComponentData::new("Gi0/1").with_description("Uplink to core"),
        ))
        .with_template(template(
            101,
            ComponentKind::Interface,
            ComponentData::new("Gi0/2").with_description("Access"),
        ))
        .with_live(live(
            1000,
            ComponentKind::Interface,
            ComponentData::new("Gi0/1").with_description("old uplink"),
        ))
        .with_live(live(1001, ComponentKind::Interface, ComponentData::new("Gi0/2")));

    let reporter = MockProgressReporter::new();
    let options = SyncOptions::default().with_sync_descriptions(false);
    let response = CompareComponentsUseCase::new(repository.clone(), &reporter, options)
        .execute(ComparisonRequest::new(DEVICE_ID, ComponentKind::Interface))
        .unwrap();
    assert!(response.rows.iter().all(|r| r.status() == RowStatus::InSync));
    assert_eq!(response.out_of_sync_count(), 0);

    let response = CompareComponentsUseCase::new(repository, &reporter, SyncOptions::default())
        .execute(ComparisonRequest::new(DEVICE_ID, ComponentKind::Interface))
        .unwrap();
    assert_eq!(response.out_of_sync_count(), 2);
}

#[test]
fn test_unmet_dependency_blocks_every_mutation() {
    let reporter = MockProgressReporter::new();
    let repository = MockComponentRepository::new(pdu_without_power_port());
    let mut use_case = ApplyComponentsUseCase::new(repository, &reporter, SyncOptions::default());

    let outcome = use_case
        .execute(ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::PowerOutlet,
            Selection::new([300], [], []),
        ))
        .unwrap();

    match &outcome {
        ApplyOutcome::DependencyUnmet(unmet) => {
            assert!(unmet.to_string().contains("PSU1"));
        }
        other => panic!("expected dependency failure, got {:?}", other),
    }
    assert!(!outcome.is_applied());

    let repository = use_case.into_repository();
    assert!(repository.calls.is_empty());
    assert_eq!(reporter.errors().len(), 1);
}

#[test]
fn test_removal_ignores_unmet_dependencies() {
    let repository = pdu_without_power_port().with_live(LiveComponent {
        sibling_id: None,
        ..live(3000, ComponentKind::PowerOutlet, ComponentData::new("Stray outlet"))
    });
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(
        MockComponentRepository::new(repository),
        &reporter,
        SyncOptions::default(),
    );

    let outcome = use_case
        .execute(ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::PowerOutlet,
            Selection::new([], [3000], []),
        ))
        .unwrap();

    assert_eq!(outcome.summary().map(|s| s.deleted), Some(1));
    assert_eq!(
        use_case.repository().calls,
        vec![RepositoryCall::BulkDelete(vec![3000]), RepositoryCall::Flush]
    );
}

#[test]
fn test_sync_twice_changes_nothing_the_second_time() {
    let repository = InMemoryComponentRepository::new()
        .with_device(device())
        .with_template(template(
            100,
            ComponentKind::Interface,
            ComponentData::new("Gi0/1").with_label("uplink"),
        ))
        .with_live(live(1000, ComponentKind::Interface, ComponentData::new("gi0/1")));
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(
        MockComponentRepository::new(repository),
        &reporter,
        SyncOptions::default(),
    );
    let request = || {
        ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::Interface,
            Selection::new([], [], [1000]),
        )
    };

    let first = use_case.execute(request()).unwrap();
    let first = *first.summary().unwrap();
    assert_eq!(first.fixed, 1);
    assert_eq!(first.updated, 1);

    let mutations = use_case.repository().mutation_count();
    let second = use_case.execute(request()).unwrap();
    assert!(second.summary().unwrap().is_empty());
    assert_eq!(use_case.repository().mutation_count(), mutations);

    let synced = use_case
        .repository()
        .get_live(ComponentKind::Interface, DEVICE_ID, 1000)
        .unwrap()
        .unwrap();
    assert_eq!(synced.data.name, "Gi0/1");
    assert_eq!(synced.data.label, "uplink");
}

#[test]
fn test_repository_failure_propagates_without_flush() {
    let reporter = MockProgressReporter::new();
    let repository = MockComponentRepository::new(switch()).with_failing_create();
    let mut use_case = ApplyComponentsUseCase::new(repository, &reporter, SyncOptions::default());

    let result = use_case.execute(ApplyRequest::new(
        DEVICE_ID,
        ComponentKind::Interface,
        Selection::new([101], [], []),
    ));

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock repository failure"));
    assert!(!use_case
        .repository()
        .calls
        .contains(&RepositoryCall::Flush));
}

#[test]
fn test_flush_failure_is_reported_as_error() {
    let reporter = MockProgressReporter::new();
    let repository = MockComponentRepository::new(switch()).with_failing_flush();
    let mut use_case = ApplyComponentsUseCase::new(repository, &reporter, SyncOptions::default());

    let result = use_case.execute(ApplyRequest::new(
        DEVICE_ID,
        ComponentKind::Interface,
        Selection::new([101], [], []),
    ));

    assert!(result.unwrap_err().to_string().contains("Mock flush failure"));
}

#[test]
fn test_empty_selection_is_rejected_without_loading() {
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(
        MockComponentRepository::new(InMemoryComponentRepository::new()),
        &reporter,
        SyncOptions::default(),
    );

    let outcome = use_case
        .execute(ApplyRequest::new(
            99,
            ComponentKind::DeviceBay,
            Selection::default(),
        ))
        .unwrap();

    assert_eq!(outcome, ApplyOutcome::NothingSelected);
    assert_eq!(
        outcome.message(ComponentKind::DeviceBay),
        "No device bays were selected"
    );
}

#[test]
fn test_foreign_ids_are_ignored() {
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(
        MockComponentRepository::new(switch()),
        &reporter,
        SyncOptions::default(),
    );

    let outcome = use_case
        .execute(ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::Interface,
            Selection::new([9999], [8888], [7777]),
        ))
        .unwrap();

    assert!(outcome.summary().unwrap().is_empty());
    assert_eq!(use_case.repository().mutation_count(), 0);
}

#[test]
fn test_overview_summarizes_every_kind() {
    let reporter = MockProgressReporter::new();
    let overview = DeviceOverviewUseCase::new(switch(), &reporter, SyncOptions::default())
        .execute(DEVICE_ID)
        .unwrap();

    assert!(!overview.is_in_sync());
    let interfaces = overview.kind(ComponentKind::Interface).unwrap();
    assert_eq!(interfaces.templates, 2);
    assert_eq!(interfaces.components, 1);
    assert_eq!(interfaces.addable, 1);
    assert!(overview.kind(ComponentKind::DeviceBay).unwrap().is_in_sync());
}

#[test]
fn test_unknown_device_is_an_error() {
    let reporter = MockProgressReporter::new();
    let use_case = CompareComponentsUseCase::new(switch(), &reporter, SyncOptions::default());

    let err = use_case
        .execute(ComparisonRequest::new(42, ComponentKind::Interface))
        .unwrap_err();

    assert!(err.to_string().contains("Device 42 not found"));
}

#[test]
fn test_sync_keeps_attributes_missing_from_template() {
    let repository = InMemoryComponentRepository::new()
        .with_device(device())
        .with_template(template(
            100,
            ComponentKind::Interface,
            ComponentData::new("Gi0/1").with_attribute("mgmt_only", true),
        ))
        .with_live(live(
            1000,
            ComponentKind::Interface,
            ComponentData::new("Gi0/1")
                .with_attribute("mgmt_only", false)
                .with_attribute("speed", 1_000_000_i64),
        ));
    let reporter = MockProgressReporter::new();
    let mut use_case = ApplyComponentsUseCase::new(
        MockComponentRepository::new(repository),
        &reporter,
        SyncOptions::default(),
    );

    let outcome = use_case
        .execute(ApplyRequest::new(
            DEVICE_ID,
            ComponentKind::Interface,
            Selection::new([], [], [1000]),
        ))
        .unwrap();
    assert_eq!(outcome.summary().map(|s| s.updated), Some(1));

    let synced = use_case
        .repository()
        .get_live(ComponentKind::Interface, DEVICE_ID, 1000)
        .unwrap()
        .unwrap();
    assert_eq!(synced.data.attributes["mgmt_only"].to_string(), "true");
    assert_eq!(synced.data.attributes["speed"].to_string(), "1000000");
}
