use consent_manager_application::ports::{AnalyticsClient, AnalyticsHost, PageReloader};
use consent_manager_application::use_cases::{ConditionallyLoadAnalyticsUseCase, LoadRequest};
use consent_manager_domain::{
    CatalogDestination, Destination, DestinationPreferences, DomainError, Integrations,
    LoadOptions, LoadOutcome,
};
use consent_manager_infrastructure::analytics::{AnalyticsSlot, RecordingAnalyticsClient};
use consent_manager_infrastructure::events::LoadExternalDestinationsEmitter;
use consent_manager_infrastructure::navigation::RecordingPageReloader;
use std::sync::{Arc, Mutex};

#[test]
fn test_recording_client_initializes_on_first_load() {
    let client = RecordingAnalyticsClient::new();
    assert!(!client.is_initialized());

    client.load("wk", None);
    client.load("wk", Some(&LoadOptions::new(Integrations::consent_filter())));

    assert!(client.is_initialized());
    let loads = client.loads();
    assert_eq!(loads.len(), 2);
    assert!(loads[0].options.is_none());
    assert_eq!(
        loads[1].options.as_ref().unwrap().integrations.get("Segment.io"),
        Some(true)
    );
}

#[test]
fn test_load_call_serializes_without_empty_options() {
    let client = RecordingAnalyticsClient::new();
    client.load("wk", None);

    let json = serde_json::to_value(&client.loads()).unwrap();

    assert_eq!(json, serde_json::json!([{"write_key": "wk"}]));
}

#[test]
fn test_already_initialized_client() {
    assert!(RecordingAnalyticsClient::already_initialized().is_initialized());
}

#[test]
fn test_slot_install_and_uninstall() {
    let slot = AnalyticsSlot::empty();
    assert!(slot.client().is_none());
    assert!(!slot.is_installed());

    slot.install(Arc::new(RecordingAnalyticsClient::new()));
    assert!(slot.is_installed());
    assert!(slot.client().is_some());

    let removed = slot.uninstall();
    assert!(removed.is_some());
    assert!(slot.client().is_none());
}

#[test]
fn test_reloader_counts() {
    let reloader = RecordingPageReloader::new();
    reloader.reload();
    reloader.reload();
    assert_eq!(reloader.reload_count(), 2);
}

struct Harness {
    client: Arc<RecordingAnalyticsClient>,
    reloader: Arc<RecordingPageReloader>,
    notifications: Arc<Mutex<Vec<Integrations>>>,
    use_case: ConditionallyLoadAnalyticsUseCase,
}

fn harness() -> Harness {
    let client = Arc::new(RecordingAnalyticsClient::new());
    let slot = Arc::new(AnalyticsSlot::with_client(client.clone()));
    let emitter = LoadExternalDestinationsEmitter::new();
    let reloader = Arc::new(RecordingPageReloader::new());

    let notifications = Arc::new(Mutex::new(Vec::new()));
    let sink = notifications.clone();
    let _subscription = emitter.subscribe(move |i| sink.lock().unwrap().push(i.clone()));

    let use_case =
        ConditionallyLoadAnalyticsUseCase::new(slot, Arc::new(emitter), reloader.clone());

    Harness {
        client,
        reloader,
        notifications,
        use_case,
    }
}

#[test]
fn test_decision_with_real_adapters() {
    let h = harness();
    let destinations = vec![Destination::new("Amplitude"), Destination::new("Pixel")];
    let external = vec![CatalogDestination::new("Pixel")];
    let preferences = DestinationPreferences::new()
        .with("Amplitude", true)
        .with("Pixel", true);
    let request = LoadRequest::new("wk", &destinations)
        .with_preferences(Some(&preferences))
        .with_external_destinations(&external);

    let first = h.use_case.execute(request).unwrap();
    let second = h.use_case.execute(request).unwrap();

    assert!(matches!(first, LoadOutcome::Loaded { .. }));
    assert_eq!(second, LoadOutcome::Reloaded);
    assert_eq!(h.client.loads().len(), 1);
    assert_eq!(h.reloader.reload_count(), 1);

    let notifications = h.notifications.lock().unwrap();
    assert_eq!(notifications.len(), 1);
    let entries: Vec<(&str, bool)> = notifications[0].iter().collect();
    assert_eq!(entries, vec![("Pixel", true)]);
}

#[test]
fn test_decision_with_empty_slot() {
    let use_case = ConditionallyLoadAnalyticsUseCase::new(
        Arc::new(AnalyticsSlot::empty()),
        Arc::new(LoadExternalDestinationsEmitter::new()),
        Arc::new(RecordingPageReloader::new()),
    );
    let destinations = vec![Destination::new("Amplitude")];

    let result = use_case.execute(LoadRequest::new("wk", &destinations).consent_required(false));

    assert_eq!(result, Err(DomainError::AnalyticsClientMissing));
}
