use super::*;

/// Tests that interactions outside the routed kinds are left alone.
///
/// Expected: Ignored; only the user scope and breadcrumb are recorded
#[tokio::test]
async fn ignores_other_interactions() {
    let (button, calls) = ScriptedHandler::new(BUTTON_HANDLER, Script::Succeed);
    let harness = Harness::new(RegistryBuilder::default().interaction(button));
    let event = other_event();

    let outcome = harness.dispatch(&event).await;

    assert_eq!(outcome, DispatchOutcome::Ignored);
    assert!(calls.lock().unwrap().is_empty());
    assert!(harness.responder.replies().is_empty());
    assert!(harness.analytics.calls().is_empty());
    assert_eq!(
        harness.telemetry.records(),
        vec![
            TelemetryRecord::User(111),
            TelemetryRecord::Breadcrumb(format!("New interaction with id: {}", event.id)),
        ]
    );
}
