use super::*;

/// Tests that every button goes to the handler registered as `button`.
///
/// Verifies that the custom id is recorded for analytics and that interaction
/// handlers do not receive the gateway client.
///
/// Expected: Handled with one transaction finished with status ok
#[tokio::test]
async fn routes_any_button_to_fixed_handler() {
    let (button, calls) = ScriptedHandler::new(BUTTON_HANDLER, Script::Succeed);
    let harness = Harness::new(RegistryBuilder::default().interaction(button));
    let event = button_event("confirm-delete");

    let outcome = harness.dispatch(&event).await;

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(*calls.lock().unwrap(), vec![(event.id, false)]);
    assert_eq!(
        harness.recorded(1).await,
        vec![(AnalyticsCategory::Button, "confirm-delete".to_string(), event.id)]
    );
    assert_eq!(harness.telemetry.opened(), 1);
    assert_eq!(harness.telemetry.finished(), 1);
    assert_eq!(harness.telemetry.statuses(), vec![SpanStatus::Ok]);
}

/// Tests that a button whose custom id matches another handler still goes to `button`.
#[tokio::test]
async fn custom_id_does_not_select_handler() {
    let (button, button_calls) = ScriptedHandler::new(BUTTON_HANDLER, Script::Succeed);
    let (other, other_calls) = ScriptedHandler::new("ping", Script::Succeed);
    let harness = Harness::new(
        RegistryBuilder::default()
            .interaction(button)
            .interaction(other),
    );

    harness.dispatch(&button_event("ping")).await;

    assert_eq!(button_calls.lock().unwrap().len(), 1);
    assert!(other_calls.lock().unwrap().is_empty());
}
