// Host-side tests for the raw input -> hold edge dispatch table.

use burnsim_web::sim::input::*;

#[test]
fn press_signals_activate() {
    assert_eq!(edge_for(RawInput::KeyDown), Edge::Activate);
    assert_eq!(edge_for(RawInput::PointerDown), Edge::Activate);
    assert_eq!(edge_for(RawInput::TouchStart), Edge::Activate);
}

#[test]
fn release_signals_deactivate() {
    assert_eq!(edge_for(RawInput::KeyUp), Edge::Deactivate);
    assert_eq!(edge_for(RawInput::PointerUp), Edge::Deactivate);
    assert_eq!(edge_for(RawInput::TouchEnd), Edge::Deactivate);
    assert_eq!(edge_for(RawInput::TouchCancel), Edge::Deactivate);
}

#[test]
fn dispatch_table_has_no_duplicates() {
    for (i, (raw, _)) in DISPATCH.iter().enumerate() {
        assert!(
            DISPATCH[i + 1..].iter().all(|(other, _)| other != raw),
            "{raw:?} mapped twice"
        );
    }
}

#[test]
fn event_types_follow_the_table() {
    assert_eq!(HOLD_EVENT_TYPES.len(), DISPATCH.len());
    for (event_type, (raw, _)) in HOLD_EVENT_TYPES.iter().zip(DISPATCH.iter()) {
        assert_eq!(raw_input_for_event(event_type), Some(*raw));
    }
}

#[test]
fn unrelated_events_are_ignored() {
    assert_eq!(raw_input_for_event("click"), None);
    assert_eq!(raw_input_for_event("pointermove"), None);
    assert_eq!(raw_input_for_event(""), None);
}

#[test]
fn dispatch_table_presses_come_first() {
    let presses = DISPATCH
        .iter()
        .take_while(|(_, edge)| *edge == Edge::Activate)
        .count();
    assert_eq!(presses, 3);
    assert!(DISPATCH[presses..]
        .iter()
        .all(|(raw, edge)| *edge == Edge::Deactivate && edge_for(*raw) == *edge));
}
