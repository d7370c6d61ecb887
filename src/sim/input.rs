//! Raw input signals and their mapping to the single logical hold gesture.

/// Physical input signals the front-end listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawInput {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    TouchStart,
    TouchEnd,
    TouchCancel,
}

/// Logical transition of the hold gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Activate,
    Deactivate,
}

/// Every raw signal is an alias for one of the two edges.
#[inline]
pub const fn edge_for(raw: RawInput) -> Edge {
    match raw {
        RawInput::KeyDown | RawInput::PointerDown | RawInput::TouchStart => Edge::Activate,
        RawInput::KeyUp | RawInput::PointerUp | RawInput::TouchEnd | RawInput::TouchCancel => {
            Edge::Deactivate
        }
    }
}

const fn entry(raw: RawInput) -> (RawInput, Edge) {
    (raw, edge_for(raw))
}

/// All raw signals with their edge, presses first.
pub const DISPATCH: [(RawInput, Edge); 7] = [
    entry(RawInput::KeyDown),
    entry(RawInput::PointerDown),
    entry(RawInput::TouchStart),
    entry(RawInput::KeyUp),
    entry(RawInput::PointerUp),
    entry(RawInput::TouchEnd),
    entry(RawInput::TouchCancel),
];

/// DOM event type names for each raw signal.
#[inline]
pub fn raw_input_for_event(event_type: &str) -> Option<RawInput> {
    match event_type {
        "keydown" => Some(RawInput::KeyDown),
        "keyup" => Some(RawInput::KeyUp),
        "mousedown" => Some(RawInput::PointerDown),
        "mouseup" => Some(RawInput::PointerUp),
        "touchstart" => Some(RawInput::TouchStart),
        "touchend" => Some(RawInput::TouchEnd),
        "touchcancel" => Some(RawInput::TouchCancel),
        _ => None,
    }
}

/// Event types the front-end subscribes to, in `DISPATCH` order.
pub const HOLD_EVENT_TYPES: [&str; 7] = [
    "keydown",
    "mousedown",
    "touchstart",
    "keyup",
    "mouseup",
    "touchend",
    "touchcancel",
];
