use crate::app::App;
use crate::dom;
use crate::sim::input::{raw_input_for_event, HOLD_EVENT_TYPES};
use crate::sim::{edge_for, CueBuffer, Edge, RawInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One window listener per raw signal, all funnelled into the same two edges.
pub fn wire_hold_listeners(app: &App) {
    let Some(window) = web::window() else {
        return;
    };
    for event_type in HOLD_EVENT_TYPES {
        let Some(raw) = raw_input_for_event(event_type) else {
            continue;
        };
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handle_hold_event(&app, raw, &ev);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn handle_hold_event(app: &App, raw: RawInput, ev: &web::Event) {
    if dom::is_button_target(ev) {
        return;
    }
    if let Some(key) = ev.dyn_ref::<web::KeyboardEvent>() {
        if key.repeat() {
            return;
        }
    }
    // Suppress the emulated mouse events that would replay the same gesture
    if matches!(raw, RawInput::TouchEnd | RawInput::TouchCancel) {
        ev.prevent_default();
    }

    let edge = edge_for(raw);
    if edge == Edge::Activate {
        app.resume_audio();
    }
    let now = app.now();
    let mut cues = CueBuffer::new();
    let changed = app.sim.borrow_mut().handle_input(raw, now, &mut cues);
    app.play(cues);
    if changed {
        let view = app.sim.borrow().view(now);
        app.sync_prompt(&view);
    }
}
