use crate::sim::Prompt;
use web_sys as web;

pub const STATUS_ID: &str = "status-text";
pub const LIGHT_BUTTON_ID: &str = "light-button";
pub const RESTART_BUTTON_ID: &str = "restart-button";

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show exactly one of the light button, the status line and the restart button.
pub fn apply_prompt(document: &web::Document, prompt: Prompt) {
    let (light, status, restart) = match prompt {
        Prompt::LightButton => (true, false, false),
        Prompt::Idle | Prompt::Smoking => (false, true, false),
        Prompt::RestartButton => (false, false, true),
    };
    for (id, visible) in [
        (LIGHT_BUTTON_ID, light),
        (STATUS_ID, status),
        (RESTART_BUTTON_ID, restart),
    ] {
        if visible {
            show(document, id);
        } else {
            hide(document, id);
        }
    }
    let id = match prompt {
        Prompt::LightButton => LIGHT_BUTTON_ID,
        Prompt::Idle | Prompt::Smoking => STATUS_ID,
        Prompt::RestartButton => RESTART_BUTTON_ID,
    };
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(prompt.text()));
    }
}
