//! Blocking browser dialogs and small DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};

pub fn alert(message: &str) {
    if let Some(win) = window() {
        if win.alert_with_message(message).is_err() {
            log::warn!("⚠️ alert() unavailable: {}", message);
        }
    }
}

/// `false` when the user cancels or no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `None` when the user cancels the prompt or leaves it empty.
pub fn prompt(message: &str) -> Option<String> {
    window()
        .and_then(|win| win.prompt_with_message(message).ok())
        .flatten()
        .filter(|value| !value.is_empty())
}

/// Current value of the `<input>` or `<textarea>` that fired an event.
pub fn event_value(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}
