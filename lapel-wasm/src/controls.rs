use std::cell::RefCell;
use std::rc::Rc;

use lapel_core::ConfigPatch;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::constants::{ACTION_ATTR, ACTIVE_CLASS, FIELD_ATTR, SOCIAL_ATTR, VALUE_ATTR};
use crate::export::{copy_link, download_card, generate_card, open_social, parse_network, share};
use crate::loader::ensure_pattern;
use crate::state::State;
use crate::utils::query_all;

fn on_click<F>(el: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(handler));
    el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

/// Wires option, action and social buttons found in the page.
pub fn attach_controls(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    for el in query_all(&doc, &format!("[{FIELD_ATTR}][{VALUE_ATTR}]")) {
        let (Some(field), Some(value)) =
            (el.get_attribute(FIELD_ATTR), el.get_attribute(VALUE_ATTR))
        else {
            continue;
        };
        let st = state.clone();
        on_click(&el, move || apply_choice(&st, &field, &value))?;
    }

    for el in query_all(&doc, &format!("[{ACTION_ATTR}]")) {
        let action = el.get_attribute(ACTION_ATTR).unwrap_or_default();
        let st = state.clone();
        match action.as_str() {
            "share" => on_click(&el, move || share(&st))?,
            "copy-link" => on_click(&el, move || copy_link(&st))?,
            "generate-preview" => on_click(&el, move || {
                let _ = generate_card(&st);
            })?,
            "download-preview" => on_click(&el, move || {
                if let Err(e) = download_card(&st) {
                    warn!("download failed: {e:?}");
                }
            })?,
            other => debug!("ignoring unknown action '{other}'"),
        }
    }

    for el in query_all(&doc, &format!("[{SOCIAL_ATTR}]")) {
        let Some(network) = el.get_attribute(SOCIAL_ATTR).as_deref().and_then(parse_network) else {
            continue;
        };
        let st = state.clone();
        on_click(&el, move || open_social(&st, network))?;
    }
    Ok(())
}

/// Applies one control's value: updates the store (and with it the URL and
/// storage), redraws, and fetches a new pattern image if needed.
pub fn apply_choice(state: &Rc<RefCell<State>>, field: &str, value: &str) {
    let patch = match ConfigPatch::from_field(field, value) {
        Ok(patch) => patch,
        Err(e) => {
            warn!("ignoring control: {e}");
            return;
        }
    };
    {
        let mut s = state.borrow_mut();
        s.store.set(patch);
        s.card_png = None;
        s.redraw();
    }
    ensure_pattern(state);
    sync_controls(&state.borrow());
}

/// Marks the buttons matching the current design as active.
pub fn sync_controls(s: &State) {
    let config = s.store.get();
    for el in query_all(&s.document, &format!("[{FIELD_ATTR}][{VALUE_ATTR}]")) {
        let selected = match (el.get_attribute(FIELD_ATTR), el.get_attribute(VALUE_ATTR)) {
            (Some(f), Some(v)) => config.field(&f) == Some(v.as_str()),
            _ => false,
        };
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, selected);
        let _ = el.set_attribute("aria-pressed", if selected { "true" } else { "false" });
    }
}
