//! Browser runtime for the lapel configurator.

use std::cell::RefCell;
use std::rc::Rc;

use lapel_core::{ConfigPatch, ConfigStore, Language, PatternLoads};
use tracing::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

mod browser;
mod canvas;
mod config;
mod constants;
mod controls;
mod export;
mod loader;
mod logging;
mod share;
mod state;
mod utils;

use crate::browser::{LocalStorage, LocationQuery};
use crate::config::SiteConfig;
use crate::loader::InFlight;
use crate::state::{STATE, State};

fn init_canvas(
    document: &Document,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{id} not found")))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let site = SiteConfig::from_window(&window);
    logging::init(&site.log_level);

    let (canvas, ctx) = init_canvas(&document, &site.canvas_id)?;
    let mut store = ConfigStore::resolve_with_key(
        LocationQuery::new(window.clone()),
        LocalStorage::new(window.clone()),
        &site.storage_key,
    );
    // Make a stored or default design visible in the address bar too.
    store.publish();
    info!(source = ?store.source(), design = %store.get().summary(), "configurator started");

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        site,
        store,
        loads: PatternLoads::new(),
        images: InFlight::default(),
        card_png: None,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    controls::attach_controls(&state)?;
    controls::sync_controls(&state.borrow());
    loader::ensure_pattern(&state);
    Ok(())
}

fn with_state<T>(f: impl FnOnce(&Rc<RefCell<State>>) -> T) -> Result<T, JsValue> {
    state::current()
        .map(|st| f(&st))
        .ok_or_else(|| JsValue::from_str("configurator not started"))
}

/// Current design as JSON (the same shape as the stored payload).
#[wasm_bindgen(js_name = currentConfig)]
pub fn current_config() -> Result<String, JsValue> {
    with_state(|st| serde_json::to_string(st.borrow().store.get()))?
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sets one field, as an option button would.
#[wasm_bindgen(js_name = setOption)]
pub fn set_option(field: &str, value: &str) -> Result<(), JsValue> {
    ConfigPatch::from_field(field, value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_state(|st| controls::apply_choice(st, field, value))
}

/// Renders the social card; resolves to a PNG data URL, or `undefined` when
/// the pattern is unknown.
#[wasm_bindgen(js_name = generatePreview)]
pub fn generate_preview() -> Result<Option<String>, JsValue> {
    with_state(export::generate_card)
}

#[wasm_bindgen(js_name = downloadPreview)]
pub fn download_preview() -> Result<(), JsValue> {
    with_state(export::download_card)?
}

#[wasm_bindgen(js_name = shareLink)]
pub fn share_link() -> Result<String, JsValue> {
    with_state(|st| {
        let s = st.borrow();
        let href = s.window.location().href().unwrap_or_default();
        lapel_core::share::build_share_link(&href, s.store.get())
    })
}

/// Pattern catalog as JSON, localized to `lang` (a tag such as `"en-GB"`) or
/// to the site language when omitted.
#[wasm_bindgen(js_name = patternCatalog)]
pub fn pattern_catalog(lang: Option<String>) -> Result<String, JsValue> {
    let entries = with_state(|st| {
        let s = st.borrow();
        let lang = lang.as_deref().map_or(s.site.language, Language::from_tag);
        utils::site_catalog(&s.site.base_url, lang)
    })?;
    serde_json::to_string(&entries).map_err(|e| JsValue::from_str(&e.to_string()))
}
