//! Social card generation, download and the share actions.

use std::cell::RefCell;
use std::rc::Rc;

use lapel_core::share::{
    self, ShareOutcome, SharePayload, SocialNetwork, copy_to_clipboard, export_file_name,
    share_design,
};
use lapel_core::{Text, pattern_by_id, t};
use lapel_render::{png_data_url, social_card_png};
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, Document, HtmlElement, HtmlImageElement, Url};

use crate::constants::{CARD_IMAGE_ID, SHARE_STATUS_ID};
use crate::share::{AsyncClipboard, NativeShare, ScriptedCopy};
use crate::state::State;
use crate::utils::set_text;

/// Renders the social card for the current design and shows it in the
/// card `<img>`. Returns the data URL, or `None` when the pattern is not in
/// the catalog.
pub fn generate_card(state: &Rc<RefCell<State>>) -> Option<String> {
    let mut s = state.borrow_mut();
    let config = s.store.get().clone();
    let pattern = pattern_by_id(&config.pattern)?;
    let lang = s.site.language;
    match social_card_png(&config, pattern.display_name(lang), &s.site.card_options()) {
        Ok(png) => {
            let url = png_data_url(&png);
            if let Some(img) = s
                .document
                .get_element_by_id(CARD_IMAGE_ID)
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                img.set_src(&url);
            }
            s.card_png = Some(png);
            Some(url)
        }
        Err(e) => {
            warn!("social card failed: {e}");
            set_text(&s.document, SHARE_STATUS_ID, t(Text::PreviewFailed, lang));
            None
        }
    }
}

/// Saves the last generated card, generating it first if needed.
pub fn download_card(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    if state.borrow().card_png.is_none() && generate_card(state).is_none() {
        return Ok(());
    }
    let s = state.borrow();
    let Some(png) = s.card_png.as_ref() else {
        return Ok(());
    };
    let name = export_file_name(s.store.get());
    save_bytes_as_file(&s.document, &name, png)?;
    info!(file = %name, "card downloaded");
    Ok(())
}

fn save_bytes_as_file(document: &Document, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Array::new();
    let u8 = js_sys::Uint8Array::from(bytes);
    array.push(&u8);
    let blob = Blob::new_with_u8_array_sequence(&array)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let a = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", &url)?;
    a.set_attribute("download", name)?;
    a.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

fn payload(s: &State) -> SharePayload {
    let href = s.window.location().href().unwrap_or_default();
    SharePayload::new(&href, s.store.get(), s.site.language)
}

fn show_outcome(state: &Rc<RefCell<State>>, copied: bool) {
    let s = state.borrow();
    if copied {
        set_text(&s.document, SHARE_STATUS_ID, t(Text::LinkCopied, s.site.language));
    } else {
        warn!("link could not be shared or copied");
    }
}

/// Share sheet, falling back to copying the link.
pub fn share(state: &Rc<RefCell<State>>) {
    let (window, document, payload) = {
        let s = state.borrow();
        (s.window.clone(), s.document.clone(), payload(&s))
    };
    let st = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = share_design(
            &NativeShare::new(window.clone()),
            &AsyncClipboard::new(window),
            &ScriptedCopy::new(document),
            &payload,
        )
        .await;
        match outcome {
            ShareOutcome::Shared => info!("design shared"),
            ShareOutcome::Copied => show_outcome(&st, true),
            ShareOutcome::Failed => show_outcome(&st, false),
        }
    });
}

/// Copies the share link.
pub fn copy_link(state: &Rc<RefCell<State>>) {
    let (window, document, link) = {
        let s = state.borrow();
        (s.window.clone(), s.document.clone(), payload(&s).url)
    };
    let st = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let primary = AsyncClipboard::new(window);
        let fallback = ScriptedCopy::new(document);
        let ok = copy_to_clipboard(&primary, &fallback, &link).await;
        show_outcome(&st, ok);
    });
}

/// Opens a network's share intent in a new tab.
pub fn open_social(state: &Rc<RefCell<State>>, network: SocialNetwork) {
    let s = state.borrow();
    let p = payload(&s);
    let url = share::intent_url(network, &p.text, &p.url);
    if let Err(e) = s.window.open_with_url_and_target(&url, "_blank") {
        warn!("could not open {}: {e:?}", network.label());
    }
}

pub fn parse_network(name: &str) -> Option<SocialNetwork> {
    SocialNetwork::ALL
        .into_iter()
        .find(|n| n.label().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_names() {
        assert_eq!(parse_network("twitter"), Some(SocialNetwork::Twitter));
        assert_eq!(parse_network("WhatsApp"), Some(SocialNetwork::WhatsApp));
        assert_eq!(parse_network("myspace"), None);
    }
}
