//! Pattern image loading for the live preview.

use std::cell::RefCell;
use std::rc::Rc;

use lapel_core::{LapelError, LoadOutcome, LoadTicket, pattern_by_id};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

use crate::constants::LOADING_ID;
use crate::state::State;
use crate::utils::{asset_url, set_hidden};

/// Something holding event handlers that can be unhooked from their target.
pub trait Detach {
    fn detach(&self);
}

/// The handlers of the most recent image request. Starting another load
/// unhooks and frees the previous ones, so at most one pair is ever alive.
pub struct InFlight<H: Detach> {
    current: Option<H>,
}

impl<H: Detach> Default for InFlight<H> {
    fn default() -> Self {
        InFlight { current: None }
    }
}

impl<H: Detach> InFlight<H> {
    pub fn replace(&mut self, next: H) {
        if let Some(prev) = self.current.replace(next) {
            prev.detach();
        }
    }
}

/// An image element and the `onload`/`onerror` closures installed on it.
pub struct PendingImage {
    img: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Detach for PendingImage {
    fn detach(&self) {
        self.img.set_onload(None);
        self.img.set_onerror(None);
    }
}

/// Starts loading the image for the current pattern unless it is already
/// loaded or on its way. The loading indicator stays up until the most
/// recent request settles.
pub fn ensure_pattern(state: &Rc<RefCell<State>>) {
    let (ticket, base) = {
        let mut s = state.borrow_mut();
        let pattern = s.store.get().pattern.clone();
        match s.loads.request(&pattern) {
            Some(ticket) => (ticket, s.site.base_url.clone()),
            None => return,
        }
    };
    set_hidden(&state.borrow().document, LOADING_ID, false);

    let Some(descriptor) = pattern_by_id(ticket.pattern()) else {
        let reason = "not in catalog".to_string();
        let pattern = ticket.pattern().to_string();
        settle(state, ticket, Err(LapelError::ImageLoadFailure { pattern, reason }));
        return;
    };

    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            let pattern = ticket.pattern().to_string();
            let reason = format!("{e:?}");
            settle(state, ticket, Err(LapelError::ImageLoadFailure { pattern, reason }));
            return;
        }
    };

    let st = state.clone();
    let t = ticket.clone();
    let loaded = img.clone();
    let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        settle(&st, t.clone(), Ok(loaded.clone()));
    }));
    let st = state.clone();
    let t = ticket.clone();
    let onerror = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let err = LapelError::ImageLoadFailure {
            pattern: t.pattern().to_string(),
            reason: "image failed to load".to_string(),
        };
        settle(&st, t.clone(), Err(err));
    }));
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let src = asset_url(&base, &descriptor.asset_path());
    debug!(pattern = %ticket.pattern(), %src, "loading pattern image");
    img.set_src(&src);

    // A superseded image never fires into freed closures: it is detached first.
    state.borrow_mut().images.replace(PendingImage {
        img,
        _onload: onload,
        _onerror: onerror,
    });
}

fn settle(
    state: &Rc<RefCell<State>>,
    ticket: LoadTicket,
    result: Result<HtmlImageElement, LapelError>,
) {
    let mut s = state.borrow_mut();
    match s.loads.settle(ticket, result) {
        LoadOutcome::Stale => return,
        LoadOutcome::Applied => {
            s.redraw();
        }
        LoadOutcome::Failed => warn!("preview skipped, pattern image unavailable"),
    }
    if !s.loads.is_loading() {
        set_hidden(&s.document, LOADING_ID, true);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Handle<'a> {
        detached: &'a Cell<usize>,
    }

    impl Detach for Handle<'_> {
        fn detach(&self) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    #[test]
    fn only_the_latest_handlers_stay_attached() {
        let detached = Cell::new(0);
        let mut images = InFlight::default();

        images.replace(Handle { detached: &detached });
        assert_eq!(detached.get(), 0);

        for _ in 0..3 {
            images.replace(Handle { detached: &detached });
        }
        assert_eq!(detached.get(), 3);
        assert!(images.current.is_some());
    }
}
