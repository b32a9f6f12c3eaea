use std::cell::RefCell;
use std::rc::Rc;

use lapel_core::{ConfigStore, PatternLoads};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Window};

use crate::browser::{LocalStorage, LocationQuery};
use crate::canvas::CanvasSurface;
use crate::config::SiteConfig;
use crate::loader::{InFlight, PendingImage};

/// Runtime state shared by the browser callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub site: SiteConfig,
    pub store: ConfigStore<LocationQuery, LocalStorage>,
    pub loads: PatternLoads<HtmlImageElement>,
    /// Handlers of the image currently loading.
    pub images: InFlight<PendingImage>,
    /// Last generated social card, kept for download.
    pub card_png: Option<Vec<u8>>,
}

impl State {
    /// Redraws the preview if the image for the current pattern is ready.
    pub fn redraw(&self) -> bool {
        let mut surface = CanvasSurface::new(&self.canvas, &self.ctx);
        lapel_core::redraw(&mut surface, self.store.get(), &self.loads)
    }
}

// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// The runtime state, once `start` has run.
pub fn current() -> Option<Rc<RefCell<State>>> {
    STATE.with(|st| st.borrow().clone())
}
