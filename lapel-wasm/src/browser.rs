//! `window.location`/`history` and `localStorage` as configuration channels.

use lapel_core::{KeyValueStorage, LapelError, QueryChannel, Result};
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

fn js_reason(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// The page's own query string. Updates replace the current history entry.
#[derive(Clone)]
pub struct LocationQuery {
    window: Window,
}

impl LocationQuery {
    pub fn new(window: Window) -> Self {
        LocationQuery { window }
    }
}

/// `path?search#hash`, omitting the `?` when `search` is empty.
pub fn relative_url(path: &str, search: &str, hash: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        format!("{path}{hash}")
    } else {
        format!("{path}?{search}{hash}")
    }
}

impl QueryChannel for LocationQuery {
    fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn replace_search(&mut self, search: &str) {
        let location = self.window.location();
        let url = relative_url(
            &location.pathname().unwrap_or_default(),
            search,
            &location.hash().unwrap_or_default(),
        );
        let result = self
            .window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            warn!("could not update address bar: {}", js_reason(e));
        }
    }
}

/// `window.localStorage`. Private browsing modes may deny access entirely.
#[derive(Clone)]
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    pub fn new(window: Window) -> Self {
        LocalStorage { window }
    }

    fn storage(&self) -> Result<Storage> {
        self.window
            .local_storage()
            .map_err(|e| LapelError::StorageUnavailable(js_reason(e)))?
            .ok_or_else(|| LapelError::StorageUnavailable("localStorage missing".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| LapelError::StorageUnavailable(js_reason(e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| LapelError::StorageUnavailable(js_reason(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls() {
        assert_eq!(relative_url("/ru/", "model=peak", "#cfg"), "/ru/?model=peak#cfg");
        assert_eq!(relative_url("/", "", ""), "/");
        assert_eq!(relative_url("/", "?a=1", ""), "/?a=1");
    }
}
