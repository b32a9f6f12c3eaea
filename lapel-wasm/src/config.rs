use lapel_core::Language;
use lapel_core::constants::STORAGE_KEY;
use lapel_render::CardOptions;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::constants::{BASE_URL_GLOBAL, CONFIG_GLOBAL};

/// Per-site settings read from `window.__LAPEL_CONFIG`. Every field has a
/// default, so the object and any of its keys may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for pattern assets.
    pub base_url: String,
    pub storage_key: String,
    pub canvas_id: String,
    pub language: Language,
    pub log_level: String,
    pub branding: String,
    pub year_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "/".to_string(),
            storage_key: STORAGE_KEY.to_string(),
            canvas_id: "preview".to_string(),
            language: Language::Ru,
            log_level: "info".to_string(),
            branding: "Made in EU".to_string(),
            year_label: "© 2024".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses the JSON form of the global. Malformed input yields defaults.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn from_window(window: &Window) -> Self {
        let mut config = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
            .ok()
            .filter(|v| v.is_object())
            .and_then(|v| js_sys::JSON::stringify(&v).ok())
            .and_then(|s| s.as_string())
            .map(|s| Self::from_json(&s))
            .unwrap_or_default();
        if config.base_url == "/"
            && let Some(legacy) = js_sys::Reflect::get(window, &JsValue::from_str(BASE_URL_GLOBAL))
                .ok()
                .and_then(|v| v.as_string())
        {
            config.base_url = legacy;
        }
        config
    }

    pub fn card_options(&self) -> CardOptions {
        CardOptions {
            language: self.language,
            branding: self.branding.clone(),
            year_label: self.year_label.clone(),
        }
    }
}
