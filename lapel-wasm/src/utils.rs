use lapel_core::{CatalogEntry, Language, catalog_entries};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::HIDDEN_CLASS;

/// Absolute URL for an asset under `base`. Absolute and data URLs pass
/// through unchanged.
pub fn asset_url(base: &str, path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    format!("{}{}", base, p.trim_start_matches('/'))
}

/// All elements matching `selector`, skipping anything that is not an element.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
    }
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// The catalog in `lang`, with asset and thumbnail paths resolved under
/// `base`.
pub fn site_catalog(base: &str, lang: Language) -> Vec<CatalogEntry> {
    catalog_entries(lang)
        .into_iter()
        .map(|mut entry| {
            entry.asset = asset_url(base, &entry.asset);
            entry.thumbnail = asset_url(base, &entry.thumbnail);
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls() {
        assert_eq!(asset_url("/", "/patterns/geo01.svg"), "/patterns/geo01.svg");
        assert_eq!(asset_url("/shop", "patterns/geo01.svg"), "/shop/patterns/geo01.svg");
        assert_eq!(
            asset_url("/shop/", "https://cdn.example/p.svg"),
            "https://cdn.example/p.svg"
        );
    }

    #[test]
    fn catalog_paths_follow_the_base() {
        let entries = site_catalog("/shop", Language::En);
        let geo = entries.iter().find(|e| e.id == "geo01").unwrap();
        assert_eq!(geo.name, "Geometry 01");
        assert_eq!(geo.asset, "/shop/patterns/geo01.svg");
        assert_eq!(geo.thumbnail, "/shop/patterns/geo01_thumb.png");
    }
}
