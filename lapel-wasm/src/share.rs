//! Platform share capabilities for the share chain in `lapel_core::share`.

use js_sys::{Function, Object, Promise, Reflect};
use lapel_core::share::{ClipboardWriter, SharePayload, ShareSheet};
use lapel_core::{LapelError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Window};

fn describe(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Calls `target[name](arg)` and awaits the returned promise.
async fn call_async(
    target: &JsValue,
    name: &str,
    arg: &JsValue,
) -> std::result::Result<(), JsValue> {
    let func: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let promise: Promise = func.call1(target, arg)?.dyn_into()?;
    JsFuture::from(promise).await.map(|_| ())
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `navigator.clipboard.writeText`, only offered in secure contexts.
pub struct AsyncClipboard {
    window: Window,
}

impl AsyncClipboard {
    pub fn new(window: Window) -> Self {
        AsyncClipboard { window }
    }

    fn clipboard(&self) -> Option<JsValue> {
        property(self.window.navigator().as_ref(), "clipboard")
    }
}

impl ClipboardWriter for AsyncClipboard {
    fn is_available(&self) -> bool {
        self.window.is_secure_context() && self.clipboard().is_some()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let clipboard = self
            .clipboard()
            .ok_or_else(|| LapelError::ClipboardFailure("no clipboard api".to_string()))?;
        call_async(&clipboard, "writeText", &JsValue::from_str(text))
            .await
            .map_err(|e| LapelError::ClipboardFailure(describe(e)))
    }
}

/// Select-and-copy through a transient off-screen `<textarea>`.
pub struct ScriptedCopy {
    document: Document,
}

impl ScriptedCopy {
    pub fn new(document: Document) -> Self {
        ScriptedCopy { document }
    }

    fn copy(&self, text: &str) -> std::result::Result<bool, JsValue> {
        let area: HtmlTextAreaElement = self.document.create_element("textarea")?.dyn_into()?;
        area.set_value(text);
        area.set_attribute("readonly", "")?;
        area.set_attribute("style", "position:fixed;left:-9999px;top:0;opacity:0")?;
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        body.append_child(&area)?;
        area.select();
        let copied = self
            .document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(JsValue::from)
            .and_then(|doc| doc.exec_command("copy"));
        area.remove();
        copied
    }
}

impl ClipboardWriter for ScriptedCopy {
    fn is_available(&self) -> bool {
        self.document.body().is_some()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        match self.copy(text) {
            Ok(true) => Ok(()),
            Ok(false) => Err(LapelError::ClipboardFailure("copy command refused".to_string())),
            Err(e) => Err(LapelError::ClipboardFailure(describe(e))),
        }
    }
}

/// `navigator.share`.
pub struct NativeShare {
    window: Window,
}

impl NativeShare {
    pub fn new(window: Window) -> Self {
        NativeShare { window }
    }
}

impl ShareSheet for NativeShare {
    fn is_available(&self) -> bool {
        property(self.window.navigator().as_ref(), "share").is_some()
    }

    async fn share(&self, payload: &SharePayload) -> Result<()> {
        let data = Object::new();
        let set = |k: &str, v: &str| {
            Reflect::set(&data, &JsValue::from_str(k), &JsValue::from_str(v))
        };
        let built = set("title", &payload.title)
            .and_then(|_| set("text", &payload.text))
            .and_then(|_| set("url", &payload.url));
        if let Err(e) = built {
            return Err(LapelError::ShareDeclined(describe(e)));
        }
        let navigator: JsValue = self.window.navigator().into();
        call_async(&navigator, "share", &data)
            .await
            .map_err(|e| LapelError::ShareDeclined(describe(e)))
    }
}
