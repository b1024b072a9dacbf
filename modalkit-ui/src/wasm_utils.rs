//! Browser interop helpers
//!
//! # Observer Cleanup Pattern
//!
//! A `ResizeObserver` callback is a Rust `Closure` that must outlive the
//! observer. Rather than `closure.forget()` (which leaks the closure and keeps
//! observing forever), the observer and its closure live together in a struct
//! that disconnects on `Drop`:
//!
//! ```ignore
//! let observer = BodyWidthObserver::new(move |width| container_width.set(width));
//!
//! // Observation stops when `observer` is dropped
//! drop(observer);
//! ```
//!
//! Keep it in a `Signal<Option<BodyWidthObserver>>` and set it to `None` on
//! unmount.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Watches the width of `document.body` and disconnects when dropped.
pub struct BodyWidthObserver {
    observer: web_sys_x::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys_x::Array)>,
}

impl BodyWidthObserver {
    /// Starts observing. `on_width` is called once with the current width and
    /// again on every change. Returns `None` when there is no document body.
    pub fn new(mut on_width: impl FnMut(f64) + 'static) -> Option<Self> {
        let body = web_sys_x::window()?.document()?.body()?;
        on_width(body.client_width() as f64);

        let callback: Closure<dyn FnMut(js_sys_x::Array)> =
            Closure::wrap(Box::new(move |entries: js_sys_x::Array| {
                let Some(entry) = entries.get(0).dyn_ref::<web_sys_x::ResizeObserverEntry>().cloned()
                else {
                    return;
                };
                let sizes = entry.content_box_size();
                match sizes.get(0).dyn_ref::<web_sys_x::ResizeObserverSize>() {
                    Some(size) => on_width(size.inline_size()),
                    None => on_width(entry.content_rect().width()),
                }
            }) as Box<dyn FnMut(js_sys_x::Array)>);

        let observer = web_sys_x::ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(&body);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for BodyWidthObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Read the first file selected in `<input type="file" id=input_id>` as a
/// `data:` URL. `Ok(None)` when no file is selected.
pub async fn read_file_as_data_url(input_id: &str) -> Result<Option<String>, String> {
    let document = web_sys_x::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;

    let input = document
        .get_element_by_id(input_id)
        .and_then(|el| el.dyn_into::<web_sys_x::HtmlInputElement>().ok())
        .ok_or_else(|| format!("No file input with id {input_id}"))?;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let reader = web_sys_x::FileReader::new().map_err(js_error)?;
    let loaded = js_sys_x::Promise::new(&mut |resolve: js_sys_x::Function, reject: js_sys_x::Function| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(&file).map_err(js_error)?;
    wasm_bindgen_futures_x::JsFuture::from(loaded)
        .await
        .map_err(|e| format!("Failed to read {}: {}", file.name(), js_error(e)))?;

    reader
        .result()
        .map_err(js_error)?
        .as_string()
        .map(Some)
        .ok_or_else(|| "File reader returned no data URL".to_string())
}

/// Write text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys_x::window().ok_or_else(|| "No window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures_x::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(js_error)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
