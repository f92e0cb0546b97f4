use leptos::{task::spawn_local, web_sys};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Copies `text` and runs `on_copied` once it is on the clipboard.
///
/// Uses the async clipboard API when the page can, otherwise selects the
/// text in an off-screen textarea and runs `execCommand("copy")`.
pub fn copy_text(text: impl Into<String>, on_copied: impl FnOnce() + 'static) {
    let text = text.into();
    spawn_local(async move {
        if write_clipboard(&text).await || copy_from_textarea(&text) {
            on_copied();
        } else {
            log::warn!("couldn't copy to the clipboard");
        }
    });
}

async fn write_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    // missing outside secure contexts
    let available = js_sys::Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if !available {
        return false;
    }
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .is_ok()
}

fn copy_from_textarea(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(textarea) = document
        .create_element("textarea")
        .map(|el| el.unchecked_into::<web_sys::HtmlTextAreaElement>())
    else {
        return false;
    };
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    textarea.remove();
    copied
}
