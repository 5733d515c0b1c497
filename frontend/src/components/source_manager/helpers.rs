//! Browser glue for the source manager: toasts and native dialogs.
//!
//! Everything here degrades to a no-op (or a refusal, for `confirm`) when no
//! `window` is available.

use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen.
const TOAST_LIFETIME_MS: u32 = 3000;

/// Appends a `.toast` element to `<body>` and removes it after
/// `TOAST_LIFETIME_MS`. Its look lives in the page stylesheet.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if let Err(err) = body.append_child(&toast) {
        log::warn!("toast not shown: {:?}", err);
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toast.remove();
    });
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", err);
            }
        }
        None => log::warn!("no window to alert: {}", message),
    }
}

/// Blocking `window.confirm`; anything but an explicit "OK" is a refusal.
pub fn confirm(question: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(question).ok())
        .unwrap_or(false)
}
