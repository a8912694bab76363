use chrono::{DateTime, FixedOffset, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a transient message at the bottom of the viewport for three seconds.
///
/// The message goes through `set_text_content`, so server-provided strings
/// are never interpreted as markup.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "24px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(20, 21, 23, 0.95)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "12px 20px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("border", "1px solid rgba(255, 255, 255, 0.08)").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `navigator.languages`, most preferred first.
pub fn browser_languages() -> Vec<String> {
    web_sys::window()
        .map(|window| {
            window
                .navigator()
                .languages()
                .iter()
                .filter_map(|value| value.as_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            gloo_console::error!(format!("navigation to {path} failed"));
        }
    }
}

/// Like [`navigate`] but without leaving a history entry, for locale redirects.
pub fn replace_location(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().replace(path).is_err() {
            gloo_console::error!(format!("redirect to {path} failed"));
        }
    }
}

/// Formats a timestamp in Korea Standard Time, the club's local time.
pub fn format_kst(timestamp: &DateTime<Utc>) -> String {
    match FixedOffset::east_opt(9 * 3600) {
        Some(kst) => timestamp
            .with_timezone(&kst)
            .format("%Y.%m.%d %H:%M")
            .to_string(),
        None => timestamp.format("%Y.%m.%d %H:%M UTC").to_string(),
    }
}
