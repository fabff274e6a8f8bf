//! Thin helpers over `web-sys`.

use crate::bundle::Download;
use crate::page::scroll_target;
use crate::section::SectionId;
use crate::settings::{Settings, Theme};
use maud::Markup;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, Event, EventTarget, HtmlAnchorElement,
    HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Url, Window,
};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn element(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Replace the contents of the element with `id`. Missing hosts are skipped.
pub(crate) fn set_inner_html(id: &str, markup: Markup) {
    match element(id) {
        Some(host) => host.set_inner_html(&markup.into_string()),
        None => tracing::warn!(id, "render target not found"),
    }
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`.
pub(crate) fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let scheduled = window().and_then(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    });
    if let Err(e) = scheduled {
        tracing::error!(error = ?e, "failed to schedule timer");
    }
}

/// A repeating timer. Cleared on [`Interval::cancel`] or drop.
pub(crate) struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub(crate) fn start(period_ms: u32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(f);
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    /// Stop firing. The callback stays alive until drop, so this is safe to
    /// call from inside the callback itself.
    pub(crate) fn cancel(&self) {
        if let Ok(w) = window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub(crate) fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y()).unwrap_or(0.0)
}

pub(crate) fn scroll_to(top: f64, smooth: bool) {
    let Ok(w) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    w.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll so `section` sits just below the fixed header.
pub(crate) fn scroll_to_section(section: SectionId, nav_offset_px: u32) {
    let Some(target) = element(section.as_str()) else {
        tracing::warn!(section = section.as_str(), "scroll target not found");
        return;
    };
    let top = target.get_bounding_client_rect().top();
    scroll_to(scroll_target(top, scroll_y(), nav_offset_px), true);
}

/// Reflect theme and language on `<html>`.
pub(crate) fn apply_settings(settings: Settings) {
    let Some(root) = document().ok().and_then(|d| d.document_element()) else {
        return;
    };
    let dark = settings.theme == Theme::Dark;
    if let Err(e) = root
        .class_list()
        .toggle_with_force(Theme::DARK_CLASS, dark)
    {
        tracing::warn!(error = ?e, "failed to toggle theme class");
    }
    if let Err(e) = root.set_attribute("lang", settings.language.code()) {
        tracing::warn!(error = ?e, "failed to set document language");
    }
}

/// Offer `download` as a file through a temporary object URL.
pub(crate) fn download(download: &Download) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&download.body));
    let options = BlobPropertyBag::new();
    options.set_type(download.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = document()?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(download.file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;
    tracing::info!(file = download.file_name, bytes = download.body.len(), "download offered");
    Ok(())
}

/// Closest ancestor of the event target (inclusive) carrying `attribute`.
pub(crate) fn closest_with(event: &Event, attribute: &str) -> Option<Element> {
    let target: Element = event.target()?.dyn_into().ok()?;
    target.closest(&format!("[{attribute}]")).ok().flatten()
}

/// Current value of a text input or textarea.
pub(crate) fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}
