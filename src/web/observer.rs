use super::dom;
use crate::visibility::VisibilityObserver;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type Pending = Rc<RefCell<HashMap<String, Box<dyn FnOnce()>>>>;

/// [`VisibilityObserver`] backed by one `IntersectionObserver`.
pub(crate) struct RevealObserver {
    observer: IntersectionObserver,
    pending: Pending,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub(crate) fn new(threshold: f64) -> Result<Self, JsValue> {
        let pending: Pending = Rc::default();
        let fired = Rc::clone(&pending);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    // Release the borrow before the callback re-renders.
                    let on_visible = fired.borrow_mut().remove(&target.id());
                    if let Some(on_visible) = on_visible {
                        on_visible();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            pending,
            _callback: callback,
        })
    }
}

impl VisibilityObserver for RevealObserver {
    fn observe_once(&self, element_id: &str, on_visible: Box<dyn FnOnce()>) {
        let Some(element) = dom::element(element_id) else {
            tracing::warn!(id = element_id, "reveal target not found");
            return;
        };
        self.pending
            .borrow_mut()
            .insert(element_id.to_string(), on_visible);
        self.observer.observe(&element);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
        self.pending.borrow_mut().clear();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
