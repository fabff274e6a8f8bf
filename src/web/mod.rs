//! Browser runtime, compiled only for `wasm32`.
//!
//! Boot reads the [`RuntimeConfig`] the build embedded in the page, restores
//! a URL stashed by `404.html`, applies the initial settings and mounts the
//! app for the current route into `#app`. Document-level listeners are
//! installed once and forward to whichever app is mounted.
//!
//! Route changes go through `history.pushState`; the previous app is
//! unmounted first, so its in-flight fetches and timers find nothing to write
//! to when they complete.

mod admin;
mod dom;
mod fetch;
mod home;
mod observer;

use crate::action::Action;
use crate::config::RuntimeConfig;
use crate::render::shell::{CONFIG_ELEMENT_ID, REDIRECT_KEY};
use crate::route::Route;
use crate::settings::{Settings, SettingsHandle};
use admin::AdminApp;
use home::HomeApp;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Err(e) = boot() {
        tracing::error!(error = ?e, "failed to start the portfolio runtime");
    }
}

fn boot() -> Result<(), JsValue> {
    let config = read_config();
    restore_redirect()?;

    let settings = SettingsHandle::new(Settings {
        language: config.behavior.default_language,
        ..Settings::default()
    });
    dom::apply_settings(settings.get());
    settings.subscribe(dom::apply_settings);

    let runtime = Runtime::new(config, settings);
    runtime.install_listeners()?;
    runtime.show(runtime.current_route()?);
    Ok(())
}

/// Parse the embedded config. A missing or broken element falls back to
/// defaults so the page still renders.
fn read_config() -> RuntimeConfig {
    let text = dom::element(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let Some(text) = text else {
        tracing::warn!("runtime config element missing; using defaults");
        return RuntimeConfig::default();
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid runtime config; using defaults");
            RuntimeConfig::default()
        }
    }
}

/// `404.html` stores the URL the visitor asked for. Put it back in the
/// address bar before routing.
fn restore_redirect() -> Result<(), JsValue> {
    let window = dom::window()?;
    let Some(storage) = window.session_storage()? else {
        return Ok(());
    };
    let Some(href) = storage.get_item(REDIRECT_KEY)? else {
        return Ok(());
    };
    storage.remove_item(REDIRECT_KEY)?;
    let url = web_sys::Url::new(&href)?;
    let target = format!("{}{}{}", url.pathname(), url.search(), url.hash());
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&target))?;
    tracing::debug!(target = %target, "restored redirected URL");
    Ok(())
}

enum Mounted {
    Home(Rc<HomeApp>),
    Admin(Rc<AdminApp>),
}

struct Runtime {
    config: RuntimeConfig,
    settings: SettingsHandle,
    current: RefCell<Option<(Route, Mounted)>>,
    this: Weak<Runtime>,
}

impl Runtime {
    fn new(config: RuntimeConfig, settings: SettingsHandle) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            config,
            settings,
            current: RefCell::new(None),
            this: Weak::clone(this),
        })
    }

    fn current_route(&self) -> Result<Route, JsValue> {
        let path = dom::window()?.location().pathname()?;
        Ok(Route::from_path(&path, &self.config.site.base_path))
    }

    /// Navigation requested by an app. Deferred to a microtask so the
    /// requesting app is not torn down inside its own handler.
    fn navigator(&self) -> Rc<dyn Fn(Route)> {
        let this = Weak::clone(&self.this);
        Rc::new(move |route: Route| {
            let this = Weak::clone(&this);
            spawn_local(async move {
                if let Some(runtime) = this.upgrade() {
                    runtime.navigate(route);
                }
            });
        })
    }

    fn navigate(&self, route: Route) {
        let href = route.href(&self.config.site.base_path);
        let pushed = dom::window()
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&href)));
        if let Err(e) = pushed {
            tracing::error!(error = ?e, "pushState failed");
        }
        self.show(route);
    }

    /// Mount the app for `route`, replacing whatever is mounted.
    fn show(&self, route: Route) {
        let unchanged = matches!(self.current.borrow().as_ref(), Some((r, _)) if *r == route);
        if unchanged {
            return;
        }
        let previous = self.current.borrow_mut().take();
        if let Some((_, previous)) = previous {
            match previous {
                Mounted::Home(app) => app.unmount(),
                Mounted::Admin(app) => app.unmount(),
            }
        }
        dom::scroll_to(0.0, false);
        let mounted = match route {
            Route::Home => Mounted::Home(HomeApp::mount(
                self.config.clone(),
                self.settings.clone(),
                self.navigator(),
            )),
            Route::Admin => Mounted::Admin(AdminApp::mount(
                self.config.data_version.clone(),
                self.navigator(),
            )),
        };
        tracing::info!(route = ?route, "route mounted");
        *self.current.borrow_mut() = Some((route, mounted));
    }

    fn home(&self) -> Option<Rc<HomeApp>> {
        match self.current.borrow().as_ref() {
            Some((_, Mounted::Home(app))) => Some(Rc::clone(app)),
            _ => None,
        }
    }

    fn admin(&self) -> Option<Rc<AdminApp>> {
        match self.current.borrow().as_ref() {
            Some((_, Mounted::Admin(app))) => Some(Rc::clone(app)),
            _ => None,
        }
    }

    fn on_click(&self, event: &Event) {
        let Some(el) = dom::closest_with(event, "data-action") else {
            return;
        };
        let Some(name) = el.get_attribute("data-action") else {
            return;
        };
        let target = el.get_attribute("data-target");
        let index = el.get_attribute("data-index");
        let Some(action) = Action::from_attrs(&name, target.as_deref(), index.as_deref()) else {
            tracing::debug!(action = %name, "unrecognized action");
            return;
        };
        event.prevent_default();
        match action {
            Action::Admin(action) => {
                if let Some(app) = self.admin() {
                    app.handle(action);
                }
            }
            action => {
                if let Some(app) = self.home() {
                    app.handle(action);
                }
            }
        }
    }

    fn on_input(&self, event: &Event) {
        let Some(app) = self.admin() else {
            return;
        };
        let Some(el) = dom::closest_with(event, "data-field") else {
            return;
        };
        let (Some(field), Some(value)) = (el.get_attribute("data-field"), dom::field_value(&el))
        else {
            return;
        };
        app.input(&field, &value);
    }

    fn on_keydown(&self, event: &Event) {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if key != "Escape" {
            return;
        }
        if let Some(app) = self.home() {
            app.handle(Action::CloseProject);
        }
    }

    fn install_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;

        let this = Rc::downgrade(self);
        dom::listen(&document, "click", move |event| {
            if let Some(runtime) = this.upgrade() {
                runtime.on_click(&event);
            }
        })?;

        let this = Rc::downgrade(self);
        dom::listen(&document, "input", move |event| {
            if let Some(runtime) = this.upgrade() {
                runtime.on_input(&event);
            }
        })?;

        let this = Rc::downgrade(self);
        dom::listen(&document, "keydown", move |event| {
            if let Some(runtime) = this.upgrade() {
                runtime.on_keydown(&event);
            }
        })?;

        let this = Rc::downgrade(self);
        dom::listen(&window, "scroll", move |_| {
            if let Some(app) = this.upgrade().and_then(|r| r.home()) {
                app.on_scroll();
            }
        })?;

        let this = Rc::downgrade(self);
        dom::listen(&window, "popstate", move |_| {
            let Some(runtime) = this.upgrade() else {
                return;
            };
            match runtime.current_route() {
                Ok(route) => runtime.show(route),
                Err(e) => tracing::error!(error = ?e, "failed to read location"),
            }
        })?;

        Ok(())
    }
}
