//! The data viewer mounted in the browser.

use super::dom;
use super::fetch::HttpFetcher;
use crate::action::{Effect, Region};
use crate::admin::{AdminAction, AdminEdit, AdminPage};
use crate::bundle::load_bundle;
use crate::render::shell::APP_ELEMENT_ID;
use crate::route::Route;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub(crate) struct AdminApp {
    page: RefCell<AdminPage>,
    navigate: Rc<dyn Fn(Route)>,
}

impl AdminApp {
    pub(crate) fn mount(version: String, navigate: Rc<dyn Fn(Route)>) -> Rc<Self> {
        let mut page = AdminPage::new();
        let ticket = page.mount();
        dom::set_inner_html(APP_ELEMENT_ID, page.render_body());
        let app = Rc::new(Self {
            page: RefCell::new(page),
            navigate,
        });

        let weak = Rc::downgrade(&app);
        let fetcher = HttpFetcher::new(version);
        spawn_local(async move {
            let result = load_bundle(&fetcher).await;
            let Some(app) = weak.upgrade() else {
                return;
            };
            let redraw = app.page.borrow_mut().settle(ticket, result);
            if redraw.is_some() {
                app.render();
            }
        });

        tracing::debug!("admin viewer mounted");
        app
    }

    pub(crate) fn unmount(&self) {
        self.page.borrow_mut().unmount();
        tracing::debug!("admin viewer unmounted");
    }

    pub(crate) fn handle(&self, action: AdminAction) {
        let effects = self.page.borrow_mut().handle(action);
        for effect in effects {
            match effect {
                Effect::Render(Region::Admin) => self.render(),
                Effect::Download(download) => {
                    if let Err(e) = dom::download(&download) {
                        tracing::error!(error = ?e, "download failed");
                    }
                }
                Effect::Navigate(route) => (self.navigate)(route),
                other => tracing::debug!(effect = ?other, "ignored on admin route"),
            }
        }
    }

    /// A bound input changed.
    pub(crate) fn input(&self, field: &str, value: &str) {
        match AdminEdit::parse(field, value) {
            Some(edit) => self.handle(AdminAction::Edit(edit)),
            None => tracing::debug!(field, "ignored edit"),
        }
    }

    fn render(&self) {
        let markup = self.page.borrow().render();
        dom::set_inner_html(Region::Admin.element_id(), markup);
    }
}
