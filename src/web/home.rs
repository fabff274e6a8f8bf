//! The home page mounted in the browser.

use super::dom;
use super::fetch::HttpFetcher;
use super::observer::RevealObserver;
use crate::action::{Action, Effect, Region};
use crate::config::RuntimeConfig;
use crate::gesture::TimerTicket;
use crate::loader::{LoadTicket, load};
use crate::page::{Loaded, PortfolioPage, revealed_regions};
use crate::render::loading::SplashProgress;
use crate::render::shell::APP_ELEMENT_ID;
use crate::resource::{self, Resource, ResourceError};
use crate::route::Route;
use crate::settings::{Settings, SettingsHandle, Subscription};
use crate::visibility::VisibilityObserver;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;

pub(crate) struct HomeApp {
    page: RefCell<PortfolioPage>,
    settings: SettingsHandle,
    navigate: Rc<dyn Fn(Route)>,
    subscription: Cell<Option<Subscription>>,
    observer: RefCell<Option<RevealObserver>>,
    splash: RefCell<Option<dom::Interval>>,
}

impl HomeApp {
    pub(crate) fn mount(
        config: RuntimeConfig,
        settings: SettingsHandle,
        navigate: Rc<dyn Fn(Route)>,
    ) -> Rc<Self> {
        let threshold = config.behavior.reveal_threshold;
        let version = config.data_version.clone();
        let mut page = PortfolioPage::new(config);
        let tickets = page.mount();
        page.set_scroll_y(dom::scroll_y());
        dom::set_inner_html(APP_ELEMENT_ID, page.render_body(settings.get()));

        let app = Rc::new(Self {
            page: RefCell::new(page),
            settings,
            navigate,
            subscription: Cell::new(None),
            observer: RefCell::new(None),
            splash: RefCell::new(None),
        });

        app.watch_language();
        app.observe_sections(threshold);
        app.start_splash();

        let fetcher = HttpFetcher::new(version);
        let weak = Rc::downgrade(&app);
        spawn_section::<resource::About>(&weak, &fetcher, tickets.about, Loaded::About);
        spawn_section::<resource::Experience>(
            &weak,
            &fetcher,
            tickets.experience,
            Loaded::Experience,
        );
        spawn_section::<resource::Skills>(&weak, &fetcher, tickets.skills, Loaded::Skills);
        spawn_section::<resource::Projects>(&weak, &fetcher, tickets.projects, Loaded::Projects);
        spawn_section::<resource::Awards>(&weak, &fetcher, tickets.awards, Loaded::Awards);
        spawn_section::<resource::About>(&weak, &fetcher, tickets.contact, Loaded::Contact);

        tracing::debug!("home page mounted");
        app
    }

    pub(crate) fn unmount(&self) {
        self.page.borrow_mut().unmount();
        if let Some(subscription) = self.subscription.take() {
            self.settings.unsubscribe(subscription);
        }
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.stop_splash();
        tracing::debug!("home page unmounted");
    }

    fn watch_language(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let language = Cell::new(self.settings.language());
        let subscription = self.settings.subscribe(move |settings: Settings| {
            // Theme changes only touch the nav icon, which the effect redraws.
            if settings.language == language.replace(settings.language) {
                return;
            }
            if let Some(app) = weak.upgrade() {
                app.render_all(settings);
            }
        });
        self.subscription.set(Some(subscription));
    }

    fn observe_sections(self: &Rc<Self>, threshold: f64) {
        let observer = match RevealObserver::new(threshold) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::error!(error = ?e, "IntersectionObserver unavailable; revealing all sections");
                for region in revealed_regions() {
                    self.reveal(region);
                }
                return;
            }
        };
        for region in revealed_regions() {
            let weak = Rc::downgrade(self);
            observer.observe_once(
                region.element_id(),
                Box::new(move || {
                    if let Some(app) = weak.upgrade() {
                        app.reveal(region);
                    }
                }),
            );
        }
        *self.observer.borrow_mut() = Some(observer);
    }

    fn start_splash(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let interval = dom::Interval::start(SplashProgress::TICK_MS, move || {
            let Some(app) = weak.upgrade() else {
                return;
            };
            let running = app.page.borrow_mut().splash_tick();
            app.render(Region::Splash);
            if !running {
                app.stop_splash();
            }
        });
        match interval {
            Ok(interval) => *self.splash.borrow_mut() = Some(interval),
            Err(e) => tracing::warn!(error = ?e, "splash timer unavailable"),
        }
    }

    fn stop_splash(&self) {
        if let Some(splash) = self.splash.borrow().as_ref() {
            splash.cancel();
        }
    }

    fn reveal(&self, region: Region) {
        if self.page.borrow_mut().reveal(region) {
            self.render(region);
        }
    }

    fn settle(&self, ticket: LoadTicket, loaded: Loaded) {
        let redraw = self.page.borrow_mut().settle(ticket, loaded);
        if let Some(region) = redraw {
            self.render(region);
            if region == Region::Projects {
                self.render(Region::Modal);
            }
        }
    }

    fn render(&self, region: Region) {
        let markup = self.page.borrow().render(region, self.settings.get());
        dom::set_inner_html(region.element_id(), markup);
    }

    fn render_all(&self, settings: Settings) {
        let page = self.page.borrow();
        for region in Region::HOME {
            dom::set_inner_html(region.element_id(), page.render(region, settings));
        }
    }

    pub(crate) fn handle(self: &Rc<Self>, action: Action) {
        let effects = self.page.borrow_mut().handle(action);
        self.run(effects);
    }

    pub(crate) fn on_scroll(&self) {
        let changed = self.page.borrow_mut().set_scroll_y(dom::scroll_y());
        if changed {
            self.render(Region::Nav);
        }
    }

    fn logo_timer_elapsed(self: &Rc<Self>, ticket: TimerTicket) {
        let effects = self.page.borrow_mut().logo_timer_elapsed(ticket);
        self.run(effects);
    }

    /// Execute effects. No borrow of the page may be held here: settings
    /// listeners re-enter through `render_all`.
    fn run(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(region) => self.render(region),
                Effect::ScrollToSection(section) => {
                    let offset = self.page.borrow().config().behavior.nav_offset_px;
                    dom::scroll_to_section(section, offset);
                }
                Effect::ScrollToTop => dom::scroll_to(0.0, true),
                Effect::ArmLogoTimer(ticket) => {
                    let weak = Rc::downgrade(self);
                    dom::set_timeout(ticket.delay_ms, move || {
                        if let Some(app) = weak.upgrade() {
                            app.logo_timer_elapsed(ticket);
                        }
                    });
                }
                Effect::ToggleLanguage => {
                    self.settings.toggle_language();
                }
                Effect::ToggleTheme => {
                    self.settings.toggle_theme();
                }
                Effect::Navigate(route) => (self.navigate)(route),
                Effect::Download(download) => {
                    if let Err(e) = dom::download(&download) {
                        tracing::error!(error = ?e, "download failed");
                    }
                }
            }
        }
    }
}

/// Fetch one section's resource in the background and settle it on the app,
/// if the app is still mounted.
fn spawn_section<R>(
    app: &Weak<HomeApp>,
    fetcher: &HttpFetcher,
    ticket: LoadTicket,
    wrap: fn(Result<R::Record, ResourceError>) -> Loaded,
) where
    R: Resource + 'static,
{
    let app = Weak::clone(app);
    let fetcher = fetcher.clone();
    spawn_local(async move {
        let result = load::<R, _>(&fetcher).await;
        match app.upgrade() {
            Some(app) => app.settle(ticket, wrap(result)),
            None => tracing::debug!(resource = R::KEY, "page gone; dropping result"),
        }
    });
}
