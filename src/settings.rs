//! Page-wide display settings: language and color theme.
//!
//! These are the only values shared across sections. They are held in a
//! [`SettingsHandle`] that is created once by the runtime and passed to
//! whoever needs it; writes go through the two `toggle_*` functions, which
//! notify listeners synchronously so every mounted section re-renders in the
//! same turn of the event loop.
//!
//! Neither value survives a reload. The theme is additionally reflected as a
//! `dark` class on the document element (see [`Theme::DARK_CLASS`]).

use crate::i18n::Language;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class toggled on `<html>` while the dark theme is active.
    pub const DARK_CLASS: &'static str = "dark";

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
}

type Listener = Box<dyn Fn(Settings)>;

/// Shared, single-writer settings cell.
#[derive(Clone, Default)]
pub struct SettingsHandle {
    current: Rc<Cell<Settings>>,
    listeners: Rc<RefCell<Vec<(u64, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

/// Returned by [`SettingsHandle::subscribe`]; pass to `unsubscribe` on unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

impl SettingsHandle {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
            ..Self::default()
        }
    }

    pub fn get(&self) -> Settings {
        self.current.get()
    }

    pub fn language(&self) -> Language {
        self.get().language
    }

    pub fn toggle_language(&self) -> Settings {
        self.update(|s| s.language = s.language.toggled())
    }

    pub fn toggle_theme(&self) -> Settings {
        self.update(|s| s.theme = s.theme.toggled())
    }

    pub fn subscribe(&self, listener: impl Fn(Settings) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.0);
    }

    fn update(&self, f: impl FnOnce(&mut Settings)) -> Settings {
        let mut next = self.current.get();
        f(&mut next);
        self.current.set(next);
        for (_, listener) in self.listeners.borrow().iter() {
            listener(next);
        }
        next
    }
}
