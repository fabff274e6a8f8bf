//! # Folio
//!
//! A single-page personal portfolio: hero, about, experience, skills,
//! projects with a detail modal, awards and contact, plus a hidden data
//! viewer opened by triple-clicking the logo.
//!
//! # Architecture: One Renderer, Two Hosts
//!
//! Section content lives in five JSON files under `data/`. Nothing in them is
//! baked into the HTML. The crate compiles twice:
//!
//! ```text
//! native   folio build   content/  →  dist/       (validate, write shells, copy data)
//! wasm32   pkg/folio.js  dist/data  →  live DOM   (fetch, render, handle events)
//! ```
//!
//! Both hosts call the same pure render functions in [`render`], which return
//! Maud markup. The CLI writes that markup once, with every section in its
//! loading skeleton. The browser runtime re-renders a [`action::Region`]
//! into its host element whenever that region's state changes.
//!
//! State and behavior live in plain structs ([`page::PortfolioPage`],
//! [`admin::AdminPage`]) that take an [`action::Action`] and return
//! [`action::Effect`]s. The wasm driver executes those effects against the
//! DOM, so every interaction is testable without a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Record types for the five data files |
//! | [`resource`] | Resource keys, paths, decoding and schema checks |
//! | [`loader`] | `Fetch` abstraction, per-section load state, stale-result guard |
//! | [`bundle`] | The all-in-one `portfolio_data.json` bundle |
//! | [`i18n`] | Korean/English UI strings |
//! | [`settings`] | Shared language and theme, with change listeners |
//! | [`visibility`] | Reveal-on-scroll state and stagger timing |
//! | [`gesture`] | Logo multi-click detector |
//! | [`section`] | Section ids and nav order |
//! | [`route`] | Home and admin routes under the deploy base path |
//! | [`action`] | Delegated DOM events, render regions, side effects |
//! | [`page`] | Home page state machine |
//! | [`admin`] | Data viewer state machine and edits |
//! | [`render`] | Maud markup for every region and the document shell |
//! | [`config`] | `config.toml` loading, validation, color CSS |
//! | [`site`] | Static build: shells, stylesheet, data and asset copy |
//! | [`output`] | CLI output formatting |

pub mod action;
pub mod admin;
pub mod bundle;
pub mod config;
pub mod gesture;
pub mod i18n;
pub mod loader;
pub mod output;
pub mod page;
pub mod render;
pub mod resource;
pub mod route;
pub mod section;
pub mod settings;
pub mod site;
pub mod types;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
mod web;
