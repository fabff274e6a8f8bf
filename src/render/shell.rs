//! Full HTML documents.
//!
//! Every route is served from the same document: head, embedded runtime
//! config, an `#app` element holding the route's initial markup, and the
//! module script that boots the browser runtime. `404.html` is the exception;
//! it only bounces unknown paths back to the root (the GitHub Pages
//! single-page-app trick).

use crate::config::RuntimeConfig;
use crate::i18n::Language;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Id of the `<script type="application/json">` holding [`RuntimeConfig`].
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Id of the element whose contents are swapped on route changes.
pub const APP_ELEMENT_ID: &str = "app";

/// Browser runtime entry, relative to the site root.
pub const SCRIPT_PATH: &str = "pkg/folio.js";

/// `sessionStorage` key the 404 page leaves the requested URL under.
pub const REDIRECT_KEY: &str = "redirect";

/// Serialize `value` for embedding inside a `<script>` element.
pub fn script_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Renders the base HTML document structure.
pub fn base_document(
    runtime: &RuntimeConfig,
    generator: &str,
    content: Markup,
) -> Result<Markup, serde_json::Error> {
    let config_json = script_json(runtime)?;
    let version = &runtime.data_version;
    let boot = format!("import init from \"./{SCRIPT_PATH}?v={version}\";\ninit();");
    let language: Language = runtime.behavior.default_language;

    Ok(html! {
        (DOCTYPE)
        html lang=(language.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(generator);
                base href=(runtime.site.base_path);
                title { (runtime.site.title) }
                link rel="stylesheet" href={ "style.css?v=" (version) };
                script type="application/json" id=(CONFIG_ELEMENT_ID) {
                    (PreEscaped(config_json))
                }
            }
            body {
                div id=(APP_ELEMENT_ID) {
                    (content)
                }
                script type="module" { (PreEscaped(boot)) }
            }
        }
    })
}

/// `404.html`: remember where the visitor wanted to go, then load the root,
/// where the runtime restores the URL and routes to it.
pub fn render_not_found(base_path: &str) -> Result<Markup, serde_json::Error> {
    let script = format!(
        "sessionStorage.setItem({key}, location.href);\nlocation.replace({base});",
        key = script_json(&REDIRECT_KEY)?,
        base = script_json(&base_path)?,
    );
    Ok(html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { "Redirecting" }
                script { (PreEscaped(script)) }
            }
            body {}
        }
    })
}
