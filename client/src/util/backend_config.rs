//! Backend config discovery in the browser.
//!
//! The server renders the configured base URL into
//! `<meta name="advisor-backend-url">`. After hydration there is no server
//! context, so the client reads that tag back. A missing or invalid value
//! falls back to the default backend instead of failing hydration.

#[cfg(test)]
#[path = "backend_config_test.rs"]
mod backend_config_test;

use advisor::BackendConfig;

/// `name` of the `<meta>` tag carrying the backend base URL.
pub const BACKEND_URL_META: &str = "advisor-backend-url";

/// Turn the raw `<meta content>` value into a config.
pub fn resolve(raw: Option<&str>) -> BackendConfig {
    BackendConfig::from_optional(raw).unwrap_or_else(|err| {
        #[cfg(feature = "hydrate")]
        {
            log::warn!("{err}; using default backend");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = err;
        }
        BackendConfig::default()
    })
}

/// Read the backend config from the current document.
///
/// Returns the default config outside the browser.
pub fn read_from_document() -> BackendConfig {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&meta_selector()).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        resolve(content.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        BackendConfig::default()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn meta_selector() -> String {
    format!("meta[name=\"{BACKEND_URL_META}\"]")
}
