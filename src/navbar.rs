//! Navbar background that darkens once the page is scrolled.
//!
//! Both colors come from CSS custom properties on the document root, so they
//! follow the active theme. The background is recomputed on every scroll,
//! once at startup, and whenever the theme changes (see [`crate::theme`]).

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Resolved `--nav-bg` / `--nav-bg-scrolled` values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavbarPalette {
    pub default: String,
    pub scrolled: String,
}

impl NavbarPalette {
    #[must_use]
    pub fn new(default: &str, scrolled: &str) -> Self {
        Self { default: default.trim().to_owned(), scrolled: scrolled.trim().to_owned() }
    }

    /// Background for a page scrolled `scroll_y` pixels down.
    #[must_use]
    pub fn background_for(&self, scroll_y: f64, threshold: f64) -> &str {
        if is_scrolled(scroll_y, threshold) { self.scrolled.as_str() } else { self.default.as_str() }
    }
}

/// Strictly past `threshold`; exactly at it still counts as the top.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(feature = "hydrate")]
pub use browser::{Refresh, install};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use web_sys::{Document, Element, Window};

    use super::NavbarPalette;
    use crate::config::Config;
    use crate::consts::{NAV_BG_SCROLLED_VAR, NAV_BG_VAR, NAVBAR_SELECTOR, THEME_ATTR};
    use crate::dom;
    use crate::error::{Error, Result};

    /// Recomputes the navbar background on demand.
    pub type Refresh = Rc<dyn Fn()>;

    fn palette(window: &Window, root: &Element) -> Result<NavbarPalette> {
        let style = window
            .get_computed_style(root)
            .map_err(|e| Error::js("get_computed_style", &e))?
            .ok_or_else(|| Error::Js { context: "get_computed_style", message: "no style".into() })?;
        let read = |name: &str| {
            style
                .get_property_value(name)
                .map_err(|e| Error::js("get_property_value", &e))
        };
        Ok(NavbarPalette::new(&read(NAV_BG_VAR)?, &read(NAV_BG_SCROLLED_VAR)?))
    }

    fn apply(window: &Window, root: &Element, navbar: &Element, threshold: f64) -> Result<()> {
        log::trace!("navbar: refresh under theme {:?}", root.get_attribute(THEME_ATTR));
        let palette = palette(window, root)?;
        let scroll_y = window.scroll_y().map_err(|e| Error::js("scroll_y", &e))?;
        dom::set_style(navbar, "background", palette.background_for(scroll_y, threshold))
    }

    /// Track scroll position on the navbar. Returns `None` when the page has no navbar.
    pub fn install(window: &Window, document: &Document, config: &Config) -> Result<Option<Refresh>> {
        let Some(navbar) = dom::query_one(document, NAVBAR_SELECTOR)? else {
            log::debug!("navbar: not found, skipped");
            return Ok(None);
        };
        let root = document.document_element().ok_or(Error::NoDocument)?;
        let threshold = config.navbar_scroll_threshold_px;

        let target = window.clone();
        let refresh: Refresh = Rc::new(move || {
            if let Err(err) = apply(&target, &root, &navbar, threshold) {
                log::warn!("navbar: {err}");
            }
        });

        let on_scroll = Rc::clone(&refresh);
        dom::listen(window, "scroll", move |_| on_scroll())?;
        refresh();
        Ok(Some(refresh))
    }
}
