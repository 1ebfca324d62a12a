//! Mobile navigation toggle with body scroll lock.
//!
//! The open/closed state is never stored: it is read back from the panel's
//! `active` class on every click.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::SCROLL_LOCKED_OVERFLOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn closed() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// `body.style.overflow` for this state; empty restores the stylesheet value.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { SCROLL_LOCKED_OVERFLOW } else { "" }
    }
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document) -> crate::error::Result<()> {
    use web_sys::{Document, Element};

    use crate::consts::{ACTIVE_CLASS, NAV_LINKS_SELECTOR, NAV_TOGGLE_SELECTOR};
    use crate::dom;
    use crate::error::Result;

    fn apply(document: &Document, toggle: &Element, panel: &Element, state: NavState) -> Result<()> {
        dom::set_class(toggle, ACTIVE_CLASS, state.is_open())?;
        dom::set_class(panel, ACTIVE_CLASS, state.is_open())?;
        if let Some(body) = document.body() {
            dom::set_style(&body, "overflow", state.body_overflow())?;
        }
        Ok(())
    }

    let (Some(toggle), Some(panel)) = (
        dom::query_one(document, NAV_TOGGLE_SELECTOR)?,
        dom::query_one(document, NAV_LINKS_SELECTOR)?,
    ) else {
        log::debug!("nav: toggle or panel missing, skipped");
        return Ok(());
    };

    {
        let (document, target, panel) = (document.clone(), toggle.clone(), panel.clone());
        dom::listen(&toggle, "click", move |_| {
            let next = NavState::from_open(panel.class_list().contains(ACTIVE_CLASS)).toggled();
            if let Err(err) = apply(&document, &target, &panel, next) {
                log::warn!("nav: toggle failed: {err}");
            }
        })?;
    }

    for link in dom::query_all_in(&panel, "a")? {
        let (document, toggle, panel) = (document.clone(), toggle.clone(), panel.clone());
        dom::listen(&link, "click", move |_| {
            if let Err(err) = apply(&document, &toggle, &panel, NavState::closed()) {
                log::warn!("nav: close failed: {err}");
            }
        })?;
    }
    Ok(())
}
