//! Expand/collapse toggles for project detail panels.
//!
//! A `.project-toggle` names its panel by id in `data-target`. The panel's
//! `is-open` class is the source of truth; the button's `aria-expanded` and
//! label follow it.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::consts::{LABEL_COLLAPSED, LABEL_EXPANDED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailState {
    open: bool,
}

impl DetailState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Visible toggle label.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.open { LABEL_EXPANDED } else { LABEL_COLLAPSED }
    }
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document) -> crate::error::Result<()> {
    use web_sys::Element;

    use crate::consts::{ARIA_EXPANDED_ATTR, DETAILS_OPEN_CLASS, PROJECT_TARGET_ATTR, PROJECT_TOGGLE_SELECTOR};
    use crate::dom;
    use crate::error::Result;

    fn flip(button: &Element, details: &Element) -> Result<DetailState> {
        let next = DetailState::from_open(details.class_list().contains(DETAILS_OPEN_CLASS)).toggled();
        dom::set_class(details, DETAILS_OPEN_CLASS, next.is_open())?;
        dom::set_attr(button, ARIA_EXPANDED_ATTR, next.aria_expanded())?;
        button.set_text_content(Some(next.label()));
        Ok(next)
    }

    for button in dom::query_all(document, PROJECT_TOGGLE_SELECTOR)? {
        let (document, source) = (document.clone(), button.clone());
        dom::listen(&button, "click", move |_| {
            let Some(details) = source
                .get_attribute(PROJECT_TARGET_ATTR)
                .and_then(|id| document.get_element_by_id(&id))
            else {
                return;
            };
            if let Err(err) = flip(&source, &details) {
                log::warn!("project: toggle failed: {err}");
            }
        })?;
    }
    Ok(())
}
