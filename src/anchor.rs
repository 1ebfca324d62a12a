//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id an `href` points at, if it is a non-empty in-page fragment.
///
/// `"#"` and anything not starting with `#` yield `None`, leaving the click
/// to the browser.
#[must_use]
pub fn fragment_id(href: Option<&str>) -> Option<&str> {
    href?.trim().strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document) -> crate::error::Result<()> {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use crate::consts::IN_PAGE_ANCHOR_SELECTOR;
    use crate::dom;

    let anchors = dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let (document, source) = (document.clone(), anchor.clone());
        dom::listen(anchor, "click", move |event| {
            let href = source.get_attribute("href");
            let Some(target) = fragment_id(href.as_deref()).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    log::debug!("anchor: {} links", anchors.len());
    Ok(())
}
