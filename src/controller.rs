//! Page startup: runs every behavior installer once the document is ready.
//!
//! Installers are independent. A failing one is logged and skipped so the
//! rest of the page still gets its behaviors. The only cross-behavior link
//! is the navbar refresh registered on the theme store.

use web_sys::{Document, Window};

use crate::config::Config;
use crate::dom;
use crate::error::Result;
use crate::{anchor, cards, nav, navbar, project, skills, theme};

/// Run [`init`] now, or on `DOMContentLoaded` if the document is still loading.
///
/// # Errors
///
/// Returns an error only when there is no window/document to attach to.
pub fn start() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() == "loading" {
        let (w, d) = (window.clone(), document.clone());
        dom::listen(&document, "DOMContentLoaded", move |_| init(&w, &d))?;
    } else {
        init(&window, &document);
    }
    Ok(())
}

/// Install every behavior against `document`.
pub fn init(window: &Window, document: &Document) {
    let config = Config::load(document);

    report("mobile nav", nav::install(document));
    report("smooth scroll", anchor::install(document));
    report("skill bars", skills::install(document, &config));
    report("scroll reveal", cards::install(document, &config.reveal));
    report("project toggles", project::install(document));

    // Theme first so the navbar's initial refresh sees the mirrored theme.
    let store = match theme::install(window, document, &config) {
        Ok(store) => Some(store),
        Err(err) => {
            log::warn!("theme switcher: disabled, {err}");
            None
        }
    };
    let refresh = match navbar::install(window, document, &config) {
        Ok(refresh) => refresh,
        Err(err) => {
            log::warn!("navbar: disabled, {err}");
            None
        }
    };
    if let (Some(store), Some(refresh)) = (store, refresh) {
        store.borrow_mut().subscribe(move |_| refresh());
    }
    log::info!("folio: behaviors installed");
}

fn report(name: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{name}: disabled, {err}");
    }
}
