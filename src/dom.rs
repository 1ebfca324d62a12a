//! Thin web-sys helpers shared by the behavior installers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every installer needs the same handful of lookups and a way to attach
//! long-lived listeners. Keeping that glue here lets the behavior modules
//! read as "find elements, attach core logic".

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(Error::NoDocument)
}

/// First element matching `selector`, if any.
pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| Error::js("query_selector", &e))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(|e| Error::js("query_selector_all", &e))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    root.query_selector_all(selector)
        .map(elements)
        .map_err(|e| Error::js("query_selector_all", &e))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| Error::js("add_event_listener", &e))?;
    cb.forget();
    Ok(())
}

/// Set an inline style property. Non-HTML elements are left untouched.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style()
        .set_property(property, value)
        .map_err(|e| Error::js("style.set_property", &e))
}

/// Add or remove `class` on `element` according to `on`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| Error::js("class_list.toggle", &e))
}

pub fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| Error::js("set_attribute", &e))
}
