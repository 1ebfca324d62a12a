//! Reveal-once visibility tracking.
//!
//! Every observed element starts [`RevealState::Pending`] and moves to
//! [`RevealState::Revealed`] the first time it is seen intersecting the
//! viewport at or above the configured ratio. There is no way back.
//!
//! [`RevealTracker`] is the browser-free state machine. Under `hydrate`,
//! [`reveal_once`] binds it to an `IntersectionObserver` so skill bars and
//! content cards share one observer setup.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

use crate::consts::RATIO_EPSILON;

/// Per-element position in the reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not yet seen at the required visibility.
    #[default]
    Pending,
    /// Transition applied; never observed again.
    Revealed,
}

/// Intersection observer settings: visibility ratio and root margin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObserverOptions {
    /// Fraction of the element (0.0–1.0) that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), root_margin: root_margin.to_owned() }
    }
}

/// One-shot reveal state for a fixed, indexed set of elements.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    threshold: f64,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { states: vec![RevealState::Pending; count], threshold }
    }

    /// Whether an intersection report meets the visibility requirement.
    #[must_use]
    pub fn qualifies(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold - RATIO_EPSILON
    }

    /// Feed one intersection report for element `index`.
    ///
    /// Returns `true` only for the report that flips the element from
    /// pending to revealed. Out-of-range indices are ignored.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let qualifies = self.qualifies(is_intersecting, ratio);
        match self.states.get_mut(index) {
            Some(state @ RevealState::Pending) if qualifies => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Pending).count()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::reveal_once;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{ObserverOptions, RevealTracker};
    use crate::dom;
    use crate::error::{Error, Result};

    /// Observe every element matching `selectors` and run `apply` on each one
    /// exactly once, when it first becomes visible enough.
    ///
    /// `prepare` runs synchronously for each element, in document order, before
    /// observation starts. Returns the number of elements observed.
    pub fn reveal_once<P, A>(document: &Document, selectors: &str, options: &ObserverOptions, mut prepare: P, apply: A) -> Result<usize>
    where
        P: FnMut(usize, &Element) -> Result<()>,
        A: Fn(&Element) -> Result<()> + 'static,
    {
        let elements = dom::query_all(document, selectors)?;
        if elements.is_empty() {
            log::debug!("reveal: nothing matches {selectors:?}");
            return Ok(0);
        }
        for (index, element) in elements.iter().enumerate() {
            prepare(index, element)?;
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len(), options.threshold)));
        let targets = Rc::new(elements.clone());
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                    if let Err(err) = apply(&target) {
                        log::warn!("reveal: apply failed for element {index}: {err}");
                    }
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
            .map_err(|e| Error::js("IntersectionObserver::new", &e))?;
        // The observer keeps calling back for the page's lifetime.
        cb.forget();

        for element in &elements {
            observer.observe(element);
        }
        Ok(elements.len())
    }
}
