//! Staggered fade-in for content cards and sections.
//!
//! Matched elements are hidden up front with a transition whose delay grows
//! with the element's position in document order, so a row of cards cascades
//! in. Each element is revealed once and then left alone.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::config::RevealConfig;

pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";

/// Transition delay for the element at `index`, in milliseconds.
#[must_use]
pub fn stagger_delay_ms(index: usize, config: &RevealConfig) -> u64 {
    u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(config.stagger_ms))
}

/// CSS `transition` for the element at `index`.
#[must_use]
pub fn transition_for(index: usize, config: &RevealConfig) -> String {
    let delay = stagger_delay_ms(index, config);
    let duration = config.duration_ms;
    format!("opacity {duration}ms ease {delay}ms, transform {duration}ms ease {delay}ms")
}

/// Inline styles applied before observation starts.
#[must_use]
pub fn hidden_style(index: usize, config: &RevealConfig) -> [(&'static str, String); 3] {
    [
        ("opacity", "0".to_owned()),
        ("transform", format!("translateY({}px)", config.offset_px)),
        ("transition", transition_for(index, config)),
    ]
}

/// Inline styles applied on reveal.
#[must_use]
pub fn revealed_style() -> [(&'static str, &'static str); 2] {
    [("opacity", REVEALED_OPACITY), ("transform", REVEALED_TRANSFORM)]
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &RevealConfig) -> crate::error::Result<()> {
    use crate::{dom, reveal};

    let Some(selectors) = config.selector_list() else {
        log::debug!("cards: no selectors configured, skipped");
        return Ok(());
    };
    let count = reveal::reveal_once(
        document,
        &selectors,
        &config.observer,
        |index, card| {
            for (property, value) in hidden_style(index, config) {
                dom::set_style(card, property, &value)?;
            }
            Ok(())
        },
        |card| {
            for (property, value) in revealed_style() {
                dom::set_style(card, property, value)?;
            }
            Ok(())
        },
    )?;
    log::debug!("cards: observing {count} elements");
    Ok(())
}
