//! Skill bar fill animation.
//!
//! Each `.skill-fill` carries its percentage in `data-level`. The width is
//! applied once, when the bar first scrolls far enough into view.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Parse a `data-level` attribute into a 0–100 percentage.
///
/// Decimals are truncated on purpose: levels are whole percentages, so
/// `"72.9"` fills to `72%`. Out-of-range values are clamped. Missing or
/// unparsable input yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_level(raw: Option<&str>) -> u8 {
    match raw.map(|r| r.trim().parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() => value.trunc().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// CSS width for a bar filled to `level` percent.
#[must_use]
pub fn fill_width(level: u8) -> String {
    format!("{level}%")
}

#[cfg(feature = "hydrate")]
pub fn install(document: &web_sys::Document, config: &crate::config::Config) -> crate::error::Result<()> {
    use crate::consts::{SKILL_FILL_SELECTOR, SKILL_LEVEL_ATTR};
    use crate::{dom, reveal};

    let count = reveal::reveal_once(
        document,
        SKILL_FILL_SELECTOR,
        &config.skill_bars,
        |_, _| Ok(()),
        |bar| {
            let level = parse_level(bar.get_attribute(SKILL_LEVEL_ATTR).as_deref());
            dom::set_style(bar, "width", &fill_width(level))
        },
    )?;
    log::debug!("skills: observing {count} bars");
    Ok(())
}
