use super::*;

const THRESHOLD: f64 = 50.0;

fn palette() -> NavbarPalette {
    NavbarPalette::new(" rgba(10, 10, 10, 0.6) ", "rgba(10, 10, 10, 0.95)")
}

#[test]
fn top_of_page_uses_default() {
    assert_eq!(palette().background_for(0.0, THRESHOLD), "rgba(10, 10, 10, 0.6)");
}

#[test]
fn exactly_at_threshold_is_not_scrolled() {
    assert!(!is_scrolled(50.0, THRESHOLD));
    assert_eq!(palette().background_for(50.0, THRESHOLD), "rgba(10, 10, 10, 0.6)");
}

#[test]
fn past_threshold_uses_scrolled() {
    assert!(is_scrolled(50.5, THRESHOLD));
    assert_eq!(palette().background_for(400.0, THRESHOLD), "rgba(10, 10, 10, 0.95)");
}

#[test]
fn scrolling_back_up_restores_default() {
    let p = palette();
    assert_eq!(p.background_for(120.0, THRESHOLD), p.scrolled);
    assert_eq!(p.background_for(10.0, THRESHOLD), p.default);
}

#[test]
fn palette_trims_computed_values() {
    let p = NavbarPalette::new("  #fff\n", "\t#eee ");
    assert_eq!(p, NavbarPalette { default: "#fff".into(), scrolled: "#eee".into() });
}

#[test]
fn undefined_variables_resolve_to_empty() {
    let p = NavbarPalette::new("", "");
    assert_eq!(p.background_for(100.0, THRESHOLD), "");
}
