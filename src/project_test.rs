use super::*;

fn triple(state: DetailState) -> (&'static str, &'static str, bool) {
    (state.label(), state.aria_expanded(), state.is_open())
}

#[test]
fn collapsed_shows_view_details() {
    assert_eq!(triple(DetailState::default()), ("View details", "false", false));
}

#[test]
fn one_activation_expands() {
    let state = DetailState::from_open(false).toggled();
    assert_eq!(triple(state), ("Hide details", "true", true));
}

#[test]
fn second_activation_restores_original() {
    let start = DetailState::from_open(false);
    assert_eq!(triple(start.toggled().toggled()), triple(start));
}

#[test]
fn starts_from_panel_class_not_label() {
    // A panel already marked open collapses on the first click.
    let state = DetailState::from_open(true).toggled();
    assert_eq!(triple(state), ("View details", "false", false));
}
