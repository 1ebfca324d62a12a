use super::*;

#[test]
fn default_is_closed_and_unlocked() {
    let state = NavState::default();
    assert!(!state.is_open());
    assert_eq!(state.body_overflow(), "");
}

#[test]
fn open_locks_scroll() {
    let state = NavState::closed().toggled();
    assert!(state.is_open());
    assert_eq!(state.body_overflow(), "hidden");
}

#[test]
fn toggling_twice_restores_scroll_lock() {
    for start in [NavState::from_open(false), NavState::from_open(true)] {
        let back = start.toggled().toggled();
        assert_eq!(back, start);
        assert_eq!(back.body_overflow(), start.body_overflow());
    }
}

#[test]
fn closing_an_open_menu_unlocks() {
    let open = NavState::from_open(true);
    assert_eq!(open.body_overflow(), "hidden");
    assert_eq!(NavState::closed().body_overflow(), "");
}
