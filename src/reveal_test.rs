#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn new_tracker_is_all_pending() {
    let tracker = RevealTracker::new(3, 0.3);
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.pending_count(), 3);
    assert_eq!(tracker.state(0), Some(RevealState::Pending));
    assert_eq!(tracker.state(2), Some(RevealState::Pending));
}

#[test]
fn stays_pending_below_threshold() {
    let mut tracker = RevealTracker::new(1, 0.3);
    assert!(!tracker.observe(0, true, 0.1));
    assert!(!tracker.observe(0, true, 0.25));
    assert_eq!(tracker.state(0), Some(RevealState::Pending));
}

#[test]
fn not_intersecting_never_reveals() {
    let mut tracker = RevealTracker::new(1, 0.1);
    assert!(!tracker.observe(0, false, 1.0));
    assert_eq!(tracker.state(0), Some(RevealState::Pending));
}

#[test]
fn first_qualifying_report_reveals_once() {
    let mut tracker = RevealTracker::new(2, 0.3);
    assert!(tracker.observe(1, true, 0.3));
    assert_eq!(tracker.state(1), Some(RevealState::Revealed));
    assert!(!tracker.observe(1, true, 0.9));
    assert!(!tracker.observe(1, false, 0.0));
    assert_eq!(tracker.state(1), Some(RevealState::Revealed));
    assert_eq!(tracker.pending_count(), 1);
}

#[test]
fn leaving_and_reentering_does_not_revert() {
    let mut tracker = RevealTracker::new(1, 0.1);
    assert!(tracker.observe(0, true, 0.5));
    assert!(!tracker.observe(0, false, 0.0));
    assert!(!tracker.observe(0, true, 0.5));
    assert_eq!(tracker.state(0), Some(RevealState::Revealed));
}

#[test]
fn ratio_just_under_threshold_counts() {
    let mut tracker = RevealTracker::new(1, 0.3);
    assert!(tracker.observe(0, true, 0.2995));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut tracker = RevealTracker::new(1, 0.1);
    assert!(!tracker.observe(5, true, 1.0));
    assert_eq!(tracker.state(5), None);
    assert_eq!(tracker.pending_count(), 1);
}

#[test]
fn empty_tracker() {
    let tracker = RevealTracker::new(0, 0.1);
    assert!(tracker.is_empty());
    assert_eq!(tracker.pending_count(), 0);
}

// =============================================================
// ObserverOptions
// =============================================================

#[test]
fn observer_options_clamp_threshold() {
    assert_eq!(ObserverOptions::new(1.5, "0px").threshold, 1.0);
    assert_eq!(ObserverOptions::new(-0.2, "0px").threshold, 0.0);
}

#[test]
fn observer_options_deserialize() {
    let opts: ObserverOptions =
        serde_json::from_str(r#"{ "threshold": 0.25, "root_margin": "0px 0px -10px 0px" }"#).unwrap();
    assert_eq!(opts, ObserverOptions::new(0.25, "0px 0px -10px 0px"));
}
