//! Debouncer behaviour under a manual clock.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::{make_component, RecordingHost};
use lwc_css_core::{AvailabilityTracker, Debouncer, ManualClock};
use tempfile::TempDir;

const DELAY: Duration = Duration::from_millis(75);

#[test]
fn nothing_fires_before_the_first_trigger() {
    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);

    clock.advance(Duration::from_secs(1));

    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.remaining(), None);
    assert!(!debouncer.fire_if_due());
}

#[test]
fn fires_once_after_delay() {
    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);

    debouncer.trigger();
    clock.advance(Duration::from_millis(74));
    assert!(!debouncer.fire_if_due());
    assert_eq!(debouncer.remaining(), Some(Duration::from_millis(1)));

    clock.advance(Duration::from_millis(1));
    assert!(debouncer.fire_if_due());
    assert!(!debouncer.fire_if_due());
    assert!(!debouncer.is_pending());
}

#[test]
fn retrigger_resets_the_deadline() {
    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);

    debouncer.trigger();
    clock.advance(Duration::from_millis(60));
    debouncer.trigger();
    clock.advance(Duration::from_millis(60));

    assert!(!debouncer.fire_if_due());
    clock.advance(Duration::from_millis(15));
    assert!(debouncer.fire_if_due());
}

#[test]
fn cancel_drops_the_pending_deadline() {
    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);

    debouncer.trigger();
    debouncer.cancel();
    clock.advance(DELAY * 2);

    assert!(!debouncer.fire_if_due());
}

#[test]
fn remaining_saturates_at_zero() {
    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);

    debouncer.trigger();
    clock.advance(Duration::from_secs(5));

    assert_eq!(debouncer.remaining(), Some(Duration::ZERO));
}

/// Three editor switches inside one window produce one recomputation, run
/// against whichever document is active when the timer fires.
#[test]
fn rapid_switches_coalesce_into_one_recomputation() {
    let dir = TempDir::new().expect("temp dir");
    let first = make_component(dir.path(), "first");
    let second = make_component(dir.path(), "second");
    std::fs::write(second.join("second.css"), "").unwrap();
    let other: PathBuf = dir.path().join("README.md");
    std::fs::write(&other, "").unwrap();

    let clock = ManualClock::new();
    let mut debouncer = Debouncer::new(clock.clone(), DELAY);
    let mut host = RecordingHost::default();
    let mut tracker = AvailabilityTracker::new("ctx");
    let mut recomputations = 0;

    for active in [first.join("first.js"), other, second.join("second.js")] {
        host.active = Some(active);
        debouncer.trigger();
        clock.advance(Duration::from_millis(20));
        if debouncer.fire_if_due() {
            recomputations += 1;
            tracker.recompute(&mut host, None);
        }
    }

    clock.advance(DELAY);
    if debouncer.fire_if_due() {
        recomputations += 1;
        tracker.recompute(&mut host, None);
    }

    assert_eq!(recomputations, 1);
    // The last active document has a stylesheet, so the single publish is false.
    assert_eq!(host.published(), vec![false]);
}
