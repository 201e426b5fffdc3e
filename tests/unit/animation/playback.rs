use super::*;

#[test]
fn single_cycle_maps_linearly() {
    let spec = RepeatSpec::default();
    assert_eq!(spec.position(0.0, 2.0).progress, 0.0);
    assert_eq!(spec.position(1.0, 2.0).progress, 0.5);
    let end = spec.position(2.0, 2.0);
    assert_eq!(end.progress, 1.0);
    assert!(end.completed);
}

#[test]
fn completion_requires_exhausted_repeats() {
    let spec = RepeatSpec {
        count: 1,
        ..RepeatSpec::default()
    };
    assert!(!spec.position(1.0, 1.0).completed);
    assert!(spec.position(2.0, 1.0).completed);
}

#[test]
fn yoyo_reverses_odd_cycles() {
    let spec = RepeatSpec {
        count: 1,
        yoyo: true,
        ..RepeatSpec::default()
    };
    let pos = spec.position(1.25, 1.0);
    assert_eq!(pos.cycle, 1);
    assert_eq!(pos.progress, 0.75);
    // The yoyo pair ends back at the start.
    let end = spec.position(2.0, 1.0);
    assert!(end.completed);
    assert_eq!(end.progress, 0.0);
}

#[test]
fn repeat_delay_holds_cycle_endpoint() {
    let spec = RepeatSpec {
        count: 1,
        delay: 1.0,
        ..RepeatSpec::default()
    };
    // Inside the delay window after the first cycle.
    let held = spec.position(1.5, 1.0);
    assert_eq!(held.cycle, 0);
    assert_eq!(held.progress, 1.0);
    assert!(!held.completed);
    // Second cycle starts after the delay.
    let second = spec.position(2.25, 1.0);
    assert_eq!(second.cycle, 1);
    assert_eq!(second.progress, 0.25);
}

#[test]
fn infinite_repeat_wraps_and_never_completes() {
    let spec = RepeatSpec {
        count: -1,
        yoyo: true,
        ..RepeatSpec::default()
    };
    let pos = spec.position(7.5, 1.0);
    assert_eq!(pos.cycle, 7);
    assert_eq!(pos.progress, 0.5);
    assert!(!pos.completed);
    assert!(!spec.position(1e6, 1.0).completed);
}

#[test]
fn total_duration_accounts_for_delays() {
    let spec = RepeatSpec {
        count: 2,
        delay: 0.5,
        ..RepeatSpec::default()
    };
    assert_eq!(spec.total_duration(2.0), 7.0);

    let infinite = RepeatSpec {
        count: -1,
        ..RepeatSpec::default()
    };
    assert_eq!(infinite.total_duration(2.0), 2.0);
}

#[test]
fn validate_rejects_bad_specs() {
    assert!(
        RepeatSpec {
            count: -2,
            ..RepeatSpec::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        RepeatSpec {
            delay: -0.1,
            ..RepeatSpec::default()
        }
        .validate()
        .is_err()
    );
    assert!(RepeatSpec::default().validate().is_ok());
}
