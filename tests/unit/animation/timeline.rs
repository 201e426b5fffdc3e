use super::*;
use crate::animation::value::Value;
use crate::engine::targets::{MemoryTargets, TargetId};

const BOX: TargetId = TargetId(1);

fn x_tween(from: f64, to: f64, duration: f64) -> Tween {
    Tween::builder(BOX)
        .goal_from("x", Value::Number(from), Value::Number(to))
        .duration(duration)
        .build()
        .unwrap()
}

fn prop_tween(prop: &str, to: f64, duration: f64) -> Tween {
    Tween::builder(BOX)
        .goal_from(prop, Value::Number(0.0), Value::Number(to))
        .duration(duration)
        .build()
        .unwrap()
}

fn magnitude(store: &MemoryTargets, prop: &str) -> f64 {
    store.value(BOX, prop).map(Value::magnitude).unwrap_or(f64::NAN)
}

#[test]
fn add_appends_sequentially() {
    let timeline = Timeline::builder()
        .add(x_tween(0.0, 1.0, 2.0))
        .add(x_tween(1.0, 2.0, 2.0))
        .add(x_tween(2.0, 3.0, 2.0))
        .build()
        .unwrap();
    assert_eq!(timeline.cycle_duration(), 6.0);
    assert_eq!(timeline.len(), 3);
}

#[test]
fn seek_places_children_directly() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .add(prop_tween("b", 100.0, 2.0))
        .add(prop_tween("c", 100.0, 2.0))
        .build()
        .unwrap();

    timeline.seek(5.0, &mut store).unwrap();
    assert_eq!(timeline.child_progress(0), Some(1.0));
    assert_eq!(timeline.child_progress(1), Some(1.0));
    assert_eq!(timeline.child_progress(2), Some(0.5));
    assert_eq!(magnitude(&store, "a"), 100.0);
    assert_eq!(magnitude(&store, "b"), 100.0);
    assert_eq!(magnitude(&store, "c"), 50.0);
}

#[test]
fn seek_is_independent_of_tick_history() {
    let mut ticked_store = MemoryTargets::new();
    let mut ticked = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .add(prop_tween("b", 100.0, 2.0))
        .build()
        .unwrap();
    for _ in 0..7 {
        ticked.advance(0.5, &mut ticked_store).unwrap();
    }
    ticked.seek(1.0, &mut ticked_store).unwrap();

    let mut fresh_store = MemoryTargets::new();
    let mut fresh = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .add(prop_tween("b", 100.0, 2.0))
        .build()
        .unwrap();
    fresh.seek(1.0, &mut fresh_store).unwrap();

    assert_eq!(ticked.child_progress(0), fresh.child_progress(0));
    assert_eq!(ticked.child_progress(1), fresh.child_progress(1));
    assert_eq!(magnitude(&ticked_store, "a"), magnitude(&fresh_store, "a"));
}

#[test]
fn child_before_its_window_holds_initial_state() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .add(prop_tween("b", 100.0, 2.0))
        .build()
        .unwrap();

    // Move into the second child's window, then scrub back before it.
    timeline.seek(3.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 50.0);
    timeline.seek(1.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 0.0);
    assert_eq!(magnitude(&store, "a"), 50.0);
}

#[test]
fn unstarted_children_stay_unresolved_on_rewind() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .add(
            Tween::builder(BOX)
                .goal("b", Value::Number(100.0))
                .duration(2.0)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    store.insert(BOX, "b", Value::Number(0.0));

    // Only the first child's window is entered; the second keeps its lazy
    // endpoints and writes nothing.
    timeline.seek(1.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 0.0);
    store.insert(BOX, "b", Value::Number(7.0));
    timeline.seek(0.5, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 7.0);
}

#[test]
fn composite_yoyo_reverses_global_time() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add(prop_tween("a", 100.0, 1.0))
        .add(prop_tween("b", 100.0, 1.0))
        .repeat(1)
        .yoyo(true)
        .build()
        .unwrap();

    // Forward cycle finishes both children.
    timeline.advance(2.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 100.0);

    // Halfway into the reversed cycle, global time is 1.0: the second child
    // is back at its start.
    timeline.advance(1.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "b"), 0.0);
    assert_eq!(magnitude(&store, "a"), 100.0);
}

#[test]
fn nested_timelines_behave_as_single_children() {
    let mut store = MemoryTargets::new();
    let inner = Timeline::builder()
        .add(prop_tween("a", 100.0, 1.0))
        .add(prop_tween("b", 100.0, 1.0))
        .build()
        .unwrap();
    let mut outer = Timeline::builder()
        .add(prop_tween("c", 100.0, 1.0))
        .add_timeline(inner)
        .build()
        .unwrap();

    assert_eq!(outer.cycle_duration(), 3.0);
    outer.seek(2.5, &mut store).unwrap();
    assert_eq!(magnitude(&store, "c"), 100.0);
    assert_eq!(magnitude(&store, "a"), 100.0);
    assert_eq!(magnitude(&store, "b"), 50.0);
}

#[test]
fn later_children_win_overlapping_writes() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add_at(prop_tween("x", 100.0, 2.0), 0.0)
        .add_at(prop_tween("x", 40.0, 2.0), 0.0)
        .build()
        .unwrap();

    timeline.seek(1.0, &mut store).unwrap();
    assert_eq!(magnitude(&store, "x"), 20.0);
}

#[test]
fn pause_freezes_the_whole_composition() {
    let mut store = MemoryTargets::new();
    let mut timeline = Timeline::builder()
        .add(prop_tween("a", 100.0, 2.0))
        .build()
        .unwrap();

    timeline.advance(1.0, &mut store).unwrap();
    timeline.pause();
    assert!(timeline.paused());
    timeline.advance(5.0, &mut store).unwrap();
    assert_eq!(timeline.progress(), 0.5);
    timeline.play();
    timeline.advance(1.0, &mut store).unwrap();
    assert_eq!(timeline.state(), PlayState::Completed);
}

#[test]
fn infinite_child_contributes_one_cycle_to_duration() {
    let child = Tween::builder(BOX)
        .goal_from("x", Value::Number(0.0), Value::Number(1.0))
        .duration(2.0)
        .repeat(-1)
        .build()
        .unwrap();
    let timeline = Timeline::builder().add(child).build().unwrap();
    assert_eq!(timeline.cycle_duration(), 2.0);
}

#[test]
fn build_rejects_bad_configuration() {
    assert!(Timeline::builder().build().is_err(), "empty timeline");
    assert!(
        Timeline::builder()
            .add_at(x_tween(0.0, 1.0, 1.0), -0.5)
            .build()
            .is_err(),
        "negative offset"
    );
    assert!(
        Timeline::builder()
            .add(x_tween(0.0, 1.0, 1.0))
            .repeat(-4)
            .build()
            .is_err(),
        "bad repeat"
    );
}
