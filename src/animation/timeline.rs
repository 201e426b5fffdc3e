//! Timeline construction and sequencing of tweens.

use crate::animation::playback::{PlayState, RepeatSpec};
use crate::animation::tween::Tween;
use crate::engine::targets::PropertyTargets;
use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::clamp_unit;

enum Child {
    Tween(Tween),
    Timeline(Timeline),
}

impl Child {
    fn total_duration(&self) -> f64 {
        match self {
            Self::Tween(t) => t.total_duration(),
            Self::Timeline(tl) => tl.total_duration(),
        }
    }

    fn render_at(&mut self, secs: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        match self {
            Self::Tween(t) => t.render_at(secs, targets),
            Self::Timeline(tl) => tl.render_at(secs, targets),
        }
    }

    fn rewind(&mut self, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        match self {
            Self::Tween(t) => t.rewind(targets),
            Self::Timeline(tl) => tl.rewind(targets),
        }
    }
}

/// Builder for a [`Timeline`]; children are data, appended in declaration
/// order and moved into the timeline on `build`.
///
/// Exclusive ownership of children makes self-containment structurally
/// impossible: a timeline cannot be added to itself, transitively or
/// otherwise.
pub struct TimelineBuilder {
    children: Vec<(f64, Child)>,
    repeat: RepeatSpec,
}

impl TimelineBuilder {
    fn duration_so_far(&self) -> f64 {
        self.children
            .iter()
            .map(|(offset, child)| offset + child.total_duration())
            .fold(0.0, f64::max)
    }

    /// Append a tween at the current end of the timeline.
    pub fn add(mut self, tween: Tween) -> Self {
        let end = self.duration_so_far();
        self.children.push((end, Child::Tween(tween)));
        self
    }

    /// Insert a tween at an explicit offset from timeline start.
    pub fn add_at(mut self, tween: Tween, offset: f64) -> Self {
        self.children.push((offset, Child::Tween(tween)));
        self
    }

    /// Append a nested timeline at the current end.
    pub fn add_timeline(mut self, timeline: Timeline) -> Self {
        let end = self.duration_so_far();
        self.children.push((end, Child::Timeline(timeline)));
        self
    }

    /// Insert a nested timeline at an explicit offset.
    pub fn add_timeline_at(mut self, timeline: Timeline, offset: f64) -> Self {
        self.children.push((offset, Child::Timeline(timeline)));
        self
    }

    /// Extra cycles at the composite level: `-1` infinite, `0` none.
    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat.count = count;
        self
    }

    /// Hold at the composite endpoint between cycles.
    pub fn repeat_delay(mut self, secs: f64) -> Self {
        self.repeat.delay = secs;
        self
    }

    /// Alternate the composite direction on odd cycles.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.repeat.yoyo = yoyo;
        self
    }

    /// Validate and build the timeline.
    pub fn build(self) -> TweenkitResult<Timeline> {
        self.repeat.validate()?;
        if self.children.is_empty() {
            return Err(TweenkitError::config("timeline needs at least one child"));
        }
        for (offset, _) in &self.children {
            if !offset.is_finite() || *offset < 0.0 {
                return Err(TweenkitError::config(
                    "timeline child offset must be >= 0",
                ));
            }
        }
        Ok(Timeline {
            children: self.children,
            repeat: self.repeat,
            state: PlayState::Idle,
            elapsed: 0.0,
        })
    }
}

/// An ordered, composable container of tweens and nested timelines with its
/// own playback controls.
///
/// Each frame, the timeline converts its playhead into a per-child local
/// time: composite repeat/yoyo remap the global elapsed first, then every
/// child receives `local - offset`, clamped into its own window. Children
/// render in declaration order; when two children write the same property on
/// the same target, the later declaration wins within the tick.
///
/// Seeking computes every child's state directly from the requested time —
/// there is no hidden accumulator to replay.
pub struct Timeline {
    children: Vec<(f64, Child)>,
    repeat: RepeatSpec,
    state: PlayState,
    elapsed: f64,
}

impl Timeline {
    /// Start building a timeline.
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder {
            children: Vec::new(),
            repeat: RepeatSpec::default(),
        }
    }

    /// Derived duration of one composite cycle: the furthest child end.
    pub fn cycle_duration(&self) -> f64 {
        self.children
            .iter()
            .map(|(offset, child)| offset + child.total_duration())
            .fold(0.0, f64::max)
    }

    /// Full duration including composite repeats and inter-cycle delays.
    /// Infinite repeats report a single cycle.
    pub fn total_duration(&self) -> f64 {
        self.repeat.total_duration(self.cycle_duration())
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the timeline has no children (builders reject this).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// True when playback is explicitly paused.
    pub fn paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    /// Direction-adjusted composite progress over one cycle in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.repeat
            .position(self.elapsed, self.cycle_duration())
            .progress
    }

    /// Normalized position of the child at `index` within its own window,
    /// derived from the current playhead.
    pub fn child_progress(&self, index: usize) -> Option<f64> {
        let cycle = self.cycle_duration();
        let local = self.repeat.position(self.elapsed, cycle).progress * cycle;
        let (offset, child) = self.children.get(index)?;
        Some(clamp_unit((local - offset) / child.total_duration()))
    }

    /// Begin or resume playback.
    pub fn play(&mut self) {
        if matches!(self.state, PlayState::Idle | PlayState::Paused) {
            self.state = PlayState::Active;
        }
    }

    /// Freeze at the current position.
    pub fn pause(&mut self) {
        if self.state == PlayState::Active {
            self.state = PlayState::Paused;
        }
    }

    /// Return to the start, ready to play again. Children keep any lazily
    /// captured start values.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.state = PlayState::Idle;
    }

    /// Advance with a wall-clock delta and emit writes.
    pub fn advance(&mut self, dt: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        if self.state == PlayState::Idle {
            self.state = PlayState::Active;
        }
        if self.state != PlayState::Active {
            return Ok(());
        }
        self.elapsed += dt.max(0.0);
        self.render(targets)
    }

    /// Jump to an absolute time; every child's state derives directly from
    /// it, with no intermediate ticks.
    pub fn seek(&mut self, secs: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        if matches!(self.state, PlayState::Idle | PlayState::Completed) {
            self.state = PlayState::Active;
        }
        self.elapsed = secs.clamp(0.0, self.total_duration());
        self.render(targets)
    }

    /// Set absolute progress over the full duration (externally driven).
    ///
    /// Clamped silently; a Completed timeline is pulled back to Active so
    /// drivers can scrub past the end and return.
    pub fn set_progress(
        &mut self,
        progress: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        if matches!(self.state, PlayState::Idle | PlayState::Completed) {
            self.state = PlayState::Active;
        }
        if self.state == PlayState::Paused {
            return Ok(());
        }
        self.elapsed = clamp_unit(progress) * self.total_duration();
        self.render(targets)
    }

    /// Render at an absolute local time without touching playback state.
    pub(crate) fn render_at(
        &mut self,
        secs: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        self.elapsed = secs.clamp(0.0, self.total_duration());
        self.render(targets)
    }

    /// Hold every started child at its initial state and move the playhead
    /// to 0. Children that never started stay untouched.
    pub(crate) fn rewind(&mut self, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        self.elapsed = 0.0;
        for (_, child) in &mut self.children {
            child.rewind(targets)?;
        }
        Ok(())
    }

    fn render(&mut self, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        let cycle = self.cycle_duration();
        let pos = self.repeat.position(self.elapsed, cycle);
        let local = pos.progress * cycle;

        for (offset, child) in &mut self.children {
            let child_local = local - *offset;
            let child_end = child.total_duration();
            let result = if child_local < 0.0 {
                // Not reached at this position: started children hold their
                // initial state, unstarted children stay lazy.
                child.rewind(targets)
            } else {
                child.render_at(child_local.min(child_end), targets)
            };
            if let Err(err) = result {
                if matches!(err, TweenkitError::Target(_)) {
                    tracing::warn!(error = %err, "skipping timeline child writes this tick");
                } else {
                    return Err(err);
                }
            }
        }

        if pos.completed && self.state == PlayState::Active {
            self.state = PlayState::Completed;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;