//! The process-wide animation scheduler.

use slotmap::{SlotMap, new_key_type};

use crate::animation::playback::PlayState;
use crate::animation::stagger::{self, StaggerSpec};
use crate::animation::timeline::Timeline;
use crate::animation::tween::{Tween, TweenBuilder};
use crate::engine::targets::{PropertyTargets, TargetId};
use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::scroll::driver::{ScrollBinding, ScrollDriver};

new_key_type! {
    /// Handle to a scheduled tween or timeline.
    pub struct AnimId;

    /// Handle to a scroll binding.
    pub struct ScrollId;
}

enum AnimNode {
    Tween(Tween),
    Timeline(Timeline),
}

impl AnimNode {
    fn state(&self) -> PlayState {
        match self {
            Self::Tween(t) => t.state(),
            Self::Timeline(tl) => tl.state(),
        }
    }

    fn progress(&self) -> f64 {
        match self {
            Self::Tween(t) => t.progress(),
            Self::Timeline(tl) => tl.progress(),
        }
    }

    fn play(&mut self) {
        match self {
            Self::Tween(t) => t.play(),
            Self::Timeline(tl) => tl.play(),
        }
    }

    fn pause(&mut self) {
        match self {
            Self::Tween(t) => t.pause(),
            Self::Timeline(tl) => tl.pause(),
        }
    }

    fn restart(&mut self) {
        match self {
            Self::Tween(t) => t.restart(),
            Self::Timeline(tl) => tl.restart(),
        }
    }

    fn advance(&mut self, dt: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        match self {
            Self::Tween(t) => t.advance(dt, targets),
            Self::Timeline(tl) => tl.advance(dt, targets),
        }
    }

    fn seek(&mut self, secs: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        match self {
            Self::Tween(t) => t.seek(secs, targets),
            Self::Timeline(tl) => tl.seek(secs, targets),
        }
    }

    fn set_progress(
        &mut self,
        progress: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        match self {
            Self::Tween(t) => t.set_progress(progress, targets),
            Self::Timeline(tl) => tl.set_progress(progress, targets),
        }
    }
}

struct AnimEntry {
    node: AnimNode,
    /// Bound scroll driver, if any; bound entries skip clock advancement.
    driver: Option<ScrollId>,
}

struct DriverEntry {
    driver: ScrollDriver,
    bound: AnimId,
}

/// Process-wide ticker owning every scheduled tween, timeline, and scroll
/// driver.
///
/// Construction is initialization and [`Scheduler::shutdown`] (or drop) is
/// teardown; there is no ambient global. Embedders hold the scheduler, drive
/// [`Scheduler::tick`] from their frame callback with monotonic non-negative
/// deltas, and feed scroll measurements through
/// [`Scheduler::update_scroll`].
///
/// Entries are processed in declaration order within a tick. Several active
/// entries may write the same `(target, property)`; nothing prevents the
/// overlap, and the last writer in declaration order wins for the tick —
/// callers are expected to avoid overlapping property ownership.
#[derive(Default)]
pub struct Scheduler {
    anims: SlotMap<AnimId, AnimEntry>,
    drivers: SlotMap<ScrollId, DriverEntry>,
    /// Declaration order for deterministic within-tick processing.
    order: Vec<AnimId>,
}

impl Scheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built tween; it becomes Active on its first tick.
    pub fn add_tween(&mut self, tween: Tween) -> AnimId {
        let id = self.anims.insert(AnimEntry {
            node: AnimNode::Tween(tween),
            driver: None,
        });
        self.order.push(id);
        id
    }

    /// Register a built timeline; it becomes Active on its first tick.
    pub fn add_timeline(&mut self, timeline: Timeline) -> AnimId {
        let id = self.anims.insert(AnimEntry {
            node: AnimNode::Timeline(timeline),
            driver: None,
        });
        self.order.push(id);
        id
    }

    /// Expand one declarative animation across a target group: one tween per
    /// target, each delayed by its computed stagger offset.
    ///
    /// The whole declaration is validated before anything registers, so a
    /// configuration error leaves the scheduler untouched.
    pub fn add_staggered(
        &mut self,
        targets: &[TargetId],
        spec: &StaggerSpec,
        mut tween: impl FnMut(TargetId) -> TweenBuilder,
    ) -> TweenkitResult<Vec<AnimId>> {
        let offsets = stagger::distribute(targets.len(), spec)?;
        let mut built = Vec::with_capacity(targets.len());
        for (&target, &offset) in targets.iter().zip(&offsets) {
            built.push(tween(target).delayed_by(offset).build()?);
        }
        Ok(built.into_iter().map(|t| self.add_tween(t)).collect())
    }

    /// Begin or resume playback of `id`.
    pub fn play(&mut self, id: AnimId) -> TweenkitResult<()> {
        self.entry_mut(id).map(|entry| entry.node.play())
    }

    /// Freeze `id` at its current position.
    pub fn pause(&mut self, id: AnimId) -> TweenkitResult<()> {
        self.entry_mut(id).map(|entry| entry.node.pause())
    }

    /// True when `id` is explicitly paused.
    pub fn paused(&self, id: AnimId) -> TweenkitResult<bool> {
        self.entry(id)
            .map(|entry| entry.node.state() == PlayState::Paused)
    }

    /// Return `id` to its declared start, ready to play again.
    pub fn restart(&mut self, id: AnimId) -> TweenkitResult<()> {
        self.entry_mut(id).map(|entry| entry.node.restart())
    }

    /// Jump `id` to an absolute time, emitting writes immediately.
    pub fn seek(
        &mut self,
        id: AnimId,
        secs: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        self.entry_mut(id)?.node.seek(secs, targets)
    }

    /// Direction-adjusted cycle progress of `id` in `[0, 1]`.
    pub fn progress_of(&self, id: AnimId) -> TweenkitResult<f64> {
        self.entry(id).map(|entry| entry.node.progress())
    }

    /// Current lifecycle state of `id`.
    pub fn state_of(&self, id: AnimId) -> TweenkitResult<PlayState> {
        self.entry(id).map(|entry| entry.node.state())
    }

    /// Remove `id` regardless of state, detaching any scroll binding.
    ///
    /// Synchronous: the entry is gone before the next tick. Writes already
    /// emitted this tick are not rolled back.
    pub fn kill(&mut self, id: AnimId) {
        if let Some(entry) = self.anims.remove(id) {
            if let Some(driver) = entry.driver {
                self.drivers.remove(driver);
            }
            self.order.retain(|&o| o != id);
        }
    }

    /// Bind `id` to scroll: clock advancement stops and measurements drive
    /// its progress instead.
    pub fn bind_to_scroll(
        &mut self,
        id: AnimId,
        binding: ScrollBinding,
    ) -> TweenkitResult<ScrollId> {
        binding.validate()?;
        let entry = self.entry_mut(id)?;
        if entry.driver.is_some() {
            return Err(TweenkitError::config("animation is already scroll-bound"));
        }
        let driver = self.drivers.insert(DriverEntry {
            driver: ScrollDriver::new(binding),
            bound: id,
        });
        // entry_mut above guarantees presence; re-fetch to satisfy the
        // borrow on `self.drivers` in between.
        if let Some(entry) = self.anims.get_mut(id) {
            entry.driver = Some(driver);
        }
        Ok(driver)
    }

    /// Remove a scroll binding, returning the animation to the clock.
    pub fn unbind_scroll(&mut self, id: ScrollId) {
        if let Some(entry) = self.drivers.remove(id)
            && let Some(anim) = self.anims.get_mut(entry.bound)
        {
            anim.driver = None;
        }
    }

    /// Ingest a scroll measurement for one binding.
    ///
    /// Immediate bindings emit writes now; smoothed bindings update their
    /// filter target and apply on the next tick. Positions past the trigger
    /// region clamp silently.
    #[tracing::instrument(skip(self, targets))]
    pub fn update_scroll(
        &mut self,
        id: ScrollId,
        pos: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        let entry = self
            .drivers
            .get_mut(id)
            .ok_or_else(|| TweenkitError::config("unknown scroll handle"))?;
        if let Some(progress) = entry.driver.measure(pos)
            && let Some(anim) = self.anims.get_mut(entry.bound)
            && let Err(err) = anim.node.set_progress(progress, targets)
        {
            if matches!(err, TweenkitError::Target(_)) {
                tracing::warn!(error = %err, "skipping scroll-bound writes");
            } else {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Advance the whole active set by `dt` seconds and emit writes.
    ///
    /// Clock-driven entries advance by `dt` in declaration order; smoothed
    /// scroll drivers then step their filters and apply to their bound
    /// entries; finally, Completed clock-driven entries leave the active
    /// set. A target resolution failure skips only the offending entry for
    /// this tick.
    #[tracing::instrument(skip(self, targets))]
    pub fn tick(&mut self, dt: f64, targets: &mut dyn PropertyTargets) {
        let dt = dt.max(0.0);

        for &id in &self.order {
            let Some(entry) = self.anims.get_mut(id) else {
                continue;
            };
            if entry.driver.is_some() {
                continue; // externally driven
            }
            if let Err(err) = entry.node.advance(dt, targets) {
                tracing::warn!(error = %err, "skipping entry this tick");
            }
        }

        let mut applies: Vec<(AnimId, f64)> = Vec::new();
        for (_, entry) in self.drivers.iter_mut() {
            if let Some(progress) = entry.driver.tick(dt) {
                applies.push((entry.bound, progress));
            }
        }
        for (anim, progress) in applies {
            let Some(entry) = self.anims.get_mut(anim) else {
                continue;
            };
            if let Err(err) = entry.node.set_progress(progress, targets) {
                tracing::warn!(error = %err, "skipping scroll-bound entry this tick");
            }
        }

        self.sweep();
    }

    /// Number of scheduled animations.
    pub fn len(&self) -> usize {
        self.anims.len()
    }

    /// True when no animations or bindings remain; embedders commonly stop
    /// their frame callback here.
    pub fn is_empty(&self) -> bool {
        self.anims.is_empty() && self.drivers.is_empty()
    }

    /// Drop every entry and binding.
    pub fn shutdown(&mut self) {
        self.anims.clear();
        self.drivers.clear();
        self.order.clear();
    }

    fn entry(&self, id: AnimId) -> TweenkitResult<&AnimEntry> {
        self.anims
            .get(id)
            .ok_or_else(|| TweenkitError::config("unknown animation handle"))
    }

    fn entry_mut(&mut self, id: AnimId) -> TweenkitResult<&mut AnimEntry> {
        self.anims
            .get_mut(id)
            .ok_or_else(|| TweenkitError::config("unknown animation handle"))
    }

    fn sweep(&mut self) {
        let order = &mut self.order;
        self.anims.retain(|id, entry| {
            let done = entry.driver.is_none() && entry.node.state() == PlayState::Completed;
            if done {
                order.retain(|&o| o != id);
            }
            !done
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;