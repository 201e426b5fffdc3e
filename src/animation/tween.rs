//! Individual property tweens and the goals they animate toward.

use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::playback::{CyclePosition, PlayState, RepeatSpec};
use crate::animation::value::{Lerp, Value};
use crate::engine::targets::{PropId, PropertyTargets, TargetId};
use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::clamp_unit;

/// One property destination on a tween's target.
///
/// An endpoint left as `None` is resolved from the target's live value when
/// the tween first renders, after scheduling, never at declaration time.
/// This keeps tweens declared before the target's state is finalized honest:
/// they animate from (or back to) the true value at start.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PropertyGoal {
    /// Property written by this goal.
    pub property: PropId,
    /// Start value; `None` resolves from the target at tween start.
    pub from: Option<Value>,
    /// Destination value; `None` resolves from the target at tween start
    /// (the "animate back to where it is" form).
    pub to: Option<Value>,
}

impl PropertyGoal {
    /// Check endpoint presence and unit compatibility.
    pub fn validate(&self) -> TweenkitResult<()> {
        match (self.from, self.to) {
            (None, None) => Err(TweenkitError::config(format!(
                "goal '{}' needs an explicit from or to value",
                self.property
            ))),
            (Some(a), Some(b)) if !a.compatible(b) => Err(TweenkitError::config(format!(
                "goal '{}' mixes units '{a}' and '{b}'",
                self.property
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
struct ResolvedGoal {
    property: PropId,
    from: Value,
    to: Value,
}

/// Builder for a [`Tween`]; `build` validates and is the only way to obtain
/// one.
pub struct TweenBuilder {
    target: TargetId,
    goals: Vec<PropertyGoal>,
    duration: f64,
    ease: Ease,
    delay: f64,
    repeat: RepeatSpec,
}

impl TweenBuilder {
    fn new(target: TargetId) -> Self {
        Self {
            target,
            goals: Vec::new(),
            duration: 0.0,
            ease: Ease::default(),
            delay: 0.0,
            repeat: RepeatSpec::default(),
        }
    }

    /// Animate `property` from its current value to `to`.
    pub fn goal(mut self, property: impl Into<PropId>, to: Value) -> Self {
        self.goals.push(PropertyGoal {
            property: property.into(),
            from: None,
            to: Some(to),
        });
        self
    }

    /// Animate `property` between two explicit values.
    pub fn goal_from(mut self, property: impl Into<PropId>, from: Value, to: Value) -> Self {
        self.goals.push(PropertyGoal {
            property: property.into(),
            from: Some(from),
            to: Some(to),
        });
        self
    }

    /// Animate `property` from an explicit value back to its current value.
    pub fn goal_to_current(mut self, property: impl Into<PropId>, from: Value) -> Self {
        self.goals.push(PropertyGoal {
            property: property.into(),
            from: Some(from),
            to: None,
        });
        self
    }

    /// Cycle duration in seconds; required and `> 0`.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Easing applied to each cycle.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Easing looked up by registry name (`"power1.inOut"`, `"back.out"`).
    pub fn ease_name(self, name: &str) -> TweenkitResult<Self> {
        Ok(self.ease(Ease::from_name(name)?))
    }

    /// Start offset in seconds before the first cycle.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Shift the start offset by an additional delay.
    ///
    /// Stagger expansion uses this to layer per-target offsets on top of a
    /// declared base delay.
    pub fn delayed_by(mut self, extra: f64) -> Self {
        self.delay += extra;
        self
    }

    /// Extra cycles: `-1` infinite, `0` none, `n` finite.
    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat.count = count;
        self
    }

    /// Hold at the cycle endpoint between cycles.
    pub fn repeat_delay(mut self, secs: f64) -> Self {
        self.repeat.delay = secs;
        self
    }

    /// Alternate direction on odd cycles.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.repeat.yoyo = yoyo;
        self
    }

    /// Validate and build the tween.
    pub fn build(self) -> TweenkitResult<Tween> {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(TweenkitError::config("tween duration must be > 0"));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(TweenkitError::config("tween delay must be >= 0"));
        }
        self.repeat.validate()?;
        if self.goals.is_empty() {
            return Err(TweenkitError::config(
                "tween needs at least one property goal",
            ));
        }
        for goal in &self.goals {
            goal.validate()?;
        }

        Ok(Tween {
            target: self.target,
            goals: SmallVec::from_vec(self.goals),
            duration: self.duration,
            ease: self.ease,
            delay: self.delay,
            repeat: self.repeat,
            state: PlayState::Idle,
            elapsed: 0.0,
            resolved: None,
        })
    }
}

/// A single timed interpolation of one or more properties on one target.
///
/// A tween is advanced either by the scheduler clock ([`Tween::advance`]) or
/// by an external driver injecting absolute progress
/// ([`Tween::set_progress`]). Both paths funnel into one stateless sampler,
/// so rendering the same position twice emits identical writes — external
/// drivers may move backwards freely.
pub struct Tween {
    target: TargetId,
    goals: SmallVec<[PropertyGoal; 4]>,
    duration: f64,
    ease: Ease,
    delay: f64,
    repeat: RepeatSpec,
    state: PlayState,
    elapsed: f64,
    resolved: Option<SmallVec<[ResolvedGoal; 4]>>,
}

impl Tween {
    /// Start building a tween against `target`.
    pub fn builder(target: TargetId) -> TweenBuilder {
        TweenBuilder::new(target)
    }

    /// Target this tween writes to.
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// True when playback is explicitly paused.
    pub fn paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    /// Duration of one cycle in seconds.
    pub fn cycle_duration(&self) -> f64 {
        self.duration
    }

    /// Full duration including the start delay, repeats, and inter-cycle
    /// delays. Infinite repeats report a single cycle.
    pub fn total_duration(&self) -> f64 {
        self.delay + self.repeat.total_duration(self.duration)
    }

    /// Direction-adjusted progress of the current cycle in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.elapsed < self.delay {
            return 0.0;
        }
        self.position().progress
    }

    fn position(&self) -> CyclePosition {
        self.repeat
            .position((self.elapsed - self.delay).max(0.0), self.duration)
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

    /// Return to the declared start, ready to play again.
    ///
    /// Start values captured by lazy resolution are kept: restarting replays
    /// the same motion rather than re-reading the (already animated) target.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.state = PlayState::Idle;
    }

    /// Advance with a wall-clock delta and emit writes.
    ///
    /// Idle tweens become Active on their first advance; Paused and
    /// Completed tweens ignore the clock.
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

    /// Set absolute progress over the full duration (externally driven).
    ///
    /// Out-of-range values clamp silently; repeat/yoyo mapping applies
    /// exactly as on the clock path. A Completed tween is pulled back to
    /// Active, since drivers may scrub past the end and return.
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

    /// Jump to an absolute time in seconds along the full duration.
    ///
    /// Emits writes for the new position immediately; no intermediate
    /// positions are rendered.
    pub fn seek(&mut self, secs: f64, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        if matches!(self.state, PlayState::Idle | PlayState::Completed) {
            self.state = PlayState::Active;
        }
        self.elapsed = secs.clamp(0.0, self.total_duration());
        self.render(targets)
    }

    /// Render at an absolute local time without touching playback state.
    ///
    /// Timelines own the playhead for their children and call this directly.
    pub(crate) fn render_at(
        &mut self,
        secs: f64,
        targets: &mut dyn PropertyTargets,
    ) -> TweenkitResult<()> {
        self.elapsed = secs.clamp(0.0, self.total_duration());
        self.render(targets)
    }

    /// Re-emit resolved start values and move the playhead to 0.
    ///
    /// Used when a container scrubs back before this tween's window: a tween
    /// that has started holds its initial state; one that never started
    /// stays untouched (resolution stays lazy).
    pub(crate) fn rewind(&mut self, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        let Some(resolved) = &self.resolved else {
            return Ok(());
        };
        self.elapsed = 0.0;
        for goal in resolved {
            targets.set(self.target, &goal.property, goal.from);
        }
        Ok(())
    }

    fn render(&mut self, targets: &mut dyn PropertyTargets) -> TweenkitResult<()> {
        if self.elapsed < self.delay {
            return Ok(());
        }
        if self.resolved.is_none() {
            self.resolved = Some(Self::resolve_goals(self.target, &self.goals, &*targets)?);
        }

        let pos = self.position();
        let eased = self.ease.apply(pos.progress);
        if let Some(resolved) = &self.resolved {
            for goal in resolved {
                let value = Value::lerp(&goal.from, &goal.to, eased);
                targets.set(self.target, &goal.property, value);
            }
        }

        if pos.completed && self.state == PlayState::Active {
            self.state = PlayState::Completed;
        }
        Ok(())
    }

    fn resolve_goals(
        target: TargetId,
        goals: &[PropertyGoal],
        targets: &dyn PropertyTargets,
    ) -> TweenkitResult<SmallVec<[ResolvedGoal; 4]>> {
        let mut out = SmallVec::with_capacity(goals.len());
        for goal in goals {
            let current = || {
                targets.get(target, &goal.property).ok_or_else(|| {
                    TweenkitError::target(format!(
                        "cannot read current value of '{}' on target {}",
                        goal.property, target.0
                    ))
                })
            };
            let from = match goal.from {
                Some(v) => v,
                None => current()?,
            };
            let to = match goal.to {
                Some(v) => v,
                None => current()?,
            };
            if !from.compatible(to) {
                return Err(TweenkitError::target(format!(
                    "resolved start '{from}' for '{}' is incompatible with '{to}'",
                    goal.property
                )));
            }
            out.push(ResolvedGoal {
                property: goal.property.clone(),
                from,
                to,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;