//! Playback state: play/pause state, repeat specification, and direction.

use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::clamp_unit;

/// Lifecycle state shared by tweens and timelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Declared but never advanced.
    Idle,
    /// Advancing with the clock or an external driver.
    Active,
    /// Frozen at the current position until resumed.
    Paused,
    /// All cycles exhausted; terminal until restarted or re-seeked.
    Completed,
}

/// Repeat policy shared by tweens and timelines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepeatSpec {
    /// Extra cycles: `-1` infinite, `0` play once, `n` additional cycles.
    pub count: i32,
    /// Hold at the cycle endpoint for this long between cycles, in seconds.
    pub delay: f64,
    /// Reverse direction on every other cycle.
    pub yoyo: bool,
}

impl Default for RepeatSpec {
    fn default() -> Self {
        Self {
            count: 0,
            delay: 0.0,
            yoyo: false,
        }
    }
}

impl RepeatSpec {
    /// Validate count and delay ranges.
    pub fn validate(&self) -> TweenkitResult<()> {
        if self.count < -1 {
            return Err(TweenkitError::config(
                "repeat count must be -1 (infinite), 0, or positive",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(TweenkitError::config("repeat delay must be >= 0"));
        }
        Ok(())
    }

    /// True when the cycle count never exhausts.
    pub fn is_infinite(&self) -> bool {
        self.count == -1
    }

    fn cycles(&self) -> u64 {
        u64::from(self.count.max(0) as u32) + 1
    }

    /// Total playing time for cycles of `cycle_secs` each, including
    /// inter-cycle delays. Infinite repeats report a single cycle so that
    /// containers and external drivers keep finite arithmetic.
    pub fn total_duration(&self, cycle_secs: f64) -> f64 {
        if self.is_infinite() {
            return cycle_secs;
        }
        let n = self.cycles() as f64;
        cycle_secs * n + self.delay * (n - 1.0)
    }

    /// Map absolute elapsed seconds onto a direction-adjusted cycle position.
    ///
    /// The delay window after each cycle holds progress at the cycle
    /// endpoint. Odd cycles run backwards when `yoyo` is set. Infinite
    /// repeats wrap forever and never report completion.
    pub fn position(&self, elapsed: f64, cycle_secs: f64) -> CyclePosition {
        let slot = cycle_secs + self.delay;
        let elapsed = elapsed.max(0.0);

        let (cycle, local) = if self.is_infinite() {
            let cycle = (elapsed / slot).floor() as u64;
            (cycle, elapsed - cycle as f64 * slot)
        } else {
            let last = self.cycles() - 1;
            let cycle = (((elapsed / slot).floor()) as u64).min(last);
            (cycle, elapsed - cycle as f64 * slot)
        };

        let raw = clamp_unit(local / cycle_secs);
        let completed =
            !self.is_infinite() && cycle == self.cycles() - 1 && local >= cycle_secs;
        let reversed = self.yoyo && cycle % 2 == 1;
        let progress = if reversed { 1.0 - raw } else { raw };

        CyclePosition {
            cycle,
            progress,
            completed,
        }
    }
}

/// Resolved position within a repeat structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CyclePosition {
    /// 0-based cycle index.
    pub cycle: u64,
    /// Direction-adjusted progress in `[0, 1]` for the current cycle.
    pub progress: f64,
    /// True when the final cycle has run to its end.
    pub completed: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;