//! Scroll scrub drivers mapping scroll position to playback progress.

use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::clamp_unit;
use crate::scroll::trigger::TriggerRegion;

/// Smoothing policy for scroll-driven progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Scrub {
    /// Apply each measurement to the bound animation immediately.
    Immediate,
    /// Ease applied progress toward the measurement with this time-constant
    /// in seconds; the filter is stepped once per scheduler tick.
    Smoothed(f64),
}

/// Declarative scroll binding: a trigger region and a scrub policy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    /// Scroll window mapped onto progress `[0, 1]`.
    pub region: TriggerRegion,
    /// Smoothing policy.
    pub scrub: Scrub,
}

impl ScrollBinding {
    /// Validate scrub configuration.
    pub fn validate(&self) -> TweenkitResult<()> {
        if let Scrub::Smoothed(lag) = self.scrub
            && (!lag.is_finite() || lag < 0.0)
        {
            return Err(TweenkitError::config(
                "scrub lag must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Runtime state translating scroll measurements into progress for one
/// bound animation.
///
/// The target progress is always a pure function of the latest measured
/// position; only the smoothing filter carries state between frames.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScrollDriver {
    binding: ScrollBinding,
    /// Latest measured progress, the filter target.
    target: f64,
    /// Progress currently applied to the bound animation.
    applied: f64,
    has_measurement: bool,
}

impl ScrollDriver {
    pub(crate) fn new(binding: ScrollBinding) -> Self {
        Self {
            binding,
            target: 0.0,
            applied: 0.0,
            has_measurement: false,
        }
    }

    /// Ingest a scroll measurement; returns progress to apply right away
    /// (immediate bindings only).
    pub(crate) fn measure(&mut self, pos: f64) -> Option<f64> {
        self.target = self.binding.region.progress_at(pos);
        self.has_measurement = true;
        match self.binding.scrub {
            Scrub::Immediate => {
                self.applied = self.target;
                Some(self.applied)
            }
            Scrub::Smoothed(_) => None,
        }
    }

    /// Step the smoothing filter; returns progress to apply this frame
    /// (smoothed bindings only, once a measurement exists).
    pub(crate) fn tick(&mut self, dt: f64) -> Option<f64> {
        let Scrub::Smoothed(lag) = self.binding.scrub else {
            return None;
        };
        if !self.has_measurement {
            return None;
        }
        let alpha = if lag <= 0.0 {
            1.0
        } else {
            1.0 - (-dt / lag).exp()
        };
        self.applied += (self.target - self.applied) * alpha;
        // Snap once the remaining gap is invisible, so bound animations
        // settle instead of asymptoting forever.
        if (self.target - self.applied).abs() < 1e-4 {
            self.applied = self.target;
        }
        Some(clamp_unit(self.applied))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/driver.rs"]
mod tests;