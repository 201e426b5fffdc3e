//! Easing curves and the interpolation they apply to normalized time.

use crate::foundation::error::{TweenkitError, TweenkitResult};

/// Base curve shapes, expressed in their ease-in form.
///
/// `Out` and `InOut` variants of each shape are derived by reflection, so
/// every curve is defined once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Curve {
    /// Identity mapping.
    Linear,
    /// Quadratic.
    Power1,
    /// Cubic.
    Power2,
    /// Quartic.
    Power3,
    /// Quintic.
    Power4,
    /// Sinusoidal quarter-wave.
    Sine,
    /// Exponential.
    Expo,
    /// Circular arc.
    Circ,
    /// Overshooting cubic.
    Back,
    /// Damped oscillation.
    Elastic,
    /// Piecewise parabolic bounce.
    Bounce,
}

/// Which end of the curve receives the acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EaseDir {
    /// Accelerate out of the start.
    In,
    /// Decelerate into the end.
    Out,
    /// Both, split at the midpoint.
    InOut,
}

/// Named time-remapping function over the unit interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ease {
    /// Curve shape.
    pub curve: Curve,
    /// Direction the shape is applied in.
    pub dir: EaseDir,
}

impl Default for Ease {
    fn default() -> Self {
        Self {
            curve: Curve::Linear,
            dir: EaseDir::InOut,
        }
    }
}

impl Ease {
    /// Build an easing from its shape and direction.
    pub fn new(curve: Curve, dir: EaseDir) -> Self {
        Self { curve, dir }
    }

    /// Look up an easing by its registry name.
    ///
    /// Accepted names are `"linear"`/`"none"` and `"<curve>.<dir>"`, where
    /// curve is one of `power1`..`power4` (or `quad`/`cubic`/`quart`/`quint`),
    /// `sine`, `expo`, `circ`, `back`, `elastic`, `bounce`, and dir is `in`,
    /// `out`, or `inOut`. Unknown names are configuration errors.
    pub fn from_name(name: &str) -> TweenkitResult<Self> {
        if name.eq_ignore_ascii_case("linear") || name.eq_ignore_ascii_case("none") {
            return Ok(Self::default());
        }

        let unknown = || TweenkitError::config(format!("unknown easing name '{name}'"));
        let (curve, dir) = name.split_once('.').ok_or_else(unknown)?;

        let curve = match curve.to_ascii_lowercase().as_str() {
            "power1" | "quad" => Curve::Power1,
            "power2" | "cubic" => Curve::Power2,
            "power3" | "quart" => Curve::Power3,
            "power4" | "quint" | "strong" => Curve::Power4,
            "sine" => Curve::Sine,
            "expo" => Curve::Expo,
            "circ" => Curve::Circ,
            "back" => Curve::Back,
            "elastic" => Curve::Elastic,
            "bounce" => Curve::Bounce,
            _ => return Err(unknown()),
        };
        let dir = match dir.to_ascii_lowercase().as_str() {
            "in" => EaseDir::In,
            "out" => EaseDir::Out,
            "inout" => EaseDir::InOut,
            _ => return Err(unknown()),
        };
        Ok(Self { curve, dir })
    }

    /// Apply the easing to a progress value in `[0, 1]`.
    ///
    /// Inputs outside the unit interval clamp; endpoints are always exact,
    /// including for curves whose closed form does not reach them (expo).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        if matches!(self.curve, Curve::Linear) {
            return t;
        }
        match self.dir {
            EaseDir::In => ease_in(self.curve, t),
            EaseDir::Out => 1.0 - ease_in(self.curve, 1.0 - t),
            EaseDir::InOut => {
                if t < 0.5 {
                    ease_in(self.curve, 2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(self.curve, 2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }

    /// The reversed easing `g(t) = 1 - e(1 - t)`.
    ///
    /// Swaps `In` and `Out`; `InOut` curves are their own reverse.
    pub fn flipped(self) -> Self {
        let dir = match self.dir {
            EaseDir::In => EaseDir::Out,
            EaseDir::Out => EaseDir::In,
            EaseDir::InOut => EaseDir::InOut,
        };
        Self {
            curve: self.curve,
            dir,
        }
    }
}

fn ease_in(curve: Curve, t: f64) -> f64 {
    match curve {
        Curve::Linear => t,
        Curve::Power1 => t * t,
        Curve::Power2 => t * t * t,
        Curve::Power3 => t.powi(4),
        Curve::Power4 => t.powi(5),
        Curve::Sine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
        Curve::Expo => (2.0_f64).powf(10.0 * t - 10.0),
        Curve::Circ => 1.0 - (1.0 - t * t).sqrt(),
        Curve::Back => {
            const C1: f64 = 1.70158;
            ((C1 + 1.0) * t - C1) * t * t
        }
        Curve::Elastic => {
            const C4: f64 = std::f64::consts::TAU / 3.0;
            -(2.0_f64).powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * C4).sin()
        }
        Curve::Bounce => 1.0 - bounce_out(1.0 - t),
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;