//! Animatable property values and their units.

use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::lerp_exact;

/// Measurement unit carried by a unit-suffixed property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Unit {
    /// Pixels.
    Px,
    /// Percent of some reference the target defines.
    Percent,
    /// Degrees.
    Deg,
    /// Radians.
    Rad,
    /// Font-relative em.
    Em,
    /// Root-font-relative rem.
    Rem,
}

impl Unit {
    /// Canonical suffix used when formatting and parsing.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Em => "em",
            Self::Rem => "rem",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "px" => Some(Self::Px),
            "%" => Some(Self::Percent),
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            "em" => Some(Self::Em),
            "rem" => Some(Self::Rem),
            _ => None,
        }
    }
}

/// A property value the interpolator understands.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Bare number.
    Number(f64),
    /// Number with a unit suffix (`"8px"`, `"100%"`).
    Unit(f64, Unit),
}

impl Value {
    /// Parse a value from its textual form (`"1.5"`, `"8px"`, `"360deg"`).
    pub fn parse(s: &str) -> TweenkitResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TweenkitError::config("empty value literal"));
        }

        let suffix_len = s
            .bytes()
            .rev()
            .take_while(|b| b.is_ascii_alphabetic() || *b == b'%')
            .count();
        let (num, suffix) = s.split_at(s.len() - suffix_len);
        let num: f64 = num
            .trim()
            .parse()
            .map_err(|_| TweenkitError::config(format!("invalid value literal '{s}'")))?;

        if suffix.is_empty() {
            return Ok(Self::Number(num));
        }
        let unit = Unit::from_suffix(suffix)
            .ok_or_else(|| TweenkitError::config(format!("unknown unit suffix '{suffix}'")))?;
        Ok(Self::Unit(num, unit))
    }

    /// Numeric magnitude regardless of unit.
    pub fn magnitude(self) -> f64 {
        match self {
            Self::Number(v) | Self::Unit(v, _) => v,
        }
    }

    /// Unit carried by this value, if any.
    pub fn unit(self) -> Option<Unit> {
        match self {
            Self::Number(_) => None,
            Self::Unit(_, u) => Some(u),
        }
    }

    /// True when `self` and `other` can interpolate into each other.
    ///
    /// Bare numbers coerce into either side's unit; two distinct units do
    /// not mix.
    pub fn compatible(self, other: Self) -> bool {
        match (self.unit(), other.unit()) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Unit(v, u) => write!(f, "{v}{}", u.suffix()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    ///
    /// Endpoints are exact: `t <= 0` yields `a` and `t >= 1` yields `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_exact(*a, *b, t)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_exact(f64::from(*a), f64::from(*b), t) as f32
    }
}

impl Lerp for Value {
    /// The result adopts the unit of whichever side carries one; the
    /// destination wins when both do. Callers reject incompatible units
    /// before interpolation starts.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return *a;
        }
        if t >= 1.0 {
            return *b;
        }
        let v = lerp_exact(a.magnitude(), b.magnitude(), t);
        match (b.unit(), a.unit()) {
            (Some(u), _) | (None, Some(u)) => Self::Unit(v, u),
            (None, None) => Self::Number(v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;