//! Scroll trigger regions.

use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::clamp_unit;

/// A scroll-space window over which a bound animation plays.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerRegion {
    /// Scroll offset where progress is 0.
    pub start: f64,
    /// Scroll offset where progress is 1. May be less than `start` for
    /// regions that play while scrolling back up.
    pub end: f64,
}

impl TriggerRegion {
    /// Create a validated region; the bounds must be finite and distinct.
    pub fn new(start: f64, end: f64) -> TweenkitResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TweenkitError::config(
                "trigger region bounds must be finite",
            ));
        }
        if start == end {
            return Err(TweenkitError::config(
                "trigger region must have distinct start and end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Build a region from boundary marks and element/viewport geometry.
    pub fn from_marks(
        start: Mark,
        end: Mark,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> TweenkitResult<Self> {
        Self::new(
            start.resolve(element_top, element_height, viewport_height),
            end.resolve(element_top, element_height, viewport_height),
        )
    }

    /// Normalized crossing fraction for a scroll offset, clamped to `[0, 1]`.
    ///
    /// A pure function of position: leaving and re-entering the region
    /// resumes from the correct boundary with no accumulated drift, no
    /// matter how far scroll overshoots.
    pub fn progress_at(self, pos: f64) -> f64 {
        clamp_unit((pos - self.start) / (self.end - self.start))
    }
}

/// One boundary of a trigger region, relative to element and viewport
/// geometry.
///
/// Both fields are fractions (`0` top, `1` bottom): `element_edge` picks a
/// line through the element, `viewport_anchor` picks the viewport line that
/// edge must cross. The mark resolves to the scroll offset at which the
/// crossing happens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mark {
    /// Fraction down the element (`0` top, `0.5` center, `1` bottom).
    pub element_edge: f64,
    /// Fraction down the viewport the edge must cross.
    pub viewport_anchor: f64,
}

impl Mark {
    /// Parse `"<edge> <anchor>"` where each part is `top`, `center`,
    /// `bottom`, or a percentage (`"bottom bottom"`, `"top 20%"`).
    pub fn parse(s: &str) -> TweenkitResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(anchor), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TweenkitError::config(format!(
                "mark '{s}' must be '<edge> <anchor>'"
            )));
        };
        Ok(Self {
            element_edge: parse_fraction(edge)?,
            viewport_anchor: parse_fraction(anchor)?,
        })
    }

    /// Scroll offset at which this mark's crossing happens.
    ///
    /// `element_top` is the element's document-space offset; the anchor line
    /// sits `viewport_anchor * viewport_height` below the scroll offset.
    pub fn resolve(self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element_edge * element_height - self.viewport_anchor * viewport_height
    }
}

fn parse_fraction(s: &str) -> TweenkitResult<f64> {
    match s {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => {
            let invalid = || {
                TweenkitError::config(format!(
                    "mark part '{s}' must be top/center/bottom or a percentage"
                ))
            };
            let digits = s.strip_suffix('%').ok_or_else(invalid)?;
            let pct: f64 = digits.parse().map_err(|_| invalid())?;
            Ok(pct / 100.0)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;