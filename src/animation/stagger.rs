//! Stagger distribution: per-target delay offsets across a group.

use crate::foundation::error::{TweenkitError, TweenkitResult};
use crate::foundation::math::SplitMix64;

/// Where the stagger wave originates within the target group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StaggerOrigin {
    /// First target first.
    Start,
    /// Last target first.
    End,
    /// Wave expands outward from the group center.
    Center,
    /// Wave contracts inward from both edges.
    Edges,
    /// Seed-reproducible random order.
    Random {
        /// Seed for deterministic orderings across runs.
        seed: u64,
    },
    /// Wave expands from an explicit target index.
    Index(usize),
}

/// Optional grid interpretation of the target list, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GridSpec {
    /// Treat targets as a flat sequence.
    None,
    /// Infer the rows/cols shape closest to a square.
    Auto,
    /// Explicit shape; must hold every target.
    Explicit {
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },
}

/// Distribution policy turning one animation declaration into per-target
/// start offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerSpec {
    /// Delay step between adjacent distance ranks, in seconds. Negative
    /// steps mirror the pattern (furthest targets start first).
    pub each: f64,
    /// Origin of the wave.
    pub from: StaggerOrigin,
    /// Grid interpretation for two-dimensional distances.
    pub grid: GridSpec,
}

impl StaggerSpec {
    /// Uniform per-step delay sweeping from the start of the group.
    pub fn every(each: f64) -> Self {
        Self {
            each,
            from: StaggerOrigin::Start,
            grid: GridSpec::None,
        }
    }
}

/// Compute per-target start offsets for `len` targets.
///
/// Pure and deterministic for a given spec (`Random` is seeded). Offsets are
/// normalized so the minimum is exactly 0; with a fractional center (even
/// group length) this shifts the whole set down by the half-step.
pub fn distribute(len: usize, spec: &StaggerSpec) -> TweenkitResult<Vec<f64>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if !spec.each.is_finite() {
        return Err(TweenkitError::config("stagger step must be finite"));
    }
    if let StaggerOrigin::Index(origin) = spec.from
        && origin >= len
    {
        return Err(TweenkitError::config(format!(
            "stagger origin index {origin} is out of range for {len} targets"
        )));
    }

    let distances: Vec<f64> = match spec.from {
        StaggerOrigin::Random { seed } => random_ranks(len, seed),
        origin => {
            let grid = resolve_grid(len, spec.grid)?;
            (0..len).map(|i| distance(i, len, origin, grid)).collect()
        }
    };

    let mut offsets: Vec<f64> = distances.iter().map(|d| d * spec.each).collect();
    let min = offsets.iter().copied().fold(f64::INFINITY, f64::min);
    for offset in &mut offsets {
        *offset -= min;
    }
    Ok(offsets)
}

fn random_ranks(len: usize, seed: u64) -> Vec<f64> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = SplitMix64::new(seed);
    // Fisher-Yates
    for i in (1..len).rev() {
        order.swap(i, rng.next_index(i + 1));
    }
    let mut ranks = vec![0.0; len];
    for (rank, &target) in order.iter().enumerate() {
        ranks[target] = rank as f64;
    }
    ranks
}

fn resolve_grid(len: usize, grid: GridSpec) -> TweenkitResult<Option<(usize, usize)>> {
    match grid {
        GridSpec::None => Ok(None),
        GridSpec::Auto => {
            let cols = (len as f64).sqrt().ceil() as usize;
            let rows = len.div_ceil(cols);
            Ok(Some((rows, cols)))
        }
        GridSpec::Explicit { rows, cols } => {
            if rows == 0 || cols == 0 {
                return Err(TweenkitError::config(
                    "stagger grid must have rows > 0 and cols > 0",
                ));
            }
            if rows.checked_mul(cols).is_none_or(|cells| cells < len) {
                return Err(TweenkitError::config(format!(
                    "stagger grid {rows}x{cols} cannot hold {len} targets"
                )));
            }
            Ok(Some((rows, cols)))
        }
    }
}

fn distance(i: usize, len: usize, origin: StaggerOrigin, grid: Option<(usize, usize)>) -> f64 {
    let Some((rows, cols)) = grid else {
        return linear_distance(i as f64, len, origin);
    };

    let row = (i / cols) as f64;
    let col = (i % cols) as f64;
    let last_row = (rows - 1) as f64;
    let last_col = (cols - 1) as f64;
    match origin {
        StaggerOrigin::Start => row.hypot(col),
        StaggerOrigin::End => (last_row - row).hypot(last_col - col),
        StaggerOrigin::Center => (row - last_row / 2.0).hypot(col - last_col / 2.0),
        StaggerOrigin::Edges => row
            .min(last_row - row)
            .min(col)
            .min(last_col - col),
        StaggerOrigin::Index(origin) => {
            let origin_row = (origin / cols) as f64;
            let origin_col = (origin % cols) as f64;
            (row - origin_row).hypot(col - origin_col)
        }
        // Handled before distances are computed.
        StaggerOrigin::Random { .. } => 0.0,
    }
}

fn linear_distance(i: f64, len: usize, origin: StaggerOrigin) -> f64 {
    let last = (len - 1) as f64;
    match origin {
        StaggerOrigin::Start => i,
        StaggerOrigin::End => last - i,
        StaggerOrigin::Center => (i - last / 2.0).abs(),
        StaggerOrigin::Edges => i.min(last - i),
        StaggerOrigin::Index(origin) => (i - origin as f64).abs(),
        StaggerOrigin::Random { .. } => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;