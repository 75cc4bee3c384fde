//! Stacked offset line generation.
//!
//! Produces an ordered family of parallel copies of a base line at the
//! cumulative offsets of a spacing sequence. Index 0 is the base line;
//! index k sits at the prefix sum of the first k steps. Callers assign a
//! material per stripe by index, so the order is part of the contract.

use nalgebra::Point3;
use tracing::debug;

use crate::error::PartError;
use crate::geometry::{vertical, Segment};

/// A validated sequence of spacing values.
///
/// Every step must be strictly positive. The grid generator enforces the
/// same policy on its two scalar steps, so both partition paths reject
/// degenerate spacing the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSpec(Vec<f64>);

impl StepSpec {
    /// Validate and wrap a spacing sequence.
    pub fn new(steps: Vec<f64>) -> Result<Self, PartError> {
        if steps.is_empty() {
            return Err(PartError::EmptySteps);
        }
        if let Some(&value) = steps.iter().find(|s| **s <= 0.0) {
            return Err(PartError::NonPositiveStep {
                axis: "stack",
                value,
            });
        }
        Ok(Self(steps))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Cumulative offsets `[s0, s0+s1, ...]`.
    pub fn prefix_sums(&self) -> Vec<f64> {
        let mut sums = Vec::with_capacity(self.0.len());
        let mut acc = 0.0;
        for step in &self.0 {
            acc += step;
            sums.push(acc);
        }
        sums
    }
}

/// How stripe offsets are applied to the base line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetMode {
    /// Horizontal stripes: every copy of the base line is raised along the
    /// global vertical axis, regardless of the line's own direction.
    Horizontal,
    /// Vertical stripes: the base segment is rebuilt from the line's start
    /// point up to `height` along the vertical axis, then each copy is
    /// advanced along the base line's own direction.
    Vertical { height: f64 },
}

/// Generate the ordered family of offset lines for a spacing sequence.
///
/// The output always has `steps.len() + 1` entries: the base (or rebuilt)
/// line at index 0, then one copy per cumulative offset, in step order.
pub fn generate_stacked_offsets(
    base: &Segment,
    steps: &StepSpec,
    mode: OffsetMode,
) -> Result<Vec<Segment>, PartError> {
    let sums = steps.prefix_sums();
    let mut lines = Vec::with_capacity(sums.len() + 1);

    match mode {
        OffsetMode::Horizontal => {
            let up = vertical();
            lines.push(Segment::line(base.p0, base.p1));
            for sum in &sums {
                lines.push(Segment::line(base.p0 + *sum * up, base.p1 + *sum * up));
            }
        }
        OffsetMode::Vertical { height } => {
            let direction = base.direction()?;
            let p0 = base.p0;
            let p1 = Point3::new(p0.x, p0.y, height);
            lines.push(Segment::line(p0, p1));
            for sum in &sums {
                lines.push(Segment::line(p0 + *sum * direction, p1 + *sum * direction));
            }
        }
    }

    debug!(?mode, stripes = lines.len(), "generated stacked offset lines");

    Ok(lines)
}
