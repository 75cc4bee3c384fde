//! Curve loop assembly - rebuild an ordered chain from loose segments.
//!
//! Boundary curves arrive from the host document as an unordered bag; this
//! module grows a chain from a seed segment by matching the open tail
//! endpoint against the remaining segments, reversing candidates that
//! connect backwards. Closure is a derived property of the result, never a
//! requirement for assembly to succeed.

use nalgebra::Point3;
use tracing::{debug, warn};

use crate::error::PartError;
use crate::geometry::{Segment, Tolerance};

/// An ordered, connected chain of segments.
///
/// Owns its segments; once assembled, the input bag is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    segments: Vec<Segment>,
}

impl Loop {
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start point of the first segment.
    pub fn first_point(&self) -> Option<Point3<f64>> {
        self.segments.first().map(|s| s.p0)
    }

    /// End point of the last segment.
    pub fn last_point(&self) -> Option<Point3<f64>> {
        self.segments.last().map(|s| s.p1)
    }

    /// True when the chain ends where it started.
    pub fn is_closed(&self, tol: &Tolerance) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => tol.almost_eq(&first, &last),
            _ => false,
        }
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

/// Outcome of loop assembly.
///
/// The distinction matters downstream: a partial chain propagated as if it
/// were complete turns into corrupted face geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopAssembly {
    /// Every input segment was consumed.
    Complete(Loop),
    /// Assembly stalled: `unused` segments connect to nothing reachable
    /// from the chain's tail. The leftovers are dropped but counted.
    Partial { chain: Loop, unused: usize },
}

impl LoopAssembly {
    /// The assembled chain, complete or not.
    pub fn chain(&self) -> &Loop {
        match self {
            LoopAssembly::Complete(chain) => chain,
            LoopAssembly::Partial { chain, .. } => chain,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, LoopAssembly::Complete(_))
    }
}

/// Assemble an ordered chain from an unordered bag of segments.
///
/// The first segment seeds the chain and the chain grows at its tail only.
/// Each pass scans the remaining segments in order, appending any whose
/// start (as-is) or end (reversed) coincides with the open tail. When
/// several candidates match within tolerance, the first in scan order wins,
/// so results are deterministic for a stable input order. Worst case is
/// O(n²) comparisons, which is fine at the tens of segments this runs on.
pub fn assemble_loop(segments: Vec<Segment>, tol: &Tolerance) -> Result<LoopAssembly, PartError> {
    if segments.is_empty() {
        return Err(PartError::EmptySegmentBag);
    }

    let total = segments.len();
    let mut used = vec![false; total];
    let mut chain = Vec::with_capacity(total);

    used[0] = true;
    chain.push(segments[0]);
    let mut frontier = segments[0].p1;
    let mut consumed = 1;

    // Passes are bounded by the bag size: the degenerate case consumes one
    // segment per pass.
    for pass in 0..total {
        if consumed == total {
            break;
        }

        let mut advanced = false;
        for (i, segment) in segments.iter().enumerate() {
            if used[i] {
                continue;
            }

            if tol.almost_eq(&segment.p0, &frontier) {
                frontier = segment.p1;
                chain.push(*segment);
            } else if tol.almost_eq(&segment.p1, &frontier) {
                // Connects backwards; append it reversed.
                frontier = segment.p0;
                chain.push(segment.reversed());
            } else {
                continue;
            }

            used[i] = true;
            consumed += 1;
            advanced = true;
        }

        debug!(pass, consumed, total, "loop assembly pass");

        if !advanced {
            break;
        }
    }

    let chain = Loop { segments: chain };
    if consumed == total {
        Ok(LoopAssembly::Complete(chain))
    } else {
        let unused = total - consumed;
        warn!(
            unused,
            consumed, "loop assembly stalled; dropping unreachable segments"
        );
        Ok(LoopAssembly::Partial { chain, unused })
    }
}

// ============================================================================
// TESTS
// ============================================================================
