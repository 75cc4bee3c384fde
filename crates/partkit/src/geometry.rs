//! Core geometry types for partkit.
//!
//! Points live in 3D model space (nalgebra `Point3<f64>`); a surface is
//! parametrized by a `BasisFrame` - an origin plus two orthonormal axes.
//! Point comparisons go through a `Tolerance` so floating-point round-off
//! never splits endpoints that are geometrically the same point.

use nalgebra::{Point3, Vector3};

use crate::error::PartError;

/// Default point-coincidence tolerance in model units.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Slack for basis validation. Unit-length and orthogonality checks on
/// normalized input need more room than point coincidence does.
const BASIS_EPS: f64 = 1e-6;

/// The global vertical axis (model-space Z).
#[inline]
pub fn vertical() -> Vector3<f64> {
    Vector3::z()
}

/// Tolerance for treating two points as the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum Euclidean distance between coincident points.
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }

    /// Test whether two points coincide within this tolerance.
    #[inline]
    pub fn almost_eq(&self, a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a - b).norm_squared() < self.eps * self.eps
    }
}

/// Geometric kind of a segment.
///
/// The loop assembler never looks inside this - it only matches endpoints.
/// The partitioning collaborator needs the full curve description, so arcs
/// and ellipses carry their center and sweep normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    /// Straight line between the two endpoints.
    Line,
    /// Circular arc swept from `p0` to `p1` around the normal.
    Arc {
        center: Point3<f64>,
        normal: Vector3<f64>,
    },
    /// Elliptical arc, same orientation convention as `Arc`.
    Ellipse {
        center: Point3<f64>,
        normal: Vector3<f64>,
    },
}

/// A directed curve segment with endpoints `p0` and `p1`.
///
/// Immutable value type; `reversed` produces a new segment rather than
/// mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point3<f64>,
    pub p1: Point3<f64>,
    pub kind: CurveKind,
}

impl Segment {
    /// Create a straight line segment.
    #[inline]
    pub fn line(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        Self {
            p0,
            p1,
            kind: CurveKind::Line,
        }
    }

    /// Create an arc segment.
    #[inline]
    pub fn arc(p0: Point3<f64>, p1: Point3<f64>, center: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            p0,
            p1,
            kind: CurveKind::Arc { center, normal },
        }
    }

    /// Create an elliptical arc segment.
    #[inline]
    pub fn ellipse(
        p0: Point3<f64>,
        p1: Point3<f64>,
        center: Point3<f64>,
        normal: Vector3<f64>,
    ) -> Self {
        Self {
            p0,
            p1,
            kind: CurveKind::Ellipse { center, normal },
        }
    }

    /// The segment traversed in the opposite direction.
    ///
    /// Endpoints swap; arc and ellipse normals flip so the swept shape is
    /// unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let kind = match self.kind {
            CurveKind::Line => CurveKind::Line,
            CurveKind::Arc { center, normal } => CurveKind::Arc {
                center,
                normal: -normal,
            },
            CurveKind::Ellipse { center, normal } => CurveKind::Ellipse {
                center,
                normal: -normal,
            },
        };
        Self {
            p0: self.p1,
            p1: self.p0,
            kind,
        }
    }

    /// Straight-line distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).norm()
    }

    /// Unit direction from `p0` to `p1`.
    pub fn direction(&self) -> Result<Vector3<f64>, PartError> {
        let d = self.p1 - self.p0;
        let n = d.norm();
        if n < DEFAULT_EPS {
            return Err(PartError::DegenerateLine);
        }
        Ok(d / n)
    }
}

/// An origin plus two orthonormal axes spanning a plane in model space.
///
/// Invariant: `base_x` and `base_y` are unit length and orthogonal. The
/// fields are private so the invariant holds for every constructed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisFrame {
    origin: Point3<f64>,
    base_x: Vector3<f64>,
    base_y: Vector3<f64>,
}

impl BasisFrame {
    /// Create a frame from an origin and two explicit axes.
    ///
    /// Both axes must be unit length and mutually orthogonal.
    pub fn new(
        origin: Point3<f64>,
        base_x: Vector3<f64>,
        base_y: Vector3<f64>,
    ) -> Result<Self, PartError> {
        if (base_x.norm() - 1.0).abs() > BASIS_EPS || (base_y.norm() - 1.0).abs() > BASIS_EPS {
            return Err(PartError::InvalidBasis("basis vectors must be unit length"));
        }
        if base_x.dot(&base_y).abs() > BASIS_EPS {
            return Err(PartError::InvalidBasis("basis vectors must be orthogonal"));
        }
        Ok(Self {
            origin,
            base_x,
            base_y,
        })
    }

    /// Create a frame from its X axis alone.
    ///
    /// `base_y` is derived as `vertical × base_x`, the way the host
    /// document builds a sketch plane from a single in-plane direction.
    /// Fails if `base_x` is zero-length or parallel to the vertical.
    pub fn from_x_axis(origin: Point3<f64>, base_x: Vector3<f64>) -> Result<Self, PartError> {
        let n = base_x.norm();
        if n < DEFAULT_EPS {
            return Err(PartError::InvalidBasis("base X axis has zero length"));
        }
        let base_x = base_x / n;

        let base_y = vertical().cross(&base_x);
        let ny = base_y.norm();
        if ny < BASIS_EPS {
            return Err(PartError::InvalidBasis("base X axis must not be vertical"));
        }
        Ok(Self {
            origin,
            base_x,
            base_y: base_y / ny,
        })
    }

    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    #[inline]
    pub fn base_x(&self) -> Vector3<f64> {
        self.base_x
    }

    #[inline]
    pub fn base_y(&self) -> Vector3<f64> {
        self.base_y
    }

    /// Plane normal implied by the two axes.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.base_x.cross(&self.base_y)
    }

    /// The reference plane this frame spans.
    #[inline]
    pub fn reference_plane(&self) -> ReferencePlane {
        ReferencePlane {
            origin: self.origin,
            normal: self.normal(),
        }
    }
}

/// A plane description handed to the partitioning collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePlane {
    pub origin: Point3<f64>,
    pub normal: Vector3<f64>,
}

// ============================================================================
// TESTS
// ============================================================================
