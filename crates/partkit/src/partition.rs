//! Partition orchestration - wiring the generators to the host document.
//!
//! No geometric reasoning happens here. The orchestration validates shared
//! preconditions through the generators, derives the reference plane, and
//! forwards the bounding segments unmodified to the external partitioning
//! collaborator. Material assignment is an index-aligned pass over the
//! created parts.

use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

use crate::error::PartError;
use crate::geometry::{ReferencePlane, Segment};
use crate::grid::{generate_grid_lines, GridRequest};
use crate::stack::{generate_stacked_offsets, OffsetMode, StepSpec};

/// Face-orientation matching tolerance in radians, the angular slack used
/// to pick the sketch face of a wall.
pub const DEFAULT_FACE_EPS: f64 = 1e-3;

/// Host-document element handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Handle of a created part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartId(pub u64);

/// Handle of a material in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u64);

/// A planar face reported by the surface query collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFace {
    pub origin: Point3<f64>,
    pub normal: Vector3<f64>,
}

/// Surface query capability of the host document.
pub trait SurfaceQuery {
    /// All planar faces of the target element.
    fn planar_faces(&self, target: ElementId) -> Vec<PlanarFace>;

    /// Outward orientation of the target element.
    fn orientation(&self, target: ElementId) -> Vector3<f64>;
}

/// Document partitioning capability.
pub trait Partitioner {
    /// Existing partition on the target, if any. An element carries at
    /// most one partition; a stale one must be removed before dividing
    /// again.
    fn existing_partition(&self, target: ElementId) -> Option<PartId>;

    /// Remove a partition structure from the document.
    fn remove_partition(&mut self, partition: PartId);

    /// Divide the target along the request's boundaries, returning the
    /// created part handles.
    fn divide(&mut self, request: &PartitionRequest) -> Result<Vec<PartId>, PartError>;
}

/// Material lookup and assignment capability.
pub trait MaterialTable {
    fn material_by_name(&self, name: &str) -> Option<MaterialId>;

    fn assign_material(&mut self, part: PartId, material: MaterialId);
}

/// The final payload handed to the partitioner, forwarded unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionRequest {
    pub target: ElementId,
    pub plane: ReferencePlane,
    pub boundaries: Vec<Segment>,
}

/// Result of a divide call that may legitimately find nothing to do.
#[derive(Debug, Clone, PartialEq)]
pub enum DivideOutcome {
    /// Parts were created.
    Divided(Vec<PartId>),
    /// No planar face matched the element orientation. Not an error, and
    /// never conflated with a successful division.
    NothingToDo,
}

/// Pick the first face whose normal is within `eps` radians of the
/// element orientation.
pub fn find_oriented_face(
    faces: &[PlanarFace],
    orientation: &Vector3<f64>,
    eps: f64,
) -> Option<PlanarFace> {
    faces
        .iter()
        .find(|face| face.normal.angle(orientation) < eps)
        .copied()
}

/// Divide a target element along a rectangular grid of cut lines.
///
/// Validates the request through the grid generator, derives the reference
/// plane from the grid frame, clears any stale partition, and delegates.
pub fn divide_by_grid<P: Partitioner>(
    partitioner: &mut P,
    target: ElementId,
    request: &GridRequest,
) -> Result<DivideOutcome, PartError> {
    let boundaries = generate_grid_lines(request)?;
    let plane = request.frame.reference_plane();

    if let Some(stale) = partitioner.existing_partition(target) {
        debug!(?stale, "removing stale partition before dividing");
        partitioner.remove_partition(stale);
    }

    let request = PartitionRequest {
        target,
        plane,
        boundaries,
    };
    let parts = partitioner.divide(&request)?;
    info!(parts = parts.len(), "divided element along grid");
    Ok(DivideOutcome::Divided(parts))
}

/// Divide a wall-like element into stripes and assign a material per stripe.
///
/// The reference plane comes from the element face whose normal matches the
/// element orientation; when no face matches there is nothing to divide and
/// the call reports [`DivideOutcome::NothingToDo`]. Created parts receive
/// materials by index-aligned lookup against `material_names`; a missing
/// name or unknown material leaves that part untouched.
#[allow(clippy::too_many_arguments)]
pub fn divide_by_stacked<P, S, M>(
    partitioner: &mut P,
    surfaces: &S,
    materials: &mut M,
    target: ElementId,
    base: &Segment,
    steps: &StepSpec,
    mode: OffsetMode,
    material_names: &[&str],
    face_eps: f64,
) -> Result<DivideOutcome, PartError>
where
    P: Partitioner,
    S: SurfaceQuery,
    M: MaterialTable,
{
    let faces = surfaces.planar_faces(target);
    let orientation = surfaces.orientation(target);
    let Some(face) = find_oriented_face(&faces, &orientation, face_eps) else {
        info!(?target, "no planar face matches the element orientation");
        return Ok(DivideOutcome::NothingToDo);
    };

    let boundaries = generate_stacked_offsets(base, steps, mode)?;
    let plane = ReferencePlane {
        origin: face.origin,
        normal: face.normal,
    };

    if let Some(stale) = partitioner.existing_partition(target) {
        debug!(?stale, "removing stale partition before dividing");
        partitioner.remove_partition(stale);
    }

    let request = PartitionRequest {
        target,
        plane,
        boundaries,
    };
    let parts = partitioner.divide(&request)?;

    for (part, name) in parts.iter().zip(material_names) {
        if let Some(material) = materials.material_by_name(name) {
            materials.assign_material(*part, material);
        }
    }

    info!(parts = parts.len(), "divided element into stripes");
    Ok(DivideOutcome::Divided(parts))
}
