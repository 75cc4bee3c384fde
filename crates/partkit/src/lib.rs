//! # partkit
//!
//! Geometry core for splitting building-element surfaces into parts.
//!
//! Two generators produce the bounding cut lines - a rectangular grid
//! ([`grid`]) or a stacked family of parallel stripes ([`stack`]) - and an
//! assembler ([`chain`]) rebuilds ordered boundary loops from loose curve
//! segments. The host document itself sits behind the collaborator traits
//! in [`partition`]; this crate does the geometric reasoning and nothing
//! else. Every operation is a pure computation over its inputs: no shared
//! state, no I/O, safe to call from any thread.

pub mod chain;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod partition;
pub mod stack;

// Re-export common types at crate root for convenience.
pub use chain::{assemble_loop, Loop, LoopAssembly};
pub use error::PartError;
pub use geometry::{
    vertical, BasisFrame, CurveKind, ReferencePlane, Segment, Tolerance, DEFAULT_EPS,
};
pub use grid::{generate_grid_lines, GridRequest, RotationAngle};
pub use partition::{
    divide_by_grid, divide_by_stacked, find_oriented_face, DivideOutcome, ElementId, MaterialId,
    MaterialTable, PartId, PartitionRequest, Partitioner, PlanarFace, SurfaceQuery,
    DEFAULT_FACE_EPS,
};
pub use stack::{generate_stacked_offsets, OffsetMode, StepSpec};
