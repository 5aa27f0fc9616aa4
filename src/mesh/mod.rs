//! Core mesh data structures.
//!
//! This module provides the half-edge mesh representation and the
//! operations that build, check, and annotate it.
//!
//! # Overview
//!
//! The primary type is [`HalfEdgeMesh`], which represents a polygonal mesh
//! using a half-edge (doubly-connected edge list) data structure. Elements
//! are owned by the mesh and addressed through type-safe ids
//! ([`VertexId`], [`HalfEdgeId`], [`FaceId`]); adjacency is stored as ids,
//! giving O(1) topology queries without reference cycles.
//!
//! Every mesh carries a permanent infinite-face sentinel
//! ([`HalfEdgeMesh::infinite_face`]) that owns the boundary loops of open
//! surfaces.
//!
//! # Construction
//!
//! Meshes are typically constructed by the OFF codec in [`crate::io::off`]
//! or directly from a polygon soup:
//!
//! ```
//! use hewn::mesh::{build_from_polygons, HalfEdgeMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2]];
//!
//! let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
//! ```
//!
//! Derived attributes (normals, boundary flags, bounding box, centroid)
//! are recomputed on demand by the `update_*` passes.

mod arena;
mod attributes;
mod builder;
mod halfedge;
mod index;
mod shapes;
mod validate;

pub use attributes::{
    face_normal, update_all, update_boundary_flags, update_face_normals, update_statistics,
    update_vertex_normals, MeshStats, NORMAL_EPSILON,
};
pub use builder::{build_from_polygons, to_polygons};
pub use halfedge::{
    EdgeFlags, Face, FaceHalfEdgeIter, HalfEdge, HalfEdgeMesh, Vertex, VertexHalfEdgeIter,
};
pub use index::{ElementId, FaceId, HalfEdgeId, VertexId};
pub use shapes::{cube, grid, tetrahedron};
pub use validate::{is_valid_face, is_valid_halfedge, is_valid_mesh, is_valid_vertex};
