//! Derived mesh attributes: normals, boundary flags, and statistics.
//!
//! Nothing here alters topology. Each pass walks the registries through
//! the cursor API and rewrites only the derived fields it owns. The
//! importer runs [`update_all`] after a successful reconstruction; callers
//! that move vertices or edit connectivity re-run the passes they need.

use nalgebra::{Point3, Vector3};

use super::halfedge::{EdgeFlags, HalfEdgeMesh};
use super::index::FaceId;

/// Normals with a magnitude at or below this threshold are left as the
/// zero vector instead of being normalized.
pub const NORMAL_EPSILON: f64 = 1e-4;

/// Cached per-mesh statistics computed by [`update_statistics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Componentwise minimum of all vertex positions.
    pub min: Point3<f64>,
    /// Componentwise maximum of all vertex positions.
    pub max: Point3<f64>,
    /// Mean vertex position.
    pub centroid: Point3<f64>,
}

/// Compute the normal of a face by walking its loop once.
///
/// Accumulates the cross product of consecutive edge-vector pairs around
/// the loop, which weights by area and tolerates non-planar and
/// non-triangular polygons. Near-zero accumulations (degenerate faces)
/// yield the zero vector.
pub fn face_normal<VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, f: FaceId) -> Vector3<f64> {
    let positions: Vec<Point3<f64>> = mesh
        .face_halfedges(f)
        .map(|he| *mesh.position(mesh.origin(he)))
        .collect();
    let n = positions.len();
    if n < 3 {
        return Vector3::zeros();
    }

    let mut normal = Vector3::zeros();
    for i in 0..n {
        let prev = positions[(i + n - 1) % n];
        let cur = positions[i];
        let next = positions[(i + 1) % n];
        let incoming = cur - prev;
        let outgoing = next - cur;
        normal += incoming.cross(&outgoing);
    }

    if normal.norm() > NORMAL_EPSILON {
        normal.normalize()
    } else {
        Vector3::zeros()
    }
}

/// Recompute and store the normal of every registered face.
///
/// The infinite face is skipped; its normal stays zero.
pub fn update_face_normals<VA, EA, FA>(mesh: &mut HalfEdgeMesh<VA, EA, FA>) {
    let mut cur = mesh.first_face_id();
    while let Some(f) = cur {
        let n = face_normal(mesh, f);
        mesh.face_mut(f).normal = n;
        cur = mesh.next_face_id(f);
    }
}

/// Recompute and store the normal of every vertex.
///
/// Each vertex normal is the normalized sum of the stored normals of its
/// incident faces, so [`update_face_normals`] must have run first; this
/// ordering is the caller's responsibility.
pub fn update_vertex_normals<VA, EA, FA>(mesh: &mut HalfEdgeMesh<VA, EA, FA>) {
    let mut cur = mesh.first_vertex_id();
    while let Some(v) = cur {
        mesh.vertex_mut(v).normal = Vector3::zeros();
        cur = mesh.next_vertex_id(v);
    }

    let mut fcur = mesh.first_face_id();
    while let Some(f) = fcur {
        let n = mesh.face(f).normal;
        let loop_vertices: Vec<_> = mesh.face_vertices(f).collect();
        for v in loop_vertices {
            mesh.vertex_mut(v).normal += n;
        }
        fcur = mesh.next_face_id(f);
    }

    let mut cur = mesh.first_vertex_id();
    while let Some(v) = cur {
        let n = mesh.vertex(v).normal;
        mesh.vertex_mut(v).normal = if n.norm() > NORMAL_EPSILON {
            n.normalize()
        } else {
            Vector3::zeros()
        };
        cur = mesh.next_vertex_id(v);
    }
}

/// Recompute the BOUNDARY bit of every half-edge.
///
/// A half-edge is a boundary half-edge iff it or its twin belongs to the
/// infinite face. The other flag bits are caller-owned and left untouched.
pub fn update_boundary_flags<VA, EA, FA>(mesh: &mut HalfEdgeMesh<VA, EA, FA>) {
    let infinite = mesh.infinite_face();
    let mut cur = mesh.first_halfedge_id();
    while let Some(he) = cur {
        let twin = mesh.halfedge(he).twin;
        let on_boundary = mesh.face_of(he) == infinite
            || (twin.is_valid() && mesh.face_of(twin) == infinite);
        mesh.halfedge_mut(he).flags.set(EdgeFlags::BOUNDARY, on_boundary);
        cur = mesh.next_halfedge_id(he);
    }
}

/// Recompute the cached bounding box and centroid in one vertex pass.
///
/// An empty mesh resets the cache to `None`.
pub fn update_statistics<VA, EA, FA>(mesh: &mut HalfEdgeMesh<VA, EA, FA>) {
    let mut count = 0usize;
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut sum = Vector3::zeros();

    for (_, v) in mesh.vertices() {
        for i in 0..3 {
            min[i] = min[i].min(v.position[i]);
            max[i] = max[i].max(v.position[i]);
        }
        sum += v.position.coords;
        count += 1;
    }

    let stats = if count == 0 {
        None
    } else {
        Some(MeshStats {
            min,
            max,
            centroid: Point3::from(sum / count as f64),
        })
    };
    mesh.set_stats(stats);
}

/// Run every derived-attribute pass in dependency order.
pub fn update_all<VA, EA, FA>(mesh: &mut HalfEdgeMesh<VA, EA, FA>) {
    update_face_normals(mesh);
    update_vertex_normals(mesh);
    update_boundary_flags(mesh);
    update_statistics(mesh);
}
