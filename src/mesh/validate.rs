//! Structural consistency predicates.
//!
//! Pure checks over the adjacency relations; nothing here mutates the
//! mesh. A stale or unset id answers `false` rather than panicking, so
//! the predicates are safe to run on half-built meshes.

use super::halfedge::HalfEdgeMesh;
use super::index::{FaceId, HalfEdgeId, VertexId};

/// Check one half-edge: twin, origin, face, and next must all be set,
/// and the next half-edge must bound the same face.
pub fn is_valid_halfedge<VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, he: HalfEdgeId) -> bool {
    let Some(h) = mesh.try_halfedge(he) else {
        return false;
    };
    if !h.twin.is_valid() || !h.origin.is_valid() || !h.face.is_valid() || !h.next.is_valid() {
        return false;
    }
    match mesh.try_halfedge(h.next) {
        Some(next) => next.face == h.face,
        None => false,
    }
}

/// Check one face: its loop half-edge must be set and must point back.
pub fn is_valid_face<VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, f: FaceId) -> bool {
    let Some(face) = mesh.try_face(f) else {
        return false;
    };
    if !face.halfedge.is_valid() {
        return false;
    }
    match mesh.try_halfedge(face.halfedge) {
        Some(h) => h.face == f,
        None => false,
    }
}

/// Check one vertex: its leaving half-edge must be set and must originate
/// here.
pub fn is_valid_vertex<VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, v: VertexId) -> bool {
    let Some(vert) = mesh.try_vertex(v) else {
        return false;
    };
    if !vert.halfedge.is_valid() {
        return false;
    }
    match mesh.try_halfedge(vert.halfedge) {
        Some(h) => h.origin == v,
        None => false,
    }
}

/// Check every registered element of every kind, stopping at the first
/// failure.
///
/// The infinite-face sentinel is not registered and is exempt: a closed
/// mesh whose infinite face owns no boundary loop is still valid.
pub fn is_valid_mesh<VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>) -> bool {
    mesh.halfedge_ids().all(|he| is_valid_halfedge(mesh, he))
        && mesh.face_ids().all(|f| is_valid_face(mesh, f))
        && mesh.vertex_ids().all(|v| is_valid_vertex(mesh, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_polygons;
    use crate::mesh::HalfEdgeMesh;
    use nalgebra::Point3;

    fn triangle() -> HalfEdgeMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        build_from_polygons(&vertices, &[vec![0, 1, 2]]).unwrap()
    }

    #[test]
    fn test_built_mesh_is_valid() {
        let mesh = triangle();
        assert!(is_valid_mesh(&mesh));
        for he in mesh.halfedge_ids() {
            assert!(is_valid_halfedge(&mesh, he));
        }
        for v in mesh.vertex_ids() {
            assert!(is_valid_vertex(&mesh, v));
        }
        for f in mesh.face_ids() {
            assert!(is_valid_face(&mesh, f));
        }
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let mesh: HalfEdgeMesh = HalfEdgeMesh::new();
        assert!(is_valid_mesh(&mesh));
    }

    #[test]
    fn test_severed_twin_invalidates_halfedge() {
        let mut mesh = triangle();
        let he = mesh.first_halfedge_id().unwrap();
        mesh.halfedge_mut(he).twin = crate::mesh::HalfEdgeId::invalid();

        assert!(!is_valid_halfedge(&mesh, he));
        assert!(!is_valid_mesh(&mesh));
    }

    #[test]
    fn test_misdirected_leaving_edge_invalidates_vertex() {
        let mut mesh = triangle();
        let v = mesh.first_vertex_id().unwrap();
        let foreign = mesh
            .halfedge_ids()
            .find(|&he| mesh.origin(he) != v)
            .unwrap();
        mesh.vertex_mut(v).halfedge = foreign;

        assert!(!is_valid_vertex(&mesh, v));
    }

    #[test]
    fn test_stale_id_is_invalid() {
        let mut mesh = triangle();
        let f = mesh.first_face_id().unwrap();
        mesh.remove_face(f);

        assert!(!is_valid_face(&mesh, f));
    }
}
