//! Ready-made meshes for tests, benchmarks, and examples.

use nalgebra::Point3;

use super::builder::build_from_polygons;
use super::halfedge::HalfEdgeMesh;
use crate::error::Result;

/// Build a closed unit-scale tetrahedron (4 vertices, 4 triangles).
pub fn tetrahedron<VA, EA, FA>() -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    VA: Default,
    EA: Default,
    FA: Default,
{
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.5, 1.0, 0.0),
        Point3::new(0.5, 0.5, 1.0),
    ];
    let faces = vec![
        vec![0, 2, 1],
        vec![0, 1, 3],
        vec![1, 2, 3],
        vec![2, 0, 3],
    ];
    build_from_polygons(&vertices, &faces)
}

/// Build a closed axis-aligned unit cube (8 vertices, 6 quads).
pub fn cube<VA, EA, FA>() -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    VA: Default,
    EA: Default,
    FA: Default,
{
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ];
    // Outward-facing counter-clockwise winding on every side.
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    build_from_polygons(&vertices, &faces)
}

/// Build an open triangulated `n` by `n` grid in the xy plane.
pub fn grid<VA, EA, FA>(n: usize) -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    VA: Default,
    EA: Default,
    FA: Default,
{
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push(vec![v00, v10, v11]);
            faces.push(vec![v00, v11, v01]);
        }
    }

    build_from_polygons(&vertices, &faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::HalfEdgeMesh;

    #[test]
    fn test_tetrahedron_is_closed() {
        let mesh: HalfEdgeMesh = tetrahedron().unwrap();
        assert_eq!(mesh.num_faces(), 4);
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_valid());
        assert!(!mesh.halfedge_ids().any(|he| mesh.is_boundary_halfedge(he)));
    }

    #[test]
    fn test_cube_is_closed() {
        let mesh: HalfEdgeMesh = cube().unwrap();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_faces(), 6);
        // 12 undirected edges
        assert_eq!(mesh.num_halfedges(), 24);
        assert!(mesh.is_valid());
        assert!(!mesh.halfedge_ids().any(|he| mesh.is_boundary_halfedge(he)));
    }

    #[test]
    fn test_grid_is_open() {
        let mesh: HalfEdgeMesh = grid(2).unwrap();
        assert_eq!(mesh.num_vertices(), 9);
        assert_eq!(mesh.num_faces(), 8);
        assert!(mesh.is_valid());
        assert!(mesh.halfedge_ids().any(|he| mesh.is_boundary_halfedge(he)));
    }
}
