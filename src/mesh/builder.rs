//! Mesh construction utilities.
//!
//! This module rebuilds full half-edge connectivity from an unordered
//! polygon soup (vertex positions plus per-face vertex index lists, as
//! found in mesh file formats), and flattens a mesh back into that form.
//!
//! Reconstruction is all-or-nothing: every failure path returns an error
//! and drops the partially built mesh, so a caller's existing data is
//! never left half-stitched. Input that would force an edge to be shared
//! by more than two faces, or two faces to traverse the same directed
//! edge, is rejected as non-manifold.

use std::collections::HashMap;

use log::{debug, warn};
use nalgebra::Point3;

use super::halfedge::HalfEdgeMesh;
use super::index::{HalfEdgeId, VertexId};
use crate::error::{MeshError, Result};

/// Build a half-edge mesh from vertices and polygonal faces.
///
/// Each face is a list of at least three vertex indices in winding order;
/// all faces must wind consistently. Open boundaries are closed with
/// half-edges owned by the infinite face, linked into traversable loops
/// that run opposite to the interior winding.
///
/// # Example
/// ```
/// use hewn::mesh::{build_from_polygons, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2]];
///
/// let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_polygons<VA, EA, FA>(
    vertices: &[Point3<f64>],
    faces: &[Vec<usize>],
) -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    VA: Default,
    EA: Default,
    FA: Default,
{
    // Validate shapes and indices before allocating anything.
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(MeshError::FaceTooSmall {
                face: fi,
                count: face.len(),
            });
        }
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        for i in 0..face.len() {
            if face[i] == face[(i + 1) % face.len()] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
    }

    let mut mesh = HalfEdgeMesh::with_capacity(vertices.len(), faces.len());
    let infinite = mesh.infinite_face();

    let vertex_ids: Vec<VertexId> = vertices.iter().map(|&pos| mesh.add_vertex(pos)).collect();

    // Transient multimap from vertex to the half-edges leaving it, used
    // only for twin pairing and dropped on every return path.
    let mut leaving: HashMap<VertexId, Vec<HalfEdgeId>> = HashMap::new();
    let mut interior: Vec<HalfEdgeId> = Vec::new();

    // Naive pass: per polygon, one face and a closed next-chain of
    // half-edges with origin and face set. Twins come later.
    for poly in faces {
        let fid = mesh.add_face();
        let k = poly.len();
        let hes: Vec<HalfEdgeId> = (0..k).map(|_| mesh.add_halfedge()).collect();

        for (j, &vi) in poly.iter().enumerate() {
            let v = vertex_ids[vi];
            let he = hes[j];
            {
                let e = mesh.halfedge_mut(he);
                e.origin = v;
                e.next = hes[(j + 1) % k];
                e.face = fid;
            }
            // Last writer wins; any leaving half-edge is a usable seed.
            mesh.vertex_mut(v).halfedge = he;
            leaving.entry(v).or_default().push(he);
        }
        mesh.face_mut(fid).halfedge = hes[0];
        interior.extend_from_slice(&hes);
    }

    // Twin pairing, in construction order.
    let mut boundary: Vec<HalfEdgeId> = Vec::new();
    for &e in &interior {
        if mesh.halfedge(e).twin.is_valid() {
            continue;
        }
        let from = mesh.halfedge(e).origin;
        let to = mesh.origin(mesh.next(e));

        // A second half-edge running from -> to means two faces claim the
        // same directed edge.
        if let Some(list) = leaving.get(&from) {
            if list
                .iter()
                .any(|&c| c != e && mesh.origin(mesh.next(c)) == to)
            {
                warn!("rejecting non-manifold input: directed edge ({:?}, {:?}) claimed twice", from, to);
                return Err(MeshError::NonManifoldEdge {
                    v0: from.index(),
                    v1: to.index(),
                });
            }
        }

        // Candidate twins run the opposite direction between the same
        // vertex pair, so they leave the vertex e points to.
        let matches: Vec<HalfEdgeId> = match leaving.get(&to) {
            Some(list) => list
                .iter()
                .copied()
                .filter(|&c| mesh.origin(mesh.next(c)) == from)
                .collect(),
            None => Vec::new(),
        };

        match matches[..] {
            [] => {
                // Open boundary: synthesize the outside half-edge on the
                // infinite face. Its next is linked by the stitching pass.
                let b = mesh.add_halfedge();
                {
                    let bh = mesh.halfedge_mut(b);
                    bh.twin = e;
                    bh.origin = to;
                    bh.face = infinite;
                }
                mesh.halfedge_mut(e).twin = b;
                mesh.face_mut(infinite).halfedge = b;
                boundary.push(b);
            }
            [c] => {
                mesh.halfedge_mut(e).twin = c;
                mesh.halfedge_mut(c).twin = e;
                if let Some(list) = leaving.get_mut(&to) {
                    if let Some(pos) = list.iter().position(|&x| x == c) {
                        list.swap_remove(pos);
                    }
                }
            }
            _ => {
                warn!("rejecting non-manifold input: edge ({:?}, {:?}) shared by more than two faces", from, to);
                return Err(MeshError::NonManifoldEdge {
                    v0: from.index(),
                    v1: to.index(),
                });
            }
        }

        if let Some(list) = leaving.get_mut(&from) {
            if let Some(pos) = list.iter().position(|&x| x == e) {
                list.swap_remove(pos);
            }
        }
    }

    // Anything still in the multimap was never matched as a twin.
    for (v, list) in &leaving {
        if !list.is_empty() {
            return Err(MeshError::NonManifold {
                details: format!("unmatched directed edge leaving vertex {:?}", v),
            });
        }
    }

    // Stitch the synthesized half-edges into closed boundary loops: walk
    // interior connectivity around the loop until the predecessor with an
    // unset next is found. The walk is bounded so malformed connectivity
    // fails instead of spinning.
    let limit = mesh.num_halfedges();
    for &b in &boundary {
        let mut prev = mesh.twin(mesh.next(mesh.twin(b)));
        let mut steps = 0usize;
        while mesh.halfedge(prev).next.is_valid() {
            prev = mesh.twin(mesh.halfedge(prev).next);
            steps += 1;
            if steps > limit {
                return Err(MeshError::NonManifold {
                    details: "boundary walk did not terminate".to_string(),
                });
            }
        }
        mesh.halfedge_mut(prev).next = b;
    }
    for &b in &boundary {
        if !mesh.halfedge(b).next.is_valid() {
            return Err(MeshError::NonManifold {
                details: "boundary loop failed to close".to_string(),
            });
        }
    }

    debug!(
        "built mesh: {} vertices, {} faces, {} half-edges ({} boundary)",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_halfedges(),
        boundary.len()
    );

    Ok(mesh)
}

/// Flatten a mesh back into vertices and polygonal faces.
///
/// Vertices are numbered contiguously in enumeration order through a
/// transient side map; the mesh itself, including any aux payloads, is
/// left untouched. Infinite-face loops are not emitted. Fails with
/// [`MeshError::InvalidState`] if a face loop does not close or reaches an
/// unregistered vertex.
pub fn to_polygons<VA, EA, FA>(
    mesh: &HalfEdgeMesh<VA, EA, FA>,
) -> Result<(Vec<Point3<f64>>, Vec<Vec<usize>>)> {
    let mut index: HashMap<VertexId, usize> = HashMap::with_capacity(mesh.num_vertices());
    let mut positions = Vec::with_capacity(mesh.num_vertices());
    for (i, (vid, v)) in mesh.vertices().enumerate() {
        index.insert(vid, i);
        positions.push(v.position);
    }

    let limit = mesh.num_halfedges();
    let mut polygons = Vec::with_capacity(mesh.num_faces());
    for (fid, face) in mesh.faces() {
        let start = face.halfedge;
        if !start.is_valid() {
            return Err(MeshError::InvalidState(format!(
                "face {:?} has no boundary loop",
                fid
            )));
        }
        let mut poly = Vec::new();
        let mut he = start;
        loop {
            let origin = mesh.origin(he);
            let i = match index.get(&origin) {
                Some(&i) => i,
                None => {
                    return Err(MeshError::InvalidState(format!(
                        "face {:?} references unregistered vertex {:?}",
                        fid, origin
                    )))
                }
            };
            poly.push(i);
            he = mesh.next(he);
            if !he.is_valid() || poly.len() > limit {
                return Err(MeshError::InvalidState(format!(
                    "loop of face {:?} does not close",
                    fid
                )));
            }
            if he == start {
                break;
            }
        }
        polygons.push(poly);
    }

    Ok((positions, polygons))
}
