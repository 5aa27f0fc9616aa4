//! OFF (Object File Format) support.
//!
//! The OFF text format is a polygon soup:
//!
//! ```text
//! OFF
//! <Nv> <Nf> <Ne>
//! x0 y0 z0
//! ...
//! k0 i0_0 i0_1 ... i0_{k0-1}
//! ...
//! ```
//!
//! Tokens are whitespace-delimited; indices are 0-based into the vertex
//! list in file order; the edge count `Ne` is read but carries no
//! information the reconstruction needs. Reading produces a fully
//! connected half-edge mesh with derived attributes computed, or an error
//! and no mesh at all; a failed read never yields partial topology.
//! Writing emits only registered faces; infinite-face boundary loops are
//! implicit in the polygon structure.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, to_polygons, update_all, HalfEdgeMesh};

/// Whitespace-delimited token cursor over the input text.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or(MeshError::UnexpectedEof { expected })
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| MeshError::InvalidToken {
            expected,
            found: token.to_string(),
        })
    }

    fn next_f64(&mut self, expected: &'static str) -> Result<f64> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| MeshError::InvalidToken {
            expected,
            found: token.to_string(),
        })
    }
}

/// Read an OFF mesh from any reader.
///
/// On success the returned mesh is fully connected and has its derived
/// attributes (normals, boundary flags, statistics) computed. A count
/// declaration of zero vertices or zero faces yields an empty mesh.
/// Tokens after the last polygon record are ignored.
///
/// # Example
/// ```
/// use hewn::mesh::HalfEdgeMesh;
///
/// let data = "OFF\n3 1 3\n0 0 0\n1 0 0\n0.5 1 0\n3 0 1 2\n";
/// let mesh: HalfEdgeMesh = hewn::io::off::read(data.as_bytes()).unwrap();
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn read<R, VA, EA, FA>(mut reader: R) -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    R: Read,
    VA: Default,
    EA: Default,
    FA: Default,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

/// Load an OFF mesh from a file.
///
/// If the file cannot be opened, the error surfaces before any mesh is
/// constructed.
pub fn load<P, VA, EA, FA>(path: P) -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    P: AsRef<Path>,
    VA: Default,
    EA: Default,
    FA: Default,
{
    let file = File::open(path)?;
    read(file)
}

fn parse<VA, EA, FA>(text: &str) -> Result<HalfEdgeMesh<VA, EA, FA>>
where
    VA: Default,
    EA: Default,
    FA: Default,
{
    let mut tokens = Tokens::new(text);

    let header = tokens.next("OFF header")?;
    if header != "OFF" {
        return Err(MeshError::InvalidHeader {
            found: header.to_string(),
        });
    }

    let num_vertices = tokens.next_usize("vertex count")?;
    let num_faces = tokens.next_usize("face count")?;
    let _num_edges = tokens.next_usize("edge count")?;

    if num_vertices == 0 || num_faces == 0 {
        return Ok(HalfEdgeMesh::new());
    }

    let mut vertices = Vec::with_capacity(num_vertices);
    for _ in 0..num_vertices {
        let x = tokens.next_f64("vertex coordinate")?;
        let y = tokens.next_f64("vertex coordinate")?;
        let z = tokens.next_f64("vertex coordinate")?;
        vertices.push(Point3::new(x, y, z));
    }

    let mut faces = Vec::with_capacity(num_faces);
    for _ in 0..num_faces {
        let sides = tokens.next_usize("face side count")?;
        let mut polygon = Vec::with_capacity(sides);
        for _ in 0..sides {
            polygon.push(tokens.next_usize("face vertex index")?);
        }
        faces.push(polygon);
    }

    let mut mesh = build_from_polygons(&vertices, &faces)?;
    update_all(&mut mesh);

    debug!(
        "loaded OFF mesh: {} vertices, {} faces, {} half-edges",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_halfedges()
    );

    Ok(mesh)
}

/// Write a mesh to any writer in OFF format.
///
/// Vertices are numbered contiguously in enumeration order through a
/// transient side map, so writing is not observably destructive: the
/// mesh, including aux payloads, is untouched. Only registered faces are
/// emitted; the declared edge count is `num_halfedges() / 2`.
pub fn write<W, VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, mut writer: W) -> Result<()>
where
    W: Write,
{
    let (positions, polygons) = to_polygons(mesh)?;

    writeln!(writer, "OFF")?;
    writeln!(
        writer,
        "{} {} {}",
        positions.len(),
        polygons.len(),
        mesh.num_halfedges() / 2
    )?;

    for p in &positions {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    for polygon in &polygons {
        write!(writer, "{}", polygon.len())?;
        for &i in polygon {
            write!(writer, " {}", i)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save a mesh to an OFF file.
pub fn save<P, VA, EA, FA>(mesh: &HalfEdgeMesh<VA, EA, FA>, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write(mesh, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EdgeFlags;

    const TRIANGLE: &str = "OFF\n3 1 0\n0 0 0\n1 0 0\n0.5 1 0\n3 0 1 2\n";

    const TETRAHEDRON: &str = "\
OFF
4 4 6
0 0 0
1 0 0
0.5 1 0
0.5 0.5 1
3 0 2 1
3 0 1 3
3 1 2 3
3 2 0 3
";

    #[test]
    fn test_read_single_triangle() {
        let mesh: HalfEdgeMesh = read(TRIANGLE.as_bytes()).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_halfedges(), 6);
        assert!(mesh.is_valid());

        // Both half-edges of each edge carry the boundary flag.
        for (_, he) in mesh.halfedges() {
            assert!(he.flags.contains(EdgeFlags::BOUNDARY));
        }

        // The three synthesized half-edges close one loop on the
        // infinite face.
        let infinite = mesh.infinite_face();
        let outer: Vec<_> = mesh
            .halfedge_ids()
            .filter(|&he| mesh.face_of(he) == infinite)
            .collect();
        assert_eq!(outer.len(), 3);
        let mut he = outer[0];
        for _ in 0..3 {
            he = mesh.next(he);
        }
        assert_eq!(he, outer[0]);
    }

    #[test]
    fn test_read_tetrahedron() {
        let mesh: HalfEdgeMesh = read(TETRAHEDRON.as_bytes()).unwrap();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 4);
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_valid());

        for (_, he) in mesh.halfedges() {
            assert!(!he.flags.contains(EdgeFlags::BOUNDARY));
        }

        // Centroid is the mean of the four vertices.
        let stats = mesh.stats().unwrap();
        assert!((stats.centroid - Point3::new(0.5, 0.375, 0.25)).norm() < 1e-12);
    }

    #[test]
    fn test_reject_bad_header() {
        let result: Result<HalfEdgeMesh> = read("COFF\n3 1 0\n".as_bytes());
        assert!(matches!(result, Err(MeshError::InvalidHeader { .. })));
    }

    #[test]
    fn test_reject_empty_input() {
        let result: Result<HalfEdgeMesh> = read("".as_bytes());
        assert!(matches!(result, Err(MeshError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_reject_truncated_vertices() {
        let result: Result<HalfEdgeMesh> = read("OFF\n3 1 0\n0 0 0\n1 0\n".as_bytes());
        assert!(matches!(result, Err(MeshError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_reject_bad_count_token() {
        let result: Result<HalfEdgeMesh> = read("OFF\nthree 1 0\n".as_bytes());
        assert!(matches!(
            result,
            Err(MeshError::InvalidToken {
                expected: "vertex count",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_counts_give_empty_mesh() {
        let mesh: HalfEdgeMesh = read("OFF\n0 0 0\n".as_bytes()).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_edge_count_is_ignored() {
        let skewed = TRIANGLE.replace("3 1 0", "3 1 999");
        let mesh: HalfEdgeMesh = read(skewed.as_bytes()).unwrap();
        assert_eq!(mesh.num_faces(), 1);
    }

    #[test]
    fn test_duplicate_polygon_rejected() {
        let data = "OFF\n3 2 0\n0 0 0\n1 0 0\n0.5 1 0\n3 0 1 2\n3 0 1 2\n";
        let result: Result<HalfEdgeMesh> = read(data.as_bytes());
        assert!(matches!(result, Err(MeshError::NonManifoldEdge { .. })));
    }

    #[test]
    fn test_write_declares_edge_count() {
        let mesh: HalfEdgeMesh = read(TETRAHEDRON.as_bytes()).unwrap();
        let mut out = Vec::new();
        write(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("OFF"));
        assert_eq!(lines.next(), Some("4 4 6"));
    }

    #[test]
    fn test_round_trip_closed_mesh() {
        let original: HalfEdgeMesh = read(TETRAHEDRON.as_bytes()).unwrap();

        let mut first = Vec::new();
        write(&original, &mut first).unwrap();
        let reread: HalfEdgeMesh = read(first.as_slice()).unwrap();

        assert_eq!(reread.num_vertices(), original.num_vertices());
        assert_eq!(reread.num_faces(), original.num_faces());
        assert_eq!(reread.num_halfedges(), original.num_halfedges());

        // Enumeration is newest-first, so the rewritten vertex order is
        // the reverse of the first serialization.
        let original_positions: Vec<_> =
            original.vertices().map(|(_, v)| v.position).collect();
        let mut reread_positions: Vec<_> =
            reread.vertices().map(|(_, v)| v.position).collect();
        reread_positions.reverse();
        for (a, b) in original_positions.iter().zip(&reread_positions) {
            assert!((a - b).norm() < 1e-12);
        }

        // Two round trips reproduce the serialized form byte for byte.
        let mut second = Vec::new();
        write(&reread, &mut second).unwrap();
        let rereread: HalfEdgeMesh = read(second.as_slice()).unwrap();
        let mut third = Vec::new();
        write(&rereread, &mut third).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn test_round_trip_open_mesh() {
        let quad = "OFF\n4 1 4\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";
        let original: HalfEdgeMesh = read(quad.as_bytes()).unwrap();

        let mut out = Vec::new();
        write(&original, &mut out).unwrap();
        let reread: HalfEdgeMesh = read(out.as_slice()).unwrap();

        assert_eq!(reread.num_vertices(), 4);
        assert_eq!(reread.num_faces(), 1);
        assert_eq!(reread.num_halfedges(), 8);
        assert_eq!(reread.face_vertex_count(reread.first_face_id().unwrap()), 4);
        assert!(reread.is_valid());
    }

    #[test]
    fn test_two_face_pillow_is_manifold() {
        // Two opposite-winding triangles over the same vertices share
        // every edge exactly twice: a closed, zero-volume surface.
        let data = "OFF\n3 2 3\n0 0 0\n1 0 0\n0.5 1 0\n3 0 1 2\n3 1 0 2\n";
        let mesh: HalfEdgeMesh = read(data.as_bytes()).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_halfedges(), 6);
        assert!(mesh.is_valid());
        assert!(!mesh.halfedge_ids().any(|he| mesh.is_boundary_halfedge(he)));
    }
}
