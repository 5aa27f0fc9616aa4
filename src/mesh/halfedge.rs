//! Half-edge mesh data structure.
//!
//! This module provides a half-edge (doubly-connected edge list)
//! representation for polygonal meshes. This structure enables O(1)
//! adjacency queries and is the foundation for the topological OFF codec.
//!
//! # Structure
//!
//! - Each edge is split into two **half-edges** pointing in opposite directions
//! - Each half-edge knows its **twin** (opposite half-edge), **next** (next
//!   half-edge around the face), **origin vertex**, and **incident face**
//! - Each vertex stores one outgoing half-edge
//! - Each face stores one half-edge on its boundary loop
//!
//! # The infinite face
//!
//! Every mesh carries one permanent sentinel face representing the unbounded
//! exterior of an open surface. Half-edges on the open boundary belong to it,
//! and its boundary loops are traversable through `next` like any other face
//! loop. The sentinel is created with the mesh, survives [`HalfEdgeMesh::clear`],
//! is excluded from face counts and enumeration, and cannot be removed.
//!
//! # Storage
//!
//! Elements live in per-kind slot arenas threaded onto intrusive live lists.
//! Insertion prepends, so enumeration visits elements newest-first and
//! inserting while a cursor enumeration is in progress is safe (the new
//! element precedes the cursor). Removal unlinks in O(1) and does **not**
//! patch adjacency ids pointing at the removed element; callers must have
//! redirected or removed all referrers first.

use nalgebra::{Point3, Vector3};

use super::arena::Arena;
use super::attributes::MeshStats;
use super::index::{FaceId, HalfEdgeId, VertexId};

bitflags::bitflags! {
    /// Per-half-edge flag bits.
    ///
    /// All bits are advisory and caller-managed except [`EdgeFlags::BOUNDARY`],
    /// which [`crate::mesh::update_boundary_flags`] computes from the topology.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EdgeFlags: u8 {
        /// The half-edge has been visited by some traversal.
        const PROCESSED = 0b0000_0001;
        /// The half-edge or its twin belongs to the infinite face.
        const BOUNDARY = 0b0000_0010;
        /// The half-edge is part of the current selection.
        const SELECTED = 0b0000_0100;
        /// General-purpose mark bit.
        const MARKED = 0b0000_1000;
        /// The half-edge lies on a silhouette.
        const SILHOUETTE = 0b0001_0000;
    }
}

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Vertex<A = ()> {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// The vertex normal, derived by [`crate::mesh::update_vertex_normals`].
    pub normal: Vector3<f64>,

    /// One outgoing half-edge from this vertex.
    /// When set, `halfedge.origin == self`.
    pub halfedge: HalfEdgeId,

    /// User payload, untouched by the library.
    pub aux: A,
}

impl<A> Vertex<A> {
    /// Create a new vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self
    where
        A: Default,
    {
        Self::with_aux(position, A::default())
    }

    /// Create a new vertex at the given position carrying a payload.
    pub fn with_aux(position: Point3<f64>, aux: A) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
            halfedge: HalfEdgeId::invalid(),
            aux,
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self
    where
        A: Default,
    {
        Self::new(Point3::new(x, y, z))
    }
}

/// A half-edge in the mesh.
#[derive(Debug, Clone)]
pub struct HalfEdge<A = ()> {
    /// The vertex this half-edge originates from.
    pub origin: VertexId,

    /// The opposite half-edge (pointing in the reverse direction).
    pub twin: HalfEdgeId,

    /// The next half-edge around the face, in winding order.
    pub next: HalfEdgeId,

    /// The face this half-edge belongs to. Boundary half-edges belong to
    /// the infinite face.
    pub face: FaceId,

    /// Flag bits.
    pub flags: EdgeFlags,

    /// User payload, untouched by the library.
    pub aux: A,
}

impl<A> HalfEdge<A> {
    /// Create a new unconnected half-edge.
    pub fn new() -> Self
    where
        A: Default,
    {
        Self::with_aux(A::default())
    }

    /// Create a new unconnected half-edge carrying a payload.
    pub fn with_aux(aux: A) -> Self {
        Self {
            origin: VertexId::invalid(),
            twin: HalfEdgeId::invalid(),
            next: HalfEdgeId::invalid(),
            face: FaceId::invalid(),
            flags: EdgeFlags::empty(),
            aux,
        }
    }
}

impl<A: Default> Default for HalfEdge<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A face in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Face<A = ()> {
    /// One half-edge on the boundary loop of this face.
    /// When set, `halfedge.face == self`.
    pub halfedge: HalfEdgeId,

    /// The face normal, derived by [`crate::mesh::update_face_normals`].
    pub normal: Vector3<f64>,

    /// User payload, untouched by the library.
    pub aux: A,
}

impl<A> Face<A> {
    /// Create a new face with no boundary loop yet.
    pub fn new() -> Self
    where
        A: Default,
    {
        Self::with_aux(A::default())
    }

    /// Create a new face carrying a payload.
    pub fn with_aux(aux: A) -> Self {
        Self {
            halfedge: HalfEdgeId::invalid(),
            normal: Vector3::zeros(),
            aux,
        }
    }
}

impl<A: Default> Default for Face<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A half-edge mesh for polygonal surfaces.
///
/// The three aux type parameters are per-kind user payloads carried inline
/// on vertices, half-edges, and faces; they default to `()`.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh<VA = (), EA = (), FA = ()> {
    vertices: Arena<Vertex<VA>, VertexId>,
    halfedges: Arena<HalfEdge<EA>, HalfEdgeId>,
    faces: Arena<Face<FA>, FaceId>,
    infinite: FaceId,
    stats: Option<MeshStats>,
}

impl<VA, EA, FA: Default> Default for HalfEdgeMesh<VA, EA, FA> {
    fn default() -> Self {
        Self::new()
    }
}

impl<VA, EA, FA> HalfEdgeMesh<VA, EA, FA> {
    /// Create a new empty mesh.
    pub fn new() -> Self
    where
        FA: Default,
    {
        let mut faces = Arena::new();
        let infinite = faces.insert_detached(Face::new());
        Self {
            vertices: Arena::new(),
            halfedges: Arena::new(),
            faces,
            infinite,
            stats: None,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self
    where
        FA: Default,
    {
        // Four half-edges per face is a workable estimate for mixed
        // triangle/quad meshes with some open boundary.
        let mut faces = Arena::with_capacity(num_faces + 1);
        let infinite = faces.insert_detached(Face::new());
        Self {
            vertices: Arena::with_capacity(num_vertices),
            halfedges: Arena::with_capacity(num_faces * 4),
            faces,
            infinite,
            stats: None,
        }
    }

    // ==================== Counts ====================

    /// Get the number of registered vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of registered half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of registered faces. The infinite face is not counted.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no registered elements of any kind.
    ///
    /// The infinite-face sentinel does not count; a freshly constructed
    /// mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.halfedges.is_empty() && self.faces.is_empty()
    }

    // ==================== The infinite face ====================

    /// Get the infinite-face sentinel, valid for the mesh's whole lifetime.
    #[inline]
    pub fn infinite_face(&self) -> FaceId {
        self.infinite
    }

    /// Check if `f` is the infinite-face sentinel.
    #[inline]
    pub fn is_infinite(&self, f: FaceId) -> bool {
        f == self.infinite
    }

    // ==================== Insertion and removal ====================

    /// Add a new vertex and return its id.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId
    where
        VA: Default,
    {
        self.vertices.insert(Vertex::new(position))
    }

    /// Add a new vertex carrying a payload.
    pub fn add_vertex_with(&mut self, position: Point3<f64>, aux: VA) -> VertexId {
        self.vertices.insert(Vertex::with_aux(position, aux))
    }

    /// Add a new unconnected half-edge and return its id.
    pub fn add_halfedge(&mut self) -> HalfEdgeId
    where
        EA: Default,
    {
        self.halfedges.insert(HalfEdge::new())
    }

    /// Add a new unconnected half-edge carrying a payload.
    pub fn add_halfedge_with(&mut self, aux: EA) -> HalfEdgeId {
        self.halfedges.insert(HalfEdge::with_aux(aux))
    }

    /// Add a new face with no boundary loop yet and return its id.
    pub fn add_face(&mut self) -> FaceId
    where
        FA: Default,
    {
        self.faces.insert(Face::new())
    }

    /// Add a new face carrying a payload.
    pub fn add_face_with(&mut self, aux: FA) -> FaceId {
        self.faces.insert(Face::with_aux(aux))
    }

    /// Unregister a vertex.
    ///
    /// Adjacency ids pointing at the vertex are left as they are; the
    /// caller must already have redirected or removed all referrers.
    /// Removing a vertex that is not registered is a precondition
    /// violation, checked in debug builds only.
    pub fn remove_vertex(&mut self, v: VertexId) -> Vertex<VA> {
        self.vertices.remove(v)
    }

    /// Unregister a half-edge. Same caveats as [`Self::remove_vertex`].
    pub fn remove_halfedge(&mut self, he: HalfEdgeId) -> HalfEdge<EA> {
        self.halfedges.remove(he)
    }

    /// Unregister a face. Same caveats as [`Self::remove_vertex`].
    /// The infinite face cannot be removed.
    pub fn remove_face(&mut self, f: FaceId) -> Face<FA> {
        debug_assert!(f != self.infinite, "the infinite face cannot be removed");
        self.faces.remove(f)
    }

    /// Drop every registered element of all three kinds.
    ///
    /// Counts and cached statistics reset to their defaults; the
    /// infinite-face sentinel is re-established under its original id.
    pub fn clear(&mut self)
    where
        FA: Default,
    {
        self.vertices.clear();
        self.halfedges.clear();
        self.faces.clear();
        let infinite = self.faces.insert_detached(Face::new());
        debug_assert_eq!(infinite, self.infinite);
        self.infinite = infinite;
        self.stats = None;
    }

    // ==================== Accessors ====================

    /// Get a vertex by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex<VA> {
        self.vertices.get(id)
    }

    /// Get a mutable vertex by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<VA> {
        self.vertices.get_mut(id)
    }

    /// Get a vertex by id, or `None` if the id is stale or invalid.
    #[inline]
    pub fn try_vertex(&self, id: VertexId) -> Option<&Vertex<VA>> {
        self.vertices.try_get(id)
    }

    /// Get a half-edge by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId) -> &HalfEdge<EA> {
        self.halfedges.get(id)
    }

    /// Get a mutable half-edge by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn halfedge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge<EA> {
        self.halfedges.get_mut(id)
    }

    /// Get a half-edge by id, or `None` if the id is stale or invalid.
    #[inline]
    pub fn try_halfedge(&self, id: HalfEdgeId) -> Option<&HalfEdge<EA>> {
        self.halfedges.try_get(id)
    }

    /// Get a face by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face<FA> {
        self.faces.get(id)
    }

    /// Get a mutable face by id. Panics if the id is stale or invalid.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face<FA> {
        self.faces.get_mut(id)
    }

    /// Get a face by id, or `None` if the id is stale or invalid.
    #[inline]
    pub fn try_face(&self, id: FaceId) -> Option<&Face<FA>> {
        self.faces.try_get(id)
    }

    /// Check if a vertex id refers to a live element.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(v)
    }

    /// Check if a half-edge id refers to a live element.
    #[inline]
    pub fn contains_halfedge(&self, he: HalfEdgeId) -> bool {
        self.halfedges.contains(he)
    }

    /// Check if a face id refers to a live element or the sentinel.
    #[inline]
    pub fn contains_face(&self, f: FaceId) -> bool {
        self.faces.contains(f)
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Set the position of a vertex.
    #[inline]
    pub fn set_position(&mut self, v: VertexId, pos: Point3<f64>) {
        self.vertex_mut(v).position = pos;
    }

    /// Get the cached mesh statistics, if computed since the last mutation
    /// that reset them. `None` for an empty mesh.
    #[inline]
    pub fn stats(&self) -> Option<&MeshStats> {
        self.stats.as_ref()
    }

    #[inline]
    pub(crate) fn set_stats(&mut self, stats: Option<MeshStats>) {
        self.stats = stats;
    }

    // ==================== Topology queries ====================

    /// Get the twin (opposite) half-edge.
    #[inline]
    pub fn twin(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(he).twin
    }

    /// Get the next half-edge around the face.
    #[inline]
    pub fn next(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.halfedge(he).next
    }

    /// Get the origin vertex of a half-edge.
    #[inline]
    pub fn origin(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).origin
    }

    /// Get the destination vertex of a half-edge.
    #[inline]
    pub fn dest(&self, he: HalfEdgeId) -> VertexId {
        self.origin(self.twin(he))
    }

    /// Get the face of a half-edge.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId) -> FaceId {
        self.halfedge(he).face
    }

    /// Check if a half-edge belongs to the infinite face.
    ///
    /// This is the structural notion of "boundary"; the BOUNDARY flag bit
    /// is a cached derivative of it (set on both half-edges of a boundary
    /// edge).
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId) -> bool {
        self.face_of(he) == self.infinite
    }

    /// Check if an edge (either of its half-edges) is on the boundary.
    #[inline]
    pub fn is_boundary_edge(&self, he: HalfEdgeId) -> bool {
        self.is_boundary_halfedge(he) || self.is_boundary_halfedge(self.twin(he))
    }

    /// Check if a vertex is on the boundary.
    pub fn is_boundary_vertex(&self, v: VertexId) -> bool {
        let start = self.vertex(v).halfedge;
        if !start.is_valid() {
            return true; // Isolated vertex
        }
        let mut he = start;
        loop {
            if self.is_boundary_halfedge(he) {
                return true;
            }
            he = self.next(self.twin(he));
            if he == start {
                break;
            }
        }
        false
    }

    /// Compute the valence (degree) of a vertex.
    pub fn valence(&self, v: VertexId) -> usize {
        self.vertex_halfedges(v).count()
    }

    /// Count the sides of a face by walking its loop once.
    pub fn face_vertex_count(&self, f: FaceId) -> usize {
        self.face_halfedges(f).count()
    }

    // ==================== Enumeration ====================

    /// Get the most recently registered vertex, if any.
    #[inline]
    pub fn first_vertex_id(&self) -> Option<VertexId> {
        self.vertices.first()
    }

    /// Advance a vertex cursor. Inserting during the enumeration is safe;
    /// removing the vertex currently under the cursor is not.
    #[inline]
    pub fn next_vertex_id(&self, v: VertexId) -> Option<VertexId> {
        self.vertices.next_after(v)
    }

    /// Get the most recently registered half-edge, if any.
    #[inline]
    pub fn first_halfedge_id(&self) -> Option<HalfEdgeId> {
        self.halfedges.first()
    }

    /// Advance a half-edge cursor.
    #[inline]
    pub fn next_halfedge_id(&self, he: HalfEdgeId) -> Option<HalfEdgeId> {
        self.halfedges.next_after(he)
    }

    /// Get the most recently registered face, if any. Never the infinite face.
    #[inline]
    pub fn first_face_id(&self) -> Option<FaceId> {
        self.faces.first()
    }

    /// Advance a face cursor.
    #[inline]
    pub fn next_face_id(&self, f: FaceId) -> Option<FaceId> {
        self.faces.next_after(f)
    }

    /// Iterate over all vertex ids, newest-first.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|(id, _)| id)
    }

    /// Iterate over all vertices with their ids, newest-first.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<VA>)> + '_ {
        self.vertices.iter()
    }

    /// Iterate over all half-edge ids, newest-first.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.halfedges.iter().map(|(id, _)| id)
    }

    /// Iterate over all half-edges with their ids, newest-first.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge<EA>)> + '_ {
        self.halfedges.iter()
    }

    /// Iterate over all face ids, newest-first. The infinite face is skipped.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|(id, _)| id)
    }

    /// Iterate over all faces with their ids, newest-first. The infinite
    /// face is skipped.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face<FA>)> + '_ {
        self.faces.iter()
    }

    // ==================== Circulators ====================

    /// Iterate over half-edges leaving a vertex.
    pub fn vertex_halfedges(&self, v: VertexId) -> VertexHalfEdgeIter<'_, VA, EA, FA> {
        VertexHalfEdgeIter::new(self, v)
    }

    /// Iterate over vertices adjacent to a vertex.
    pub fn vertex_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_halfedges(v).map(|he| self.dest(he))
    }

    /// Iterate over faces incident to a vertex. The infinite face is skipped.
    pub fn vertex_faces(&self, v: VertexId) -> impl Iterator<Item = FaceId> + '_ {
        self.vertex_halfedges(v).filter_map(|he| {
            let f = self.face_of(he);
            if f.is_valid() && !self.is_infinite(f) {
                Some(f)
            } else {
                None
            }
        })
    }

    /// Iterate over half-edges around a face loop.
    pub fn face_halfedges(&self, f: FaceId) -> FaceHalfEdgeIter<'_, VA, EA, FA> {
        FaceHalfEdgeIter::new(self, f)
    }

    /// Iterate over the vertices of a face in loop order.
    pub fn face_vertices(&self, f: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_halfedges(f).map(|he| self.origin(he))
    }

    // ==================== Validation ====================

    /// Check if every registered element is structurally consistent.
    ///
    /// Delegates to [`crate::mesh::is_valid_mesh`]; the individual
    /// per-element predicates are exported alongside it.
    pub fn is_valid(&self) -> bool {
        super::validate::is_valid_mesh(self)
    }
}

/// Iterator over the half-edges leaving a vertex.
///
/// Requires twins and nexts to be fully linked (a built mesh); on an open
/// mesh the walk passes through the infinite face's boundary loop, so it
/// still visits every outgoing half-edge exactly once.
pub struct VertexHalfEdgeIter<'a, VA = (), EA = (), FA = ()> {
    mesh: &'a HalfEdgeMesh<VA, EA, FA>,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl<'a, VA, EA, FA> VertexHalfEdgeIter<'a, VA, EA, FA> {
    fn new(mesh: &'a HalfEdgeMesh<VA, EA, FA>, v: VertexId) -> Self {
        let start = mesh.vertex(v).halfedge;
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, VA, EA, FA> Iterator for VertexHalfEdgeIter<'a, VA, EA, FA> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;

        // If he leaves v, twin(he) arrives at v and next(twin(he)) leaves
        // v again: one counter-winding step around the vertex.
        self.current = self.mesh.next(self.mesh.twin(self.current));

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over the half-edges of a face loop.
pub struct FaceHalfEdgeIter<'a, VA = (), EA = (), FA = ()> {
    mesh: &'a HalfEdgeMesh<VA, EA, FA>,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl<'a, VA, EA, FA> FaceHalfEdgeIter<'a, VA, EA, FA> {
    fn new(mesh: &'a HalfEdgeMesh<VA, EA, FA>, f: FaceId) -> Self {
        let start = mesh.face(f).halfedge;
        Self {
            mesh,
            start,
            current: start,
            done: !start.is_valid(),
        }
    }
}

impl<'a, VA, EA, FA> Iterator for FaceHalfEdgeIter<'a, VA, EA, FA> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.mesh.next(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_creation() {
        let v = Vertex::<()>::from_coords(1.0, 2.0, 3.0);
        assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v.normal, Vector3::zeros());
        assert!(!v.halfedge.is_valid());
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = HalfEdgeMesh::<(), (), ()>::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_halfedges(), 0);
        assert_eq!(mesh.num_faces(), 0);
        assert!(mesh.is_empty());
        assert!(mesh.infinite_face().is_valid());
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_add_and_enumerate_newest_first() {
        let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
        let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));

        assert_eq!(mesh.num_vertices(), 2);
        let order: Vec<_> = mesh.vertex_ids().collect();
        assert_eq!(order, vec![v1, v0]);
        assert_eq!(mesh.first_vertex_id(), Some(v1));
        assert_eq!(mesh.next_vertex_id(v1), Some(v0));
        assert_eq!(mesh.next_vertex_id(v0), None);
    }

    #[test]
    fn test_infinite_face_survives_clear() {
        let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
        let inf = mesh.infinite_face();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_face();
        mesh.add_halfedge();

        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.infinite_face(), inf);
        assert!(mesh.is_infinite(inf));
        assert!(!mesh.face(inf).halfedge.is_valid());
        assert_eq!(mesh.stats(), None);
    }

    #[test]
    fn test_faces_exclude_infinite() {
        let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
        let f = mesh.add_face();

        assert_eq!(mesh.num_faces(), 1);
        let ids: Vec<_> = mesh.face_ids().collect();
        assert_eq!(ids, vec![f]);
    }

    #[test]
    fn test_remove_does_not_patch_adjacency() {
        let mut mesh: HalfEdgeMesh = HalfEdgeMesh::new();
        let v = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let he = mesh.add_halfedge();
        mesh.halfedge_mut(he).origin = v;

        mesh.remove_vertex(v);
        assert_eq!(mesh.num_vertices(), 0);
        // The dangling origin id is left exactly as it was.
        assert_eq!(mesh.halfedge(he).origin, v);
        assert!(mesh.try_vertex(v).is_none());
    }

    #[test]
    fn test_aux_payloads() {
        let mut mesh: HalfEdgeMesh<&'static str, (), u32> = HalfEdgeMesh::new();
        let v = mesh.add_vertex_with(Point3::new(0.0, 0.0, 0.0), "corner");
        let f = mesh.add_face_with(7);

        assert_eq!(mesh.vertex(v).aux, "corner");
        assert_eq!(mesh.face(f).aux, 7);
    }

    #[test]
    fn test_edge_flags() {
        let mut flags = EdgeFlags::default();
        assert!(flags.is_empty());

        flags.insert(EdgeFlags::SELECTED | EdgeFlags::MARKED);
        flags.set(EdgeFlags::BOUNDARY, true);
        assert!(flags.contains(EdgeFlags::SELECTED));
        assert!(flags.contains(EdgeFlags::BOUNDARY));

        flags.set(EdgeFlags::BOUNDARY, false);
        assert!(!flags.contains(EdgeFlags::BOUNDARY));
        assert!(flags.contains(EdgeFlags::MARKED));
    }
}
