//! Error types for hewn.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction and I/O.
#[derive(Error, Debug)]
pub enum MeshError {
    /// File or stream I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The OFF header token was not `OFF`.
    #[error("invalid OFF header: expected 'OFF', found '{found}'")]
    InvalidHeader {
        /// The token found in place of the header.
        found: String,
    },

    /// The input ended before the declared counts were satisfied.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What the parser was trying to read.
        expected: &'static str,
    },

    /// A token could not be parsed as the expected number.
    #[error("invalid {expected} token '{found}'")]
    InvalidToken {
        /// What the parser was trying to read.
        expected: &'static str,
        /// The offending token.
        found: String,
    },

    /// A face references a vertex index outside the vertex list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face record declares fewer than three sides.
    #[error("face {face} has {count} vertices, need at least 3")]
    FaceTooSmall {
        /// The face index.
        face: usize,
        /// The declared side count.
        count: usize,
    },

    /// A face repeats a vertex on consecutive corners (degenerate edge).
    #[error("face {face} is degenerate (repeated consecutive vertex)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A directed edge is claimed by more than one face, or an undirected
    /// edge is shared by more than two faces.
    #[error("edge ({v0}, {v1}) is shared by more than two faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// The input has non-manifold topology.
    #[error("mesh has non-manifold topology: {details}")]
    NonManifold {
        /// Description of the non-manifold condition.
        details: String,
    },

    /// The mesh is in an invalid state for the requested operation.
    #[error("invalid mesh state: {0}")]
    InvalidState(String),
}
