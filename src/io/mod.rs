//! Mesh file I/O.
//!
//! This module provides loading and saving of meshes in the OFF (Object
//! File Format) text format, the only format the library speaks:
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | OFF | `.off` | ✓ | ✓ | Polygon soup with topological reconstruction |
//!
//! Loading does considerably more than parsing: the unordered polygon
//! soup is reconstructed into fully connected half-edge topology, with
//! non-manifold input rejected and open boundaries stitched into
//! infinite-face loops. See [`off`] for the codec entry points.
//!
//! ```no_run
//! use hewn::io::off;
//! use hewn::mesh::HalfEdgeMesh;
//!
//! let mesh: HalfEdgeMesh = off::load("model.off").unwrap();
//! off::save(&mesh, "output.off").unwrap();
//! ```

pub mod off;
