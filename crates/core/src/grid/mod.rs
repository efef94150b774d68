//! This module holds basic types and data structures related to triangular
//! grids.
//!
//! ## Coordinate Systems
//!
//! Trigon uses two different coordinate systems:
//!
//! ### Grid Coordinates
//!
//! Grid coordinates define space within the triangle-tile world. The lattice
//! is the standard triangular tessellation: every unit rhombus is split into
//! two triangles, one pointing up and one pointing down, and every lattice
//! point has six neighbors.
//!
//! #### Vertices
//!
//! A [GridVertex] is an integer pair `(u, v)` in a doubled-column basis:
//! `u` counts *half*-columns and `v` counts rows. **For any vertex, `u + v`
//! must be even.** Doubling the column axis is what keeps every coordinate
//! integral: rows of a triangular lattice are offset from each other by half
//! a column, so with plain columns every other row would need fractional
//! coordinates. With doubled columns, moving one column to the right is
//! `u + 2`, and moving diagonally to the next row is `u ± 1, v ± 1` - all
//! integers, with the parity rule guaranteeing the point lands on the
//! lattice.
//!
//! The six neighbor offsets are the six canonical [Direction]s. They are
//! ordered clockwise so that stepping one position through the ordering is
//! exactly a 60° clockwise rotation, which makes rotation of a facing a
//! simple index shift.
//!
//! #### Faces
//!
//! A [GridFace] is an integer pair `(u, v)` with **no** parity restriction:
//! the two triangles of each rhombus take the two parities of `u + v`. A
//! face with `u + v` odd points up, and a face with `u + v` even points
//! down. Orientation is therefore derived, never stored, so a face can never
//! disagree with its own geometry.
//!
//! #### Edges
//!
//! A [GridEdge] is `(u, v, side)` where `side` picks one of the three sides
//! of the *up* face `(u, v)` (so `u + v` must be odd). Every edge in the
//! lattice is a side of exactly one up face, which makes this a canonical
//! (duplicate-free) edge identifier. The three sides are south (the
//! horizontal base), east, and west.
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are conventional Cartesian `(x, y)` values used by
//! renderers. The conversion is fixed: a vertex `(u, v)` maps to
//! `(u * 0.5, v * √3/2)`, i.e. half-columns are half a unit wide and rows
//! are one triangle-height apart. Faces and edges convert through their
//! centroids and midpoints. The reverse mappings snap an arbitrary screen
//! point to the nearest vertex or the containing face; both are total
//! functions and are idempotent on points that are themselves images of
//! grid coordinates.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
