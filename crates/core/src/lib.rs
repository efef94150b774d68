//! Trigon is a triangular-grid geometry and tactical query library. It
//! models the vertices, faces, and edges of a triangulated lattice and
//! answers the spatial questions a tactics game asks about them: which
//! vertices does an attack cover, where can a unit move, and what outline
//! should a highlighted region draw. Presentation is implemented
//! elsewhere; every query returns plain sets and maps of coordinates.
//!
//! ```
//! use trigon::{Direction, GridVertex, Hitbox, LineHitbox};
//!
//! let hitbox = LineHitbox::new(3, 1, 1);
//! let area = hitbox.area(GridVertex::ORIGIN, Direction::East);
//! assert_eq!(area.len(), 3);
//! // From here, hand the area to your renderer or combat resolver.
//! ```
//!
//! See [TerrainConfig] and [UnitProfile] for the query parameters, and
//! [TerrainGrid] for a concrete terrain store.

mod config;
mod grid;
mod tactics;
mod terrain;
mod util;

pub use crate::{
    config::{TerrainConfig, UnitProfile},
    grid::{
        Direction, EdgeMap, EdgeSet, EdgeSide, FaceOrientation, FaceSet,
        GridEdge, GridFace, GridVector, GridVertex, VertexIndexMap,
        VertexMap, VertexSet, ROW_HEIGHT,
    },
    tactics::{
        excavation_ring, expand, external_borders, occupied_faces,
        BlastHitbox, Hitbox, LineHitbox, ReachableZone,
    },
    terrain::{HeightQuery, TerrainGrid},
    util::{grid_len, unit::Meter},
};
