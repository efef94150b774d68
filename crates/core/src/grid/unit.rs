//! This sub-module contains the basic unit types of the triangular grid
//! coordinate system. See the parent module documentation for more info on
//! the coordinate system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The screen-space height of one lattice row, i.e. the height of a unit
/// triangle: √3/2
pub const ROW_HEIGHT: f64 = 0.866_025_403_784_438_6;

/// A lattice point on the triangular grid. Vertices use a doubled-column
/// basis: `u` counts half-columns and `v` counts rows, and `u + v` must
/// always be even. See module-level docs for a full description of the
/// coordinate system.
///
/// The components are stored as `i16`s. We'll never have a grid with more
/// than 32k columns (that'd be a billion-tile battlefield), so this saves on
/// memory when vertices are used as map keys in bulk.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.u", "self.v")]
pub struct GridVertex {
    u: i16,
    v: i16,
}

impl GridVertex {
    pub const ORIGIN: Self = Self::new_unchecked(0, 0);

    /// Construct a new vertex from its components. Returns an error if the
    /// components don't satisfy the lattice parity rule (`u + v` even).
    pub fn new(u: i16, v: i16) -> anyhow::Result<Self> {
        if (u + v) % 2 != 0 {
            Err(anyhow!(
                "Invalid vertex ({}, {}); component sum must be even",
                u,
                v
            ))
        } else {
            Ok(Self { u, v })
        }
    }

    /// Construct a new vertex without validating the parity rule. The caller
    /// must guarantee that `u + v` is even.
    pub const fn new_unchecked(u: i16, v: i16) -> Self {
        debug_assert!((u + v) % 2 == 0);
        Self { u, v }
    }

    /// The half-column component of this vertex
    pub fn u(self) -> i16 {
        self.u
    }

    /// The row component of this vertex
    pub fn v(self) -> i16 {
        self.v
    }

    /// Translate this vertex by an arbitrary vector. Vectors can't be
    /// validated on their own (see [GridVector]), so the translated point is
    /// re-validated here and an off-lattice result is an error.
    pub fn translate(self, vector: GridVector) -> anyhow::Result<Self> {
        Self::new(self.u + vector.u, self.v + vector.v)
    }

    /// Get the neighboring vertex in the given direction. Direction offsets
    /// have an even component sum, so the result is always on the lattice.
    pub fn adjacent(self, direction: Direction) -> Self {
        let vector = direction.to_vector();
        Self::new_unchecked(self.u + vector.u, self.v + vector.v)
    }

    /// Get an iterator of all the vertices directly adjacent to this one.
    /// The iterator will always contain exactly 6 values, in clockwise
    /// order starting from east.
    pub fn adjacents(self) -> impl Iterator<Item = GridVertex> {
        Direction::iter().map(move |direction| self.adjacent(direction))
    }

    /// Get the vertex `distance` steps away in the given direction. A
    /// negative distance walks the opposite way.
    pub fn offset(self, direction: Direction, distance: i16) -> Self {
        let vector = direction.to_vector() * distance;
        Self::new_unchecked(self.u + vector.u, self.v + vector.v)
    }

    /// Get the 6 faces that have this vertex as one of their corners, in
    /// clockwise order starting from the northeast face.
    pub fn touches(self) -> [GridFace; 6] {
        let (u, v) = (self.u, self.v);
        [
            GridFace::new(u + 1, v),
            GridFace::new(u + 1, v - 1),
            GridFace::new(u, v - 1),
            GridFace::new(u - 1, v - 1),
            GridFace::new(u - 1, v),
            GridFace::new(u, v),
        ]
    }

    /// Calculate the path distance between two vertices, meaning the number
    /// of single-step hops it takes to get from one to the other. 0 if the
    /// points are equal, 1 if they are adjacent, etc.
    pub fn distance_to(self, other: Self) -> usize {
        let du =
            (i32::from(self.u) - i32::from(other.u)).unsigned_abs() as usize;
        let dv =
            (i32::from(self.v) - i32::from(other.v)).unsigned_abs() as usize;
        // Each step moves at most one row and at most two half-columns, and
        // the parity rule guarantees du and dv have matching parity so the
        // halved sum is exact
        dv.max((du + dv) / 2)
    }

    /// Convert this vertex to its screen-space position
    pub fn to_cartesian(self) -> Point2<f64> {
        Point2::new(f64::from(self.u) * 0.5, f64::from(self.v) * ROW_HEIGHT)
    }

    /// Snap an arbitrary screen-space point to the nearest lattice vertex.
    /// This is idempotent for any point that is itself the image of a
    /// vertex under [Self::to_cartesian].
    pub fn from_cartesian(point: Point2<f64>) -> Self {
        let v = (point.y / ROW_HEIGHT).round() as i16;
        let x2 = point.x * 2.0;
        let u = x2.round() as i16;
        if (u + v) % 2 == 0 {
            Self::new_unchecked(u, v)
        } else {
            // The rounded column has the wrong parity for this row, so shift
            // to whichever neighboring column is closer
            let u = if x2 >= f64::from(u) { u + 1 } else { u - 1 };
            Self::new_unchecked(u, v)
        }
    }
}

/// A vector on the triangular grid, i.e. a positional translation rather
/// than a position.
///
/// ## Validation
///
/// Unlike vertices, grid vectors **cannot be validated.** A vector with an
/// odd component sum maps every valid vertex to an invalid point, but a
/// vector can also be an intermediate value that is later summed with
/// another odd vector back onto the lattice. As such, any vector can be
/// created, and points are re-validated whenever a vector is applied (see
/// [GridVertex::translate]).
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.u", "self.v")]
pub struct GridVector {
    pub u: i16,
    pub v: i16,
}

impl GridVector {
    pub const fn new(u: i16, v: i16) -> Self {
        Self { u, v }
    }
}

/// The 6 directions in which a vertex can step to a neighboring vertex.
/// Also used as the facing of a unit on the grid.
///
/// The variants are ordered clockwise starting from east, and the ordering
/// is load-bearing: advancing one position through [Self::CLOCKWISE] is
/// exactly a 60° clockwise rotation, which is what [Self::rotated] relies
/// on.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    /// All 6 directions in clockwise order, starting from east. Positive
    /// rotation steps move forward through this list.
    pub const CLOCKWISE: [Self; 6] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Get the index of this direction within the clockwise ordering
    fn clockwise_index(self) -> usize {
        // The direction is always in the table, so the lookup can't fail
        Self::CLOCKWISE
            .iter()
            .position(|direction| self == *direction)
            .unwrap()
    }

    /// Get the vector offset that moves a vertex one step in this direction
    pub fn to_vector(self) -> GridVector {
        match self {
            Self::East => GridVector::new(2, 0),
            Self::SouthEast => GridVector::new(1, -1),
            Self::SouthWest => GridVector::new(-1, -1),
            Self::West => GridVector::new(-2, 0),
            Self::NorthWest => GridVector::new(-1, 1),
            Self::NorthEast => GridVector::new(1, 1),
        }
    }

    /// Rotate this direction by the given number of 60° steps. Positive
    /// steps rotate clockwise, negative steps counterclockwise. Rotation
    /// wraps, so `rotated(6)` is the identity for any direction.
    pub fn rotated(self, steps: i32) -> Self {
        let index = self.clockwise_index() as i32 + steps;
        Self::CLOCKWISE[index.rem_euclid(6) as usize]
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotated(3)
    }

    /// Get the direction closest to the given screen-space angle, measured
    /// in radians counterclockwise from the positive x axis. Each direction
    /// owns the 60° sector centered on its own axis, so e.g. anything
    /// within ±30° of 0 maps to east.
    pub fn from_angle(radians: f64) -> Self {
        // Directions in counterclockwise order, matching increasing angle
        const COUNTER_CLOCKWISE: [Direction; 6] = [
            Direction::East,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::SouthEast,
        ];
        let degrees = radians.to_degrees();
        let sector = ((degrees + 30.0).rem_euclid(360.0) / 60.0) as usize;
        COUNTER_CLOCKWISE[sector % 6]
    }
}

impl TryFrom<GridVector> for Direction {
    type Error = anyhow::Error;

    /// Interpret a vector as one of the 6 canonical direction offsets. A
    /// vector that isn't exactly a canonical offset is a contract violation
    /// and returns an error rather than silently snapping to some
    /// direction.
    fn try_from(vector: GridVector) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|direction| direction.to_vector() == vector)
            .ok_or_else(|| {
                anyhow!(
                    "Invalid direction vector {}; must be one of the 6 \
                    canonical unit offsets",
                    vector
                )
            })
    }
}

/// The two orientations a triangular face can have. Orientation is derived
/// from the face's coordinates, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceOrientation {
    /// The face's horizontal side is at the bottom and its apex at the top
    Up,
    /// The face's horizontal side is at the top and its apex at the bottom
    Down,
}

/// A single triangular face of the grid. Any `(u, v)` pair is a valid face;
/// the parity of `u + v` determines which of the rhombus' two triangles the
/// pair names (odd points up, even points down). See module-level docs for
/// a full description of the coordinate system.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.u", "self.v")]
pub struct GridFace {
    u: i16,
    v: i16,
}

impl GridFace {
    pub const fn new(u: i16, v: i16) -> Self {
        Self { u, v }
    }

    /// The half-column component of this face
    pub fn u(self) -> i16 {
        self.u
    }

    /// The row component of this face
    pub fn v(self) -> i16 {
        self.v
    }

    /// Which way does this face point?
    pub fn orientation(self) -> FaceOrientation {
        if (self.u + self.v).rem_euclid(2) == 1 {
            FaceOrientation::Up
        } else {
            FaceOrientation::Down
        }
    }

    /// Get the 3 corner vertices of this face, in counterclockwise order
    /// starting from the western corner of the horizontal side.
    pub fn corners(self) -> [GridVertex; 3] {
        let (u, v) = (self.u, self.v);
        match self.orientation() {
            FaceOrientation::Up => [
                GridVertex::new_unchecked(u - 1, v),
                GridVertex::new_unchecked(u + 1, v),
                GridVertex::new_unchecked(u, v + 1),
            ],
            FaceOrientation::Down => [
                GridVertex::new_unchecked(u, v),
                GridVertex::new_unchecked(u + 1, v + 1),
                GridVertex::new_unchecked(u - 1, v + 1),
            ],
        }
    }

    /// Get the 3 faces that share an edge with this one. Neighbors of an up
    /// face all point down, and vice versa.
    pub fn neighbors(self) -> [GridFace; 3] {
        let (u, v) = (self.u, self.v);
        match self.orientation() {
            FaceOrientation::Up => [
                Self::new(u - 1, v),
                Self::new(u + 1, v),
                Self::new(u, v - 1),
            ],
            FaceOrientation::Down => [
                Self::new(u - 1, v),
                Self::new(u + 1, v),
                Self::new(u, v + 1),
            ],
        }
    }

    /// Get the 3 edges that make up the boundary of this face
    pub fn borders(self) -> [GridEdge; 3] {
        let (u, v) = (self.u, self.v);
        match self.orientation() {
            FaceOrientation::Up => [
                GridEdge::new_unchecked(u, v, EdgeSide::South),
                GridEdge::new_unchecked(u, v, EdgeSide::East),
                GridEdge::new_unchecked(u, v, EdgeSide::West),
            ],
            // Each side of a down face is also a side of some up face, and
            // edges are anchored to their up face
            FaceOrientation::Down => [
                GridEdge::new_unchecked(u, v + 1, EdgeSide::South),
                GridEdge::new_unchecked(u - 1, v, EdgeSide::East),
                GridEdge::new_unchecked(u + 1, v, EdgeSide::West),
            ],
        }
    }

    /// Convert this face to the screen-space position of its centroid
    pub fn to_cartesian(self) -> Point2<f64> {
        let x = f64::from(self.u) * 0.5;
        let y = match self.orientation() {
            FaceOrientation::Up => {
                (f64::from(self.v) + 1.0 / 3.0) * ROW_HEIGHT
            }
            FaceOrientation::Down => {
                (f64::from(self.v) + 2.0 / 3.0) * ROW_HEIGHT
            }
        };
        Point2::new(x, y)
    }

    /// Find the face containing an arbitrary screen-space point. This is
    /// idempotent with [Self::to_cartesian]: a face's centroid always maps
    /// back to the same face.
    pub fn from_cartesian(point: Point2<f64>) -> Self {
        let row = (point.y / ROW_HEIGHT).floor();
        let v = row as i16;
        // Fractional height within the row, in [0, 1)
        let t = point.y / ROW_HEIGHT - row;
        let x2 = point.x * 2.0;
        let base = x2.floor() as i16;

        // At height t, the up face (u, v) spans half-columns
        // [u-1+t, u+1-t] and the down face (u, v) spans [u-t, u+t]. Those
        // intervals tile the row, so one of the four candidate columns
        // around x2 must contain the point.
        for u in (base - 1)..=(base + 2) {
            let face = Self::new(u, v);
            let (lo, hi) = match face.orientation() {
                FaceOrientation::Up => {
                    (f64::from(u) - 1.0 + t, f64::from(u) + 1.0 - t)
                }
                FaceOrientation::Down => {
                    (f64::from(u) - t, f64::from(u) + t)
                }
            };
            if lo <= x2 && x2 <= hi {
                return face;
            }
        }
        // Only reachable through float rounding right at an interval
        // boundary; snap to the cell column
        Self::new(base, v)
    }
}

/// Which side of its anchoring up face an edge is
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSide {
    /// The horizontal base of the up face
    South,
    /// The right-hand slanted side
    East,
    /// The left-hand slanted side
    West,
}

/// A single edge of the grid, identified as one side of the up face
/// `(u, v)`. Every edge in the lattice is a side of exactly one up face, so
/// this naming is canonical: two faces sharing an edge agree on its
/// identity. Since the anchor face must point up, `u + v` must be odd.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.u", "self.v", "self.side")]
pub struct GridEdge {
    u: i16,
    v: i16,
    side: EdgeSide,
}

impl GridEdge {
    /// Construct a new edge on the given side of the up face `(u, v)`.
    /// Returns an error if `(u, v)` isn't an up face (`u + v` odd).
    pub fn new(u: i16, v: i16, side: EdgeSide) -> anyhow::Result<Self> {
        if (u + v) % 2 == 0 {
            Err(anyhow!(
                "Invalid edge ({}, {}, {}); anchor face must point up, so \
                the component sum must be odd",
                u,
                v,
                side
            ))
        } else {
            Ok(Self { u, v, side })
        }
    }

    /// Construct a new edge without validating the anchor parity. The
    /// caller must guarantee that `u + v` is odd.
    pub const fn new_unchecked(u: i16, v: i16, side: EdgeSide) -> Self {
        debug_assert!((u + v) % 2 != 0);
        Self { u, v, side }
    }

    /// The half-column component of this edge's anchor face
    pub fn u(self) -> i16 {
        self.u
    }

    /// The row component of this edge's anchor face
    pub fn v(self) -> i16 {
        self.v
    }

    /// Which side of the anchor face this edge is
    pub fn side(self) -> EdgeSide {
        self.side
    }

    /// Get the 2 vertices at the ends of this edge
    pub fn endpoints(self) -> [GridVertex; 2] {
        let (u, v) = (self.u, self.v);
        match self.side {
            EdgeSide::South => [
                GridVertex::new_unchecked(u - 1, v),
                GridVertex::new_unchecked(u + 1, v),
            ],
            EdgeSide::East => [
                GridVertex::new_unchecked(u + 1, v),
                GridVertex::new_unchecked(u, v + 1),
            ],
            EdgeSide::West => [
                GridVertex::new_unchecked(u - 1, v),
                GridVertex::new_unchecked(u, v + 1),
            ],
        }
    }

    /// Get the 2 faces that share this edge. The anchoring up face is
    /// always first.
    pub fn joins(self) -> [GridFace; 2] {
        let (u, v) = (self.u, self.v);
        let anchor = GridFace::new(u, v);
        let other = match self.side {
            EdgeSide::South => GridFace::new(u, v - 1),
            EdgeSide::East => GridFace::new(u + 1, v),
            EdgeSide::West => GridFace::new(u - 1, v),
        };
        [anchor, other]
    }

    /// Get the 2 collinear edges that extend this one past either endpoint.
    /// Useful for building straight borders.
    pub fn continues(self) -> [GridEdge; 2] {
        let (u, v) = (self.u, self.v);
        match self.side {
            EdgeSide::South => [
                Self::new_unchecked(u + 2, v, EdgeSide::South),
                Self::new_unchecked(u - 2, v, EdgeSide::South),
            ],
            EdgeSide::East => [
                Self::new_unchecked(u - 1, v + 1, EdgeSide::East),
                Self::new_unchecked(u + 1, v - 1, EdgeSide::East),
            ],
            EdgeSide::West => [
                Self::new_unchecked(u + 1, v + 1, EdgeSide::West),
                Self::new_unchecked(u - 1, v - 1, EdgeSide::West),
            ],
        }
    }

    /// Convert this edge to the screen-space position of its midpoint
    pub fn to_cartesian(self) -> Point2<f64> {
        let [a, b] = self.endpoints();
        let a = a.to_cartesian();
        let b = b.to_cartesian();
        Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// A spread of valid vertices, including negative components
    fn sample_vertices() -> Vec<GridVertex> {
        vec![
            GridVertex::ORIGIN,
            GridVertex::new_unchecked(3, 1),
            GridVertex::new_unchecked(-2, 0),
            GridVertex::new_unchecked(-1, -3),
            GridVertex::new_unchecked(5, -1),
            GridVertex::new_unchecked(-4, 2),
        ]
    }

    /// A spread of faces covering both orientations and negative components
    fn sample_faces() -> Vec<GridFace> {
        vec![
            GridFace::new(0, 0),
            GridFace::new(1, 0),
            GridFace::new(-1, 0),
            GridFace::new(-2, 1),
            GridFace::new(3, -2),
            GridFace::new(-3, -1),
        ]
    }

    #[test]
    fn test_vertex_validation() {
        assert!(GridVertex::new(0, 0).is_ok());
        assert!(GridVertex::new(2, 4).is_ok());
        assert!(GridVertex::new(-1, 1).is_ok());
        assert!(GridVertex::new(1, 2).is_err());
        assert!(GridVertex::new(-2, 1).is_err());
    }

    #[test]
    fn test_translate() {
        let vertex = GridVertex::new_unchecked(1, 1);
        let moved = vertex.translate(GridVector::new(2, -2)).unwrap();
        assert_eq!(moved, GridVertex::new_unchecked(3, -1));
        // An odd vector pushes the point off the lattice
        assert!(vertex.translate(GridVector::new(1, 0)).is_err());
    }

    #[test]
    fn test_adjacency_symmetry() {
        for vertex in sample_vertices() {
            let neighbors: Vec<_> = vertex.adjacents().collect();
            assert_eq!(neighbors.len(), 6);
            for (i, neighbor) in neighbors.iter().enumerate() {
                // All 6 neighbors are distinct
                for other in &neighbors[(i + 1)..] {
                    assert_ne!(neighbor, other);
                }
                // Every neighbor sees the original vertex as a neighbor
                assert!(
                    neighbor.adjacents().any(|n| n == vertex),
                    "{neighbor} is not adjacent to {vertex}"
                );
                assert_eq!(vertex.distance_to(*neighbor), 1);
            }
        }
    }

    #[test]
    fn test_touches() {
        for vertex in sample_vertices() {
            let faces = vertex.touches();
            for (i, face) in faces.iter().enumerate() {
                for other in &faces[(i + 1)..] {
                    assert_ne!(face, other);
                }
                assert!(
                    face.corners().contains(&vertex),
                    "{face} does not have {vertex} as a corner"
                );
            }
        }
    }

    #[test]
    fn test_distance_to() {
        let origin = GridVertex::ORIGIN;
        assert_eq!(origin.distance_to(origin), 0);
        assert_eq!(origin.distance_to(GridVertex::new_unchecked(2, 0)), 1);
        assert_eq!(origin.distance_to(GridVertex::new_unchecked(1, 1)), 1);
        assert_eq!(origin.distance_to(GridVertex::new_unchecked(4, 2)), 3);
        assert_eq!(origin.distance_to(GridVertex::new_unchecked(0, 2)), 2);
        assert_eq!(origin.distance_to(GridVertex::new_unchecked(-3, -1)), 2);
        assert_eq!(
            GridVertex::new_unchecked(-2, 0)
                .distance_to(GridVertex::new_unchecked(3, 1)),
            3
        );
    }

    #[test]
    fn test_rotation() {
        for direction in Direction::iter() {
            assert_eq!(direction.rotated(0), direction);
            assert_eq!(direction.rotated(6), direction);
            assert_eq!(direction.rotated(-6), direction);
            assert_eq!(direction.opposite(), direction.rotated(3));
            assert_eq!(direction.opposite().opposite(), direction);
            for steps in -7..=7 {
                assert_eq!(
                    direction.rotated(steps).rotated(-steps),
                    direction
                );
            }
        }
        assert_eq!(Direction::East.rotated(1), Direction::SouthEast);
        assert_eq!(Direction::East.rotated(-1), Direction::NorthEast);
        assert_eq!(Direction::NorthWest.rotated(2), Direction::East);
    }

    #[test]
    fn test_direction_from_vector() {
        for direction in Direction::iter() {
            let roundtrip: Direction =
                direction.to_vector().try_into().unwrap();
            assert_eq!(roundtrip, direction);
        }
        // Not unit offsets
        assert!(Direction::try_from(GridVector::new(1, 0)).is_err());
        assert!(Direction::try_from(GridVector::new(4, 0)).is_err());
        assert!(Direction::try_from(GridVector::new(0, 0)).is_err());
    }

    #[test]
    fn test_direction_from_angle() {
        use std::f64::consts::PI;

        assert_eq!(Direction::from_angle(0.0), Direction::East);
        assert_eq!(Direction::from_angle(PI / 3.0), Direction::NorthEast);
        assert_eq!(
            Direction::from_angle(2.0 * PI / 3.0),
            Direction::NorthWest
        );
        assert_eq!(Direction::from_angle(PI), Direction::West);
        assert_eq!(Direction::from_angle(-PI / 3.0), Direction::SouthEast);
        assert_eq!(
            Direction::from_angle(-2.0 * PI / 3.0),
            Direction::SouthWest
        );
        // Within the ±30° sector
        assert_eq!(Direction::from_angle(0.4), Direction::East);
        assert_eq!(Direction::from_angle(-0.4), Direction::East);
        assert_eq!(Direction::from_angle(2.0 * PI), Direction::East);
    }

    #[test]
    fn test_face_orientation() {
        assert_eq!(GridFace::new(1, 0).orientation(), FaceOrientation::Up);
        assert_eq!(GridFace::new(0, 1).orientation(), FaceOrientation::Up);
        assert_eq!(GridFace::new(-2, 1).orientation(), FaceOrientation::Up);
        assert_eq!(GridFace::new(0, 0).orientation(), FaceOrientation::Down);
        assert_eq!(GridFace::new(-1, 1).orientation(), FaceOrientation::Down);
        assert_eq!(
            GridFace::new(-3, -1).orientation(),
            FaceOrientation::Down
        );
    }

    #[test]
    fn test_face_corners() {
        // Up face
        assert_eq!(
            GridFace::new(1, 0).corners(),
            [
                GridVertex::new_unchecked(0, 0),
                GridVertex::new_unchecked(2, 0),
                GridVertex::new_unchecked(1, 1),
            ]
        );
        // Down face
        assert_eq!(
            GridFace::new(0, 0).corners(),
            [
                GridVertex::new_unchecked(0, 0),
                GridVertex::new_unchecked(1, 1),
                GridVertex::new_unchecked(-1, 1),
            ]
        );
    }

    #[test]
    fn test_face_neighbors() {
        for face in sample_faces() {
            let corners = face.corners();
            let neighbors = face.neighbors();
            for (i, neighbor) in neighbors.iter().enumerate() {
                for other in &neighbors[(i + 1)..] {
                    assert_ne!(neighbor, other);
                }
                // Orientation alternates across every shared edge
                assert_ne!(neighbor.orientation(), face.orientation());
                // A face and its neighbor share exactly 2 corners
                let shared = neighbor
                    .corners()
                    .iter()
                    .filter(|corner| corners.contains(corner))
                    .count();
                assert_eq!(
                    shared, 2,
                    "{face} and neighbor {neighbor} share {shared} corners"
                );
            }
        }
    }

    #[test]
    fn test_face_borders() {
        for face in sample_faces() {
            let corners = face.corners();
            let borders = face.borders();
            for (i, edge) in borders.iter().enumerate() {
                for other in &borders[(i + 1)..] {
                    assert_ne!(edge, other);
                }
                // The edge agrees that it borders this face
                assert!(
                    edge.joins().contains(&face),
                    "{edge} does not join {face}"
                );
                // Both of the edge's endpoints are corners of the face
                for endpoint in edge.endpoints() {
                    assert!(corners.contains(&endpoint));
                }
            }
        }
    }

    #[test]
    fn test_edge_joins() {
        for face in sample_faces() {
            for edge in face.borders() {
                let joined = edge.joins();
                assert_ne!(joined[0], joined[1]);
                for joined_face in joined {
                    assert!(
                        joined_face.borders().contains(&edge),
                        "{joined_face} does not list {edge} as a border"
                    );
                    // Both endpoints are corners of both joined faces
                    for endpoint in edge.endpoints() {
                        assert!(joined_face.corners().contains(&endpoint));
                    }
                }
            }
        }
    }

    #[test]
    fn test_edge_continues() {
        for face in sample_faces() {
            for edge in face.borders() {
                let endpoints = edge.endpoints();
                for continuation in edge.continues() {
                    // The continuation shares exactly one endpoint
                    let shared: Vec<_> = continuation
                        .endpoints()
                        .iter()
                        .copied()
                        .filter(|endpoint| endpoints.contains(endpoint))
                        .collect();
                    assert_eq!(shared.len(), 1);

                    // And extends the edge along the same line: the cross
                    // product of the two segments is zero
                    let far_a = endpoints
                        .iter()
                        .find(|endpoint| **endpoint != shared[0])
                        .copied()
                        .unwrap()
                        .to_cartesian();
                    let far_b = continuation
                        .endpoints()
                        .iter()
                        .find(|endpoint| **endpoint != shared[0])
                        .copied()
                        .unwrap()
                        .to_cartesian();
                    let pivot = shared[0].to_cartesian();
                    let cross = (pivot.x - far_a.x) * (far_b.y - pivot.y)
                        - (pivot.y - far_a.y) * (far_b.x - pivot.x);
                    assert_approx_eq!(cross, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_vertex_cartesian_roundtrip() {
        for vertex in sample_vertices() {
            let point = vertex.to_cartesian();
            assert_eq!(GridVertex::from_cartesian(point), vertex);
        }
        // Snapping a point that's just off a vertex
        assert_eq!(
            GridVertex::from_cartesian(Point2::new(0.1, 0.1)),
            GridVertex::ORIGIN
        );
        assert_eq!(
            GridVertex::from_cartesian(Point2::new(0.9, -0.05)),
            GridVertex::new_unchecked(2, 0)
        );
    }

    #[test]
    fn test_face_cartesian_roundtrip() {
        for face in sample_faces() {
            let centroid = face.to_cartesian();
            assert_eq!(GridFace::from_cartesian(centroid), face);
        }
        // A point near the bottom-left of the up face (1, 0)
        assert_eq!(
            GridFace::from_cartesian(Point2::new(0.1, 0.05)),
            GridFace::new(1, 0)
        );
    }

    #[test]
    fn test_edge_midpoint() {
        let edge = GridEdge::new_unchecked(1, 0, EdgeSide::South);
        let midpoint = edge.to_cartesian();
        assert_approx_eq!(midpoint.x, 0.5);
        assert_approx_eq!(midpoint.y, 0.0);
    }

    #[test]
    fn test_vertex_serialization() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &GridVertex::new_unchecked(3, 1),
            &[
                Token::Struct {
                    name: "GridVertex",
                    len: 2,
                },
                Token::Str("u"),
                Token::I16(3),
                Token::Str("v"),
                Token::I16(1),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_direction_serialization() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Direction::SouthEast,
            &[Token::UnitVariant {
                name: "Direction",
                variant: "south_east",
            }],
        );
    }

    #[test]
    fn test_edge_serialization() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &GridEdge::new_unchecked(1, 0, EdgeSide::West),
            &[
                Token::Struct {
                    name: "GridEdge",
                    len: 3,
                },
                Token::Str("u"),
                Token::I16(1),
                Token::Str("v"),
                Token::I16(0),
                Token::Str("side"),
                Token::UnitVariant {
                    name: "EdgeSide",
                    variant: "west",
                },
                Token::StructEnd,
            ],
        );
    }
}
