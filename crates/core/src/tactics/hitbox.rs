//! Hitbox shapes, describing the area affected by a unit's actions. A
//! hitbox holds immutable shape parameters; combining it with a source
//! vertex and a facing direction yields the affected vertices, faces, or
//! outline edges.

use crate::{
    config::UnitProfile,
    grid::{Direction, EdgeSet, FaceSet, GridVertex, VertexSet},
    tactics::border::external_borders,
};
use serde::{Deserialize, Serialize};

/// A shape that maps a source position and facing direction to the set of
/// grid elements it affects. All methods are pure functions of the shape
/// parameters and their arguments.
pub trait Hitbox {
    /// Compute the set of vertices affected when this shape is applied at
    /// `source` facing `direction`. No bounds are applied here; callers
    /// working on finite terrain should drop vertices their terrain does
    /// not contain.
    fn area(&self, source: GridVertex, direction: Direction) -> VertexSet;

    /// Compute the set of faces covered by the area: the union of every
    /// area vertex's touching faces, minus `exclude`. Callers typically
    /// pass the acting unit's own footprint as the exclusion.
    fn faces(
        &self,
        source: GridVertex,
        direction: Direction,
        exclude: &FaceSet,
    ) -> FaceSet {
        let mut faces: FaceSet = self
            .area(source, direction)
            .into_iter()
            .flat_map(GridVertex::touches)
            .collect();
        faces.retain(|face| !exclude.contains(face));
        faces
    }

    /// Compute the outline of the covered faces
    fn borders(
        &self,
        source: GridVertex,
        direction: Direction,
        exclude: &FaceSet,
    ) -> EdgeSet {
        external_borders(&self.faces(source, direction, exclude))
    }
}

/// A strip of vertices extending from the source along the facing
/// direction, e.g. a lance thrust or a beam.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHitbox {
    /// Length of the centerline, in steps
    pub range: u16,

    /// Sideways reach of the strip. Each centerline vertex is flanked by
    /// `width - 1` vertices along both of the 120°-rotated axes, so the
    /// strip is a parallelogram; width 1 is the bare centerline.
    pub width: u16,

    /// Distance from the source to the first centerline vertex. An offset
    /// of 0 starts the strip on the source itself.
    pub offset: u16,
}

impl LineHitbox {
    pub const fn new(range: u16, width: u16, offset: u16) -> Self {
        Self {
            range,
            width,
            offset,
        }
    }

    /// Build the standard attack line for a unit: a single-width strip
    /// starting one step out from the unit, reaching as far as its action
    /// range.
    pub fn for_profile(profile: &UnitProfile) -> Self {
        Self::new(profile.action_range, 1, 1)
    }
}

impl Hitbox for LineHitbox {
    fn area(&self, source: GridVertex, direction: Direction) -> VertexSet {
        let mut area = VertexSet::default();
        let left = direction.rotated(-2);
        let right = direction.rotated(2);
        for i in self.offset..(self.offset + self.range) {
            let center = source.offset(direction, i as i16);
            for j in 0..self.width {
                area.insert(center.offset(left, j as i16));
                area.insert(center.offset(right, j as i16));
            }
        }
        area
    }
}

/// A direction-independent blast centered on the source, covering every
/// vertex within `radius` steps of it. The source itself is not affected,
/// so a radius of 0 covers nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlastHitbox {
    /// Maximum distance (in steps) from the source to an affected vertex
    pub radius: u16,
}

impl BlastHitbox {
    pub const fn new(radius: u16) -> Self {
        Self { radius }
    }
}

impl Hitbox for BlastHitbox {
    fn area(&self, source: GridVertex, _direction: Direction) -> VertexSet {
        let radius = self.radius as i16;
        let mut area = VertexSet::default();
        for dv in -radius..=radius {
            // Within distance r, a row holds the offsets |du| <= 2r - |dv|
            // whose parity matches the row
            let max_du = 2 * radius - dv.abs();
            for du in (-max_du..=max_du).filter(|du| (du + dv) % 2 == 0) {
                area.insert(GridVertex::new_unchecked(
                    source.u() + du,
                    source.v() + dv,
                ));
            }
        }
        area.remove(&source);
        area
    }
}
