use crate::Meter;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parameters describing a unit standing on the grid. Tactical queries take
/// these as input: the footprint determines which faces the unit covers,
/// stability bounds which steps it can take, and the ranges bound how far
/// its movement and actions reach.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UnitProfile {
    /// Footprint radius class of the unit. Size 1 covers the 6 faces around
    /// the unit's vertex; size 2 extends the footprint to the faces around
    /// every adjacent vertex as well.
    #[validate(range(min = 1, max = 2))]
    pub size: u8,

    /// The maximum elevation difference the unit can climb or descend in a
    /// single step. A step between two vertices is admitted only if the
    /// absolute elevation difference between them is within this value.
    pub stability: Meter,

    /// Maximum number of steps the unit can move in one turn
    #[validate(range(min = 0, max = 50))]
    pub move_range: u16,

    /// Maximum reach (in steps) of the unit's actions, e.g. the length of a
    /// line attack
    #[validate(range(min = 0, max = 50))]
    pub action_range: u16,
}

impl Default for UnitProfile {
    fn default() -> Self {
        Self {
            size: 1,
            stability: Meter(1.0),
            move_range: 5,
            action_range: 3,
        }
    }
}

/// Configuration that defines a terrain grid. Two grids built with the same
/// config and the same initializer will always be identical.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TerrainConfig {
    /// RNG seed used by the built-in fixture generator. Grids built through
    /// an explicit initializer ignore this value.
    pub seed: u64,

    /// Distance from the center of the grid to the edge (in vertex steps).
    /// Every vertex within this distance of the origin is in bounds.
    #[validate(range(min = 1, max = 500))]
    pub radius: u16,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: rand::random(),
            radius: 30,
        }
    }
}
