//! Terrain elevation storage, and the query interface through which the
//! tactical queries read it. The grid core never owns gameplay terrain
//! state; it only consumes elevations through [HeightQuery].

use crate::{
    config::TerrainConfig,
    grid::{GridVertex, VertexMap},
    timed,
    util::{grid_len, unit::Meter},
};
use anyhow::Context;
use log::info;
use nalgebra::Point3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A read-only source of terrain elevations, supplied by whatever owns the
/// world state. Queries treat a vertex with no elevation as out of bounds,
/// so bounds checking and elevation lookup are a single operation.
pub trait HeightQuery {
    /// Get the elevation of the given vertex, or `None` if the vertex is
    /// outside the terrain.
    fn elevation(&self, vertex: GridVertex) -> Option<Meter>;

    /// Is the given vertex part of the terrain?
    fn in_bounds(&self, vertex: GridVertex) -> bool {
        self.elevation(vertex).is_some()
    }

    /// Get the 3D screen-space position of the terrain surface at the given
    /// vertex. Out-of-bounds vertices sit at elevation zero.
    fn surface_point(&self, vertex: GridVertex) -> Point3<f64> {
        let xy = vertex.to_cartesian();
        let z = self.elevation(vertex).unwrap_or_default().0;
        Point3::new(xy.x, xy.y, z)
    }
}

/// A concrete terrain store: a roughly hexagonal patch of the lattice,
/// holding one elevation per vertex within `radius` steps of the origin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainGrid {
    /// The config used to build this grid. Once the grid has been built,
    /// the config can never change.
    config: TerrainConfig,

    /// Elevation of every in-bounds vertex
    #[serde(with = "crate::util::vertex_map_to_vec_serde")]
    elevations: VertexMap<Meter>,
}

impl TerrainGrid {
    /// Build a new terrain grid by calling the initializer once for every
    /// in-bounds vertex. Returns an error if the given config is invalid.
    /// The initializer is called in a fixed order (row-major from the
    /// bottom row up), so stateful initializers produce deterministic
    /// grids.
    pub fn new(
        config: TerrainConfig,
        mut initializer: impl FnMut(GridVertex) -> Meter,
    ) -> anyhow::Result<Self> {
        info!("Building terrain grid with config {:?}", config);
        config.validate().context("invalid terrain config")?;

        let radius = i16::try_from(config.radius)
            .context("terrain radius out of range")?;
        let elevations = timed!("Terrain build", log::Level::Info, {
            let mut elevations = VertexMap::default();
            for v in -radius..=radius {
                // Within distance r of the origin, a row holds the columns
                // |u| <= 2r - |v| whose parity matches the row
                let max_u = 2 * radius - v.abs();
                for u in (-max_u..=max_u).filter(|u| (u + v) % 2 == 0) {
                    let vertex = GridVertex::new_unchecked(u, v);
                    elevations.insert(vertex, initializer(vertex));
                }
            }
            elevations
        });
        debug_assert_eq!(elevations.len(), grid_len(config.radius));

        Ok(Self { config, elevations })
    }

    /// Build a flat terrain grid where every vertex has the given elevation
    pub fn flat(
        config: TerrainConfig,
        elevation: Meter,
    ) -> anyhow::Result<Self> {
        Self::new(config, |_| elevation)
    }

    /// Build a terrain grid of gentle pseudo-random hills, seeded from the
    /// config. Useful as a deterministic fixture for tests and benchmarks.
    pub fn rolling(config: TerrainConfig) -> anyhow::Result<Self> {
        let mut rng = Pcg64::seed_from_u64(config.seed);
        Self::new(config, |_| Meter(rng.gen_range(0.0..=5.0)))
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Get an iterator of all in-bounds vertices
    pub fn vertices(&self) -> impl Iterator<Item = GridVertex> + '_ {
        self.elevations.keys().copied()
    }

    /// The number of vertices in this grid
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    /// Deserialize a terrain grid from JSON. A grid can be serialized into
    /// JSON with [TerrainGrid::to_json]. Will fail if the input is
    /// malformed.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing terrain")
    }

    /// Serialize this terrain grid into JSON. This is a recoverable
    /// format, which can be loaded back with [TerrainGrid::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing terrain")
    }
}

impl HeightQuery for TerrainGrid {
    fn elevation(&self, vertex: GridVertex) -> Option<Meter> {
        self.elevations.get(&vertex).copied()
    }
}
