//! Movement reachability: a breadth-limited flood fill over vertex
//! adjacency, admitting each step by terrain elevation difference.

use crate::{
    config::UnitProfile,
    grid::{FaceSet, GridVertex, VertexIndexMap},
    tactics::border::occupied_faces,
    terrain::HeightQuery,
    timed,
};
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use validator::Validate;

/// The result of a reachability query: every vertex a unit can reach from
/// its position within its movement range, plus the route to each one.
///
/// Internally this is a predecessor map rooted at the source. Each
/// reachable vertex maps to the vertex it was first discovered from, so
/// walking predecessors back to the source reconstructs a shortest
/// admitted route. The source itself is not in the map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReachableZone {
    source: GridVertex,
    #[serde(with = "crate::util::vertex_index_map_to_vec_serde")]
    predecessors: VertexIndexMap<GridVertex>,
}

impl ReachableZone {
    /// Compute the zone a unit can move through on the given terrain. A
    /// step between adjacent vertices is admitted when both are in bounds
    /// and the elevation difference is within the unit's stability.
    /// Returns an error if the profile is invalid.
    pub fn compute(
        source: GridVertex,
        terrain: &impl HeightQuery,
        profile: &UnitProfile,
    ) -> anyhow::Result<Self> {
        debug!("Computing reachable zone from {} for {:?}", source, profile);
        profile.validate().context("invalid unit profile")?;

        let stability = profile.stability;
        Ok(Self::compute_with(source, profile.move_range, |from, to| {
            match (terrain.elevation(from), terrain.elevation(to)) {
                (Some(from), Some(to)) => (from - to).abs() <= stability,
                // Out of bounds is unreachable, not an error
                _ => false,
            }
        }))
    }

    /// Compute a reachable zone under an arbitrary admission predicate.
    /// `admit(from, to)` is consulted once per candidate step from a
    /// visited vertex to an unvisited neighbor.
    ///
    /// This is a breadth-first search: each vertex is visited at most
    /// once, and because the search advances one step at a time, the
    /// first visit records a shortest admitted route. A range of 0 yields
    /// an empty zone.
    pub fn compute_with(
        source: GridVertex,
        range: u16,
        mut admit: impl FnMut(GridVertex, GridVertex) -> bool,
    ) -> Self {
        timed!("Reachability query", {
            let mut predecessors = VertexIndexMap::default();
            let mut queue = VecDeque::new();
            queue.push_back((source, 0));
            while let Some((current, steps)) = queue.pop_front() {
                if steps >= range {
                    continue;
                }
                for neighbor in current.adjacents() {
                    if neighbor == source
                        || predecessors.contains_key(&neighbor)
                        || !admit(current, neighbor)
                    {
                        continue;
                    }
                    predecessors.insert(neighbor, current);
                    queue.push_back((neighbor, steps + 1));
                }
            }
            Self {
                source,
                predecessors,
            }
        })
    }

    /// The vertex this zone was computed from
    pub fn source(&self) -> GridVertex {
        self.source
    }

    /// Get an iterator of all reachable vertices, in discovery order. The
    /// source is not included.
    pub fn vertices(&self) -> impl Iterator<Item = GridVertex> + '_ {
        self.predecessors.keys().copied()
    }

    /// Is the given vertex reachable?
    pub fn contains(&self, vertex: GridVertex) -> bool {
        self.predecessors.contains_key(&vertex)
    }

    /// The number of reachable vertices
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Reconstruct the route to a reachable vertex by walking predecessors
    /// back to the source. The returned path starts at the first step out
    /// of the source and ends at the target vertex; `None` if the target
    /// isn't reachable.
    pub fn path_to(&self, vertex: GridVertex) -> Option<Vec<GridVertex>> {
        if !self.contains(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(&predecessor) = self.predecessors.get(&current) {
            if predecessor == self.source {
                break;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }

    /// Get the faces to highlight for this zone: every face covered by the
    /// unit's footprint at some reachable vertex, minus the footprint at
    /// its current position.
    pub fn movement_faces(&self, profile: &UnitProfile) -> FaceSet {
        let current_footprint = occupied_faces(self.source, profile.size);
        let mut faces = FaceSet::default();
        for vertex in self.vertices() {
            faces.extend(occupied_faces(vertex, profile.size));
        }
        faces.retain(|face| !current_footprint.contains(face));
        faces
    }
}
