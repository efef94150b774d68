use crate::grid::{GridEdge, GridFace, GridVertex};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of grid vertices
pub type VertexSet = HashSet<GridVertex, FnvBuildHasher>;
/// A map of grid vertices to some `T`
pub type VertexMap<T> = HashMap<GridVertex, T, FnvBuildHasher>;
/// An ORDERED map of grid vertices to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering.
pub type VertexIndexMap<T> = IndexMap<GridVertex, T, FnvBuildHasher>;
/// A set of grid faces
pub type FaceSet = HashSet<GridFace, FnvBuildHasher>;
/// A set of grid edges
pub type EdgeSet = HashSet<GridEdge, FnvBuildHasher>;
/// A map of grid edges to some `T`
pub type EdgeMap<T> = HashMap<GridEdge, T, FnvBuildHasher>;
