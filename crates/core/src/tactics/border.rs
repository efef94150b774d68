//! Region operations over sets of faces: outline extraction, expansion,
//! and unit footprints. The hitbox and movement queries use these to turn
//! vertex sets into regions a renderer can draw.

use crate::grid::{EdgeMap, EdgeSet, FaceSet, GridVertex, VertexSet};

/// Compute the outline of a region of faces: every edge that borders
/// exactly one face in the region. An edge interior to the region borders
/// two of its faces and is dropped, so the result traces the region's
/// boundary without any internal edges.
pub fn external_borders(faces: &FaceSet) -> EdgeSet {
    let mut edge_counts: EdgeMap<u8> = EdgeMap::default();
    for face in faces {
        for edge in face.borders() {
            *edge_counts.entry(edge).or_insert(0) += 1;
        }
    }
    edge_counts
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|(edge, _)| edge)
        .collect()
}

/// Grow a region of faces by the given number of steps. Each step adds
/// every face that shares an edge with the region.
pub fn expand(faces: &FaceSet, times: u16) -> FaceSet {
    let mut expanded = faces.clone();
    for _ in 0..times {
        let frontier: Vec<_> = expanded
            .iter()
            .flat_map(|face| face.neighbors())
            .collect();
        expanded.extend(frontier);
    }
    expanded
}

/// Get the set of faces covered by a unit of the given footprint size
/// standing at `position`. Size 1 covers the 6 faces around the unit's
/// vertex; size 2 extends the footprint to the faces around every adjacent
/// vertex as well.
pub fn occupied_faces(position: GridVertex, size: u8) -> FaceSet {
    let mut faces: FaceSet = position.touches().into_iter().collect();
    if size >= 2 {
        for adjacent in position.adjacents() {
            faces.extend(adjacent.touches());
        }
    }
    faces
}

/// Get the ring of vertices at path distance exactly 2 from the source:
/// the neighbors of the source's neighbors, minus the source and its own
/// neighbors. This is the dig zone of an excavation action.
pub fn excavation_ring(source: GridVertex) -> VertexSet {
    source
        .adjacents()
        .flat_map(|adjacent| adjacent.adjacents())
        .filter(|vertex| source.distance_to(*vertex) == 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridFace;

    fn face_set(faces: impl IntoIterator<Item = GridFace>) -> FaceSet {
        faces.into_iter().collect()
    }

    #[test]
    fn test_external_borders_single_face() {
        let face = GridFace::new(1, 0);
        let borders = external_borders(&face_set([face]));
        assert_eq!(borders.len(), 3);
        for edge in face.borders() {
            assert!(borders.contains(&edge));
        }
    }

    #[test]
    fn test_external_borders_adjacent_pair() {
        let face = GridFace::new(1, 0);
        let neighbor = face.neighbors()[0];
        let borders = external_borders(&face_set([face, neighbor]));
        // The shared edge is dropped
        assert_eq!(borders.len(), 4);
        let shared: Vec<_> = face
            .borders()
            .into_iter()
            .filter(|edge| neighbor.borders().contains(edge))
            .collect();
        assert_eq!(shared.len(), 1);
        assert!(!borders.contains(&shared[0]));
    }

    #[test]
    fn test_external_borders_filled_disk() {
        // A center face plus all 3 of its neighbors. The center's edges are
        // all interior, and each neighbor contributes its 2 outer edges.
        let center = GridFace::new(1, 0);
        let mut faces = face_set(center.neighbors());
        faces.insert(center);
        let borders = external_borders(&faces);
        assert_eq!(borders.len(), 6);
        for edge in center.borders() {
            assert!(!borders.contains(&edge));
        }
    }

    #[test]
    fn test_external_borders_empty() {
        assert!(external_borders(&FaceSet::default()).is_empty());
    }

    #[test]
    fn test_expand() {
        let face = GridFace::new(0, 0);
        let faces = face_set([face]);
        assert_eq!(expand(&faces, 0), faces);

        let once = expand(&faces, 1);
        assert_eq!(once.len(), 4);
        assert!(once.contains(&face));

        let twice = expand(&faces, 2);
        assert_eq!(twice.len(), 10);
        assert!(once.iter().all(|f| twice.contains(f)));
    }

    #[test]
    fn test_occupied_faces() {
        let position = GridVertex::ORIGIN;
        let small = occupied_faces(position, 1);
        assert_eq!(small.len(), 6);
        for face in position.touches() {
            assert!(small.contains(&face));
        }

        let large = occupied_faces(position, 2);
        assert_eq!(large.len(), 24);
        assert!(small.iter().all(|face| large.contains(face)));
    }

    #[test]
    fn test_excavation_ring() {
        let ring = excavation_ring(GridVertex::ORIGIN);
        assert_eq!(ring.len(), 12);
        for vertex in &ring {
            assert_eq!(GridVertex::ORIGIN.distance_to(*vertex), 2);
        }
        assert!(ring.contains(&GridVertex::new_unchecked(4, 0)));
        assert!(ring.contains(&GridVertex::new_unchecked(0, 2)));
    }
}
