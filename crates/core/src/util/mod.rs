pub mod unit;

/// Calculate the number of vertices in a grid patch of the given radius.
/// Radius is the number of steps from the center vertex to the rim, so a
/// radius of 0 means 1 vertex, 1 is 7, 2 is 19, etc.
pub fn grid_len(radius: u16) -> usize {
    let radius = radius as usize;
    3 * radius * radius + 3 * radius + 1
}

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, evaluates it, and logs the elapsed time at the given level
/// (default `Debug`).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

// Serialize a VertexMap as a list of entries instead of a map. This is
// useful because vertices shouldn't be used as serialized map keys, since
// JSON and other formats don't support complex keys.
pub mod vertex_map_to_vec_serde {
    use crate::grid::{GridVertex, VertexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a vertex map as a list of (vertex, value) entries
    pub fn serialize<T, S>(
        map: &VertexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    /// Deserialize a list of (vertex, value) entries back into a map
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<VertexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let vec: Vec<(GridVertex, T)> = Vec::deserialize(deserializer)?;
        Ok(vec.into_iter().collect())
    }
}

// Same as the above, for the ordered map flavor. Entry order is preserved
// through a round trip, which keeps serialized query results deterministic.
pub mod vertex_index_map_to_vec_serde {
    use crate::grid::{GridVertex, VertexIndexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize an ordered vertex map as a list of (vertex, value) entries
    pub fn serialize<T, S>(
        map: &VertexIndexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    /// Deserialize a list of (vertex, value) entries back into an ordered
    /// map
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<VertexIndexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let vec: Vec<(GridVertex, T)> = Vec::deserialize(deserializer)?;
        Ok(vec.into_iter().collect())
    }
}
