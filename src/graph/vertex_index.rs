use std::collections::HashMap;

use crate::graph::table::VertexTable;
use crate::{Error, Result};

/// Bijection between external vertex keys and dense indices `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// key -> dense index
    by_key: HashMap<String, usize>,

    /// dense index -> key
    keys: Vec<String>,
}

impl VertexIndex {
    /// Builds the index from a correspondence table.
    ///
    /// Keys must be unique and the indices must be exactly `0..table.len()`
    /// in any order.
    pub fn from_table(table: &VertexTable) -> Result<Self> {
        let count = table.len();
        let mut by_key = HashMap::with_capacity(count);
        let mut keys: Vec<Option<String>> = vec![None; count];

        for (key, index) in table.iter() {
            if index >= count || keys[index].is_some() {
                return Err(Error::NonDenseIndex {
                    key: key.to_string(),
                    index,
                    count,
                });
            }
            if by_key.insert(key.to_string(), index).is_some() {
                return Err(Error::DuplicateVertexKey(key.to_string()));
            }
            keys[index] = Some(key.to_string());
        }

        // Every slot is filled: `count` rows landed on distinct indices below `count`
        let keys = keys.into_iter().flatten().collect();

        Ok(VertexIndex { by_key, keys })
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Dense index of `key`
    pub fn resolve(&self, key: &str) -> Result<usize> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| Error::UnknownVertexKey(key.to_string()))
    }

    /// External key of a dense index
    pub fn key(&self, index: usize) -> Result<&str> {
        self.keys
            .get(index)
            .map(String::as_str)
            .ok_or(Error::InvalidVertex(index))
    }
}
