use serde::Serialize;

/// `origins x destinations` matrix of shortest-path costs, row-major.
///
/// `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix<W> {
    rows: usize,
    cols: usize,
    values: Vec<Option<W>>,
}

impl<W> DistanceMatrix<W>
where
    W: Copy,
{
    /// Builds a matrix from its rows; every row must have `cols` entries
    pub(crate) fn from_rows(cols: usize, rows: Vec<Vec<Option<W>>>) -> Self {
        let n_rows = rows.len();
        let values: Vec<Option<W>> = rows.into_iter().flatten().collect();
        debug_assert_eq!(values.len(), n_rows * cols);
        DistanceMatrix {
            rows: n_rows,
            cols,
            values,
        }
    }

    /// Number of origins
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost from origin `i` to destination `j`; `None` if unreachable or out of range
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.values[i * self.cols + j]
    }

    /// Row of origin `i`
    pub fn row(&self, i: usize) -> &[Option<W>] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<W>]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Converts every present value, keeping the shape
    pub fn map<U, F>(&self, mut f: F) -> DistanceMatrix<U>
    where
        F: FnMut(W) -> U,
    {
        DistanceMatrix {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v.map(&mut f)).collect(),
        }
    }

    /// Nested rows, the shape boundary adapters hand out
    pub fn to_nested(&self) -> Vec<Vec<Option<W>>> {
        self.iter_rows().map(<[Option<W>]>::to_vec).collect()
    }
}

/// Shortest paths per origin, then per destination.
///
/// Each entry holds dense 0-based vertex indices from origin to destination
/// inclusive, or `None` when the destination is unreachable or is the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathList {
    paths: Vec<Vec<Option<Vec<usize>>>>,
}

impl PathList {
    pub(crate) fn new(paths: Vec<Vec<Option<Vec<usize>>>>) -> Self {
        PathList { paths }
    }

    /// Number of origins
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path from origin `i` to destination `j`
    pub fn get(&self, i: usize, j: usize) -> Option<&[usize]> {
        self.paths.get(i)?.get(j)?.as_deref()
    }

    /// Entries of origin `i`
    pub fn row(&self, i: usize) -> &[Option<Vec<usize>>] {
        &self.paths[i]
    }

    /// Same entries with every index shifted to 1-based numbering
    pub fn one_based(&self) -> Vec<Vec<Option<Vec<usize>>>> {
        self.paths
            .iter()
            .map(|row| {
                row.iter()
                    .map(|entry| entry.as_ref().map(|p| p.iter().map(|v| v + 1).collect()))
                    .collect()
            })
            .collect()
    }
}
