use crate::graph::traits::Weight;
use crate::{Error, Result};

/// Edge table as delivered by a tabular data layer: four parallel columns.
#[derive(Debug, Clone)]
pub struct EdgeTable<W> {
    from: Vec<String>,
    to: Vec<String>,
    dist: Vec<W>,
    transfer: Vec<W>,
}

/// One row of an [`EdgeTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<'a, W> {
    pub from: &'a str,
    pub to: &'a str,
    pub dist: W,
    pub transfer: W,
}

impl<W> EdgeTable<W>
where
    W: Weight,
{
    /// Creates an edge table, checking that all four columns have the same length
    pub fn new(from: Vec<String>, to: Vec<String>, dist: Vec<W>, transfer: Vec<W>) -> Result<Self> {
        let expected = from.len();
        check_column("edge", "to", expected, to.len())?;
        check_column("edge", "d", expected, dist.len())?;
        check_column("edge", "transfer", expected, transfer.len())?;

        Ok(EdgeTable {
            from,
            to,
            dist,
            transfer,
        })
    }

    /// Creates an edge table from `(from, to, d, transfer)` rows
    pub fn from_rows<K, I>(rows: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, K, W, W)>,
    {
        let mut table = EdgeTable {
            from: Vec::new(),
            to: Vec::new(),
            dist: Vec::new(),
            transfer: Vec::new(),
        };
        for (from, to, dist, transfer) in rows {
            table.from.push(from.into());
            table.to.push(to.into());
            table.dist.push(dist);
            table.transfer.push(transfer);
        }
        table
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Iterates over the rows in table order
    pub fn iter(&self) -> impl Iterator<Item = EdgeRecord<'_, W>> + '_ {
        (0..self.len()).map(move |i| EdgeRecord {
            from: &self.from[i],
            to: &self.to[i],
            dist: self.dist[i],
            transfer: self.transfer[i],
        })
    }
}

/// Vertex correspondence table: external key `vert[i]` has dense index `id[i]`.
#[derive(Debug, Clone, Default)]
pub struct VertexTable {
    vert: Vec<String>,
    id: Vec<usize>,
}

impl VertexTable {
    /// Creates a vertex table, checking that both columns have the same length
    pub fn new(vert: Vec<String>, id: Vec<usize>) -> Result<Self> {
        check_column("vertex", "id", vert.len(), id.len())?;
        Ok(VertexTable { vert, id })
    }

    /// Creates a table that numbers `keys` in the order given
    pub fn enumerate<K, I>(keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        let vert: Vec<String> = keys.into_iter().map(Into::into).collect();
        let id = (0..vert.len()).collect();
        VertexTable { vert, id }
    }

    pub fn len(&self) -> usize {
        self.vert.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vert.is_empty()
    }

    /// Iterates over `(key, index)` rows in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.vert.iter().map(String::as_str).zip(self.id.iter().copied())
    }
}

fn check_column(table: &'static str, column: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::ShapeMismatch {
            table,
            column,
            expected,
            found,
        });
    }
    Ok(())
}
