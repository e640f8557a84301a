use log::{debug, info, warn};
use rayon::prelude::*;

use crate::algorithm::dijkstra::DijkstraEngine;
use crate::algorithm::interrupt::Interrupt;
use crate::algorithm::results::{DistanceMatrix, PathList};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Options for a batch query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Process origins on the rayon thread pool
    pub parallel: bool,
}

/// Many-to-many shortest path queries over one borrowed graph.
///
/// Dijkstra runs exactly once per origin; every destination of that origin is
/// read from the same run. Origins and destinations are dense vertex indices
/// and are all checked before the first run.
#[derive(Debug, Clone, Copy)]
pub struct BatchQuery<'g, G> {
    graph: &'g G,
}

impl<'g, G> BatchQuery<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        BatchQuery { graph }
    }

    /// Distance matrix, sequential or parallel according to `options`
    pub fn distances<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        options: BatchOptions,
        interrupt: &I,
    ) -> Result<DistanceMatrix<W>>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + Sync,
    {
        if options.parallel {
            self.par_compute_distances(origins, destinations, interrupt)
        } else {
            self.compute_distances(origins, destinations, interrupt)
        }
    }

    /// Path list, sequential or parallel according to `options`
    pub fn paths<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        options: BatchOptions,
        interrupt: &I,
    ) -> Result<PathList>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + Sync,
    {
        if options.parallel {
            self.par_compute_paths::<W, I>(origins, destinations, interrupt)
        } else {
            self.compute_paths::<W, I>(origins, destinations, interrupt)
        }
    }

    /// Shortest-path cost from every origin to every destination
    pub fn compute_distances<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        interrupt: &I,
    ) -> Result<DistanceMatrix<W>>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + ?Sized,
    {
        self.validate::<W>(origins, destinations)?;
        info!(
            "computing distances for {} origins x {} destinations",
            origins.len(),
            destinations.len()
        );

        let mut engine = DijkstraEngine::<W, G>::new(self.graph);
        let mut rows = Vec::with_capacity(origins.len());
        for (position, &origin) in origins.iter().enumerate() {
            check_interrupt(interrupt, position)?;
            rows.push(distance_row(&mut engine, origin, destinations)?);
        }

        debug!("distance batch finished");
        Ok(DistanceMatrix::from_rows(destinations.len(), rows))
    }

    /// Shortest path from every origin to every destination
    pub fn compute_paths<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        interrupt: &I,
    ) -> Result<PathList>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + ?Sized,
    {
        self.validate::<W>(origins, destinations)?;
        info!(
            "computing paths for {} origins x {} destinations",
            origins.len(),
            destinations.len()
        );

        let mut engine = DijkstraEngine::<W, G>::new(self.graph);
        let mut rows = Vec::with_capacity(origins.len());
        for (position, &origin) in origins.iter().enumerate() {
            check_interrupt(interrupt, position)?;
            rows.push(path_row(&mut engine, origin, destinations)?);
        }

        debug!("path batch finished");
        Ok(PathList::new(rows))
    }

    /// Parallel [`compute_distances`](Self::compute_distances); same output
    pub fn par_compute_distances<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        interrupt: &I,
    ) -> Result<DistanceMatrix<W>>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + Sync + ?Sized,
    {
        self.validate::<W>(origins, destinations)?;
        info!(
            "computing distances in parallel for {} origins x {} destinations",
            origins.len(),
            destinations.len()
        );

        let rows = origins
            .par_iter()
            .enumerate()
            .map_init(
                || DijkstraEngine::<W, G>::new(self.graph),
                |engine, (position, &origin)| {
                    check_interrupt(interrupt, position)?;
                    distance_row(engine, origin, destinations)
                },
            )
            .collect::<Result<Vec<_>>>()?;

        Ok(DistanceMatrix::from_rows(destinations.len(), rows))
    }

    /// Parallel [`compute_paths`](Self::compute_paths); same output
    pub fn par_compute_paths<W, I>(
        &self,
        origins: &[usize],
        destinations: &[usize],
        interrupt: &I,
    ) -> Result<PathList>
    where
        W: Weight,
        G: Graph<W>,
        I: Interrupt + Sync + ?Sized,
    {
        self.validate::<W>(origins, destinations)?;
        info!(
            "computing paths in parallel for {} origins x {} destinations",
            origins.len(),
            destinations.len()
        );

        let rows = origins
            .par_iter()
            .enumerate()
            .map_init(
                || DijkstraEngine::<W, G>::new(self.graph),
                |engine, (position, &origin)| {
                    check_interrupt(interrupt, position)?;
                    path_row(engine, origin, destinations)
                },
            )
            .collect::<Result<Vec<_>>>()?;

        Ok(PathList::new(rows))
    }

    fn validate<W>(&self, origins: &[usize], destinations: &[usize]) -> Result<()>
    where
        W: Weight,
        G: Graph<W>,
    {
        match origins
            .iter()
            .chain(destinations)
            .find(|&&v| !self.graph.has_vertex(v))
        {
            Some(&v) => Err(Error::InvalidVertex(v)),
            None => Ok(()),
        }
    }
}

fn check_interrupt<I>(interrupt: &I, position: usize) -> Result<()>
where
    I: Interrupt + ?Sized,
{
    if interrupt.is_interrupted() {
        warn!("batch interrupted before origin {}", position);
        return Err(Error::Interrupted { origin: position });
    }
    Ok(())
}

fn distance_row<W, G>(
    engine: &mut DijkstraEngine<'_, W, G>,
    origin: usize,
    destinations: &[usize],
) -> Result<Vec<Option<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    engine.run(origin)?;
    Ok(destinations.iter().map(|&d| engine.distance(d)).collect())
}

fn path_row<W, G>(
    engine: &mut DijkstraEngine<'_, W, G>,
    origin: usize,
    destinations: &[usize],
) -> Result<Vec<Option<Vec<usize>>>>
where
    W: Weight,
    G: Graph<W>,
{
    engine.run(origin)?;
    Ok(destinations.iter().map(|&d| engine.path_to(d)).collect())
}
