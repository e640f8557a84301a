use ordered_float::OrderedFloat;
use pyo3::exceptions::{PyKeyError, PyKeyboardInterrupt, PyValueError};
use pyo3::prelude::*;

use crate::algorithm::interrupt::TryInterrupt;
use crate::graph::{EdgeTable, Network, VertexTable};
use crate::Error;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::Interrupted { .. } => PyKeyboardInterrupt::new_err(err.to_string()),
        Error::UnknownVertexKey(_) | Error::InvalidVertex(_) => PyKeyError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Re-raises the exception a signal handler raised, if that is what stopped the batch
fn batch_error<F>(err: Error, interrupt: &TryInterrupt<F, PyErr>) -> PyErr
where
    F: Fn() -> PyResult<()>,
{
    if matches!(err, Error::Interrupted { .. }) {
        if let Some(raised) = interrupt.take_error() {
            return raised;
        }
    }
    to_py_err(err)
}

fn build_network(
    from: Vec<String>,
    to: Vec<String>,
    d: Vec<f64>,
    transfer: Vec<f64>,
    vert: Vec<String>,
    id: Vec<usize>,
) -> PyResult<Network<OrderedFloat<f64>>> {
    let edges = EdgeTable::new(
        from,
        to,
        d.into_iter().map(OrderedFloat).collect(),
        transfer.into_iter().map(OrderedFloat).collect(),
    )
    .map_err(to_py_err)?;
    let vertices = VertexTable::new(vert, id).map_err(to_py_err)?;
    Network::from_tables(&edges, &vertices).map_err(to_py_err)
}

/// Distance matrix `len(fromi) x len(toi)`; `None` marks unreachable pairs.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn get_sp_dists(
    py: Python<'_>,
    from: Vec<String>,
    to: Vec<String>,
    d: Vec<f64>,
    transfer: Vec<f64>,
    vert: Vec<String>,
    id: Vec<usize>,
    fromi: Vec<usize>,
    toi: Vec<usize>,
) -> PyResult<Vec<Vec<Option<f64>>>> {
    let network = build_network(from, to, d, transfer, vert, id)?;
    let interrupt = TryInterrupt::new(|| py.check_signals());
    let matrix = network
        .query()
        .compute_distances::<OrderedFloat<f64>, _>(&fromi, &toi, &interrupt)
        .map_err(|err| batch_error(err, &interrupt))?;
    Ok(matrix.map(OrderedFloat::into_inner).to_nested())
}

/// Shortest paths as 1-based vertex indices, per origin then destination.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn get_paths(
    py: Python<'_>,
    from: Vec<String>,
    to: Vec<String>,
    d: Vec<f64>,
    transfer: Vec<f64>,
    vert: Vec<String>,
    id: Vec<usize>,
    fromi: Vec<usize>,
    toi: Vec<usize>,
) -> PyResult<Vec<Vec<Option<Vec<usize>>>>> {
    let network = build_network(from, to, d, transfer, vert, id)?;
    let interrupt = TryInterrupt::new(|| py.check_signals());
    let paths = network
        .query()
        .compute_paths::<OrderedFloat<f64>, _>(&fromi, &toi, &interrupt)
        .map_err(|err| batch_error(err, &interrupt))?;
    Ok(paths.one_based())
}

#[pymodule]
fn transit_sssp_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_sp_dists, m)?)?;
    m.add_function(wrap_pyfunction!(get_paths, m)?)?;
    Ok(())
}
