use ordered_float::OrderedFloat;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use transit_sssp::graph::generators::{generate_random_tables, generate_transit_network};
use transit_sssp::graph::Graph;
use transit_sssp::{
    BatchOptions, EdgeTable, Error, FnInterrupt, Interrupt, Network, NeverInterrupt, TryInterrupt,
    VertexTable,
};

const SEQUENTIAL: BatchOptions = BatchOptions { parallel: false };
const PARALLEL: BatchOptions = BatchOptions { parallel: true };

// A -> B (1), B -> C (2), A -> C (5), plus an isolated D
fn abc_network() -> Network<u32> {
    let vertices = VertexTable::enumerate(["A", "B", "C", "D"]);
    let edges = EdgeTable::from_rows([("A", "B", 1u32, 0u32), ("B", "C", 2, 0), ("A", "C", 5, 0)]);
    Network::from_tables(&edges, &vertices).unwrap()
}

fn random_network(n: usize, seed: u64) -> Network<u32> {
    let (edges, vertices) = generate_random_tables(n, 3.0, seed);
    Network::from_tables(&edges, &vertices).unwrap()
}

#[test]
fn test_shortest_route_prefers_transfer_through_b() {
    let network = abc_network();
    let query = network.query();

    let matrix = query.compute_distances::<u32, _>(&[0], &[2], &NeverInterrupt).unwrap();
    assert_eq!(matrix.rows(), 1);
    assert_eq!(matrix.cols(), 1);
    assert_eq!(matrix.get(0, 0), Some(3));

    let paths = query.compute_paths::<u32, _>(&[0], &[2], &NeverInterrupt).unwrap();
    assert_eq!(paths.get(0, 0), Some(&[0, 1, 2][..]));
    assert_eq!(paths.one_based(), vec![vec![Some(vec![1, 2, 3])]]);
}

#[test]
fn test_reverse_direction_is_unreachable() {
    let network = abc_network();
    let query = network.query();

    let matrix = query.compute_distances::<u32, _>(&[2], &[0], &NeverInterrupt).unwrap();
    assert_eq!(matrix.get(0, 0), None);

    let paths = query.compute_paths::<u32, _>(&[2], &[0], &NeverInterrupt).unwrap();
    assert_eq!(paths.get(0, 0), None);
    assert_eq!(paths.one_based(), vec![vec![None]]);
}

#[test]
fn test_disconnected_vertex_is_unreachable() {
    let network = abc_network();
    let matrix = network
        .query()
        .compute_distances::<u32, _>(&[0, 1, 2], &[3], &NeverInterrupt)
        .unwrap();
    for i in 0..3 {
        assert_eq!(matrix.get(i, 0), None);
    }
}

#[test]
fn test_self_distance_is_zero_and_path_is_absent() {
    let network = abc_network();
    let origins = [0, 1, 2, 3];
    let query = network.query();

    let matrix = query.compute_distances::<u32, _>(&origins, &origins, &NeverInterrupt).unwrap();
    let paths = query.compute_paths::<u32, _>(&origins, &origins, &NeverInterrupt).unwrap();
    for i in 0..origins.len() {
        assert_eq!(matrix.get(i, i), Some(0));
        assert_eq!(paths.get(i, i), None);
    }
}

#[test]
fn test_full_matrix_shape_and_order() {
    let network = abc_network();
    let matrix = network
        .query()
        .compute_distances::<u32, _>(&[0, 1], &[2, 1, 0], &NeverInterrupt)
        .unwrap();

    assert_eq!(
        matrix.to_nested(),
        vec![vec![Some(3), Some(1), Some(0)], vec![Some(2), Some(0), None]]
    );
    assert_eq!(matrix.row(1), &[Some(2), Some(0), None]);
}

#[test]
fn test_empty_origin_or_destination_sets() {
    let network = abc_network();
    let query = network.query();

    let matrix = query.compute_distances::<u32, _>(&[], &[0, 1], &NeverInterrupt).unwrap();
    assert_eq!(matrix.rows(), 0);

    let paths = query.compute_paths::<u32, _>(&[0, 1], &[], &NeverInterrupt).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.row(0).is_empty());
}

#[test]
fn test_out_of_range_indices_are_rejected_before_running() {
    let network = abc_network();
    let query = network.query();
    let runs = AtomicUsize::new(0);
    let counting = FnInterrupt(|| {
        runs.fetch_add(1, Ordering::Relaxed);
        false
    });

    assert_eq!(
        query.compute_distances::<u32, _>(&[0, 4], &[1], &counting),
        Err(Error::InvalidVertex(4))
    );
    assert_eq!(
        query.compute_paths::<u32, _>(&[0], &[1, 2, 99], &counting),
        Err(Error::InvalidVertex(99))
    );
    assert_eq!(runs.load(Ordering::Relaxed), 0);
}

#[test]
fn test_interrupt_stops_between_origins() {
    let network = abc_network();
    let checks = AtomicUsize::new(0);
    // Allow two origins, then cancel
    let interrupt = FnInterrupt(|| checks.fetch_add(1, Ordering::Relaxed) >= 2);

    let result = network
        .query()
        .compute_distances::<u32, _>(&[0, 1, 2, 3], &[2], &interrupt);
    assert_eq!(result, Err(Error::Interrupted { origin: 2 }));
}

#[test]
fn test_failed_check_keeps_its_error() {
    let network = abc_network();
    let checks = AtomicUsize::new(0);
    let interrupt = TryInterrupt::new(|| {
        if checks.fetch_add(1, Ordering::Relaxed) >= 1 {
            Err(format!("signal on check {}", checks.load(Ordering::Relaxed)))
        } else {
            Ok(())
        }
    });

    let result = network
        .query()
        .compute_paths::<u32, _>(&[0, 1, 2], &[2], &interrupt);
    assert_eq!(result, Err(Error::Interrupted { origin: 1 }));
    assert_eq!(interrupt.take_error(), Some("signal on check 2".to_string()));
    assert_eq!(interrupt.take_error(), None);

    // Only the first failure is kept
    assert!(interrupt.is_interrupted());
    assert!(interrupt.is_interrupted());
    assert_eq!(interrupt.take_error(), Some("signal on check 3".to_string()));
}

#[test]
fn test_raised_flag_interrupts_every_mode() {
    let network = abc_network();
    let query = network.query();
    let flag = AtomicBool::new(true);

    for options in [SEQUENTIAL, PARALLEL] {
        assert!(matches!(
            query.distances::<u32, _>(&[0, 1], &[2], options, &flag),
            Err(Error::Interrupted { .. })
        ));
        assert!(matches!(
            query.paths::<u32, _>(&[0, 1], &[2], options, &flag),
            Err(Error::Interrupted { .. })
        ));
    }

    flag.store(false, Ordering::Relaxed);
    assert!(query.distances::<u32, _>(&[0, 1], &[2], PARALLEL, &flag).is_ok());
}

#[test]
fn test_parallel_matches_sequential() {
    let (edges, vertices) = generate_transit_network(12, 15, 60, 11);
    let network = Network::from_tables(&edges, &vertices).unwrap();
    let origins: Vec<usize> = (0..network.vertex_count()).step_by(7).collect();
    let destinations: Vec<usize> = (0..network.vertex_count()).rev().step_by(5).collect();
    let query = network.query();

    let seq = query
        .distances::<u32, _>(&origins, &destinations, SEQUENTIAL, &NeverInterrupt)
        .unwrap();
    let par = query
        .distances::<u32, _>(&origins, &destinations, PARALLEL, &NeverInterrupt)
        .unwrap();
    assert_eq!(seq, par);

    let seq_paths = query
        .paths::<u32, _>(&origins, &destinations, SEQUENTIAL, &NeverInterrupt)
        .unwrap();
    let par_paths = query
        .paths::<u32, _>(&origins, &destinations, PARALLEL, &NeverInterrupt)
        .unwrap();
    assert_eq!(seq_paths, par_paths);
}

#[test]
fn test_repeated_queries_are_identical() {
    let network = random_network(300, 5);
    let all: Vec<usize> = (0..network.vertex_count()).step_by(9).collect();
    let query = network.query();

    let first = query.compute_paths::<u32, _>(&all, &all, &NeverInterrupt).unwrap();
    let second = query.compute_paths::<u32, _>(&all, &all, &NeverInterrupt).unwrap();
    assert_eq!(first, second);

    let d1 = query.compute_distances::<u32, _>(&all, &all, &NeverInterrupt).unwrap();
    let d2 = query.compute_distances::<u32, _>(&all, &all, &NeverInterrupt).unwrap();
    assert_eq!(d1, d2);
}

#[test]
fn test_matrix_and_paths_agree_on_reachability() {
    let network = random_network(200, 17);
    let origins: Vec<usize> = (0..200).step_by(3).collect();
    let destinations: Vec<usize> = (0..200).step_by(4).collect();
    let query = network.query();

    let matrix = query
        .compute_distances::<u32, _>(&origins, &destinations, &NeverInterrupt)
        .unwrap();
    let paths = query
        .compute_paths::<u32, _>(&origins, &destinations, &NeverInterrupt)
        .unwrap();

    for (i, &o) in origins.iter().enumerate() {
        for (j, &d) in destinations.iter().enumerate() {
            let reachable = matrix.get(i, j).is_some();
            let has_path = paths.get(i, j).is_some();
            if o == d {
                assert_eq!(matrix.get(i, j), Some(0));
                assert!(!has_path);
            } else {
                assert_eq!(reachable, has_path, "disagreement for {} -> {}", o, d);
            }
        }
    }
}

#[test]
fn test_path_weight_equals_distance() {
    let network = random_network(250, 23);
    let graph = network.graph();
    let origins: Vec<usize> = (0..250).step_by(10).collect();
    let destinations: Vec<usize> = (0..250).collect();
    let query = network.query();

    let matrix = query
        .compute_distances::<u32, _>(&origins, &destinations, &NeverInterrupt)
        .unwrap();
    let paths = query
        .compute_paths::<u32, _>(&origins, &destinations, &NeverInterrupt)
        .unwrap();

    for (i, &o) in origins.iter().enumerate() {
        for j in 0..destinations.len() {
            if let Some(path) = paths.get(i, j) {
                assert_eq!(path[0], o);
                assert_eq!(*path.last().unwrap(), destinations[j]);
                let weight: u32 = path
                    .windows(2)
                    .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap())
                    .sum();
                assert_eq!(Some(weight), matrix.get(i, j));
            }
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let network = random_network(120, 31);
    let all: Vec<usize> = (0..120).collect();
    let matrix = network
        .query()
        .par_compute_distances::<u32, _>(&all, &all, &NeverInterrupt)
        .unwrap();

    for a in 0..120 {
        for b in 0..120 {
            for c in 0..120 {
                if let (Some(ab), Some(bc), Some(ac)) = (matrix.get(a, b), matrix.get(b, c), matrix.get(a, c)) {
                    assert!(ac <= ab + bc, "d({},{}) > d({},{}) + d({},{})", a, c, a, b, b, c);
                }
            }
        }
    }
}

#[test]
fn test_float_weights_with_transfer_penalties() {
    let vertices = VertexTable::enumerate(["x", "y", "z"]);
    let edges = EdgeTable::from_rows([
        ("x", "y", OrderedFloat(1.5), OrderedFloat(0.0)),
        ("y", "z", OrderedFloat(1.0), OrderedFloat(2.0)),
        ("x", "z", OrderedFloat(4.0), OrderedFloat(0.0)),
    ]);
    let network = Network::from_tables(&edges, &vertices).unwrap();
    let query = network.query();

    // x->y->z costs 1.5 + 1.0 + 2.0 = 4.5, direct edge is cheaper
    let matrix = query
        .compute_distances::<OrderedFloat<f64>, _>(&[0], &[1, 2], &NeverInterrupt)
        .unwrap();
    assert_eq!(matrix.map(OrderedFloat::into_inner).to_nested(), vec![vec![Some(1.5), Some(4.0)]]);

    let paths = query
        .compute_paths::<OrderedFloat<f64>, _>(&[0], &[2], &NeverInterrupt)
        .unwrap();
    assert_eq!(paths.get(0, 0), Some(&[0, 2][..]));
}

#[test]
fn test_distance_beyond_weight_range_is_unreachable() {
    let vertices = VertexTable::enumerate(["a", "b", "c"]);
    let chain = EdgeTable::from_rows([("a", "b", u32::MAX - 5, 0u32), ("b", "c", 10, 0)]);
    let network = Network::from_tables(&chain, &vertices).unwrap();

    let matrix = network
        .query()
        .compute_distances::<u32, _>(&[0], &[1, 2], &NeverInterrupt)
        .unwrap();
    assert_eq!(matrix.to_nested(), vec![vec![Some(u32::MAX - 5), None]]);

    // The wrapped sum via b would undercut the direct edge
    let with_direct = EdgeTable::from_rows([
        ("a", "b", u32::MAX - 5, 0u32),
        ("b", "c", 10, 0),
        ("a", "c", 100, 0),
    ]);
    let network = Network::from_tables(&with_direct, &vertices).unwrap();
    let query = network.query();

    for options in [SEQUENTIAL, PARALLEL] {
        let matrix = query
            .distances::<u32, _>(&[0], &[2], options, &NeverInterrupt)
            .unwrap();
        assert_eq!(matrix.get(0, 0), Some(100));

        let paths = query.paths::<u32, _>(&[0], &[2], options, &NeverInterrupt).unwrap();
        assert_eq!(paths.get(0, 0), Some(&[0, 2][..]));
    }
}
