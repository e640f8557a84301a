use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::table::{EdgeTable, VertexTable};

/// Generates a random directed network with about `edge_factor * n` edges.
///
/// Vertex keys are `"v0" .. "v{n-1}"`, base costs are in `1..100` and roughly
/// one edge in five carries a transfer penalty in `1..20`. The same seed
/// always yields the same tables.
pub fn generate_random_tables(n: usize, edge_factor: f64, seed: u64) -> (EdgeTable<u32>, VertexTable) {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices = VertexTable::enumerate((0..n).map(|i| format!("v{}", i)));

    let num_edges = (edge_factor * n as f64) as usize;
    let mut rows = Vec::with_capacity(num_edges);

    if n > 1 {
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                let dist: u32 = rng.gen_range(1..100);
                let transfer: u32 = if rng.gen_bool(0.2) { rng.gen_range(1..20) } else { 0 };
                rows.push((format!("v{}", u), format!("v{}", v), dist, transfer));
            }
        }
    }

    (EdgeTable::from_rows(rows), vertices)
}

/// Generates a transit-like network of `lines` routes over `stations` stations.
///
/// Each route visits `stops_per_line` randomly chosen stations; every visit is
/// its own vertex keyed `"L{line}:S{stop}"`. Consecutive visits are joined by
/// ride edges in both directions (cost `60..600`, no penalty). Visits of
/// different routes at the same station are joined by walking edges with
/// zero base cost and a transfer penalty in `120..300`.
pub fn generate_transit_network(
    lines: usize,
    stops_per_line: usize,
    stations: usize,
    seed: u64,
) -> (EdgeTable<u32>, VertexTable) {
    assert!(stations > 0, "stations must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys = Vec::with_capacity(lines * stops_per_line);
    let mut at_station: Vec<Vec<String>> = vec![Vec::new(); stations];
    let mut rows = Vec::new();

    for line in 0..lines {
        let mut previous: Option<String> = None;
        for stop in 0..stops_per_line {
            let key = format!("L{}:S{}", line, stop);
            let station = rng.gen_range(0..stations);
            at_station[station].push(key.clone());

            if let Some(prev) = previous.take() {
                let ride: u32 = rng.gen_range(60..600);
                rows.push((prev.clone(), key.clone(), ride, 0));
                rows.push((key.clone(), prev, ride, 0));
            }

            keys.push(key.clone());
            previous = Some(key);
        }
    }

    for visits in &at_station {
        for a in visits {
            for b in visits {
                if a != b {
                    let penalty: u32 = rng.gen_range(120..300);
                    rows.push((a.clone(), b.clone(), 0, penalty));
                }
            }
        }
    }

    (EdgeTable::from_rows(rows), VertexTable::enumerate(keys))
}
