use std::time::{Duration, Instant};
use transit_sssp::graph::generators::generate_transit_network;
use transit_sssp::{BatchOptions, Network, NeverInterrupt};

// Runs one distance batch and returns its wall time
fn benchmark_batch(name: &str, network: &Network<u32>, origins: &[usize], options: BatchOptions) -> Duration {
    println!("Running {} on network with {} vertices...", name, network.vertex_count());

    let start = Instant::now();
    let matrix = match network.query().distances::<u32, _>(origins, origins, options, &NeverInterrupt) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("  - {} failed: {}", name, err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    let reachable = matrix
        .iter_rows()
        .map(|row| row.iter().filter(|d| d.is_some()).count())
        .sum::<usize>();
    println!("  - {} reachable pairs in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    // (lines, stops per line, stations)
    let network_sizes = vec![
        (20, 30, 200),
        (50, 40, 800),
        (100, 50, 2_000),
        (200, 60, 5_000),
    ];
    let origin_count = 100;

    println!("=====================================================");
    println!("Benchmark: sequential vs parallel distance batch");
    println!("Origins = destinations = {} vertices", origin_count);
    println!("=====================================================");

    let mut results = Vec::new();

    for &(lines, stops, stations) in &network_sizes {
        let (edges, vertices) = generate_transit_network(lines, stops, stations, 42);
        let network = match Network::from_tables(&edges, &vertices) {
            Ok(network) => network,
            Err(err) => {
                eprintln!("Failed to build network: {}", err);
                continue;
            }
        };
        println!(
            "\nNetwork has {} vertices and {} edges",
            network.vertex_count(),
            network.edge_count()
        );

        let step = (network.vertex_count() / origin_count).max(1);
        let origins: Vec<usize> = (0..network.vertex_count()).step_by(step).take(origin_count).collect();

        let sequential = benchmark_batch("sequential", &network, &origins, BatchOptions { parallel: false });
        let parallel = benchmark_batch("parallel", &network, &origins, BatchOptions { parallel: true });

        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64();
        println!("Speedup - parallel vs sequential: {:.2}x", speedup);

        results.push((network.vertex_count(), sequential, parallel));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, sequential, parallel) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential.as_millis(),
            parallel.as_millis(),
            sequential.as_secs_f64() / parallel.as_secs_f64()
        );
    }
}
