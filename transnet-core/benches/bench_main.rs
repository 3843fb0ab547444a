use criterion::{Criterion, black_box, criterion_group, criterion_main};
use transnet_core::prelude::*;

/// Grid of `size` x `size` stops served by one tram line per row and column,
/// in both directions
fn grid_network(size: usize) -> TransitGraph {
    let mut stops = Vec::new();
    for row in 0..size {
        for col in 0..size {
            stops.push(StopRecord::new(
                format!("{row}-{col}"),
                47.0 + row as f64 * 0.005,
                15.4 + col as f64 * 0.005,
                format!("Stop {row}/{col}"),
            ));
        }
    }

    let mut routes = Vec::new();
    for line in 0..size {
        let rows: Vec<String> = (0..size).map(|col| format!("{line}-{col}")).collect();
        let cols: Vec<String> = (0..size).map(|row| format!("{row}-{line}")).collect();
        for (title, ids) in [(format!("{}", line + 1), rows), (format!("{}E", line + 1), cols)] {
            for ids in [ids.clone(), ids.into_iter().rev().collect()] {
                routes.push(RouteRecord {
                    title: Some(title.clone()),
                    mode: "tram".to_string(),
                    entries: ids
                        .into_iter()
                        .map(|stop_id| RouteEntry {
                            stop_id,
                            role: "stop".to_string(),
                            travel_time: Some(2),
                        })
                        .collect(),
                    schedule: Some("06:00 06:10 06:20 06:30".to_string()),
                });
            }
        }
    }

    let config = NetworkConfig {
        excluded_routes: Vec::new(),
        ..NetworkConfig::default()
    };
    build_graph(&stops, &routes, &config).expect("grid network")
}

fn bench_metrics(c: &mut Criterion) {
    let graph = grid_network(6);

    c.bench_function("build_graph", |b| b.iter(|| grid_network(black_box(6))));
    c.bench_function("beeline", |b| b.iter(|| beeline(black_box(&graph))));
    c.bench_function("beeline_intermediate", |b| {
        b.iter(|| beeline_intermediate(black_box(&graph)).unwrap())
    });
    c.bench_function("travel_time", |b| {
        b.iter(|| travel_time(black_box(&graph)).unwrap())
    });
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
