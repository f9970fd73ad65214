use colorpath_lib::{plan_route, CategoryFilter, Connection, Network, RouteRequest, Station};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

const GRID_SIZE: usize = 60;

fn node_name(row: usize, col: usize) -> String {
    format!("R{row}C{col}")
}

/// Build a bidirectional grid where every third column is restricted to "red".
fn grid_network(size: usize) -> Network {
    let mut stations = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let mut connections = Vec::new();
            let neighbours = [
                (row.wrapping_sub(1), col),
                (row + 1, col),
                (row, col.wrapping_sub(1)),
                (row, col + 1),
            ];
            for (r, c) in neighbours {
                if r < size && c < size {
                    connections.push(Connection {
                        target: node_name(r, c),
                        weight: ((r * 7 + c * 13) % 5 + 1) as u64,
                    });
                }
            }
            let categories = if col % 3 == 0 {
                ["red".to_string()].into_iter().collect()
            } else {
                Default::default()
            };
            stations.push((
                node_name(row, col),
                Station {
                    categories,
                    connections,
                },
            ));
        }
    }
    stations.into_iter().collect()
}

static NETWORK: Lazy<Network> = Lazy::new(|| grid_network(GRID_SIZE));
static ANY_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new(node_name(0, 0), node_name(GRID_SIZE - 1, GRID_SIZE - 1)));
static RED_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest {
    category: CategoryFilter::Label("red".to_string()),
    ..ANY_REQUEST.clone()
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;

    c.bench_function("dijkstra_grid_any", |b| {
        let request = &*ANY_REQUEST;
        b.iter(|| {
            let plan = plan_route(network, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("dijkstra_grid_red", |b| {
        let request = &*RED_REQUEST;
        b.iter(|| {
            let plan = plan_route(network, request).expect("route exists");
            black_box(plan.cost)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
