use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pheromaze_core::{Ant, AntColonyOptimization, ColonyConfig, Maze};
use pheromaze_data::{Coordinate, PathSpecification};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 39x40 grid with every fourth column walled except for a gap that
/// alternates between the top and bottom row.
fn serpentine() -> Maze {
    let (width, length) = (39, 40);
    let walls = (0..width)
        .map(|x| {
            (0..length)
                .map(|y| {
                    let gap = if (x / 4) % 2 == 0 { length - 1 } else { 0 };
                    u8::from(x % 4 != 3 || y == gap)
                })
                .collect()
        })
        .collect();
    Maze::new(walls, width, length).unwrap()
}

fn spec() -> PathSpecification {
    PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(38, 39))
}

fn bench_single_walk(c: &mut Criterion) {
    let maze = serpentine();
    let spec = spec();
    let mut seed = 0;

    c.bench_function("ant_walk_serpentine", |b| {
        b.iter(|| {
            seed += 1;
            let ant = Ant::new(&maze, &spec, ChaCha8Rng::seed_from_u64(seed));
            black_box(ant.walk())
        })
    });
}

fn bench_generation(c: &mut Criterion) {
    let spec = spec();
    for parallel in [false, true] {
        let name = if parallel {
            "generation_64_ants_parallel"
        } else {
            "generation_64_ants_sequential"
        };
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut maze = serpentine();
                let config = ColonyConfig {
                    ants_per_gen: 64,
                    generations: 1,
                    seed: Some(1),
                    parallel,
                    ..ColonyConfig::default()
                };
                let mut aco = AntColonyOptimization::new(&mut maze, config).unwrap();
                black_box(aco.find_shortest_route(&spec).map(|r| r.size()))
            })
        });
    }
}

criterion_group!(benches, bench_single_walk, bench_generation);
criterion_main!(benches);
