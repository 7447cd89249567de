use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use maze_pathfinding::{BacktrackingSolver, Cell, Maze, MazeSolver};
use rand::prelude::*;
use std::hint::black_box;

fn random_maze(n: usize, rng: &mut StdRng) -> Maze {
    let mut maze = Maze::new(n, n);
    let (origin, finish) = (maze.origin(), maze.finish());
    let points = maze.cells().map(|(p, _)| p).collect::<Vec<_>>();
    for p in points {
        if p != origin && p != finish && rng.gen_bool(0.3) {
            maze.set(p.y as usize, p.x as usize, Cell::Barrier).unwrap();
        }
    }
    maze
}

fn find_path_bench(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();
    let mut rng = StdRng::seed_from_u64(0);
    for n in [10, 50, 100] {
        let open = Maze::new(n, n);
        c.bench_function(format!("open {n}x{n}").as_str(), |b| {
            b.iter_batched(
                || open.clone(),
                |mut maze| black_box(solver.find_path(&mut maze)),
                BatchSize::SmallInput,
            )
        });
        let random = random_maze(n, &mut rng);
        c.bench_function(format!("random {n}x{n}").as_str(), |b| {
            b.iter_batched(
                || random.clone(),
                |mut maze| black_box(solver.find_path(&mut maze)),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, find_path_bench);
criterion_main!(benches);
