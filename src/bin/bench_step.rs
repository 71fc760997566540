use std::time::Instant;
use torus_life::{Grid, Strategy};

fn main() {
    const SEED: u64 = 42;
    const GENERATIONS: u64 = 50;

    for size in [256, 1024, 2048] {
        let life = Grid::random(size, Some(SEED)).unwrap();
        let mut results = vec![];
        for strategy in [Strategy::Sequential, Strategy::Parallel] {
            let mut field = life.clone();
            let timer = Instant::now();
            field.advance(GENERATIONS, strategy);
            println!(
                "{}x{} {:?}: {:?} per generation",
                size,
                size,
                strategy,
                timer.elapsed() / GENERATIONS as u32
            );
            results.push(field);
        }
        assert_eq!(results[0], results[1], "steppers disagree at size {}", size);
    }
}
