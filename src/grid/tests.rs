use super::*;
use rand::SeedableRng;

const SEED: u64 = 42;

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_neighbor_count_range() {
    let life = Grid::random(17, Some(SEED)).unwrap();
    for y in 0..17 {
        for x in 0..17 {
            assert!(life.count_live_neighbors(x, y) <= 8);
        }
    }
    let full = Grid::new(5, Seed::Random { seed: None, fill_rate: 1.0 }).unwrap();
    assert_eq!(full.count_live_neighbors(2, 2), 8);
    assert_eq!(full.count_live_neighbors(0, 0), 8);
}

#[test]
fn test_corner_wraparound() {
    const N: i64 = 5;
    let mut life = Grid::blank(N as usize).unwrap();
    life.set_cell(N - 1, N - 1, true);
    assert_eq!(life.count_live_neighbors(0, 0), 1);
    assert_eq!(life.count_live_neighbors(0, N - 1), 1);
    assert_eq!(life.count_live_neighbors(N - 1, 0), 1);
    assert_eq!(life.count_live_neighbors(N - 2, N - 2), 1);
    assert_eq!(life.count_live_neighbors(2, 2), 0);
}

#[test]
fn test_edge_wraparound() {
    const N: i64 = 7;
    for y in 0..N {
        let mut life = Grid::blank(N as usize).unwrap();
        life.set_cell(N - 1, y, true);
        assert_eq!(life.count_live_neighbors(0, y), 1, "row {y}");
        assert_eq!(life.count_live_neighbors(0, y + 1), 1, "row {y} diagonal");

        let mut life = Grid::blank(N as usize).unwrap();
        life.set_cell(y, N - 1, true);
        assert_eq!(life.count_live_neighbors(y, 0), 1, "column {y}");
    }
}

#[test]
fn test_coordinates_wrap() {
    let mut life = Grid::blank(6).unwrap();
    life.set_cell(-1, -1, true);
    assert!(life.get_cell(5, 5));
    assert!(life.get_cell(11, -7));
    life.set_cell(6, 13, true);
    assert!(life.get_cell(0, 1));
    assert_eq!(life.population(), 2);
}

#[test]
fn test_set_cell_touches_one_cell() {
    let mut life = Grid::random(9, Some(SEED)).unwrap();
    let before = life.clone();
    life.set_cell(4, 3, !before.get_cell(4, 3));
    for y in 0..9 {
        for x in 0..9 {
            let changed = life.get_cell(x, y) != before.get_cell(x, y);
            assert_eq!(changed, (x, y) == (4, 3));
        }
    }
}

#[test]
fn test_block_still_life() {
    let mut life = Grid::blank(6).unwrap();
    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        life.set_cell(x, y, true);
    }
    assert_eq!(life.step(), life);
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = grid(&[
        ".......",
        ".......",
        ".......",
        "..###..",
        ".......",
        ".......",
        ".......",
    ]);
    let vertical = grid(&[
        ".......",
        ".......",
        "...#...",
        "...#...",
        "...#...",
        ".......",
        ".......",
    ]);
    let next = horizontal.step();
    assert_eq!(next, vertical);
    assert_eq!(next.step(), horizontal);
}

#[test]
fn test_underpopulation_and_overpopulation() {
    let mut lonely = Grid::blank(7).unwrap();
    lonely.set_cell(3, 3, true);
    assert!(!lonely.step().get_cell(3, 3));

    let crowded = grid(&[
        ".......",
        ".......",
        "..###..",
        "..###..",
        "..###..",
        ".......",
        ".......",
    ]);
    assert_eq!(crowded.count_live_neighbors(3, 3), 8);
    assert!(!crowded.step().get_cell(3, 3));
}

#[test]
fn test_reproduction() {
    let three = grid(&["......", ".#.#..", "......", "..#...", "......", "......"]);
    assert_eq!(three.count_live_neighbors(2, 2), 3);
    assert!(three.step().get_cell(2, 2));

    let two = grid(&["......", ".#.#..", "......", "......", "......", "......"]);
    assert_eq!(two.count_live_neighbors(2, 2), 2);
    assert!(!two.step().get_cell(2, 2));

    let four = grid(&["......", ".#.#..", "......", ".#.#..", "......", "......"]);
    assert_eq!(four.count_live_neighbors(2, 2), 4);
    assert!(!four.step().get_cell(2, 2));
}

#[test]
fn test_step_is_pure_and_deterministic() {
    let life = Grid::random(32, Some(SEED)).unwrap();
    let snapshot = life.clone();
    let a = life.step();
    let b = life.step();
    assert_eq!(life, snapshot);
    assert_eq!(a, b);
}

#[test]
fn test_size_invariance() {
    for n in 1..=9 {
        let life = Grid::random(n, Some(SEED)).unwrap();
        assert_eq!(life.step().side_length(), n);
        assert_eq!(life.step_parallel().side_length(), n);
    }
}

#[test]
fn test_tiny_tori() {
    // every offset lands on the single cell
    let mut one = Grid::blank(1).unwrap();
    one.set_cell(0, 0, true);
    assert_eq!(one.count_live_neighbors(0, 0), 8);
    assert!(!one.step().get_cell(0, 0));

    // offsets that wrap onto the same cell are each counted
    let two = grid(&["#.", ".."]);
    assert_eq!(two.count_live_neighbors(1, 0), 2);
    assert_eq!(two.count_live_neighbors(1, 1), 4);
    assert_eq!(two.step(), Grid::blank(2).unwrap());
}

#[test]
fn test_glider_wraps_around() {
    const N: usize = 8;
    let glider = grid(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let mut life = glider.clone();
    life.advance(4, Strategy::Sequential);
    assert_eq!(life.population(), 5);
    assert!(glider.live_cells().all(|(x, y)| life.get_cell(x as i64 + 1, y as i64 + 1)));

    life.advance(4 * N as u64 - 4, Strategy::Sequential);
    assert_eq!(life, glider);
}

#[test]
fn test_seed_reproducible() {
    let a = Grid::random(32, Some(SEED)).unwrap();
    let b = Grid::random(32, Some(SEED)).unwrap();
    let c = Grid::random(32, Some(SEED + 1)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut d = Grid::blank(32).unwrap();
    d.reseed(Seed::uniform(Some(SEED))).unwrap();
    assert_eq!(a, d);
}

#[test]
fn test_reseed() {
    let mut life = Grid::random(16, Some(SEED)).unwrap();
    life.reseed(Seed::Blank).unwrap();
    assert_eq!(life.population(), 0);

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    life.reseed_with(&mut rng, 1.0).unwrap();
    assert_eq!(life.population(), 16 * 16);
    assert_eq!(life.side_length(), 16);

    life.clear();
    assert_eq!(life.population(), 0);
}

#[test]
fn test_errors() {
    assert_eq!(Grid::blank(0), Err(GridError::InvalidSize(0)));
    assert_eq!(Grid::random(0, None), Err(GridError::InvalidSize(0)));
    assert_eq!(Grid::blank(usize::MAX), Err(GridError::InvalidSize(usize::MAX)));

    let bad = Seed::Random {
        seed: Some(SEED),
        fill_rate: 1.5,
    };
    assert_eq!(Grid::new(4, bad), Err(GridError::InvalidFillRate(1.5)));
    let nan = Seed::Random {
        seed: Some(SEED),
        fill_rate: f64::NAN,
    };
    assert!(matches!(Grid::new(4, nan), Err(GridError::InvalidFillRate(_))));

    let mut life = Grid::random(4, Some(SEED)).unwrap();
    let before = life.clone();
    assert!(life.reseed(bad).is_err());
    assert_eq!(life, before);

    assert_eq!(
        Grid::from_cells(3, vec![false; 8]),
        Err(GridError::CellCountMismatch {
            expected: 9,
            actual: 8
        })
    );
    assert_eq!(
        Grid::from_rows(&["#.", "#"]),
        Err(GridError::NotSquare {
            rows: 2,
            row: 1,
            len: 1
        })
    );
    assert_eq!(
        Grid::from_rows(&["#x", ".."]),
        Err(GridError::InvalidCell {
            row: 0,
            col: 1,
            ch: 'x'
        })
    );
    let empty: [&str; 0] = [];
    assert_eq!(Grid::from_rows(&empty), Err(GridError::InvalidSize(0)));
}

#[test]
fn test_display() {
    let life = grid(&["#..", ".#.", "..#"]);
    assert_eq!(life.to_string(), "#..\n.#.\n..#\n");
    assert_eq!(
        life.live_cells().collect::<Vec<_>>(),
        vec![(0, 0), (1, 1), (2, 2)]
    );
}
