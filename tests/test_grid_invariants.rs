/// Invariant tests for the percolation grid
///
/// Covers the observable contract: fresh-grid state, idempotent opens,
/// monotonicity, fullness implying openness, and guaranteed percolation of
/// a fully open grid.
use percolate::grid::Percolation;
use pretty_assertions::assert_eq;

/// A fresh grid has no open sites and does not percolate, for any size
#[test]
fn test_fresh_grid_state() {
    for n in 1..=6 {
        let mut grid = Percolation::new(n).unwrap();
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates(), "empty {n}x{n} grid must not percolate");
        for row in 1..=n {
            for col in 1..=n {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }
}

/// Opening a site twice is equivalent to opening it once
#[test]
fn test_open_is_idempotent() {
    let mut grid = Percolation::new(3).unwrap();
    let opens = [(1, 2), (2, 2), (2, 2), (3, 1), (1, 2), (3, 2)];
    for (row, col) in opens {
        grid.open(row, col).unwrap();
    }

    let count = grid.number_of_open_sites();
    let percolated = grid.percolates();
    let full_before = snapshot_full(&mut grid);

    // second pass over the same sites must change nothing observable
    for (row, col) in opens {
        grid.open(row, col).unwrap();
    }

    assert_eq!(grid.number_of_open_sites(), count);
    assert_eq!(grid.percolates(), percolated);
    assert_eq!(snapshot_full(&mut grid), full_before);
}

/// Open sites stay open and a percolated system stays percolated
#[test]
fn test_open_and_percolation_are_monotonic() {
    let n = 4;
    let mut grid = Percolation::new(n).unwrap();
    let mut opened: Vec<(usize, usize)> = Vec::new();
    let mut has_percolated = false;

    // a column plus scattered extras, opened one at a time
    let sequence = [
        (1, 3),
        (2, 3),
        (4, 1),
        (3, 3),
        (4, 3), // completes the column
        (2, 1),
        (4, 4),
        (1, 1),
    ];

    for (row, col) in sequence {
        grid.open(row, col).unwrap();
        opened.push((row, col));

        for &(r, c) in &opened {
            assert!(grid.is_open(r, c).unwrap(), "({r}, {c}) reverted to blocked");
        }

        if grid.percolates() {
            has_percolated = true;
        }
        assert_eq!(
            grid.percolates(),
            has_percolated,
            "percolation state reverted after opening ({row}, {col})"
        );
    }

    assert!(has_percolated);
}

/// A full site is always an open site
#[test]
fn test_full_implies_open() {
    let mut grid = Percolation::new(4).unwrap();
    for (row, col) in [(1, 1), (1, 4), (2, 1), (2, 3), (3, 3), (4, 2)] {
        grid.open(row, col).unwrap();
    }

    for row in 1..=4 {
        for col in 1..=4 {
            if grid.is_full(row, col).unwrap() {
                assert!(
                    grid.is_open(row, col).unwrap(),
                    "({row}, {col}) is full but not open"
                );
            }
        }
    }
}

/// A fully opened grid percolates and every site is full
#[test]
fn test_fully_open_grid_percolates() {
    for n in 1..=5 {
        let mut grid = Percolation::new(n).unwrap();
        for row in 1..=n {
            for col in 1..=n {
                grid.open(row, col).unwrap();
            }
        }
        assert_eq!(grid.number_of_open_sites(), n * n);
        assert!(grid.percolates(), "fully open {n}x{n} grid must percolate");
        for row in 1..=n {
            for col in 1..=n {
                assert!(grid.is_full(row, col).unwrap());
            }
        }
    }
}

/// Diagonal neighbors do not connect: adjacency is 4-neighbor only
#[test]
fn test_diagonals_do_not_connect() {
    let mut grid = Percolation::new(2).unwrap();
    grid.open(1, 1).unwrap();
    grid.open(2, 2).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(2, 2).unwrap());
}

fn snapshot_full(grid: &mut Percolation) -> Vec<bool> {
    let n = grid.side();
    let mut full = Vec::with_capacity(n * n);
    for row in 1..=n {
        for col in 1..=n {
            full.push(grid.is_full(row, col).unwrap());
        }
    }
    full
}
