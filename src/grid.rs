//! n-by-n percolation grid over two disjoint-set forests.
//!
//! Sites start blocked and are opened one at a time; the system percolates
//! once an open path connects the top row to the bottom row. Connectivity is
//! tracked incrementally: opening a site unions it with its open neighbors,
//! so every query is a pair of find operations and the grid is never
//! re-scanned.

use crate::error::PercolationError;
use crate::union_find::DisjointSet;

/// An n-by-n grid of sites with incremental top-to-bottom connectivity.
///
/// Two forests back the grid. `perc` holds every site plus virtual top and
/// bottom nodes and answers `percolates`. `full` holds every site plus the
/// virtual top only: leaving the bottom node out is what keeps a site from
/// reading as "full" merely because it touches a percolating bottom chain
/// (backwash).
///
/// Coordinates are 1-indexed in the public API. Queries that walk the
/// forests take `&mut self` because find compresses paths as it goes.
#[derive(Debug)]
pub struct Percolation {
    n: usize,
    perc: DisjointSet,
    full: DisjointSet,
    open: Vec<bool>,
    open_sites: usize,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked.
    ///
    /// Both virtual nodes live in their forests from the start, so wiring a
    /// site to an edge of the grid is an ordinary union with no sentinel
    /// bookkeeping at query time.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize { n, trials: None });
        }

        Ok(Percolation {
            n,
            perc: DisjointSet::new(n * n + 2),
            full: DisjointSet::new(n * n + 1),
            open: vec![false; n * n],
            open_sites: 0,
        })
    }

    /// Grid side length.
    pub fn side(&self) -> usize {
        self.n
    }

    /// Virtual top node, present in both forests at the same index.
    fn top(&self) -> usize {
        self.n * self.n
    }

    /// Virtual bottom node, present in the percolation forest only.
    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Translate in-range 1-indexed coordinates to a linear 0-based index.
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    /// Validate 1-indexed coordinates and translate to a linear site index.
    ///
    /// Single validation point shared by open/is_open/is_full.
    fn site(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::OutOfRangeCoordinate {
                row,
                col,
                n: self.n,
            });
        }
        Ok(self.index(row, col))
    }

    /// Linear indices of the already-open 4-neighbors of (row, col).
    fn open_neighbors(&self, row: usize, col: usize) -> Vec<usize> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 1 {
            self.push_if_open(&mut neighbors, row - 1, col);
        }
        if row < self.n {
            self.push_if_open(&mut neighbors, row + 1, col);
        }
        if col > 1 {
            self.push_if_open(&mut neighbors, row, col - 1);
        }
        if col < self.n {
            self.push_if_open(&mut neighbors, row, col + 1);
        }
        neighbors
    }

    fn push_if_open(&self, out: &mut Vec<usize>, row: usize, col: usize) {
        let index = self.index(row, col);
        if self.open[index] {
            out.push(index);
        }
    }

    /// Open the site (row, col) if it is not open already.
    ///
    /// Idempotent: re-opening an open site changes nothing. A newly opened
    /// site is unioned with each open neighbor in both forests, with the
    /// virtual top in both forests when it sits on row 1, and with the
    /// virtual bottom in the percolation forest only when it sits on row n.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let site = self.site(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_sites += 1;

        for neighbor in self.open_neighbors(row, col) {
            self.perc.union(site, neighbor);
            self.full.union(site, neighbor);
        }

        if row == 1 {
            let top = self.top();
            self.perc.union(site, top);
            self.full.union(site, top);
        }
        if row == self.n {
            // never into `full`: the backwash guard
            let bottom = self.bottom();
            self.perc.union(site, bottom);
        }

        Ok(())
    }

    /// Is the site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site(row, col)?;
        Ok(self.open[site])
    }

    /// Is the site (row, col) connected to the top row through open sites?
    ///
    /// Answered in the top-only forest, so a site touching a percolating
    /// bottom chain without a path to the top row reports false.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site(row, col)?;
        if !self.open[site] {
            return Ok(false);
        }

        let top = self.top();
        Ok(self.full.connected(site, top))
    }

    /// Number of open sites, maintained as a running counter.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Does an open path connect the top row to the bottom row?
    ///
    /// False until at least one site in row 1 and one in row n are open:
    /// the virtual nodes start isolated and are only ever unioned when an
    /// edge-row site opens.
    pub fn percolates(&mut self) -> bool {
        let top = self.top();
        let bottom = self.bottom();
        self.perc.connected(top, bottom)
    }
}
