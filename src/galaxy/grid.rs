//! Uniform bucket grid accelerating minimum-distance neighbor queries.
//!
//! Cell size is fixed at the minimum planet distance, so any point that
//! would violate the spacing invariant must fall within the 3x3 neighbor
//! window of the query point's own cell — that's the whole correctness
//! argument, and the whole reason the grid exists instead of a brute-force
//! all-pairs scan.

use crate::galaxy::Point;

type CellKey = (i64, i64);

pub struct SpatialGrid {
    cell_size: f64,
    extent: f64,
    cells: std::collections::HashMap<CellKey, Vec<(usize, Point)>>,
}

impl SpatialGrid {
    /// `extent` is the half-width `B` of the square `[-B, B]^2` the grid
    /// covers. Queries outside it are conservatively invalid; inserts
    /// outside it are a caller bug.
    pub fn new(cell_size: f64, extent: f64) -> Self {
        SpatialGrid {
            cell_size,
            extent,
            cells: std::collections::HashMap::new(),
        }
    }

    fn key_for(&self, x: f64, y: f64) -> CellKey {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    /// Registers a point under its own id. Out-of-extent inserts are a
    /// programming error per the grid's contract; debug builds catch it.
    pub fn insert(&mut self, x: f64, y: f64, id: usize) {
        debug_assert!(
            x.abs() <= self.extent && y.abs() <= self.extent,
            "insert outside grid extent: ({x}, {y})"
        );
        let key = self.key_for(x, y);
        self.cells.entry(key).or_default().push((id, Point::new(x, y)));
    }

    /// True iff no previously inserted point lies within `min_dist` of
    /// `(x, y)`. Positions outside the declared extent are always invalid.
    pub fn is_position_valid(&self, x: f64, y: f64, min_dist: f64) -> bool {
        if x.abs() > self.extent || y.abs() > self.extent {
            return false;
        }
        let (ci, cj) = self.key_for(x, y);
        for di in -1..=1 {
            for dj in -1..=1 {
                let Some(points) = self.cells.get(&(ci + di, cj + dj)) else {
                    continue;
                };
                for &(_, p) in points {
                    let dx = p.x - x;
                    let dy = p.y - y;
                    if (dx * dx + dy * dy).sqrt() < min_dist {
                        return false;
                    }
                }
            }
        }
        true
    }
}
