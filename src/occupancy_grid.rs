use crate::error::{PathfindingError, PathfindingResult};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use grid_util::rect::Rect;

/// [OccupancyGrid] is a mask of blocked ([true]) and free ([false]) cells with `rows` rows and
/// `cols` columns, stored in a [BoolGrid]. Row 0 is the top row; there is no wraparound. The
/// dimensions are fixed once constructed, and a grid with zero rows or columns is valid but has
/// no feasible positions.
#[derive(Clone, Debug, Default)]
pub struct OccupancyGrid {
    grid: BoolGrid,
}

impl OccupancyGrid {
    pub fn new(cols: usize, rows: usize, blocked: bool) -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::new(cols, rows, blocked),
        }
    }

    /// Builds a grid from a `0`/`1` matrix indexed as `matrix[y][x]`, where any non-zero value
    /// marks a blocked cell. All rows must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(matrix: &[R]) -> PathfindingResult<OccupancyGrid> {
        let cols = matrix.first().map_or(0, |row| row.as_ref().len());
        if let Some(row) = matrix.iter().position(|values| values.as_ref().len() != cols) {
            return Err(PathfindingError::RaggedGrid {
                row,
                expected: cols,
                found: matrix[row].as_ref().len(),
            });
        }
        let mut grid = BoolGrid::new(cols, matrix.len(), false);
        for (y, values) in matrix.iter().enumerate() {
            for (x, &v) in values.as_ref().iter().enumerate() {
                grid.set(x, y, v != 0);
            }
        }
        Ok(OccupancyGrid { grid })
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.point_in_bounds(Point::new(x, y))
    }

    /// Row-major index of `point`, if it lies on the grid.
    pub fn cell_index(&self, point: &Point) -> Option<usize> {
        self.grid
            .point_in_bounds(*point)
            .then(|| self.grid.get_ix_point(point))
    }

    /// Whether the cell at `(x, y)` is blocked. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.is_blocked_point(Point::new(x, y))
    }

    pub fn is_blocked_point(&self, point: Point) -> bool {
        !self.grid.point_in_bounds(point) || self.grid.get_point(point)
    }

    /// Marks a cell as blocked or free. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, blocked: bool) {
        self.set_point(Point::new(x, y), blocked);
    }

    pub fn set_point(&mut self, point: Point, blocked: bool) {
        if self.grid.point_in_bounds(point) {
            self.grid.set_point(point, blocked);
        }
    }

    /// Marks the `width x height` block anchored at `(x, y)`, clipped to the grid. Only the
    /// cells inside the grid are visited, however far the block reaches past it.
    pub fn set_rect(&mut self, x: i32, y: i32, width: i32, height: i32, blocked: bool) {
        let clip = |start: i32, extent: i32, limit: usize| {
            let lo = i64::from(start).max(0);
            let hi = (i64::from(start) + i64::from(extent)).min(limit as i64);
            (lo as i32, hi.max(lo) as i32)
        };
        let (x1, x2) = clip(x, width, self.cols());
        let (y1, y2) = clip(y, height, self.rows());
        self.grid
            .set_rectangle(&Rect::new(x1, y1, x2 - x1, y2 - y1), blocked);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        (0..self.rows())
            .map(|y| (0..self.cols()).filter(|&x| self.grid.get(x, y)).count())
            .sum()
    }
}

impl PartialEq for OccupancyGrid {
    fn eq(&self, other: &Self) -> bool {
        // Compare cell by cell, the packed words may differ in their unused bits
        self.cols() == other.cols()
            && self.rows() == other.rows()
            && (0..self.rows())
                .all(|y| (0..self.cols()).all(|x| self.grid.get(x, y) == other.grid.get(x, y)))
    }
}

impl Eq for OccupancyGrid {}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.rows() {
            let values = (0..self.cols())
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
