use crate::{
    encoder::{validate_cell_size, PathEncoder, WorldPoint},
    error::PathfindingResult,
    footprint::Footprint,
    occupancy_grid::OccupancyGrid,
};
use grid_util::point::Point;
use core::fmt;
use log::{debug, info};
use num_traits::{AsPrimitive, Float};

/// An axis-aligned rectangle in world space, `(x, y)` being its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldRect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> WorldRect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> WorldRect<T> {
        WorldRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Rasterises world-space obstacle rectangles into an [OccupancyGrid] covering `bounds`, with
/// square cells of side `cell_size`. Partial cells along the right and bottom of `bounds` are
/// dropped.
#[derive(Clone, Debug)]
pub struct GridBuilder<T> {
    bounds: WorldRect<T>,
    cell_size: T,
    obstacles: Vec<WorldRect<T>>,
}

impl<T> GridBuilder<T>
where
    T: Float + AsPrimitive<i32> + fmt::Debug,
{
    pub fn new(bounds: WorldRect<T>, cell_size: T) -> PathfindingResult<GridBuilder<T>> {
        let cell_size = validate_cell_size(cell_size)?;
        Ok(GridBuilder {
            bounds,
            cell_size,
            obstacles: Vec::new(),
        })
    }

    fn to_cells(&self, length: T) -> i32 {
        (length / self.cell_size).floor().as_()
    }

    pub fn cols(&self) -> usize {
        self.to_cells(self.bounds.width).max(0) as usize
    }

    pub fn rows(&self) -> usize {
        self.to_cells(self.bounds.height).max(0) as usize
    }

    pub fn cell_size(&self) -> T {
        self.cell_size
    }

    /// Records an obstacle. Rectangles lying entirely outside the bounds are discarded and
    /// `false` is returned.
    pub fn add_obstacle(&mut self, rect: WorldRect<T>) -> bool {
        let b = &self.bounds;
        if rect.x + rect.width < b.x
            || rect.y + rect.height < b.y
            || rect.x > b.x + b.width
            || rect.y > b.y + b.height
        {
            debug!("Ignoring obstacle outside the map: {:?}", rect);
            return false;
        }
        self.obstacles.push(rect);
        true
    }

    pub fn obstacles(&self) -> &[WorldRect<T>] {
        &self.obstacles
    }

    /// Grid cell containing a world position, relative to the top-left of the bounds. The result
    /// may lie outside the grid.
    pub fn cell_of(&self, point: WorldPoint<T>) -> Point {
        Point::new(
            self.to_cells(point.x - self.bounds.x),
            self.to_cells(point.y - self.bounds.y),
        )
    }

    /// [PathEncoder] mapping cells of the built grid back to world positions, so that
    /// `encoder().cell_center(cell_of(p))` is the middle of the cell containing `p`.
    pub fn encoder(&self) -> PathEncoder<T> {
        PathEncoder {
            cell_size: self.cell_size,
            origin: WorldPoint::new(self.bounds.x, self.bounds.y),
        }
    }

    /// Footprint covering an agent of the given world size, rounding partial cells up.
    pub fn footprint_for(&self, width: T, height: T) -> PathfindingResult<Footprint> {
        Footprint::new(
            (width / self.cell_size).ceil().as_(),
            (height / self.cell_size).ceil().as_(),
        )
    }

    /// Marks every cell an obstacle touches as blocked. An obstacle covers columns
    /// `floor((x - bounds.x) / cell_size)` through `floor((x + width - bounds.x) / cell_size)`
    /// inclusive, and likewise for rows, so an obstacle ending exactly on a cell boundary also
    /// blocks the next cell. The cell range is clamped to the grid before marking.
    pub fn build(&self) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(self.cols(), self.rows(), false);
        let (last_col, last_row) = (self.cols() as i32 - 1, self.rows() as i32 - 1);
        for rect in &self.obstacles {
            let start = self.cell_of(WorldPoint::new(rect.x, rect.y));
            let end = self.cell_of(WorldPoint::new(rect.x + rect.width, rect.y + rect.height));
            let (x0, y0) = (start.x.max(0), start.y.max(0));
            let (x1, y1) = (end.x.min(last_col), end.y.min(last_row));
            if x1 < x0 || y1 < y0 {
                continue;
            }
            grid.set_rect(x0, y0, x1 - x0 + 1, y1 - y0 + 1, true);
        }
        info!(
            "Built {}x{} grid with {} blocked cells from {} obstacles",
            grid.cols(),
            grid.rows(),
            grid.blocked_count(),
            self.obstacles.len()
        );
        grid
    }
}
