//! Rectangle occupancy tests. [is_feasible] works on anchors and is what the search uses;
//! [centered_validity] and [diagnose_issues] frame the same test around a centre cell, which is
//! how goals are expressed.
use crate::{footprint::Footprint, occupancy_grid::OccupancyGrid};
use grid_util::point::Point;

/// Edges of a footprint that are off-grid or touch a blocked cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Issues {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Issues {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Checks whether the footprint anchored at `anchor` lies fully inside the grid and covers no
/// blocked cell.
pub fn is_feasible(grid: &OccupancyGrid, anchor: Point, footprint: Footprint) -> bool {
    let (cols, rows) = (grid.cols() as i64, grid.rows() as i64);
    let (x, y) = (anchor.x as i64, anchor.y as i64);
    if x < 0
        || y < 0
        || x + footprint.width() as i64 > cols
        || y + footprint.height() as i64 > rows
    {
        return false;
    }
    (anchor.y..anchor.y + footprint.height()).all(|cy| {
        (anchor.x..anchor.x + footprint.width()).all(|cx| !grid.is_blocked(cx, cy))
    })
}

/// Checks whether the footprint centred on `center` is feasible. The anchor is
/// [Footprint::centered_anchor].
pub fn centered_validity(grid: &OccupancyGrid, center: Point, footprint: Footprint) -> bool {
    is_feasible(grid, footprint.centered_anchor(center), footprint)
}

/// Reports which edges of the footprint centred on `center` are at fault. Bounds violations set
/// the matching flag directly; blocked cells inside the grid set the flag of every edge they lie
/// on. Unlike [centered_validity] this scans the whole on-grid part of the rectangle.
pub fn diagnose_issues(grid: &OccupancyGrid, center: Point, footprint: Footprint) -> Issues {
    let anchor = footprint.centered_anchor(center);
    let (x0, y0) = (i64::from(anchor.x), i64::from(anchor.y));
    let x1 = x0 + i64::from(footprint.width()) - 1;
    let y1 = y0 + i64::from(footprint.height()) - 1;
    let (cols, rows) = (grid.cols() as i64, grid.rows() as i64);

    let mut issues = Issues {
        top: y0 < 0,
        bottom: y1 >= rows,
        left: x0 < 0,
        right: x1 >= cols,
    };

    for y in y0.max(0)..=y1.min(rows - 1) {
        for x in x0.max(0)..=x1.min(cols - 1) {
            if !grid.is_blocked(x as i32, y as i32) {
                continue;
            }
            issues.top |= y == y0;
            issues.bottom |= y == y1;
            issues.left |= x == x0;
            issues.right |= x == x1;
        }
    }
    issues
}
