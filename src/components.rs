use crate::{
    feasibility::is_feasible, footprint::Footprint, occupancy_grid::OccupancyGrid,
    solver::neumann_neighborhood,
};
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// [FootprintComponents] partitions the feasible anchors of a grid for one [Footprint] into
/// 4-connected components using a [UnionFind] structure. This answers whether
/// [RectAstarSolver::search](crate::solver::RectAstarSolver::search) can succeed without running
/// it, which avoids exhausting the whole reachable area when the goal is cut off.
///
/// The components are only valid for the grid contents they were generated from.
#[derive(Clone, Debug)]
pub struct FootprintComponents {
    footprint: Footprint,
    feasible: BoolGrid,
    components: UnionFind<usize>,
}

impl FootprintComponents {
    /// Links up every feasible anchor with its feasible right and lower neighbours.
    pub fn new(grid: &OccupancyGrid, footprint: Footprint) -> FootprintComponents {
        let (cols, rows) = (grid.cols(), grid.rows());
        let mut feasible = BoolGrid::new(cols, rows, false);
        for y in 0..rows {
            for x in 0..cols {
                feasible.set(x, y, is_feasible(grid, Point::new(x as i32, y as i32), footprint));
            }
        }
        let mut components = UnionFind::new(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                if !feasible.get(x, y) {
                    continue;
                }
                let ix = feasible.get_ix(x, y);
                if feasible.index_in_bounds(x + 1, y) && feasible.get(x + 1, y) {
                    components.union(ix, feasible.get_ix(x + 1, y));
                }
                if feasible.index_in_bounds(x, y + 1) && feasible.get(x, y + 1) {
                    components.union(ix, feasible.get_ix(x, y + 1));
                }
            }
        }
        info!(
            "Generated components for footprint {} on {}x{} grid",
            footprint, cols, rows
        );
        FootprintComponents {
            footprint,
            feasible,
            components,
        }
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    fn feasible_index(&self, anchor: &Point) -> Option<usize> {
        (self.feasible.point_in_bounds(*anchor) && self.feasible.get_point(*anchor))
            .then(|| self.feasible.get_ix_point(anchor))
    }

    /// Whether the footprint fits at `anchor`.
    pub fn is_feasible(&self, anchor: &Point) -> bool {
        self.feasible_index(anchor).is_some()
    }

    /// Retrieves the component id of a feasible anchor.
    pub fn get_component(&self, anchor: &Point) -> Option<usize> {
        self.feasible_index(anchor)
            .map(|ix| self.components.find(ix))
    }

    /// Checks if two feasible anchors are connected.
    pub fn connected(&self, a: &Point, b: &Point) -> bool {
        match (self.feasible_index(a), self.feasible_index(b)) {
            (Some(a_ix), Some(b_ix)) => self.components.equiv(a_ix, b_ix),
            _ => false,
        }
    }

    /// Whether a search from the anchor `start` can end with the footprint centred on
    /// `goal_center`. The start itself need not be feasible: the search then continues from
    /// whichever of its neighbours are.
    pub fn reachable(&self, start: &Point, goal_center: &Point) -> bool {
        if self.footprint.centers_on(*start, *goal_center) {
            return true;
        }
        let goal = self.footprint.anchor_for_center(*goal_center);
        if !self.is_feasible(&goal) {
            return false;
        }
        if self.is_feasible(start) {
            return self.connected(start, &goal);
        }
        neumann_neighborhood(start)
            .iter()
            .any(|n| self.connected(n, &goal))
    }

    /// Negation of [reachable](Self::reachable).
    pub fn unreachable(&self, start: &Point, goal_center: &Point) -> bool {
        !self.reachable(start, goal_center)
    }
}
