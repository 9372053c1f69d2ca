use crate::{
    adjust::adjust_target,
    components::FootprintComponents,
    encoder::{PathEncoder, WorldPoint},
    error::PathfindingResult,
    feasibility::centered_validity,
    footprint::Footprint,
    occupancy_grid::OccupancyGrid,
    solver::RectAstarSolver,
};
use grid_util::point::Point;
use log::info;
use num_traits::{AsPrimitive, Float};

/// Result of [PathPlanner::plan].
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPath<T> {
    /// Goal centre the path ends on.
    pub goal: Point,
    /// Whether `goal` differs from the requested goal.
    pub adjusted: bool,
    /// Anchors from the start to the goal.
    pub cells: Vec<Point>,
    /// World-space waypoints, one per anchor.
    pub waypoints: Vec<WorldPoint<T>>,
}

/// Runs the whole query for one agent: repairs the goal when the footprint does not fit there,
/// searches for a path and converts it to world space.
#[derive(Clone, Debug)]
pub struct PathPlanner<T> {
    pub solver: RectAstarSolver,
    pub encoder: PathEncoder<T>,
    /// Checks reachability with [FootprintComponents] before searching.
    pub check_components: bool,
}

impl<T> PathPlanner<T>
where
    T: Float + 'static,
    i32: AsPrimitive<T>,
{
    pub fn new(cell_size: T) -> PathfindingResult<PathPlanner<T>> {
        PathEncoder::new(cell_size).map(Self::with_encoder)
    }

    /// Planner producing waypoints with `encoder`, typically
    /// [GridBuilder::encoder](crate::builder::GridBuilder::encoder) for the grid being planned on.
    pub fn with_encoder(encoder: PathEncoder<T>) -> PathPlanner<T> {
        PathPlanner {
            solver: RectAstarSolver::new(),
            encoder,
            check_components: false,
        }
    }

    pub fn plan(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal_center: Point,
        footprint: Footprint,
    ) -> Option<PlannedPath<T>> {
        let goal = if centered_validity(grid, goal_center, footprint) {
            goal_center
        } else {
            adjust_target(grid, goal_center, footprint)
        };
        if self.check_components
            && FootprintComponents::new(grid, footprint).unreachable(&start, &goal)
        {
            info!("{:?} is not reachable from {:?}, skipping search", goal, start);
            return None;
        }
        let cells = self.solver.search(grid, start, goal, footprint)?;
        let waypoints = self.encoder.encode(&cells);
        Some(PlannedPath {
            goal,
            adjusted: goal != goal_center,
            cells,
            waypoints,
        })
    }
}
