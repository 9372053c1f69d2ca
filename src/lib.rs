//! # footprint_pathfinding
//!
//! Grid-based [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) for agents that occupy a
//! rectangular block of cells rather than a single cell. A position in the search is the
//! *anchor* (top-left cell) of the agent's [Footprint], and a position is only walkable if the
//! whole block anchored there lies inside the [OccupancyGrid] and contains no blocked cells.
//! Movement is 4-connected with uniform cost.
//!
//! Goals are expressed as the cell the footprint should be centred on. When that goal is not
//! feasible, [adjust::adjust_target] looks for a nearby centre that is, and the
//! [planner::PathPlanner] wires adjustment, search and conversion to world-space waypoints
//! together. Optionally, [components::FootprintComponents] can be used to reject unreachable
//! goals without flood-filling the grid.
pub mod adjust;
pub mod builder;
pub mod components;
pub mod encoder;
pub mod error;
pub mod feasibility;
pub mod footprint;
pub mod frontier;
pub mod occupancy_grid;
pub mod planner;
pub mod solver;

pub use error::{PathfindingError, PathfindingResult};
pub use footprint::Footprint;
pub use grid_util::point::Point;
pub use occupancy_grid::OccupancyGrid;

/// Cost of a single axis-aligned step.
pub const MOVE_COST: i32 = 1;

const N_SMALLVEC_SIZE: usize = 4;
