use crate::{
    feasibility::is_feasible, footprint::Footprint, frontier::Frontier,
    occupancy_grid::OccupancyGrid, MOVE_COST, N_SMALLVEC_SIZE,
};
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info, warn};
use smallvec::{smallvec, SmallVec};

/// A node of the search tree. Nodes live in an arena owned by a single search and refer to their
/// parent by index.
#[derive(Clone, Debug)]
struct SearchNode {
    anchor: Point,
    parent: Option<usize>,
    g: i32,
}

/// Counters describing a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, including the start.
    pub enqueued: usize,
}

/// 4-connected neighbours in expansion order: left, right, up, down. The order decides which of
/// several equally short paths is returned. Coordinates saturate at the ends of the `i32` range,
/// where no grid cell can be.
pub(crate) fn neumann_neighborhood(p: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    smallvec![
        Point::new(p.x.saturating_sub(1), p.y),
        Point::new(p.x.saturating_add(1), p.y),
        Point::new(p.x, p.y.saturating_sub(1)),
        Point::new(p.x, p.y.saturating_add(1)),
    ]
}

/// Manhattan distance widened to `i64`, since goals may lie anywhere in the `i32` plane.
fn heuristic(p: &Point, goal: &Point) -> i64 {
    i64::from(p.x.abs_diff(goal.x)) + i64::from(p.y.abs_diff(goal.y))
}

fn reverse_path(nodes: &[SearchNode], last: usize) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(last), |&i| nodes[i].parent)
        .map(|i| nodes[i].anchor)
        .collect();
    path.reverse();
    path
}

/// A* over footprint anchors on a 4-connected grid with unit step cost.
///
/// The frontier is ordered by `f = g + h`, where `h` is the Manhattan distance from a candidate
/// anchor to the goal centre, with ties resolved in insertion order. Anchors are closed when
/// taken off the frontier and never reopened, and a neighbour is only queued if no entry for the
/// same anchor with an equal or lower `f` is already queued. Identical inputs always produce the
/// same path.
#[derive(Clone, Debug, Default)]
pub struct RectAstarSolver {
    /// Give up after this many expansions. [None] searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl RectAstarSolver {
    pub fn new() -> RectAstarSolver {
        RectAstarSolver {
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(max_expansions: usize) -> RectAstarSolver {
        RectAstarSolver {
            max_expansions: Some(max_expansions),
        }
    }

    /// Finds a sequence of anchors from `start` to an anchor whose footprint centre is
    /// `goal_center`, moving one cell at a time through feasible anchors.
    ///
    /// `start` is used as given, even if the footprint does not fit there. [None] means the goal
    /// cannot be reached (or the expansion cap was hit).
    ///
    /// Each expansion checks up to four footprints of `width * height` cells, so the worst case
    /// is `O(rows * cols * width * height)`. The search runs to completion without yielding;
    /// use [max_expansions](Self::max_expansions) to bound it.
    pub fn search(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal_center: Point,
        footprint: Footprint,
    ) -> Option<Vec<Point>> {
        self.search_with_stats(grid, start, goal_center, footprint).0
    }

    /// Same as [search](Self::search), also returning the [SearchStats].
    pub fn search_with_stats(
        &self,
        grid: &OccupancyGrid,
        start: Point,
        goal_center: Point,
        footprint: Footprint,
    ) -> (Option<Vec<Point>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut nodes = vec![SearchNode {
            anchor: start,
            parent: None,
            g: 0,
        }];
        let mut frontier: Frontier<i64> = Frontier::new();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        frontier.push(start, 0, 0);
        stats.enqueued += 1;

        while let Some(index) = frontier.pop() {
            if self.max_expansions.is_some_and(|max| stats.expanded >= max) {
                warn!(
                    "Gave up searching from {:?} to {:?} after {} expansions",
                    start, goal_center, stats.expanded
                );
                return (None, stats);
            }
            stats.expanded += 1;
            let SearchNode { anchor, g, .. } = nodes[index];
            closed.insert(anchor);

            if footprint.centers_on(anchor, goal_center) {
                let path = reverse_path(&nodes, index);
                debug!(
                    "Found path of {} anchors to {:?} ({:?})",
                    path.len(),
                    goal_center,
                    stats
                );
                return (Some(path), stats);
            }

            for neighbour in neumann_neighborhood(&anchor) {
                if !is_feasible(grid, neighbour, footprint) || closed.contains(&neighbour) {
                    continue;
                }
                let new_g = g + MOVE_COST;
                let f = i64::from(new_g) + heuristic(&neighbour, &goal_center);
                if frontier.has_open_at_most(&neighbour, f) {
                    continue;
                }
                nodes.push(SearchNode {
                    anchor: neighbour,
                    parent: Some(index),
                    g: new_g,
                });
                frontier.push(neighbour, f, nodes.len() - 1);
                stats.enqueued += 1;
            }
        }
        info!(
            "{:?} is not reachable from {:?} with footprint {}",
            goal_center, start, footprint
        );
        (None, stats)
    }
}
