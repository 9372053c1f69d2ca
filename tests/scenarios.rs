use footprint_pathfinding::{
    adjust::adjust_target,
    feasibility::{centered_validity, diagnose_issues, is_feasible, Issues},
    solver::RectAstarSolver,
    Footprint, OccupancyGrid, Point,
};

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// 4x4 open grid, 1x1 agent from (0, 0) to (3, 3). Among the equally short paths, trying left
/// and right before up and down and taking equal costs first come first served runs along the
/// top row first.
#[test]
fn open_grid_corner_to_corner() {
    let grid = OccupancyGrid::from_rows(&[[0u8; 4]; 4]).unwrap();
    let (path, stats) = RectAstarSolver::new().search_with_stats(
        &grid,
        Point::new(0, 0),
        Point::new(3, 3),
        Footprint::unit(),
    );
    let path = path.unwrap();
    assert_eq!(
        path,
        points(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3)])
    );
    assert!(path.windows(2).all(|w| w[0].manhattan_distance(&w[1]) == 1));
    assert_eq!(stats.expanded, 16);
}

/// A wall at x = 2 open only at y = 3 forces a detour through (2, 3).
#[test]
fn detour_through_gap() {
    //  ___
    // |S #G|
    // |  # |
    // |  # |
    // |    |
    //  ___
    let grid = OccupancyGrid::from_rows(&[
        [0u8, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let path = RectAstarSolver::new()
        .search(&grid, Point::new(0, 0), Point::new(3, 0), Footprint::unit())
        .unwrap();
    assert_eq!(
        path,
        points(&[
            (0, 0),
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 3),
            (3, 2),
            (3, 1),
            (3, 0),
        ])
    );
}

/// A 2x2 agent steps down the left side past a wall, then across under it and around a ledge.
#[test]
fn two_by_two_agent_around_wall_and_ledge() {
    //  ______
    // |S #   |
    // |  #   |
    // |  #   |
    // |    ##|
    // |      |
    // |     G|
    //  ______
    let mut grid = OccupancyGrid::new(6, 6, false);
    grid.set_rect(2, 0, 1, 3, true);
    grid.set_rect(4, 3, 2, 1, true);
    let footprint = Footprint::new(2, 2).unwrap();
    let (path, stats) = RectAstarSolver::new().search_with_stats(
        &grid,
        Point::new(0, 0),
        Point::new(5, 5),
        footprint,
    );
    assert_eq!(
        path.unwrap(),
        points(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 4),
        ])
    );
    assert_eq!(stats.expanded, 11);
}

/// A 2x2 goal one cell past the right edge is pulled back left by one.
#[test]
fn goal_past_right_edge_is_pulled_in() {
    let grid = OccupancyGrid::new(4, 4, false);
    let footprint = Footprint::new(2, 2).unwrap();
    let target = Point::new(4, 1);
    assert!(!centered_validity(&grid, target, footprint));
    assert_eq!(
        diagnose_issues(&grid, target, footprint),
        Issues {
            right: true,
            ..Issues::default()
        }
    );
    let adjusted = adjust_target(&grid, target, footprint);
    assert_eq!(adjusted, Point::new(3, 1));
    assert!(centered_validity(&grid, adjusted, footprint));

    // The repaired goal is reachable
    let path = RectAstarSolver::new()
        .search(&grid, Point::new(0, 0), adjusted, footprint)
        .unwrap();
    assert_eq!(footprint.center_of(*path.last().unwrap()), adjusted);
}

/// A start walled in on all four sides gives up after expanding only itself.
#[test]
fn enclosed_start() {
    let grid = OccupancyGrid::from_rows(&[
        [0u8, 1, 0],
        [1, 0, 1],
        [0, 1, 0],
    ])
    .unwrap();
    let (path, stats) = RectAstarSolver::new().search_with_stats(
        &grid,
        Point::new(1, 1),
        Point::new(2, 2),
        Footprint::unit(),
    );
    assert!(path.is_none());
    assert_eq!(stats.expanded, 1);
    assert_eq!(stats.enqueued, 1);
}

#[test]
fn two_by_two_agent_follows_corridor() {
    // A corridor two cells high along the bottom, blocked above except at the far right
    let mut grid = OccupancyGrid::new(8, 6, false);
    grid.set_rect(0, 2, 6, 2, true);
    let footprint = Footprint::new(2, 2).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(1, 5);
    let path = RectAstarSolver::new()
        .search(&grid, start, goal, footprint)
        .unwrap();
    assert!(path.iter().all(|p| is_feasible(&grid, *p, footprint)));
    assert!(path.iter().any(|p| p.x >= 6));
    assert_eq!(*path.last().unwrap(), Point::new(0, 4));
    // Right along the top, down the open columns and back left along the bottom
    assert_eq!(path.len(), 1 + 6 + 4 + 6);
}

#[test]
fn search_is_deterministic() {
    let grid = OccupancyGrid::new(12, 12, false);
    let footprint = Footprint::new(3, 2).unwrap();
    let solver = RectAstarSolver::new();
    let first = solver.search(&grid, Point::new(0, 0), Point::new(9, 9), footprint);
    for _ in 0..10 {
        assert_eq!(
            solver.search(&grid, Point::new(0, 0), Point::new(9, 9), footprint),
            first
        );
    }
}
