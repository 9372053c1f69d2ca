use footprint_pathfinding::{solver::RectAstarSolver, Footprint, OccupancyGrid, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = OccupancyGrid::new(3, 3, false);
    grid.set(1, 1, true);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = RectAstarSolver::new()
        .search(&grid, start, end, Footprint::unit())
        .unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
