use footprint_pathfinding::{
    adjust::adjust_target,
    feasibility::{centered_validity, diagnose_issues},
    Footprint, OccupancyGrid, Point,
};

// A 3x3 agent is asked to stand centred on T, next to an obstacle:
//  ______
// |      |
// |      |
// |#     |
// |  T   |
// |      |
// |      |
//  ______
// The rectangle centred on T covers columns 0-2 and rows 1-3, so the
// obstacle touches its left edge and the goal is moved one cell right.

fn main() {
    let mut grid = OccupancyGrid::new(6, 6, false);
    grid.set(0, 2, true);
    println!("{}", grid);
    let footprint = Footprint::new(3, 3).unwrap();
    let target = Point::new(2, 3);
    println!(
        "Target {:?} valid: {}, issues: {:?}",
        target,
        centered_validity(&grid, target, footprint),
        diagnose_issues(&grid, target, footprint)
    );
    let adjusted = adjust_target(&grid, target, footprint);
    println!(
        "Adjusted {:?} valid: {}",
        adjusted,
        centered_validity(&grid, adjusted, footprint)
    );
}
