use footprint_pathfinding::{
    builder::{GridBuilder, WorldRect},
    encoder::WorldPoint,
    planner::PathPlanner,
    PathfindingResult,
};

// Builds a grid from world-space walls, sizes the agent in cells and plans a
// path for it, printing the world-space waypoints a movement system would
// follow one by one.

fn main() -> PathfindingResult<()> {
    let cell_size = 2.0f32;
    // The map spans x 60..100 and y -10..20 in world space
    let mut builder = GridBuilder::new(WorldRect::new(60.0, -10.0, 40.0, 30.0), cell_size)?;
    builder.add_obstacle(WorldRect::new(72.0, -10.0, 2.0, 20.0));
    builder.add_obstacle(WorldRect::new(84.0, 0.0, 2.0, 20.0));
    builder.add_obstacle(WorldRect::new(200.0, 100.0, 5.0, 5.0));
    let grid = builder.build();
    println!("{}", grid);

    let footprint = builder.footprint_for(3.0, 3.0)?;
    let start = builder.cell_of(WorldPoint::new(62.0, -8.0));
    let goal = builder.cell_of(WorldPoint::new(99.0, -8.0));

    let mut planner = PathPlanner::with_encoder(builder.encoder());
    planner.check_components = true;
    match planner.plan(&grid, start, goal, footprint) {
        Some(plan) => {
            if plan.adjusted {
                println!("Goal moved from {:?} to {:?}", goal, plan.goal);
            }
            for (step, waypoint) in plan.waypoints.iter().enumerate() {
                println!("{step}: ({}, {})", waypoint.x, waypoint.y);
            }
        }
        None => println!("No path from {:?} to {:?}", start, goal),
    }
    Ok(())
}
