use crate::{
    feasibility::{centered_validity, diagnose_issues},
    footprint::Footprint,
    occupancy_grid::OccupancyGrid,
};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info};

/// Candidate offsets along one axis. A fault on the near edge pushes towards positive offsets,
/// a fault on the far edge towards negative ones, each up to `max` cells.
fn axis_offsets(near: bool, far: bool, max: i32) -> Vec<i32> {
    let mut offsets = Vec::new();
    if near {
        offsets.extend(1..=max);
    }
    if far {
        offsets.extend((1..=max).map(|d| -d));
    }
    if offsets.is_empty() {
        offsets.push(0);
    }
    offsets
}

/// Whether `point` lies in the box spanned by the rectangle centred on `center`, edges included.
fn covers(center: Point, footprint: Footprint, point: Point) -> bool {
    let anchor = footprint.centered_anchor(center);
    let (x, y) = (i64::from(anchor.x), i64::from(anchor.y));
    (x..=x + i64::from(footprint.width())).contains(&i64::from(point.x))
        && (y..=y + i64::from(footprint.height())).contains(&i64::from(point.y))
}

/// Moves an infeasible goal centre to a nearby feasible one.
///
/// Returns `target` untouched when it is already feasible. Otherwise the edges reported by
/// [diagnose_issues] decide which way to shift, by at most half the footprint on each axis, and
/// the first shifted centre that is feasible and whose rectangle still covers `target` is
/// returned. Candidates are tried horizontal offset first, vertical offset second.
///
/// If no candidate qualifies the original `target` is returned, so the result is not
/// guaranteed to be feasible.
pub fn adjust_target(grid: &OccupancyGrid, target: Point, footprint: Footprint) -> Point {
    if centered_validity(grid, target, footprint) {
        return target;
    }
    let issues = diagnose_issues(grid, target, footprint);
    let (max_dx, max_dy) = footprint.center_offset();
    let dx_options = axis_offsets(issues.left, issues.right, max_dx);
    let dy_options = axis_offsets(issues.top, issues.bottom, max_dy);
    debug!(
        "Adjusting {:?} for {}: {:?}, dx {:?}, dy {:?}",
        target, footprint, issues, dx_options, dy_options
    );

    let adjusted = iproduct!(dx_options, dy_options)
        .map(|(dx, dy)| Point::new(target.x.saturating_add(dx), target.y.saturating_add(dy)))
        .find(|&candidate| {
            covers(candidate, footprint, target) && centered_validity(grid, candidate, footprint)
        });
    match adjusted {
        Some(candidate) => {
            info!("Moved goal {:?} to {:?}", target, candidate);
            candidate
        }
        None => {
            info!("No feasible goal near {:?}, keeping it", target);
            target
        }
    }
}
