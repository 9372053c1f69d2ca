use crate::error::{PathfindingError, PathfindingResult};
use core::fmt;
use grid_util::point::Point;

/// The block of cells an agent occupies, `width` columns by `height` rows. Both extents are at
/// least one, which is enforced by [Footprint::new].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    width: i32,
    height: i32,
}

impl Footprint {
    pub fn new(width: i32, height: i32) -> PathfindingResult<Footprint> {
        if width < 1 || height < 1 {
            return Err(PathfindingError::InvalidFootprint { width, height });
        }
        Ok(Footprint { width, height })
    }

    /// A single-cell footprint.
    pub fn unit() -> Footprint {
        Footprint {
            width: 1,
            height: 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Offset from the anchor to the centre cell, `(width / 2, height / 2)` rounded down.
    pub fn center_offset(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    /// Centre cell of the footprint anchored at `anchor`, saturating at the ends of the `i32`
    /// range.
    pub fn center_of(&self, anchor: Point) -> Point {
        let (dx, dy) = self.center_offset();
        Point::new(anchor.x.saturating_add(dx), anchor.y.saturating_add(dy))
    }

    /// Whether the footprint anchored at `anchor` has its centre on `center`. This is the goal
    /// test of the search and is exact for any pair of points.
    pub fn centers_on(&self, anchor: Point, center: Point) -> bool {
        let (dx, dy) = self.center_offset();
        i64::from(anchor.x) + i64::from(dx) == i64::from(center.x)
            && i64::from(anchor.y) + i64::from(dy) == i64::from(center.y)
    }

    /// Anchor whose [center_of](Self::center_of) is `center`, saturating like it.
    pub fn anchor_for_center(&self, center: Point) -> Point {
        let (dx, dy) = self.center_offset();
        Point::new(center.x.saturating_sub(dx), center.y.saturating_sub(dy))
    }

    /// Anchor of the rectangle centred on `center` as used by the validity checks and the
    /// target adjuster: `floor(c - extent / 2)` with real division, which is
    /// `c - (extent + 1) / 2` in integers. For odd extents this is one cell further up/left than
    /// [anchor_for_center](Self::anchor_for_center). Saturates at `i32::MIN`.
    pub fn centered_anchor(&self, center: Point) -> Point {
        Point::new(
            center.x.saturating_sub((self.width + 1) / 2),
            center.y.saturating_sub((self.height + 1) / 2),
        )
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_extents() {
        for (w, h) in [(0, 1), (1, 0), (-2, 3), (0, 0)] {
            assert_eq!(
                Footprint::new(w, h),
                Err(PathfindingError::InvalidFootprint {
                    width: w,
                    height: h
                })
            );
        }
        assert!(Footprint::new(1, 1).is_ok());
    }

    #[test]
    fn center_and_anchor_round_trip() {
        let footprint = Footprint::new(3, 2).unwrap();
        let anchor = Point::new(4, 7);
        let center = footprint.center_of(anchor);
        assert_eq!(center, Point::new(5, 8));
        assert_eq!(footprint.anchor_for_center(center), anchor);
    }

    #[test]
    fn centered_anchor_rounds_down() {
        // Even extents agree with the search's notion of centre
        let even = Footprint::new(2, 4).unwrap();
        assert_eq!(even.centered_anchor(Point::new(5, 5)), Point::new(4, 3));
        assert_eq!(even.centered_anchor(Point::new(5, 5)), even.anchor_for_center(Point::new(5, 5)));
        // floor(5 - 1.5) = 3, floor(-1 - 0.5) = -2
        let odd = Footprint::new(3, 1).unwrap();
        assert_eq!(odd.centered_anchor(Point::new(5, -1)), Point::new(3, -2));
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let footprint = Footprint::new(3, 4).unwrap();
        let low = Point::new(i32::MIN, i32::MIN);
        let high = Point::new(i32::MAX, i32::MAX);
        assert_eq!(footprint.centered_anchor(low), low);
        assert_eq!(
            footprint.centered_anchor(Point::new(1_500_000_000, 0)),
            Point::new(1_499_999_998, -2)
        );
        assert_eq!(footprint.center_of(high), high);
        assert_eq!(footprint.anchor_for_center(low), low);
        assert!(!footprint.centers_on(high, high));
        assert!(footprint.centers_on(Point::new(i32::MAX - 1, i32::MAX - 2), high));
    }
}
