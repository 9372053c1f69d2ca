use crate::error::{PathfindingError, PathfindingResult};
use grid_util::point::Point;
use num_traits::{AsPrimitive, Float};

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint<T> {
    pub x: T,
    pub y: T,
}

impl<T> WorldPoint<T> {
    pub fn new(x: T, y: T) -> WorldPoint<T> {
        WorldPoint { x, y }
    }
}

pub(crate) fn validate_cell_size<T: Float>(cell_size: T) -> PathfindingResult<T> {
    if cell_size.is_finite() && cell_size > T::zero() {
        Ok(cell_size)
    } else {
        Err(PathfindingError::InvalidCellSize)
    }
}

/// Converts grid anchors into world-space waypoints placed at the middle of each anchor cell.
/// Cell `(0, 0)` starts at `origin`, which should be the top-left corner of the area the grid was
/// built from (see [GridBuilder::encoder](crate::builder::GridBuilder::encoder)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathEncoder<T> {
    pub(crate) cell_size: T,
    pub(crate) origin: WorldPoint<T>,
}

impl<T> PathEncoder<T>
where
    T: Float + 'static,
    i32: AsPrimitive<T>,
{
    /// Encoder for a grid whose cell `(0, 0)` starts at the world origin.
    pub fn new(cell_size: T) -> PathfindingResult<PathEncoder<T>> {
        PathEncoder::with_origin(cell_size, WorldPoint::new(T::zero(), T::zero()))
    }

    pub fn with_origin(cell_size: T, origin: WorldPoint<T>) -> PathfindingResult<PathEncoder<T>> {
        validate_cell_size(cell_size).map(|cell_size| PathEncoder { cell_size, origin })
    }

    pub fn cell_size(&self) -> T {
        self.cell_size
    }

    pub fn origin(&self) -> WorldPoint<T> {
        self.origin
    }

    /// World position of a single cell: `origin + cell * cell_size + cell_size / 2`.
    pub fn cell_center(&self, cell: Point) -> WorldPoint<T> {
        let half = self.cell_size / (T::one() + T::one());
        WorldPoint::new(
            self.origin.x + AsPrimitive::<T>::as_(cell.x) * self.cell_size + half,
            self.origin.y + AsPrimitive::<T>::as_(cell.y) * self.cell_size + half,
        )
    }

    pub fn encode(&self, path: &[Point]) -> Vec<WorldPoint<T>> {
        path.iter().map(|&p| self.cell_center(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoints_sit_in_cell_middles() {
        let encoder = PathEncoder::new(2.0f32).unwrap();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        assert_eq!(
            encoder.encode(&path),
            vec![
                WorldPoint::new(1.0, 1.0),
                WorldPoint::new(3.0, 1.0),
                WorldPoint::new(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn works_with_f64() {
        let encoder = PathEncoder::new(0.5f64).unwrap();
        assert_eq!(
            encoder.cell_center(Point::new(3, -2)),
            WorldPoint::new(1.75, -0.75)
        );
        assert!(encoder.encode(&[]).is_empty());
    }

    #[test]
    fn origin_is_added_back() {
        let encoder = PathEncoder::with_origin(2.0f64, WorldPoint::new(100.0, -50.0)).unwrap();
        assert_eq!(encoder.origin(), WorldPoint::new(100.0, -50.0));
        assert_eq!(
            encoder.encode(&[Point::new(0, 0), Point::new(3, 1)]),
            vec![WorldPoint::new(101.0, -49.0), WorldPoint::new(107.0, -47.0)]
        );
        assert_eq!(
            PathEncoder::with_origin(0.0f64, WorldPoint::new(1.0, 1.0)),
            Err(PathfindingError::InvalidCellSize)
        );
    }

    #[test]
    fn rejects_bad_cell_sizes() {
        for cell_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                PathEncoder::new(cell_size),
                Err(PathfindingError::InvalidCellSize)
            );
        }
    }
}
