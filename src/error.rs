use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfindingError {
    #[error("Invalid footprint {width}x{height}: both extents must be at least one cell")]
    InvalidFootprint { width: i32, height: i32 },

    #[error("Ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid cell size: must be finite and positive")]
    InvalidCellSize,
}

/// Result type alias for fallible construction in this crate.
pub type PathfindingResult<T> = Result<T, PathfindingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathfindingError::InvalidFootprint {
            width: 0,
            height: 2,
        };
        assert!(err.to_string().contains("0x2"));

        let err = PathfindingError::RaggedGrid {
            row: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "Ragged grid: row 3 has 2 cells, expected 4");
    }
}
