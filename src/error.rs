use thiserror::Error;

/// Errors reported by polyline offset operations.
///
/// The offset pipeline favors silent degeneracy handling (skipped duplicate
/// points, sentinel intersections, dropped slivers) over raised errors; only
/// input that is out of contract is rejected here.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error("non-finite coordinate at point {index}")]
    NonFiniteCoordinate { index: usize },
}

/// Convenience type alias for results using [`OffsetError`].
pub type Result<T> = std::result::Result<T, OffsetError>;
