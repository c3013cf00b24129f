use thiserror::Error;

/// Errors reported by the visibility merge sort.
///
/// Numeric degeneracy is never an error; it leaves limits at `+∞`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisError {
    #[error("segment count {count} is not a power of two")]
    SegmentCountNotPowerOfTwo { count: usize },

    #[error("{buffer} buffer holds {got} samples, expected {expected}")]
    BufferLength {
        buffer: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Convenience type alias for results using [`VisError`].
pub type Result<T> = std::result::Result<T, VisError>;
