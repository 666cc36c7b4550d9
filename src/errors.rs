//! Kernel errors

/// Every recoverable failure the kernel can report.
///
/// None of these are fatal: each one has a matching pre-check
/// (`same_size_as`, `can_multiply_from_left`, `invertible`, `is_parallel_*`, ...)
/// so callers can test before acting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// (DimensionMismatch) Operands of a binary operation have incompatible sizes
    #[error("(DimensionMismatch) expected dimension {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// (IndexOutOfRange) A 1-indexed accessor was called outside `1..=len`
    #[error("(IndexOutOfRange) index {index} is outside 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// (NotSquare) The operation is only defined for square matrices
    #[error("(NotSquare) operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// (Singular) The matrix (or affine linear block) has no inverse
    #[error("(Singular) matrix is singular within tolerance")]
    Singular,
    /// (ZeroLength) A vector of length ~0 cannot be normalized
    #[error("(ZeroLength) cannot normalize a vector of zero length")]
    ZeroLength,
    /// (CrossUndefined) The cross product only exists in three dimensions
    #[error("(CrossUndefined) cross product is undefined for dimension {dimension}")]
    CrossUndefined { dimension: usize },
    /// (RaggedRows) Rows passed to a matrix constructor differ in length
    #[error("(RaggedRows) row {row} has {found} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },
    /// (EmptyMatrix) The operation needs at least one element
    #[error("(EmptyMatrix) operation requires a non-empty matrix")]
    EmptyMatrix,
    /// (UnsupportedDimension) Only 2D and 3D are supported here
    #[error("(UnsupportedDimension) dimension {0} is not supported, expected 2 or 3")]
    UnsupportedDimension(usize),
    /// (Parallel) Parallel objects have no unique intersection or closest point
    #[error("(Parallel) objects are parallel and have no unique intersection")]
    Parallel,
    /// (NoIntersection) Non-parallel objects that still do not meet (skew lines)
    #[error("(NoIntersection) objects do not intersect")]
    NoIntersection,
}

impl MathError {
    /// Shorthand used by every binary operation that checks sizes.
    pub(crate) const fn mismatch(expected: usize, found: usize) -> Self {
        MathError::DimensionMismatch { expected, found }
    }
}
