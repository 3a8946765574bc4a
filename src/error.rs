use thiserror::Error;

/// Errors that can occur while deciding an allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(
        "shape mismatch: expected {expected} variables, got {objective} objective coefficients, {constraints} constraint rows and {limits} limits"
    )]
    ShapeMismatch {
        expected: usize,
        objective: usize,
        constraints: usize,
        limits: usize,
    },

    #[error("constraint row {row} has {len} coefficients, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("constraint matrix is singular")]
    SingularMatrix,

    #[error("division by zero: diagonal coefficient of variable {index} is zero")]
    DivisionByZero { index: usize },

    #[error("no resource bounds variable {index}")]
    UnboundedSolo { index: usize },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
