use thiserror::Error;

/// Custom error type for the NeuroGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    #[error("Arity mismatch: expected {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Domain error in {operation}: {value} ** {exponent} is not a real number")]
    DomainError {
        operation: String,
        value: f64,
        exponent: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Non-finite gradient on parameter {index}, refusing to step")]
    NonFiniteGradient { index: usize },
}
