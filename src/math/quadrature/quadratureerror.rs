use thiserror::Error;

/// Quadrature 計算過程中可能發生的錯誤。
///
/// integrand 本身的錯誤以 `IntegrandEvaluation` 原封不動地包裝後回傳，
/// rule 不會吞掉或改寫它。
#[derive(Error, Debug)]
pub enum QuadratureError {
    #[error("invalid argument '{parameter}': {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    #[error("integrand evaluation failed: {0}")]
    IntegrandEvaluation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("batched integrand returned {actual} values for {expected} nodes")]
    BatchLengthMismatch { expected: usize, actual: usize },
}

impl QuadratureError {
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> QuadratureError {
        QuadratureError::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    pub fn integrand<E>(error: E) -> QuadratureError
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        QuadratureError::IntegrandEvaluation(error.into())
    }
}

pub fn validate_subintervals(parameter: &'static str, n: usize) -> Result<(), QuadratureError> {
    if n < 1 {
        return Err(QuadratureError::invalid_argument(
            parameter,
            format!("number of subintervals must be a positive integer, got {}", n),
        ));
    }
    Ok(())
}

pub fn validate_bounds(lower: f64, upper: f64) -> Result<(), QuadratureError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::invalid_argument(
            "bounds",
            format!("integration bounds must be finite, got [{}, {}]", lower, upper),
        ));
    }
    Ok(())
}
