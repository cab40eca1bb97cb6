use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ToleranceError {
    #[error("error={error} > tol={tolerance} (computed={computed}, expected={expected})")]
    Exceeded {
        computed: f64,
        expected: f64,
        error: f64,
        tolerance: f64,
    },
}

/// 以絕對誤差比較計算值與參考值。
#[derive(Debug, Clone, Copy)]
pub struct ToleranceCheck {
    tolerance: f64,
}

impl ToleranceCheck {
    pub fn new(tolerance: f64) -> ToleranceCheck {
        ToleranceCheck { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// 通過時回傳絕對誤差。NaN 一律視為不通過。
    pub fn check(&self, computed: f64, expected: f64) -> Result<f64, ToleranceError> {
        let error = (expected - computed).abs();
        if error < self.tolerance {
            Ok(error)
        } else {
            Err(ToleranceError::Exceeded {
                computed,
                expected,
                error,
                tolerance: self.tolerance,
            })
        }
    }
}
