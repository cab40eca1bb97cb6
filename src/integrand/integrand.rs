use crate::math::quadrature::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────────────────────────────────────
// Integrand traits
// ─────────────────────────────────────────────────────────────────────────────

/// 一維 integrand：R -> R。
///
/// `values` 預設逐點呼叫 `value`，遇到第一個錯誤立即回傳；
/// batch 形式的 integrand 可覆寫 `values`，但結果必須與逐點求值相同。
pub trait Integrand {
    fn value(&self, x: f64) -> Result<f64, QuadratureError>;

    fn values(&self, xs: &[f64]) -> Result<Vec<f64>, QuadratureError> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

/// 二維 integrand：R x R -> R。
pub trait Integrand2D {
    fn value(&self, x: f64, y: f64) -> Result<f64, QuadratureError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapters
// ─────────────────────────────────────────────────────────────────────────────

pub struct ScalarIntegrand<F> {
    f: F,
}

impl<F> ScalarIntegrand<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> ScalarIntegrand<F> {
        ScalarIntegrand { f }
    }
}

impl<F> Integrand for ScalarIntegrand<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> Result<f64, QuadratureError> {
        Ok((self.f)(x))
    }
}

/// 可能失敗的 integrand，例如對負數取 log。
pub struct FallibleIntegrand<F> {
    f: F,
}

impl<F, E> FallibleIntegrand<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    pub fn new(f: F) -> FallibleIntegrand<F> {
        FallibleIntegrand { f }
    }
}

impl<F, E> Integrand for FallibleIntegrand<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn value(&self, x: f64) -> Result<f64, QuadratureError> {
        (self.f)(x).map_err(QuadratureError::integrand)
    }
}

/// Batch integrand：一次接收全部節點，回傳同順序、同長度的函數值。
pub struct BatchIntegrand<F> {
    f: F,
}

impl<F> BatchIntegrand<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    pub fn new(f: F) -> BatchIntegrand<F> {
        BatchIntegrand { f }
    }
}

impl<F> Integrand for BatchIntegrand<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn value(&self, x: f64) -> Result<f64, QuadratureError> {
        let values = self.values(&[x])?;
        Ok(values[0])
    }

    fn values(&self, xs: &[f64]) -> Result<Vec<f64>, QuadratureError> {
        let values = (self.f)(xs);
        if values.len() != xs.len() {
            return Err(QuadratureError::BatchLengthMismatch {
                expected: xs.len(),
                actual: values.len(),
            });
        }
        Ok(values)
    }
}

pub struct ScalarIntegrand2D<F> {
    f: F,
}

impl<F> ScalarIntegrand2D<F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(f: F) -> ScalarIntegrand2D<F> {
        ScalarIntegrand2D { f }
    }
}

impl<F> Integrand2D for ScalarIntegrand2D<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, x: f64, y: f64) -> Result<f64, QuadratureError> {
        Ok((self.f)(x, y))
    }
}

pub struct FallibleIntegrand2D<F> {
    f: F,
}

impl<F, E> FallibleIntegrand2D<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    pub fn new(f: F) -> FallibleIntegrand2D<F> {
        FallibleIntegrand2D { f }
    }
}

impl<F, E> Integrand2D for FallibleIntegrand2D<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn value(&self, x: f64, y: f64) -> Result<f64, QuadratureError> {
        (self.f)(x, y).map_err(QuadratureError::integrand)
    }
}
