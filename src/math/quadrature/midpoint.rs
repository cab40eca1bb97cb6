use crate::integrand::integrand::{
    BatchIntegrand,
    ScalarIntegrand
};
use crate::math::quadrature::quadratureerror::{
    validate_bounds,
    validate_subintervals,
    QuadratureError
};
use crate::math::quadrature::quadraturerule::{
    QuadratureGrid,
    QuadratureRule,
    QuadratureRuleType
};

/// Composite midpoint rule：`h·Σ f(a + h/2 + i·h)`，i = 0..n-1。
///
/// 對一次以下的多項式為精確解；誤差主項為 `(b-a)·h²·f''/24`。
pub struct Midpoint;

impl QuadratureRule for Midpoint {
    fn rule_type(&self) -> QuadratureRuleType {
        QuadratureRuleType::Midpoint
    }

    fn grid(&self, a: f64, b: f64, n: usize) -> Result<QuadratureGrid, QuadratureError> {
        validate_subintervals("n", n)?;
        validate_bounds(a, b)?;
        let h = (b - a) / n as f64;
        let first = a + h / 2.0;
        let nodes: Vec<f64> = (0..n).map(|i| first + i as f64 * h).collect();
        Ok(QuadratureGrid::new(nodes, vec![1.0; n], h))
    }
}

pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Midpoint.integrate(&ScalarIntegrand::new(f), a, b, n)
}

/// Midpoint rule，integrand 一次接收全部 midpoints。
pub fn midpoint_vector<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    Midpoint.integrate(&BatchIntegrand::new(f), a, b, n)
}
