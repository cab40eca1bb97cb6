use crate::integrand::integrand::ScalarIntegrand;
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

/// Composite trapezoidal rule：
/// `h·(f(a)/2 + Σ_{i=1}^{n-1} f(a + i·h) + f(b)/2)`。
///
/// 誤差主項為 `-(b-a)·h²·f''/12`，與 midpoint 同階但符號相反、大小兩倍。
pub struct Trapezoidal;

impl QuadratureRule for Trapezoidal {
    fn rule_type(&self) -> QuadratureRuleType {
        QuadratureRuleType::Trapezoidal
    }

    fn grid(&self, a: f64, b: f64, n: usize) -> Result<QuadratureGrid, QuadratureError> {
        validate_subintervals("n", n)?;
        validate_bounds(a, b)?;
        let h = (b - a) / n as f64;

        let mut nodes = Vec::with_capacity(n + 1);
        let mut weights = Vec::with_capacity(n + 1);
        nodes.push(a);
        weights.push(0.5);
        for i in 1..n {
            nodes.push(a + i as f64 * h);
            weights.push(1.0);
        }
        // 右端點直接取 b，不以 a + n·h 累積
        nodes.push(b);
        weights.push(0.5);

        Ok(QuadratureGrid::new(nodes, weights, h))
    }
}

pub fn trapezoidal<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Trapezoidal.integrate(&ScalarIntegrand::new(f), a, b, n)
}
