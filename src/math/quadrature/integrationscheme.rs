use std::sync::Arc;

use crate::integrand::integrand::{
    Integrand,
    Integrand2D
};
use crate::math::quadrature::doubleintegral::DoubleIntegral;
use crate::math::quadrature::quadratureerror::{
    validate_subintervals,
    QuadratureError
};
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// 一維 rule 加上固定的 subinterval 數。
pub struct IntegrationScheme {
    rule: Arc<dyn QuadratureRule>,
    subintervals: usize
}

impl IntegrationScheme {
    pub fn new(rule: Arc<dyn QuadratureRule>, subintervals: usize) -> Result<IntegrationScheme, QuadratureError> {
        validate_subintervals("subintervals", subintervals)?;
        Ok(IntegrationScheme { rule, subintervals })
    }

    pub fn rule(&self) -> &Arc<dyn QuadratureRule> {
        &self.rule
    }

    pub fn subintervals(&self) -> usize {
        self.subintervals
    }

    pub fn integrate(&self, f: &dyn Integrand, a: f64, b: f64) -> Result<f64, QuadratureError> {
        self.rule.integrate(f, a, b, self.subintervals)
    }
}

pub struct DoubleIntegrationScheme {
    integral: DoubleIntegral,
    nx: usize,
    ny: usize
}

impl DoubleIntegrationScheme {
    pub fn new(integral: DoubleIntegral, nx: usize, ny: usize) -> Result<DoubleIntegrationScheme, QuadratureError> {
        validate_subintervals("nx", nx)?;
        validate_subintervals("ny", ny)?;
        Ok(DoubleIntegrationScheme { integral, nx, ny })
    }

    pub fn integral(&self) -> &DoubleIntegral {
        &self.integral
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn integrate(&self, f: &dyn Integrand2D, a: f64, b: f64, c: f64, d: f64) -> Result<f64, QuadratureError> {
        self.integral.integrate(f, a, b, c, d, self.nx, self.ny)
    }
}
