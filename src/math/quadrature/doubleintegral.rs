use std::sync::Arc;

use crate::integrand::integrand::{
    Integrand,
    Integrand2D,
    ScalarIntegrand2D
};
use crate::math::quadrature::midpoint::Midpoint;
use crate::math::quadrature::quadratureerror::{
    validate_bounds,
    validate_subintervals,
    QuadratureError
};
use crate::math::quadrature::quadraturerule::QuadratureRule;

// ─────────────────────────────────────────────────────────────────────────────
// DoubleIntegral
// ─────────────────────────────────────────────────────────────────────────────
//
// ∫_a^b ∫_c^d f(x, y) dy dx
//
// 以兩個一維 rule 巢狀組合（tensor product）：
//   g(x) = inner.integrate(y ↦ f(x, y), c, d, ny)
//   I    = outer.integrate(g, a, b, nx)
//
// outer 與 inner 可為任意 QuadratureRule，預設兩者皆為 Midpoint。

pub struct DoubleIntegral {
    outer: Arc<dyn QuadratureRule>,
    inner: Arc<dyn QuadratureRule>,
}

impl DoubleIntegral {
    pub fn new(outer: Arc<dyn QuadratureRule>, inner: Arc<dyn QuadratureRule>) -> DoubleIntegral {
        DoubleIntegral { outer, inner }
    }

    pub fn midpoint() -> DoubleIntegral {
        DoubleIntegral::new(Arc::new(Midpoint), Arc::new(Midpoint))
    }

    pub fn outer(&self) -> &Arc<dyn QuadratureRule> {
        &self.outer
    }

    pub fn inner(&self) -> &Arc<dyn QuadratureRule> {
        &self.inner
    }

    #[allow(clippy::too_many_arguments)]
    pub fn integrate(
        &self,
        f: &dyn Integrand2D,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        nx: usize,
        ny: usize,
    ) -> Result<f64, QuadratureError> {
        // 先檢查全部參數，避免只算到一半才失敗
        validate_subintervals("nx", nx)?;
        validate_subintervals("ny", ny)?;
        validate_bounds(a, b)?;
        validate_bounds(c, d)?;

        log::debug!(
            "double integral ({} outer, {} inner): [{}, {}] x [{}, {}], nx={}, ny={}",
            self.outer.rule_type(),
            self.inner.rule_type(),
            a, b, c, d, nx, ny
        );

        let g = InnerIntegral {
            f,
            inner: self.inner.as_ref(),
            c,
            d,
            ny,
        };
        self.outer.integrate(&g, a, b, nx)
    }
}

/// 固定 x 後的截面 y ↦ f(x, y)。
struct Section<'a> {
    f: &'a dyn Integrand2D,
    x: f64,
}

impl Integrand for Section<'_> {
    fn value(&self, y: f64) -> Result<f64, QuadratureError> {
        self.f.value(self.x, y)
    }
}

/// x ↦ ∫_c^d f(x, y) dy；內層錯誤原樣往外傳，不再包裝。
struct InnerIntegral<'a> {
    f: &'a dyn Integrand2D,
    inner: &'a dyn QuadratureRule,
    c: f64,
    d: f64,
    ny: usize,
}

impl Integrand for InnerIntegral<'_> {
    fn value(&self, x: f64) -> Result<f64, QuadratureError> {
        log::trace!("inner integral at x={}", x);
        let section = Section { f: self.f, x };
        self.inner.integrate(&section, self.c, self.d, self.ny)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn midpoint_double<F>(
    f: F,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    nx: usize,
    ny: usize,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64, f64) -> f64,
{
    DoubleIntegral::midpoint().integrate(&ScalarIntegrand2D::new(f), a, b, c, d, nx, ny)
}
