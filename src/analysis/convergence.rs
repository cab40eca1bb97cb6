use std::sync::Arc;

use serde::Serialize;

use crate::integrand::integrand::Integrand;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::{
    QuadratureRule,
    QuadratureRuleType
};

// ─────────────────────────────────────────────────────────────────────────────
// ConvergenceStudy
// ─────────────────────────────────────────────────────────────────────────────
//
// 對同一個 integrand 以一串 subinterval 數 n 重複積分，記錄與已知參考值的
// 絕對誤差。參考值由呼叫端提供（解析解或手算值）。
//
// 相鄰兩列的觀察階數：
//   p_i = ln(e_i / e_{i+1}) / ln(h_i / h_{i+1})
// 對 midpoint 與 trapezoidal 應接近 2。

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConvergencePoint {
    pub subintervals: usize,
    pub step: f64,
    pub estimate: f64,
    pub error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceTable {
    rule: QuadratureRuleType,
    reference: f64,
    points: Vec<ConvergencePoint>,
}

impl ConvergenceTable {
    pub fn rule(&self) -> QuadratureRuleType {
        self.rule
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }

    pub fn observed_orders(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| {
                let (coarse, fine) = (&pair[0], &pair[1]);
                (coarse.error / fine.error).ln() / (coarse.step / fine.step).ln()
            })
            .collect()
    }
}

pub struct ConvergenceStudy {
    rule: Arc<dyn QuadratureRule>,
    reference: f64,
}

impl ConvergenceStudy {
    pub fn new(rule: Arc<dyn QuadratureRule>, reference: f64) -> ConvergenceStudy {
        ConvergenceStudy { rule, reference }
    }

    pub fn run(
        &self,
        f: &dyn Integrand,
        a: f64,
        b: f64,
        subintervals: &[usize],
    ) -> Result<ConvergenceTable, QuadratureError> {
        if subintervals.is_empty() {
            return Err(QuadratureError::invalid_argument(
                "subintervals",
                "convergence study needs at least one subinterval count",
            ));
        }

        let mut points = Vec::with_capacity(subintervals.len());
        for &n in subintervals {
            let estimate = self.rule.integrate(f, a, b, n)?;
            points.push(ConvergencePoint {
                subintervals: n,
                step: (b - a) / n as f64,
                estimate,
                error: (estimate - self.reference).abs(),
            });
        }

        Ok(ConvergenceTable {
            rule: self.rule.rule_type(),
            reference: self.reference,
            points,
        })
    }
}
