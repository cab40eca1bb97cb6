use std::fmt;
use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};

use crate::integrand::integrand::Integrand;
use crate::math::quadrature::midpoint::Midpoint;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::trapezoidal::Trapezoidal;
use crate::math::summation::compensated_sum;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureGrid
// ─────────────────────────────────────────────────────────────────────────────

/// 一組節點與權重。
///
/// 權重是無因次的（midpoint 全為 1，trapezoidal 為 1/2, 1, ..., 1, 1/2），
/// 估計值為 `step * Σ w_i·f(x_i)`；step 在最後才乘上，與教科書公式的
/// 運算順序一致。
#[derive(Debug, Clone)]
pub struct QuadratureGrid {
    nodes: Vec<f64>,
    weights: Vec<f64>,
    step: f64,
}

impl QuadratureGrid {
    pub fn new(nodes: Vec<f64>, weights: Vec<f64>, step: f64) -> QuadratureGrid {
        debug_assert_eq!(nodes.len(), weights.len());
        QuadratureGrid { nodes, weights, step }
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 以節點上的函數值計算加權和。
    pub fn apply(&self, values: &[f64]) -> Result<f64, QuadratureError> {
        if values.len() != self.nodes.len() {
            return Err(QuadratureError::BatchLengthMismatch {
                expected: self.nodes.len(),
                actual: values.len(),
            });
        }
        let weighted = values
            .iter()
            .zip(self.weights.iter())
            .map(|(&value, &weight)| weight * value);
        Ok(self.step * compensated_sum(weighted))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────────────────────────────────────

/// 固定步長的一維 composite rule。
///
/// `Send + Sync` 使 `Arc<dyn QuadratureRule>` 可在 scheme 與
/// `DoubleIntegral` 之間共用。
pub trait QuadratureRule: Send + Sync {
    fn rule_type(&self) -> QuadratureRuleType;

    fn grid(&self, a: f64, b: f64, n: usize) -> Result<QuadratureGrid, QuadratureError>;

    fn integrate(&self, f: &dyn Integrand, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
        log::debug!("{}: a={}, b={}, n={}", self.rule_type(), a, b, n);
        let grid = self.grid(a, b, n)?;
        let values = f.values(grid.nodes())?;
        grid.apply(&values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuadratureRuleType {
    Midpoint,
    Trapezoidal
}

impl QuadratureRuleType {
    pub fn rule(&self) -> Arc<dyn QuadratureRule> {
        match self {
            QuadratureRuleType::Midpoint => Arc::new(Midpoint),
            QuadratureRuleType::Trapezoidal => Arc::new(Trapezoidal)
        }
    }
}

impl fmt::Display for QuadratureRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureRuleType::Midpoint => write!(f, "midpoint"),
            QuadratureRuleType::Trapezoidal => write!(f, "trapezoidal")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_apply_scales_by_step_last() {
        let grid = QuadratureGrid::new(vec![0.0, 1.0, 2.0], vec![0.5, 1.0, 0.5], 1.0);
        assert_eq!(grid.apply(&[2.0, 4.0, 6.0]).unwrap(), 8.0);
        assert_eq!(grid.len(), 3);
        assert!(!grid.is_empty());
    }

    #[test]
    fn grid_apply_rejects_wrong_length() {
        let grid = QuadratureGrid::new(vec![0.0, 1.0], vec![1.0, 1.0], 0.5);
        assert!(matches!(
            grid.apply(&[1.0]),
            Err(QuadratureError::BatchLengthMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn rule_type_builds_matching_rule() {
        for rule_type in [QuadratureRuleType::Midpoint, QuadratureRuleType::Trapezoidal] {
            assert_eq!(rule_type.rule().rule_type(), rule_type);
        }
    }

    #[test]
    fn rule_type_from_json() {
        let rule_type: QuadratureRuleType = serde_json::from_str("\"Trapezoidal\"").unwrap();
        assert_eq!(rule_type, QuadratureRuleType::Trapezoidal);
        assert!(serde_json::from_str::<QuadratureRuleType>("\"Simpson\"").is_err());
    }
}
