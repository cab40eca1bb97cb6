use serde::{
    Deserialize,
    Serialize
};

use crate::analysis::convergence::ConvergenceTable;
use crate::integrand::integrand::Integrand;
use crate::math::quadrature::quadratureerror::{
    validate_bounds,
    QuadratureError
};

/// 一條 x/y 資料序列，供外部繪圖工具讀取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Series {
        Series { name: name.into(), x, y }
    }

    /// 在 [a, b] 上等距取 `points` 個點（含兩端點）並求 integrand 值。
    pub fn sample(
        name: impl Into<String>,
        f: &dyn Integrand,
        a: f64,
        b: f64,
        points: usize
    ) -> Result<Series, QuadratureError> {
        if points < 2 {
            return Err(QuadratureError::invalid_argument(
                "points",
                format!("need at least 2 sample points, got {}", points),
            ));
        }
        validate_bounds(a, b)?;
        let step = (b - a) / (points - 1) as f64;
        let mut x: Vec<f64> = (0..points - 1).map(|i| a + i as f64 * step).collect();
        x.push(b);
        let y = f.values(&x)?;
        Ok(Series::new(name, x, y))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

impl From<&ConvergenceTable> for Series {
    /// x 為 subinterval 數，y 為絕對誤差。
    fn from(table: &ConvergenceTable) -> Series {
        let x = table.points().iter().map(|p| p.subintervals as f64).collect();
        let y = table.points().iter().map(|p| p.error).collect();
        Series::new(format!("{} error", table.rule()), x, y)
    }
}
