use std::sync::Arc;

use approx::assert_abs_diff_eq;

use compquad::analysis::tolerancecheck::ToleranceCheck;
use compquad::{
    midpoint,
    midpoint_double,
    midpoint_vector,
    trapezoidal,
    DoubleIntegral,
    FallibleIntegrand,
    Midpoint,
    QuadratureError,
    QuadratureRule,
    ScalarIntegrand2D,
    Trapezoidal
};

const TOL: f64 = 1e-14;

fn assert_close(computed: f64, expected: f64) {
    if let Err(error) = ToleranceCheck::new(TOL).check(computed, expected) {
        panic!("{}", error);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Regression anchors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trapezoidal_one_exact_result() {
    let v = |t: f64| 3.0 * t.powi(2) * (t.powi(3)).exp();
    assert_close(trapezoidal(v, 0.0, 1.0, 2).unwrap(), 2.463642041244344);
}

#[test]
fn midpoint_vector_falling_body() {
    let a = 9.81;
    let x_t = |t: f64| 0.5 * a * t.powi(2);
    let f = |ts: &[f64]| -> Vec<f64> { ts.iter().map(|t| a * t).collect() };
    assert_close(midpoint_vector(f, 0.0, 100.0, 10000).unwrap(), x_t(100.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Exactness for linear integrands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trapezoidal_linear() {
    let f = |x: f64| 6.0 * x - 4.0;
    let antiderivative = |x: f64| 3.0 * x.powi(2) - 4.0 * x;
    let (a, b) = (1.2, 4.4);
    let expected = antiderivative(b) - antiderivative(a);
    for n in [1, 2, 3, 7, 20, 21] {
        assert_close(trapezoidal(f, a, b, n).unwrap(), expected);
    }
}

#[test]
fn midpoint_linear() {
    let f = |x: f64| 6.0 * x - 4.0;
    let antiderivative = |x: f64| 3.0 * x.powi(2) - 4.0 * x;
    let (a, b) = (1.2, 4.4);
    let expected = antiderivative(b) - antiderivative(a);
    for n in [2, 3, 5, 7, 20, 21, 100] {
        assert_close(midpoint(f, a, b, n).unwrap(), expected);
    }
}

#[test]
fn reversed_bounds_flip_sign() {
    let f = |x: f64| 6.0 * x - 4.0;
    for n in [2, 3, 7, 21] {
        let forward = midpoint(f, 1.2, 4.4, n).unwrap();
        let backward = midpoint(f, 4.4, 1.2, n).unwrap();
        assert_abs_diff_eq!(forward, -backward, epsilon = TOL);

        let forward = trapezoidal(f, 1.2, 4.4, n).unwrap();
        let backward = trapezoidal(f, 4.4, 1.2, n).unwrap();
        assert_abs_diff_eq!(forward, -backward, epsilon = TOL);
    }
}

#[test]
fn single_subinterval_accepted() {
    let f = |x: f64| 3.0 * x + 1.0;
    assert_eq!(midpoint(f, 0.0, 2.0, 1).unwrap(), 8.0);
    assert_eq!(trapezoidal(f, 0.0, 2.0, 1).unwrap(), 8.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Residuals for non-linear integrands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn exponential_residual_matches_leading_error_term() {
    // 誤差主項：midpoint -h²/24·(f'(b) - f'(a))，trapezoidal +h²/12·(f'(b) - f'(a))
    let exact = std::f64::consts::E - 1.0;
    let h: f64 = 0.1;
    let derivative_jump = std::f64::consts::E - 1.0;

    let midpoint_residual = midpoint(f64::exp, 0.0, 1.0, 10).unwrap() - exact;
    assert!(midpoint_residual < 0.0);
    assert_abs_diff_eq!(midpoint_residual, -h.powi(2) / 24.0 * derivative_jump, epsilon = 1e-6);

    let trapezoidal_residual = trapezoidal(f64::exp, 0.0, 1.0, 10).unwrap() - exact;
    assert!(trapezoidal_residual > 0.0);
    assert_abs_diff_eq!(trapezoidal_residual, h.powi(2) / 12.0 * derivative_jump, epsilon = 1e-6);
}

// ─────────────────────────────────────────────────────────────────────────────
// Double integral
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn midpoint_double_linear() {
    fn f(x: f64, y: f64) -> f64 {
        2.0 * x + y
    }
    // ∫_2^3 ∫_0^2 (2x + y) dx dy = ∫_2^3 (4 + 2y) dy = 9
    let expected = 9.0;
    for (nx, ny) in [(3, 5), (4, 4), (5, 3)] {
        assert_close(midpoint_double(f, 0.0, 2.0, 2.0, 3.0, nx, ny).unwrap(), expected);
    }
}

#[test]
fn bilinear_is_exact_for_any_nesting() {
    let f = ScalarIntegrand2D::new(|x: f64, y: f64| x * y + x + 2.0 * y + 1.0);
    // ∫∫ xy = 2·(5/2), ∫∫ x = 2, ∫∫ 2y = 2·5, ∫∫ 1 = 2
    let expected = 19.0;
    let rules: [Arc<dyn QuadratureRule>; 2] = [Arc::new(Midpoint), Arc::new(Trapezoidal)];
    for outer in rules.iter() {
        for inner in rules.iter() {
            let integral = DoubleIntegral::new(outer.clone(), inner.clone());
            for (nx, ny) in [(3, 5), (4, 4), (5, 3)] {
                let computed = integral.integrate(&f, 0.0, 2.0, 2.0, 3.0, nx, ny).unwrap();
                assert_abs_diff_eq!(computed, expected, epsilon = 1e-13);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Determinism and errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn repeated_calls_are_bit_identical() {
    let f = |x: f64| x.sin() * x.exp();
    let first = (
        midpoint(f, 0.0, 3.0, 37).unwrap(),
        trapezoidal(f, 0.0, 3.0, 37).unwrap(),
        midpoint_double(|x, y| f(x) * y, 0.0, 1.0, 0.0, 2.0, 7, 9).unwrap(),
    );
    let second = (
        midpoint(f, 0.0, 3.0, 37).unwrap(),
        trapezoidal(f, 0.0, 3.0, 37).unwrap(),
        midpoint_double(|x, y| f(x) * y, 0.0, 1.0, 0.0, 2.0, 7, 9).unwrap(),
    );
    assert_eq!(first.0.to_bits(), second.0.to_bits());
    assert_eq!(first.1.to_bits(), second.1.to_bits());
    assert_eq!(first.2.to_bits(), second.2.to_bits());
}

#[test]
fn zero_subintervals_is_invalid_argument() {
    assert!(matches!(midpoint(|x| x, 0.0, 1.0, 0), Err(QuadratureError::InvalidArgument { .. })));
    assert!(matches!(trapezoidal(|x| x, 0.0, 1.0, 0), Err(QuadratureError::InvalidArgument { .. })));
    assert!(matches!(
        midpoint_double(|x, y| x + y, 0.0, 1.0, 0.0, 1.0, 0, 3),
        Err(QuadratureError::InvalidArgument { parameter: "nx", .. })
    ));
}

#[derive(Debug)]
struct DomainError(f64);

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "log of negative number {}", self.0)
    }
}

impl std::error::Error for DomainError {}

#[test]
fn integrand_error_propagates_unchanged() {
    let log = FallibleIntegrand::new(|x: f64| {
        if x < 0.0 { Err(DomainError(x)) } else { Ok(x.ln()) }
    });
    let error = Trapezoidal.integrate(&log, -1.0, 1.0, 4).unwrap_err();
    match error {
        QuadratureError::IntegrandEvaluation(source) => {
            let domain_error = source.downcast_ref::<DomainError>().unwrap();
            assert_eq!(domain_error.0, -1.0);
        }
        other => panic!("unexpected error: {}", other),
    }
}
