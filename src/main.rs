use std::error::Error;
use std::sync::Arc;

use compquad::analysis::convergence::ConvergenceStudy;
use compquad::analysis::tolerancecheck::ToleranceCheck;
use compquad::configuration::Configuration;
use compquad::manager::manager::IManager;
use compquad::output::series::Series;
use compquad::{
    Midpoint,
    ScalarIntegrand,
    ScalarIntegrand2D,
    Trapezoidal
};

const DEFAULT_CONFIG_PATH: &str = "json/config.json";

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Configuration::new();
    config.from_reader(&config_path)?;
    let check = ToleranceCheck::new(1e-14);

    let g = 9.81;
    let velocity = ScalarIntegrand::new(|t: f64| g * t);
    let distance = config.scheme("Midpoint10000")?.integrate(&velocity, 0.0, 100.0)?;
    let error = check.check(distance, 0.5 * g * 100.0 * 100.0)?;
    println!("distance after 100 s: {} (error {:e})", distance, error);

    let v = ScalarIntegrand::new(|t: f64| 3.0 * t.powi(2) * (t.powi(3)).exp());
    let computed = config.scheme("Trapezoidal2")?.integrate(&v, 0.0, 1.0)?;
    println!("int_0^1 3t^2 exp(t^3) dt, n=2: {}", computed);

    let f = ScalarIntegrand2D::new(|x: f64, y: f64| 2.0 * x + y);
    let names = config.double_scheme_manager().names();
    for name in names {
        let scheme = config.double_scheme(&name)?;
        let computed = scheme.integrate(&f, 0.0, 2.0, 2.0, 3.0)?;
        let error = check.check(computed, 9.0)?;
        println!("{} (nx={}, ny={}): {} (error {:e})", name, scheme.nx(), scheme.ny(), computed, error);
    }

    let reference = std::f64::consts::E - 1.0;
    let exp = ScalarIntegrand::new(f64::exp);
    let counts = [10, 20, 40, 80, 160];
    let mut series = Vec::new();
    for table in [
        ConvergenceStudy::new(Arc::new(Midpoint), reference).run(&exp, 0.0, 1.0, &counts)?,
        ConvergenceStudy::new(Arc::new(Trapezoidal), reference).run(&exp, 0.0, 1.0, &counts)?,
    ] {
        let orders: Vec<String> = table.observed_orders().iter().map(|p| format!("{:.4}", p)).collect();
        println!("{} observed orders: {}", table.rule(), orders.join(", "));
        series.push(Series::from(&table));
    }

    let sink = config.output_settings().series_sink();
    if let Some(path) = sink.save(&series, "convergence")? {
        println!("convergence table written to {}", path.display());
    }
    Ok(())
}
