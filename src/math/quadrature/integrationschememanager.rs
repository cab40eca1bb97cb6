use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::quadrature::doubleintegral::DoubleIntegral;
use crate::math::quadrature::integrationscheme::{
    DoubleIntegrationScheme,
    IntegrationScheme
};
use crate::math::quadrature::quadraturerule::QuadratureRuleType;

#[derive(Deserialize)]
struct IntegrationSchemeJsonProp {
    rule: QuadratureRuleType,
    subintervals: usize
}

fn get_integration_scheme_from_json(name: &str, json_value: serde_json::Value) -> Result<Arc<IntegrationScheme>, ManagerError> {
    let json_prop: IntegrationSchemeJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let scheme = IntegrationScheme::new(json_prop.rule.rule(), json_prop.subintervals)
        .map_err(|error| ManagerError::InvalidSchemeError(name.to_owned(), error))?;
    Ok(Arc::new(scheme))
}

fn default_rule() -> QuadratureRuleType {
    QuadratureRuleType::Midpoint
}

#[derive(Deserialize)]
struct DoubleIntegrationSchemeJsonProp {
    #[serde(default = "default_rule")]
    outer: QuadratureRuleType,
    #[serde(default = "default_rule")]
    inner: QuadratureRuleType,
    nx: usize,
    ny: usize
}

fn get_double_integration_scheme_from_json(name: &str, json_value: serde_json::Value) -> Result<Arc<DoubleIntegrationScheme>, ManagerError> {
    let json_prop: DoubleIntegrationSchemeJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let integral = DoubleIntegral::new(json_prop.outer.rule(), json_prop.inner.rule());
    let scheme = DoubleIntegrationScheme::new(integral, json_prop.nx, json_prop.ny)
        .map_err(|error| ManagerError::InvalidSchemeError(name.to_owned(), error))?;
    Ok(Arc::new(scheme))
}

pub struct IntegrationSchemeManager;

impl IntegrationSchemeManager {
    pub fn new() -> Manager<Arc<IntegrationScheme>> {
        Manager::new(get_integration_scheme_from_json)
    }
}

pub struct DoubleIntegrationSchemeManager;

impl DoubleIntegrationSchemeManager {
    pub fn new() -> Manager<Arc<DoubleIntegrationScheme>> {
        Manager::new(get_double_integration_scheme_from_json)
    }
}
