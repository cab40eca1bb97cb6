use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::quadrature::integrationscheme::{
    DoubleIntegrationScheme,
    IntegrationScheme
};
use crate::math::quadrature::integrationschememanager::{
    DoubleIntegrationSchemeManager,
    IntegrationSchemeManager
};
use crate::output::seriessink::SeriesSink;


fn default_output_path() -> String {
    "./output/".to_owned()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_path")]
    path: String,
    #[serde(default = "default_true")]
    add_time: bool,
    #[serde(default = "default_true")]
    enabled: bool,
    #[serde(default = "default_true")]
    pretty: bool
}

impl Default for OutputSettings {
    fn default() -> OutputSettings {
        OutputSettings {
            path: default_output_path(),
            add_time: true,
            enabled: true,
            pretty: true
        }
    }
}

impl OutputSettings {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn series_sink(&self) -> SeriesSink {
        SeriesSink::new(&self.path)
            .with_add_time(self.add_time)
            .with_enabled(self.enabled)
            .with_pretty(self.pretty)
    }
}


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    scheme: Vec<serde_json::Value>,
    #[serde(default)]
    double_scheme: Vec<serde_json::Value>,
    #[serde(default)]
    output: OutputSettings
}

pub struct Configuration {
    scheme_manager_cell: RefCell<Manager<Arc<IntegrationScheme>>>,
    double_scheme_manager_cell: RefCell<Manager<Arc<DoubleIntegrationScheme>>>,
    output_settings_cell: RefCell<OutputSettings>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            scheme_manager_cell: RefCell::new(IntegrationSchemeManager::new()),
            double_scheme_manager_cell: RefCell::new(DoubleIntegrationSchemeManager::new()),
            output_settings_cell: RefCell::new(OutputSettings::default())
        }
    }

    pub fn scheme_manager(&self) -> RefMut<'_, Manager<Arc<IntegrationScheme>>> {
        self.scheme_manager_cell.borrow_mut()
    }

    pub fn double_scheme_manager(&self) -> RefMut<'_, Manager<Arc<DoubleIntegrationScheme>>> {
        self.double_scheme_manager_cell.borrow_mut()
    }

    pub fn output_settings(&self) -> OutputSettings {
        self.output_settings_cell.borrow().clone()
    }

    pub fn scheme(&self, name: &str) -> Result<Arc<IntegrationScheme>, ManagerError> {
        self.scheme_manager().get(name)
    }

    pub fn double_scheme(&self, name: &str) -> Result<Arc<DoubleIntegrationScheme>, ManagerError> {
        self.double_scheme_manager().get(name)
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader).map_err(ManagerError::JsonParseError)?;
        self.load(json_prop)?;
        log::info!("configuration loaded from {}", file_path);
        Ok(())
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json).map_err(ManagerError::JsonParseError)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.scheme_manager().insert_obj_from_json_vec(&json_prop.scheme)?;
        self.double_scheme_manager().insert_obj_from_json_vec(&json_prop.double_scheme)?;
        *self.output_settings_cell.borrow_mut() = json_prop.output;
        log::info!(
            "{} integration schemes, {} double integration schemes",
            self.scheme_manager().len(),
            self.double_scheme_manager().len()
        );
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
