use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::drill::drill_names;
use crate::domain::model::Money;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_known_names, validate_non_empty_string, validate_non_negative_amount, Validate,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: Option<RunConfig>,
    pub parameters: Option<ParametersConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub drills: Option<Vec<String>>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersConfig {
    pub city: Option<String>,
    pub numbers: Option<Vec<i32>>,
    pub array_limit: Option<i32>,
    pub spend_threshold: Option<Money>,
    pub order_threshold: Option<Money>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values, leaving
    /// unset placeholders untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(run) = &self.run {
            if let Some(drills) = &run.drills {
                validate_known_names("run.drills", drills, &drill_names())?;
            }
        }
        if let Some(parameters) = &self.parameters {
            if let Some(city) = &parameters.city {
                validate_non_empty_string("parameters.city", city)?;
            }
            if let Some(threshold) = parameters.spend_threshold {
                validate_non_negative_amount("parameters.spend_threshold", threshold)?;
            }
            if let Some(threshold) = parameters.order_threshold {
                validate_non_negative_amount("parameters.order_threshold", threshold)?;
            }
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
