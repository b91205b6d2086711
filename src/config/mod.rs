pub mod toml_config;

use clap::Parser;

use crate::config::toml_config::TomlConfig;
use crate::core::drill::{drill_names, DrillParams};
use crate::domain::model::Money;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_known_names, validate_non_empty_string, validate_non_negative_amount, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "query-drills")]
#[command(about = "Query pattern drills over a small in-memory dataset")]
pub struct CliConfig {
    #[arg(long, value_delimiter = ',', help = "Drills to run; runs all when empty")]
    pub drills: Vec<String>,

    #[arg(long, help = "List available drills and exit")]
    pub list: bool,

    #[arg(long, help = "Render each result item as one JSON object per line")]
    pub json: bool,

    #[arg(long, default_value = "London")]
    pub city: String,

    #[arg(long, value_delimiter = ',', help = "Sample number array; built-in when empty")]
    pub numbers: Vec<i32>,

    #[arg(long, default_value = "5")]
    pub array_limit: i32,

    #[arg(long, default_value = "4107.60")]
    pub spend_threshold: Money,

    #[arg(long, default_value = "1000.00")]
    pub order_threshold: Money,

    #[arg(long, help = "Load the dataset from a JSON file instead of the embedded sample")]
    pub dataset: Option<String>,

    #[arg(long, help = "Load run settings from a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies config-file settings. File values take precedence over flag
    /// values for the fields the file sets.
    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if let Some(run) = &file.run {
            if let Some(drills) = &run.drills {
                self.drills = drills.clone();
            }
            if let Some(json) = run.json {
                self.json = json;
            }
        }
        if let Some(parameters) = &file.parameters {
            if let Some(city) = &parameters.city {
                self.city = city.clone();
            }
            if let Some(numbers) = &parameters.numbers {
                self.numbers = numbers.clone();
            }
            if let Some(limit) = parameters.array_limit {
                self.array_limit = limit;
            }
            if let Some(threshold) = parameters.spend_threshold {
                self.spend_threshold = threshold;
            }
            if let Some(threshold) = parameters.order_threshold {
                self.order_threshold = threshold;
            }
        }
    }

    pub fn drill_params(&self) -> DrillParams {
        let defaults = DrillParams::default();
        DrillParams {
            numbers: if self.numbers.is_empty() {
                defaults.numbers
            } else {
                self.numbers.clone()
            },
            array_limit: self.array_limit,
            city: self.city.clone(),
            spend_threshold: self.spend_threshold,
            order_threshold: self.order_threshold,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("city", &self.city)?;
        validate_non_negative_amount("spend_threshold", self.spend_threshold)?;
        validate_non_negative_amount("order_threshold", self.order_threshold)?;
        validate_known_names("drills", &self.drills, &drill_names())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["query-drills"])
    }

    #[test]
    fn test_defaults_validate() {
        let config = base_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.city, "London");
        assert_eq!(config.spend_threshold, Money::from_cents(410_760));
    }

    #[test]
    fn test_unknown_drill_name_fails_validation() {
        let config = CliConfig::parse_from(["query-drills", "--drills", "in-stock,bogus"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_fails_validation() {
        let config = CliConfig::parse_from(["query-drills", "--spend-threshold=-1.00"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_drill_params_use_built_in_numbers_when_empty() {
        let config = base_config();
        let params = config.drill_params();
        assert_eq!(params.numbers, vec![5, 4, 1, 3, 9, 8, 6, 7, 2, 0]);

        let config = CliConfig::parse_from(["query-drills", "--numbers", "9,1,7"]);
        assert_eq!(config.drill_params().numbers, vec![9, 1, 7]);
    }

    #[test]
    fn test_merge_toml_overrides_set_fields_only() {
        let mut config = base_config();
        let file = TomlConfig::from_toml_str(
            r#"
[run]
drills = ["city-filter"]

[parameters]
city = "Paris"
"#,
        )
        .unwrap();

        config.merge_toml(&file);
        assert_eq!(config.drills, vec!["city-filter"]);
        assert_eq!(config.city, "Paris");
        // Fields the file does not set keep their flag values.
        assert_eq!(config.spend_threshold, Money::from_cents(410_760));
        assert!(!config.json);
    }
}
