//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analysis and
//! strategy configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AnalyticsError, AnalyticsResult};

use super::types::{AnalysisConfig, StrategyConfig};

/// Loads and provides access to analysis configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── analysis.yaml   # Reference date and selection thresholds
/// └── strategy.yaml   # Cost model, program budget, department keywords
/// ```
///
/// Keys missing from a file take their default values.
///
/// # Example
///
/// ```no_run
/// use workforce_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Reference date: {}", loader.analysis().reference_date);
/// # Ok::<(), workforce_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    analysis: AnalysisConfig,
    strategy: StrategyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` when either file is missing and
    /// `ConfigParseError` when either file is not valid YAML for its type.
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let path = path.as_ref();

        let analysis = Self::load_yaml::<AnalysisConfig>(&path.join("analysis.yaml"))?;
        let strategy = Self::load_yaml::<StrategyConfig>(&path.join("strategy.yaml"))?;

        info!(
            path = %path.display(),
            reference_date = %analysis.reference_date,
            keyword_rules = strategy.department_keywords.rules().len(),
            "Loaded analysis configuration"
        );

        Ok(Self { analysis, strategy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AnalyticsResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AnalyticsError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the analyzer parameters.
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Returns the strategy parameters.
    pub fn strategy(&self) -> &StrategyConfig {
        &self.strategy
    }

    /// Splits the loader into its two configuration sections.
    pub fn into_parts(self) -> (AnalysisConfig, StrategyConfig) {
        (self.analysis, self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepartmentCategory;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_default_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.analysis().reference_date,
            NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
        );
        assert_eq!(loader.analysis().tenure_threshold_years, 2.0);
        assert_eq!(loader.analysis().high_potential_list_limit, 20);
    }

    #[test]
    fn test_default_files_match_builtin_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.analysis(), &AnalysisConfig::default());
        assert_eq!(loader.strategy(), &StrategyConfig::default());
    }

    #[test]
    fn test_strategy_cost_model_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let strategy = loader.strategy();

        assert_eq!(strategy.cost_model.cost_per_turnover(), Decimal::new(220_000, 0));
        assert_eq!(strategy.investment_ratio, Decimal::new(15, 2));
        assert_eq!(strategy.program_budget_per_participant, Decimal::new(150_000, 0));
        assert_eq!(
            strategy.department_keywords.classify("Отдел продаж"),
            DepartmentCategory::Sales
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(AnalyticsError::ConfigNotFound { path }) => {
                assert!(path.contains("analysis.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("workforce-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("analysis.yaml"), "reference_date: not-a-date\n").unwrap();
        fs::write(dir.join("strategy.yaml"), "{}\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(AnalyticsError::ConfigParseError { path, .. }) => {
                assert!(path.contains("analysis.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
