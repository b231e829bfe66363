//! Configuration for the analyzers and the strategy advisor.
//!
//! Parameters can be loaded from YAML files or taken from their defaults.
//!
//! # Example
//!
//! ```no_run
//! use workforce_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Short tenure below {} years", config.analysis().tenure_threshold_years);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalysisConfig, DepartmentCategory, DepartmentKeywordTable, KeywordRule, StrategyConfig,
    TurnoverCostModel, default_reference_date,
};
