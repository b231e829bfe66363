//! Configuration types for workforce analysis.
//!
//! Every type deserializes from YAML and has a [`Default`] equal to the
//! fixed parameters the analyzers were designed around, so a missing key in
//! a configuration file falls back to the standard value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_HIGH_PERFORMER_THRESHOLD, DEFAULT_SHORT_TENURE_THRESHOLD};

/// Reference date used for ages and tenures when none is configured.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 5).unwrap_or_default()
}

/// Parameters of the descriptive analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The "today" against which ages and tenures are measured.
    pub reference_date: NaiveDate,
    /// Tenure in years below which an employee counts as short-tenure.
    pub tenure_threshold_years: f64,
    /// Performance score at or above which a non-lead is high-potential.
    pub high_potential_threshold: f64,
    /// Minimum tenure in years for high-potential selection.
    pub min_high_potential_tenure: f64,
    /// Length of the flat high-potential list.
    pub high_potential_list_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            tenure_threshold_years: DEFAULT_SHORT_TENURE_THRESHOLD,
            high_potential_threshold: DEFAULT_HIGH_PERFORMER_THRESHOLD,
            min_high_potential_tenure: 1.0,
            high_potential_list_limit: 20,
        }
    }
}

/// Per-incident cost of losing an employee, split into six components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnoverCostModel {
    /// Agency fees and advertising.
    pub recruitment: Decimal,
    /// Orientation and equipment.
    pub onboarding: Decimal,
    /// Formal training programs.
    pub training: Decimal,
    /// Ramp-up time of the replacement.
    pub productivity_loss: Decimal,
    /// Institutional knowledge lost with the leaver.
    pub knowledge_loss: Decimal,
    /// Manager time spent on interviews and onboarding.
    pub manager_time: Decimal,
}

impl TurnoverCostModel {
    /// Sum of all components.
    pub fn cost_per_turnover(&self) -> Decimal {
        self.recruitment
            + self.onboarding
            + self.training
            + self.productivity_loss
            + self.knowledge_loss
            + self.manager_time
    }
}

impl Default for TurnoverCostModel {
    fn default() -> Self {
        Self {
            recruitment: Decimal::new(50_000, 0),
            onboarding: Decimal::new(30_000, 0),
            training: Decimal::new(40_000, 0),
            productivity_loss: Decimal::new(70_000, 0),
            knowledge_loss: Decimal::new(10_000, 0),
            manager_time: Decimal::new(20_000, 0),
        }
    }
}

/// Department family used to pick targeted retention recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentCategory {
    /// Development and technical departments.
    Engineering,
    /// Sales and commercial departments.
    Sales,
    /// Production and operations.
    Production,
    /// Anything not matched by a keyword rule.
    General,
}

impl DepartmentCategory {
    /// Retention recommendations specific to this kind of department.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            DepartmentCategory::Engineering => &[
                "Provide latest tools and technologies",
                "Offer technical certification programs",
                "Create innovation time for personal projects",
                "Implement flexible remote work policies",
            ],
            DepartmentCategory::Sales => &[
                "Review and optimize commission structures",
                "Provide advanced sales training",
                "Implement customer success metrics",
                "Create sales mentorship program",
            ],
            DepartmentCategory::Production => &[
                "Improve safety and working conditions",
                "Implement performance-based bonuses",
                "Provide cross-training opportunities",
                "Create career progression in operations",
            ],
            DepartmentCategory::General => &[
                "Conduct departmental satisfaction survey",
                "Review workload distribution",
                "Improve communication channels",
                "Provide departmental training budget",
            ],
        }
    }
}

/// Maps a department-name substring to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Substring searched for in the lower-cased department name.
    pub keyword: String,
    /// Category assigned on a match.
    pub category: DepartmentCategory,
}

impl KeywordRule {
    /// Creates a rule.
    pub fn new(keyword: impl Into<String>, category: DepartmentCategory) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }
}

/// Ordered keyword rules; the first matching rule wins.
///
/// # Example
///
/// ```
/// use workforce_analytics::config::{DepartmentCategory, DepartmentKeywordTable};
///
/// let table = DepartmentKeywordTable::default();
/// assert_eq!(table.classify("Отдел разработки"), DepartmentCategory::Engineering);
/// assert_eq!(table.classify("Commercial Sales"), DepartmentCategory::Sales);
/// assert_eq!(table.classify("Legal"), DepartmentCategory::General);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentKeywordTable {
    rules: Vec<KeywordRule>,
}

impl DepartmentKeywordTable {
    /// Creates a table from rules in priority order.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Category of a department, matched case-insensitively.
    pub fn classify(&self, department: &str) -> DepartmentCategory {
        let department = department.to_lowercase();
        self.rules
            .iter()
            .find(|rule| department.contains(&rule.keyword.to_lowercase()))
            .map(|rule| rule.category)
            .unwrap_or(DepartmentCategory::General)
    }
}

impl Default for DepartmentKeywordTable {
    fn default() -> Self {
        use DepartmentCategory::{Engineering, Production, Sales};

        let rules = [
            ("разработк", Engineering),
            ("технич", Engineering),
            ("develop", Engineering),
            ("engineer", Engineering),
            ("technical", Engineering),
            ("продаж", Sales),
            ("коммерч", Sales),
            ("sales", Sales),
            ("commercial", Sales),
            ("производств", Production),
            ("production", Production),
            ("manufactur", Production),
        ]
        .into_iter()
        .map(|(keyword, category)| KeywordRule::new(keyword, category))
        .collect();

        Self { rules }
    }
}

/// Parameters of the strategy advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Turnover rate in percent above which a department needs intervention.
    pub problem_turnover_threshold: f64,
    /// Turnover reduction in percent used by the full report.
    pub default_reduction_percent: Decimal,
    /// Required investment as a share of potential savings.
    pub investment_ratio: Decimal,
    /// Per-incident turnover cost.
    pub cost_model: TurnoverCostModel,
    /// Development program budget per participant.
    pub program_budget_per_participant: Decimal,
    /// Department-name keyword rules.
    pub department_keywords: DepartmentKeywordTable,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            problem_turnover_threshold: 25.0,
            default_reduction_percent: Decimal::new(10, 0),
            investment_ratio: Decimal::new(15, 2),
            cost_model: TurnoverCostModel::default(),
            program_budget_per_participant: Decimal::new(150_000, 0),
            department_keywords: DepartmentKeywordTable::default(),
        }
    }
}
