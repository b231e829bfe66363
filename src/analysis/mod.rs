//! Analyzers over a read-only employee collection.
//!
//! Each analyzer borrows the records and computes plain, serializable
//! results: demographics, turnover, education and salary, and career
//! development. The strategy advisor builds on the turnover and career
//! analyzers through the [`TurnoverSource`] and [`HighPotentialSource`]
//! traits.

mod career;
mod demographic;
mod education;
mod stats;
mod strategy;
mod turnover;

pub use career::{
    CareerDevelopmentAnalyzer, DEFAULT_HIGH_POTENTIAL_LIMIT, DEFAULT_MIN_HIGH_POTENTIAL_TENURE,
    DepartmentHighPotential, DepartmentTeamLeads, HighPotentialEmployee, HighPotentialReport,
    PromotionTime, ReadinessBand, TenureDistribution, promotion_readiness_score,
};
pub use demographic::{
    AgeBucket, BALANCED_LOWER_BOUND, DOMINANCE_THRESHOLD, DemographicAnalyzer, DepartmentAge,
    DepartmentGenderBalance, GenderAgeDistribution, GenderBalanceStatus, GenderCounts,
    GenderImbalance, GenderImbalanceSummary, GenderPercentages,
};
pub use education::{
    BASELINE_LEVEL, DepartmentEducation, EducationAnalyzer, EducationRoi, EducationSalary,
    EducationSalaryCorrelation, EducationShare, EducationTier, FRAGILE_CATEGORY_COUNT,
    MONTHS_PER_YEAR, SalaryPremium, interpret_education_correlation,
};
pub use stats::{
    group_by, group_by_department, mean, mean_decimal, median_decimal, pearson, percentage,
    round_to,
};
pub use strategy::{
    AnalysisWarning, DepartmentEconomics, EconomicEffect, ExpectedOutcomes, HighPotentialProgram,
    HighPotentialSource, HrStrategyAdvisor, IMMEDIATE_ACTIONS, LONG_TERM_INITIATIVES,
    MEDIUM_TERM_STRATEGIES, ProgramBudget, ProgramPhase, RetentionPlan, STRATEGIC_RECOMMENDATIONS,
    SelectionCriteria, StrategyReport, TurnoverSource,
};
pub use turnover::{
    DepartmentQuadrants, DepartmentTurnover, EXTREME_LIST_LEN, RankedRate, TurnoverAnalyzer,
    TurnoverDataPoint, TurnoverExtreme, TurnoverExtremes, TurnoverPerformanceRelationship,
    TurnoverQuadrant, interpret_turnover_correlation,
};
