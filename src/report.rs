//! One-shot composition of every analyzer into a single report.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{
    CareerDevelopmentAnalyzer, DemographicAnalyzer, DepartmentAge, DepartmentEducation,
    DepartmentTeamLeads, DepartmentTurnover, EducationAnalyzer, EducationSalaryCorrelation,
    EducationShare, GenderAgeDistribution, GenderImbalance, HighPotentialReport, HrStrategyAdvisor,
    PromotionTime, StrategyReport, TurnoverAnalyzer, TurnoverExtremes,
    TurnoverPerformanceRelationship,
};
use crate::config::{AnalysisConfig, StrategyConfig};
use crate::roster::{Roster, RosterSummary};

/// Demographic section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicsSection {
    /// Gender split and age histogram.
    pub gender_age_distribution: GenderAgeDistribution,
    /// Age statistics per department.
    pub average_age_by_department: Vec<DepartmentAge>,
    /// Gender balance per department.
    pub gender_imbalance: GenderImbalance,
}

/// Turnover section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverSection {
    /// Tenure threshold in years used for every figure below.
    pub tenure_threshold_years: f64,
    /// Turnover per department.
    pub department_turnover: Vec<DepartmentTurnover>,
    /// Highest and lowest departments; absent for an empty roster.
    pub extremes: Option<TurnoverExtremes>,
    /// Turnover against performance.
    pub performance_relationship: TurnoverPerformanceRelationship,
}

/// Education section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationSection {
    /// Headcount per education level.
    pub distribution: Vec<EducationShare>,
    /// Salary by education level.
    pub salary_correlation: EducationSalaryCorrelation,
    /// Higher-education share per department.
    pub higher_education_by_department: Vec<DepartmentEducation>,
}

/// Career development section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSection {
    /// Team-lead coverage per department.
    pub team_lead_distribution: Vec<DepartmentTeamLeads>,
    /// Tenure of current team leads.
    pub promotion_time: PromotionTime,
    /// High-potential selection.
    pub high_potential: HighPotentialReport,
}

/// Every analysis of a roster.
///
/// # Example
///
/// ```
/// use workforce_analytics::config::{AnalysisConfig, StrategyConfig};
/// use workforce_analytics::report::WorkforceReport;
/// use workforce_analytics::roster::RosterLoader;
///
/// let analysis = AnalysisConfig::default();
/// let roster = RosterLoader::from_json_str("[]", analysis.reference_date)?;
/// let report = WorkforceReport::generate(&roster, &analysis, &StrategyConfig::default());
///
/// assert_eq!(report.summary.total_employees, 0);
/// assert!(report.turnover.extremes.is_none());
/// # Ok::<(), workforce_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceReport {
    /// Date ages and tenures were measured against.
    pub reference_date: NaiveDate,
    /// Headline figures.
    pub summary: RosterSummary,
    /// Gender and age.
    pub demographics: DemographicsSection,
    /// Recent-hire turnover.
    pub turnover: TurnoverSection,
    /// Education and salary.
    pub education: EducationSection,
    /// Team leads and high potentials.
    pub career: CareerSection,
    /// Recommendations and economics.
    pub strategy: StrategyReport,
}

impl WorkforceReport {
    /// Runs every analyzer once over `roster`.
    ///
    /// Ages and tenures come from the roster, so its reference date wins
    /// over `analysis.reference_date`; a mismatch is logged.
    pub fn generate(roster: &Roster, analysis: &AnalysisConfig, strategy: &StrategyConfig) -> Self {
        let employees = roster.employees();

        if roster.reference_date() != analysis.reference_date {
            warn!(
                roster_date = %roster.reference_date(),
                configured_date = %analysis.reference_date,
                "Roster reference date differs from configuration; using the roster date"
            );
        }

        let demographic = DemographicAnalyzer::new(employees);
        let turnover =
            TurnoverAnalyzer::new(employees).with_tenure_threshold(analysis.tenure_threshold_years);
        let education = EducationAnalyzer::new(employees);
        let career = CareerDevelopmentAnalyzer::new(employees)
            .with_performance_threshold(analysis.high_potential_threshold)
            .with_min_tenure(analysis.min_high_potential_tenure)
            .with_list_limit(analysis.high_potential_list_limit);
        let advisor = HrStrategyAdvisor::new(turnover, career, strategy);

        let report = Self {
            reference_date: roster.reference_date(),
            summary: roster.summary(),
            demographics: DemographicsSection {
                gender_age_distribution: demographic.gender_age_distribution(),
                average_age_by_department: demographic.average_age_by_department(),
                gender_imbalance: demographic.gender_imbalance(),
            },
            turnover: TurnoverSection {
                tenure_threshold_years: turnover.tenure_threshold(),
                department_turnover: turnover.turnover_rates(turnover.tenure_threshold()),
                extremes: turnover.turnover_extremes(),
                performance_relationship: turnover.turnover_performance_relationship(),
            },
            education: EducationSection {
                distribution: education.education_distribution(),
                salary_correlation: education.education_salary_correlation(),
                higher_education_by_department: education.higher_education_by_department(),
            },
            career: CareerSection {
                team_lead_distribution: career.team_lead_distribution(),
                promotion_time: career.promotion_time(),
                high_potential: career.high_potential_employees(analysis.high_potential_threshold),
            },
            strategy: advisor.strategy_report(),
        };

        info!(
            employees = employees.len(),
            departments = report.summary.department_count,
            problem_departments = report.strategy.turnover_reduction_measures.len(),
            high_potential = report.career.high_potential.total_high_potential,
            "Generated workforce report"
        );

        report
    }

    /// Pretty-printed JSON rendering of the report.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::RecordBuilder;

    fn roster() -> Roster {
        Roster::new(
            vec![
                RecordBuilder::new("1").department("Отдел продаж").tenure(0.5).build(),
                RecordBuilder::new("2")
                    .department("Отдел продаж")
                    .tenure(3.0)
                    .team_lead(true)
                    .build(),
                RecordBuilder::new("3").department("Склад").tenure(6.0).performance(92.0).build(),
            ],
            NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
        )
    }

    #[test]
    fn test_report_covers_every_section() {
        let report = WorkforceReport::generate(
            &roster(),
            &AnalysisConfig::default(),
            &StrategyConfig::default(),
        );

        assert_eq!(report.summary.total_employees, 3);
        assert_eq!(report.demographics.gender_age_distribution.total_employees, 3);
        assert_eq!(report.turnover.department_turnover.len(), 2);
        assert!(report.turnover.extremes.is_some());
        assert_eq!(report.career.team_lead_distribution.len(), 2);
        assert_eq!(report.career.promotion_time.team_lead_count, 1);
        assert_eq!(report.career.high_potential.total_high_potential, 1);
        assert_eq!(report.strategy.turnover_reduction_measures.len(), 1);
        assert_eq!(report.strategy.high_potential_program.participant_count, 1);
        assert_eq!(report.strategy.strategic_recommendations.len(), 6);
    }

    #[test]
    fn test_configured_thresholds_are_applied() {
        let analysis = AnalysisConfig {
            tenure_threshold_years: 0.25,
            high_potential_threshold: 95.0,
            ..AnalysisConfig::default()
        };
        let report = WorkforceReport::generate(&roster(), &analysis, &StrategyConfig::default());

        assert_eq!(report.turnover.tenure_threshold_years, 0.25);
        assert!(report.turnover.department_turnover.iter().all(|d| d.short_tenure_count == 0));
        assert_eq!(report.career.high_potential.total_high_potential, 0);
        assert!(report.strategy.turnover_reduction_measures.is_empty());
        assert_eq!(report.strategy.economic_impact.return_on_investment, None);
    }

    #[test]
    fn test_roster_reference_date_wins_over_configuration() {
        let analysis = AnalysisConfig {
            reference_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ..AnalysisConfig::default()
        };
        let report = WorkforceReport::generate(&roster(), &analysis, &StrategyConfig::default());
        let matching = WorkforceReport::generate(
            &roster(),
            &AnalysisConfig::default(),
            &StrategyConfig::default(),
        );

        assert_eq!(report.reference_date, NaiveDate::from_ymd_opt(2025, 10, 5).unwrap());
        assert_eq!(report.summary, matching.summary);
        assert_eq!(report.turnover, matching.turnover);
    }

    #[test]
    fn test_report_is_deterministic() {
        let roster = roster();
        let analysis = AnalysisConfig::default();
        let strategy = StrategyConfig::default();

        let first = WorkforceReport::generate(&roster, &analysis, &strategy);
        let second = WorkforceReport::generate(&roster, &analysis, &strategy);

        assert_eq!(first, second);
        assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
    }
}
