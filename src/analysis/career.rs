//! Career development analysis.
//!
//! Team-lead coverage per department, how long current leads had been with
//! the company, and which non-lead high performers are ready to step up.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{
    DEFAULT_HIGH_PERFORMER_THRESHOLD, EducationLevel, EmployeeRecord, education_points,
};

use super::stats::{group_by_department, mean, percentage, round_to};
use super::strategy::HighPotentialSource;

/// Minimum tenure in years for high-potential selection.
pub const DEFAULT_MIN_HIGH_POTENTIAL_TENURE: f64 = 1.0;

/// Number of employees kept in the flat high-potential list.
pub const DEFAULT_HIGH_POTENTIAL_LIMIT: usize = 20;

/// Team-lead coverage of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTeamLeads {
    /// Department name.
    pub department: String,
    /// Department headcount.
    pub total_employees: usize,
    /// Number of team leads.
    pub team_lead_count: usize,
    /// Team leads as a share of headcount, one decimal.
    pub team_lead_ratio: f64,
    /// Employees per team lead, one decimal; a department without leads
    /// reports its full headcount.
    pub team_lead_density: f64,
}

/// Tenure histogram of current team leads.
///
/// Each bin includes its upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TenureDistribution {
    /// Up to and including 2 years.
    #[serde(rename = "0-2 years")]
    pub up_to_2_years: usize,
    /// Over 2, up to and including 5 years.
    #[serde(rename = "2-5 years")]
    pub from_2_to_5_years: usize,
    /// Over 5, up to and including 10 years.
    #[serde(rename = "5-10 years")]
    pub from_5_to_10_years: usize,
    /// Over 10 years.
    #[serde(rename = "10+ years")]
    pub over_10_years: usize,
}

impl TenureDistribution {
    fn add(&mut self, tenure: f64) {
        if tenure <= 2.0 {
            self.up_to_2_years += 1;
        } else if tenure <= 5.0 {
            self.from_2_to_5_years += 1;
        } else if tenure <= 10.0 {
            self.from_5_to_10_years += 1;
        } else {
            self.over_10_years += 1;
        }
    }

    /// Sum of all bins.
    pub fn total(&self) -> usize {
        self.up_to_2_years + self.from_2_to_5_years + self.from_5_to_10_years + self.over_10_years
    }
}

/// Tenure and experience of current team leads.
///
/// All statistics are zero when there are no team leads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PromotionTime {
    /// Number of team leads.
    pub team_lead_count: usize,
    /// Mean tenure, one decimal.
    pub average_tenure_to_promotion: f64,
    /// Mean professional experience, one decimal.
    pub average_experience_at_promotion: f64,
    /// Shortest tenure, one decimal.
    pub min_tenure: f64,
    /// Longest tenure, one decimal.
    pub max_tenure: f64,
    /// Tenure histogram.
    pub tenure_distribution: TenureDistribution,
}

/// Readiness band derived from the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadinessBand {
    /// Score of 80 or more.
    #[serde(rename = "Ready for promotion")]
    ReadyForPromotion,
    /// Score of 60 to 79.
    #[serde(rename = "Developing - 6-12 months")]
    Developing,
    /// Score below 60.
    #[serde(rename = "Needs development")]
    NeedsDevelopment,
}

impl ReadinessBand {
    /// Maps a score to its band.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ReadinessBand::ReadyForPromotion
        } else if score >= 60 {
            ReadinessBand::Developing
        } else {
            ReadinessBand::NeedsDevelopment
        }
    }
}

/// Promotion-readiness score out of 100.
///
/// Performance contributes up to 40, tenure up to 30, experience up to 20
/// and education up to 10. The minimum attainable score is 19.
///
/// # Example
///
/// ```
/// use workforce_analytics::analysis::promotion_readiness_score;
/// use workforce_analytics::models::EducationLevel;
///
/// let score = promotion_readiness_score(92.0, 3.5, 12.0, Some(EducationLevel::Master));
/// assert_eq!(score, 40 + 30 + 20 + 8);
/// ```
pub fn promotion_readiness_score(
    performance: f64,
    tenure_years: f64,
    experience_years: f64,
    education: Option<EducationLevel>,
) -> u32 {
    let performance_points = if performance >= 90.0 {
        40
    } else if performance >= 80.0 {
        30
    } else if performance >= 70.0 {
        20
    } else {
        10
    };

    let tenure_points = if tenure_years >= 3.0 {
        30
    } else if tenure_years >= 2.0 {
        20
    } else if tenure_years >= 1.0 {
        10
    } else {
        0
    };

    let experience_points = if experience_years >= 10.0 {
        20
    } else if experience_years >= 5.0 {
        15
    } else if experience_years >= 2.0 {
        10
    } else {
        5
    };

    performance_points + tenure_points + experience_points + education_points(education)
}

/// A non-lead high performer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPotentialEmployee {
    /// Employee identifier.
    pub employee_id: String,
    /// "First Last".
    pub name: String,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Performance score.
    pub performance_score: f64,
    /// Tenure in years, one decimal.
    pub tenure_years: f64,
    /// Professional experience in years.
    pub experience_years: f64,
    /// Education label as written in the source records.
    pub education: String,
    /// Monthly salary.
    pub salary: Decimal,
    /// Readiness score out of 100.
    pub readiness_score: u32,
    /// Readiness band.
    pub promotion_readiness: ReadinessBand,
}

/// High-potential employees of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentHighPotential {
    /// Department name.
    pub department: String,
    /// Number of high-potential employees.
    pub count: usize,
    /// All of them, in ranking order.
    pub employees: Vec<HighPotentialEmployee>,
}

/// High-potential selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPotentialReport {
    /// Performance threshold used for selection.
    pub performance_threshold: f64,
    /// Minimum tenure in years used for selection.
    pub minimum_tenure: f64,
    /// Number of employees selected.
    pub total_high_potential: usize,
    /// Top of the ranking, truncated to the configured limit.
    pub high_potential_employees: Vec<HighPotentialEmployee>,
    /// Every selected employee grouped by department, untruncated.
    pub by_department: Vec<DepartmentHighPotential>,
}

/// Computes career-development metrics over a read-only roster.
#[derive(Debug, Clone, Copy)]
pub struct CareerDevelopmentAnalyzer<'a> {
    employees: &'a [EmployeeRecord],
    performance_threshold: f64,
    min_tenure: f64,
    list_limit: usize,
}

impl<'a> CareerDevelopmentAnalyzer<'a> {
    /// Creates an analyzer with the default selection parameters.
    pub fn new(employees: &'a [EmployeeRecord]) -> Self {
        Self {
            employees,
            performance_threshold: DEFAULT_HIGH_PERFORMER_THRESHOLD,
            min_tenure: DEFAULT_MIN_HIGH_POTENTIAL_TENURE,
            list_limit: DEFAULT_HIGH_POTENTIAL_LIMIT,
        }
    }

    /// Threshold used when the analyzer answers strategy queries.
    pub fn with_performance_threshold(mut self, threshold: f64) -> Self {
        self.performance_threshold = threshold;
        self
    }

    /// Minimum tenure for high-potential selection.
    pub fn with_min_tenure(mut self, min_tenure: f64) -> Self {
        self.min_tenure = min_tenure;
        self
    }

    /// Length of the flat high-potential list.
    pub fn with_list_limit(mut self, list_limit: usize) -> Self {
        self.list_limit = list_limit;
        self
    }

    /// Team-lead ratio and density per department, ordered by descending ratio.
    pub fn team_lead_distribution(&self) -> Vec<DepartmentTeamLeads> {
        debug!(employees = self.employees.len(), "Computing team lead distribution");

        let mut result: Vec<DepartmentTeamLeads> = group_by_department(self.employees)
            .into_iter()
            .map(|(department, members)| {
                let total = members.len();
                let leads = members.iter().filter(|e| e.is_team_lead()).count();
                DepartmentTeamLeads {
                    department: department.to_string(),
                    total_employees: total,
                    team_lead_count: leads,
                    team_lead_ratio: round_to(percentage(leads, total), 1),
                    team_lead_density: round_to(total as f64 / leads.max(1) as f64, 1),
                }
            })
            .collect();

        result.sort_by(|a, b| b.team_lead_ratio.total_cmp(&a.team_lead_ratio));
        result
    }

    /// Tenure and experience statistics of current team leads.
    pub fn promotion_time(&self) -> PromotionTime {
        let leads: Vec<&EmployeeRecord> =
            self.employees.iter().filter(|e| e.is_team_lead()).collect();
        debug!(team_leads = leads.len(), "Computing promotion time");

        if leads.is_empty() {
            return PromotionTime::default();
        }

        let tenures: Vec<f64> = leads.iter().map(|e| e.tenure_years()).collect();
        let experience: Vec<f64> = leads.iter().map(|e| e.experience_years()).collect();

        let mut distribution = TenureDistribution::default();
        for &tenure in &tenures {
            distribution.add(tenure);
        }

        PromotionTime {
            team_lead_count: leads.len(),
            average_tenure_to_promotion: round_to(mean(&tenures), 1),
            average_experience_at_promotion: round_to(mean(&experience), 1),
            min_tenure: round_to(tenures.iter().copied().fold(f64::INFINITY, f64::min), 1),
            max_tenure: round_to(tenures.iter().copied().fold(f64::NEG_INFINITY, f64::max), 1),
            tenure_distribution: distribution,
        }
    }

    /// Non-lead employees at or above `performance_threshold` with at least
    /// the minimum tenure, ranked by performance then tenure.
    pub fn high_potential_employees(&self, performance_threshold: f64) -> HighPotentialReport {
        debug!(
            employees = self.employees.len(),
            performance_threshold, "Selecting high-potential employees"
        );

        let mut selected: Vec<HighPotentialEmployee> = self
            .employees
            .iter()
            .filter(|e| {
                !e.is_team_lead()
                    && e.performance_score() >= performance_threshold
                    && e.tenure_years() >= self.min_tenure
            })
            .map(|e| {
                let score = promotion_readiness_score(
                    e.performance_score(),
                    e.tenure_years(),
                    e.experience_years(),
                    e.education_level(),
                );
                HighPotentialEmployee {
                    employee_id: e.id().to_string(),
                    name: e.full_name(),
                    department: e.department().to_string(),
                    position: e.position().to_string(),
                    performance_score: e.performance_score(),
                    tenure_years: round_to(e.tenure_years(), 1),
                    experience_years: e.experience_years(),
                    education: e.education().to_string(),
                    salary: e.salary(),
                    readiness_score: score,
                    promotion_readiness: ReadinessBand::from_score(score),
                }
            })
            .collect();

        selected.sort_by(|a, b| {
            b.performance_score
                .total_cmp(&a.performance_score)
                .then_with(|| b.tenure_years.total_cmp(&a.tenure_years))
        });

        let mut by_department: Vec<DepartmentHighPotential> = Vec::new();
        for employee in &selected {
            match by_department
                .iter_mut()
                .find(|d| d.department == employee.department)
            {
                Some(group) => {
                    group.count += 1;
                    group.employees.push(employee.clone());
                }
                None => by_department.push(DepartmentHighPotential {
                    department: employee.department.clone(),
                    count: 1,
                    employees: vec![employee.clone()],
                }),
            }
        }

        let total_high_potential = selected.len();
        selected.truncate(self.list_limit);

        HighPotentialReport {
            performance_threshold,
            minimum_tenure: self.min_tenure,
            total_high_potential,
            high_potential_employees: selected,
            by_department,
        }
    }
}

impl HighPotentialSource for CareerDevelopmentAnalyzer<'_> {
    fn high_potential(&self) -> HighPotentialReport {
        self.high_potential_employees(self.performance_threshold)
    }
}
