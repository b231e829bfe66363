//! Education analysis: distribution, salary relationship and departmental density.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{EducationLevel, EmployeeRecord};

use super::stats::{
    decimal_to_f64, group_by, group_by_department, mean_decimal, median_decimal, pearson,
    percentage, round_to,
};

/// Months per year, used to annualise the monthly salary premium.
pub const MONTHS_PER_YEAR: i64 = 12;

/// At or below this many education categories the salary correlation is
/// reported as statistically fragile.
pub const FRAGILE_CATEGORY_COUNT: usize = 5;

/// Level all premiums and ROI figures are measured against.
pub const BASELINE_LEVEL: EducationLevel = EducationLevel::Vocational;

/// Headcount share of one education level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationShare {
    /// Source label of the level; unrecognised labels are kept as written.
    pub education: String,
    /// Number of employees.
    pub count: usize,
    /// Share of all employees, one decimal.
    pub percentage: f64,
    /// Ordinal of the level, 0 when unrecognised.
    pub education_level: u8,
    /// English display label; the source label when unrecognised.
    pub label: String,
}

/// Salary statistics of one education level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationSalary {
    /// Source label of the level; unrecognised labels are kept as written.
    pub education: String,
    /// Ordinal of the level, 0 when unrecognised.
    pub education_level: u8,
    /// English display label.
    pub label: String,
    /// Mean salary, whole units.
    pub avg_salary: Decimal,
    /// Median salary, whole units.
    pub median_salary: Decimal,
    /// Lowest salary.
    pub min_salary: Decimal,
    /// Highest salary.
    pub max_salary: Decimal,
    /// Highest minus lowest.
    pub salary_range: Decimal,
    /// Number of employees.
    pub employee_count: usize,
}

/// Salary premium of one education value over the baseline level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryPremium {
    /// Education label as written in the source records.
    pub education: String,
    /// Percentage difference of mean salaries, one decimal.
    pub premium_percentage: f64,
}

/// Return on education relative to the baseline level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationRoi {
    /// Education label as written in the source records.
    pub education: String,
    /// Monthly mean-salary difference over the baseline.
    pub salary_difference: Decimal,
    /// Difference as a percentage of the baseline, one decimal.
    pub roi_percentage: f64,
    /// Monthly difference times twelve.
    pub annual_premium: Decimal,
}

/// Relationship between education level and salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationSalaryCorrelation {
    /// Salary statistics per education value, in order of first appearance.
    pub education_salary_data: Vec<EducationSalary>,
    /// Pearson correlation of ordinal against mean salary, three decimals.
    pub correlation_coefficient: f64,
    /// Text band for the correlation.
    pub correlation_interpretation: String,
    /// Number of education categories the correlation was computed over.
    pub category_count: usize,
    /// Set when the correlation rests on too few categories to be meaningful.
    pub statistically_fragile: bool,
    /// Mean baseline salary; `None` when no baseline-level employee exists.
    pub baseline_salary: Option<Decimal>,
    /// Premium per education value; empty without a baseline.
    pub salary_premiums: Vec<SalaryPremium>,
    /// ROI per non-baseline education value; empty without a baseline.
    pub education_roi: Vec<EducationRoi>,
}

/// Departmental education band by share of higher-education holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EducationTier {
    /// At least 60%.
    #[serde(rename = "Elite Education")]
    Elite,
    /// At least 40%.
    #[serde(rename = "Highly Educated")]
    HighlyEducated,
    /// At least 20%.
    #[serde(rename = "Moderately Educated")]
    ModeratelyEducated,
    /// Below 20%.
    #[serde(rename = "Standard Education")]
    Standard,
}

impl EducationTier {
    /// Bands an unrounded higher-education percentage.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 60.0 {
            EducationTier::Elite
        } else if percentage >= 40.0 {
            EducationTier::HighlyEducated
        } else if percentage >= 20.0 {
            EducationTier::ModeratelyEducated
        } else {
            EducationTier::Standard
        }
    }
}

/// Higher-education density of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentEducation {
    /// Department name.
    pub department: String,
    /// Department headcount.
    pub total_employees: usize,
    /// Employees at Master's level or above.
    pub higher_education_count: usize,
    /// Their share of the department, one decimal.
    pub higher_education_percentage: f64,
    /// Band of that share.
    pub classification: EducationTier,
}

/// Interprets an education/salary correlation.
///
/// Positive values are banded; every negative value shares one band.
pub fn interpret_education_correlation(correlation: f64) -> &'static str {
    if correlation > 0.7 {
        "Strong positive correlation - higher education strongly correlates with higher salary"
    } else if correlation > 0.3 {
        "Moderate positive correlation - education level significantly affects salary"
    } else if correlation > 0.0 {
        "Weak positive correlation - slight relationship between education and salary"
    } else if correlation == 0.0 {
        "No correlation - education level doesn't affect salary"
    } else {
        "Negative correlation - unexpected inverse relationship"
    }
}

fn display_label(member: &EmployeeRecord) -> String {
    member
        .education_level()
        .map_or_else(|| member.education().to_string(), |level| level.label().to_string())
}

/// Computes education metrics over a read-only roster.
#[derive(Debug, Clone, Copy)]
pub struct EducationAnalyzer<'a> {
    employees: &'a [EmployeeRecord],
}

impl<'a> EducationAnalyzer<'a> {
    /// Creates an analyzer over `employees`.
    pub fn new(employees: &'a [EmployeeRecord]) -> Self {
        Self { employees }
    }

    /// Headcount per education level, ordered by descending ordinal.
    ///
    /// Source and English spellings of one level form a single group;
    /// unrecognised labels each keep their own group at ordinal 0.
    pub fn education_distribution(&self) -> Vec<EducationShare> {
        debug!(employees = self.employees.len(), "Computing education distribution");

        let total = self.employees.len();
        let mut result: Vec<EducationShare> =
            group_by(self.employees, EmployeeRecord::canonical_education)
                .into_iter()
                .map(|(education, members)| EducationShare {
                    education: education.to_string(),
                    count: members.len(),
                    percentage: round_to(percentage(members.len(), total), 1),
                    education_level: members[0].education_ordinal(),
                    label: display_label(members[0]),
                })
                .collect();

        result.sort_by(|a, b| b.education_level.cmp(&a.education_level));
        result
    }

    /// Salary statistics per education value, their correlation with the
    /// ordinal, and premiums over the vocational baseline.
    pub fn education_salary_correlation(&self) -> EducationSalaryCorrelation {
        debug!(employees = self.employees.len(), "Computing education/salary correlation");

        let groups = group_by(self.employees, EmployeeRecord::canonical_education);
        let salary_data: Vec<EducationSalary> = groups
            .iter()
            .map(|(education, members)| {
                let salaries: Vec<Decimal> = members.iter().map(|e| e.salary()).collect();
                let min = salaries.iter().copied().min().unwrap_or_default();
                let max = salaries.iter().copied().max().unwrap_or_default();
                EducationSalary {
                    education: education.to_string(),
                    education_level: members[0].education_ordinal(),
                    label: display_label(members[0]),
                    avg_salary: mean_decimal(&salaries).round_dp(0),
                    median_salary: median_decimal(&salaries).round_dp(0),
                    min_salary: min,
                    max_salary: max,
                    salary_range: max - min,
                    employee_count: salaries.len(),
                }
            })
            .collect();

        let levels: Vec<f64> = salary_data.iter().map(|d| f64::from(d.education_level)).collect();
        let averages: Vec<f64> = salary_data.iter().map(|d| decimal_to_f64(d.avg_salary)).collect();
        let correlation = pearson(&levels, &averages);

        let baseline_salary = salary_data
            .iter()
            .find(|d| d.education_level == BASELINE_LEVEL.ordinal())
            .map(|d| d.avg_salary)
            .filter(|salary| *salary > Decimal::ZERO);

        let (salary_premiums, education_roi) = match baseline_salary {
            Some(base) => (premiums(&salary_data, base), roi(&salary_data, base)),
            None => (Vec::new(), Vec::new()),
        };

        EducationSalaryCorrelation {
            correlation_coefficient: round_to(correlation, 3),
            correlation_interpretation: interpret_education_correlation(correlation).to_string(),
            category_count: salary_data.len(),
            statistically_fragile: salary_data.len() <= FRAGILE_CATEGORY_COUNT,
            education_salary_data: salary_data,
            baseline_salary,
            salary_premiums,
            education_roi,
        }
    }

    /// Higher-education share per department, ordered by descending share.
    pub fn higher_education_by_department(&self) -> Vec<DepartmentEducation> {
        debug!(employees = self.employees.len(), "Computing higher education by department");

        let mut result: Vec<DepartmentEducation> = group_by_department(self.employees)
            .into_iter()
            .map(|(department, members)| {
                let higher = members.iter().filter(|e| e.has_higher_education()).count();
                let share = percentage(higher, members.len());
                DepartmentEducation {
                    department: department.to_string(),
                    total_employees: members.len(),
                    higher_education_count: higher,
                    higher_education_percentage: round_to(share, 1),
                    classification: EducationTier::classify(share),
                }
            })
            .collect();

        result.sort_by(|a, b| {
            b.higher_education_percentage
                .total_cmp(&a.higher_education_percentage)
        });
        result
    }
}

fn relative_percentage(difference: Decimal, base: Decimal) -> f64 {
    round_to(decimal_to_f64(difference / base * Decimal::from(100)), 1)
}

fn premiums(data: &[EducationSalary], base: Decimal) -> Vec<SalaryPremium> {
    data.iter()
        .map(|d| SalaryPremium {
            education: d.education.clone(),
            premium_percentage: relative_percentage(d.avg_salary - base, base),
        })
        .collect()
}

fn roi(data: &[EducationSalary], base: Decimal) -> Vec<EducationRoi> {
    data.iter()
        .filter(|d| d.education_level != BASELINE_LEVEL.ordinal())
        .map(|d| {
            let difference = d.avg_salary - base;
            EducationRoi {
                education: d.education.clone(),
                salary_difference: difference,
                roi_percentage: relative_percentage(difference, base),
                annual_premium: difference * Decimal::from(MONTHS_PER_YEAR),
            }
        })
        .collect()
}
