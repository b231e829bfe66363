//! Demographic analysis: gender/age composition and per-department balance.

use serde::Serialize;
use tracing::debug;

use crate::models::{AgeGroup, EmployeeRecord, Gender};

use super::stats::{group_by_department, mean, percentage, round_to};

/// Male percentage above which a department is male-dominated (same for female).
pub const DOMINANCE_THRESHOLD: f64 = 60.0;

/// Lower bound of the male percentage counted as balanced in the summary.
pub const BALANCED_LOWER_BOUND: f64 = 40.0;

/// Headcount per gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCounts {
    /// Number of male employees.
    pub male: usize,
    /// Number of female employees.
    pub female: usize,
}

impl GenderCounts {
    fn add(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    /// Combined headcount.
    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

/// Share of the workforce per gender, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GenderPercentages {
    /// Male percentage of all employees.
    pub male: f64,
    /// Female percentage of all employees.
    pub female: f64,
}

/// One row of the age-bucket by gender cross-tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    /// The age bucket.
    pub age_group: AgeGroup,
    /// Male headcount in the bucket.
    pub male: usize,
    /// Female headcount in the bucket.
    pub female: usize,
    /// Total headcount in the bucket.
    pub total: usize,
}

/// Gender counts and the six-bucket age cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderAgeDistribution {
    /// Headcount per gender.
    pub gender_counts: GenderCounts,
    /// Percentage per gender; both 0 for an empty roster.
    pub gender_percentages: GenderPercentages,
    /// All six age buckets, youngest first, including empty ones.
    pub age_groups: Vec<AgeBucket>,
    /// Number of employees analyzed.
    pub total_employees: usize,
}

/// Age statistics of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAge {
    /// Department name.
    pub department: String,
    /// Mean age, one decimal.
    pub average_age: f64,
    /// Number of employees in the department.
    pub employee_count: usize,
    /// Youngest age, one decimal.
    pub min_age: f64,
    /// Oldest age, one decimal.
    pub max_age: f64,
    /// Oldest minus youngest, one decimal.
    pub age_range: f64,
}

/// Gender balance classification of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenderBalanceStatus {
    /// More than 60% male.
    #[serde(rename = "Male-dominated")]
    MaleDominated,
    /// More than 60% female.
    #[serde(rename = "Female-dominated")]
    FemaleDominated,
    /// Neither gender above 60%.
    Balanced,
}

impl GenderBalanceStatus {
    /// Classifies from unrounded percentages.
    pub fn classify(male_percentage: f64, female_percentage: f64) -> Self {
        if male_percentage > DOMINANCE_THRESHOLD {
            GenderBalanceStatus::MaleDominated
        } else if female_percentage > DOMINANCE_THRESHOLD {
            GenderBalanceStatus::FemaleDominated
        } else {
            GenderBalanceStatus::Balanced
        }
    }
}

/// Gender balance of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentGenderBalance {
    /// Department name.
    pub department: String,
    /// Male headcount.
    pub male_count: usize,
    /// Female headcount.
    pub female_count: usize,
    /// Department headcount.
    pub total_employees: usize,
    /// Male share of the department, one decimal.
    pub male_percentage: f64,
    /// Female share of the department, one decimal.
    pub female_percentage: f64,
    /// `|male% - 50|`, one decimal.
    pub imbalance_score: f64,
    /// Dominance classification.
    pub status: GenderBalanceStatus,
}

/// Department counts per balance category.
///
/// Counts use the reported (rounded) percentages. The balanced range `[40, 60]`
/// on the male share is not the complement of the two dominance rules, so the
/// three counts need not add up to the number of departments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderImbalanceSummary {
    /// Departments with reported male share above 60%.
    pub male_dominated_count: usize,
    /// Departments with reported female share above 60%.
    pub female_dominated_count: usize,
    /// Departments with reported male share within `[40, 60]`.
    pub balanced_count: usize,
}

/// Gender imbalance across departments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderImbalance {
    /// Departments ordered by descending imbalance score.
    pub departments: Vec<DepartmentGenderBalance>,
    /// First department in that ordering, if any.
    pub most_imbalanced: Option<DepartmentGenderBalance>,
    /// Last department in that ordering, if any.
    pub most_balanced: Option<DepartmentGenderBalance>,
    /// Counts per category.
    pub summary: GenderImbalanceSummary,
}

/// Computes demographic composition over a read-only roster.
#[derive(Debug, Clone, Copy)]
pub struct DemographicAnalyzer<'a> {
    employees: &'a [EmployeeRecord],
}

impl<'a> DemographicAnalyzer<'a> {
    /// Creates an analyzer over `employees`.
    pub fn new(employees: &'a [EmployeeRecord]) -> Self {
        Self { employees }
    }

    /// Counts employees by gender and by age bucket.
    pub fn gender_age_distribution(&self) -> GenderAgeDistribution {
        debug!(employees = self.employees.len(), "Computing gender/age distribution");

        let mut gender_counts = GenderCounts::default();
        let mut buckets: Vec<AgeBucket> = AgeGroup::ALL
            .iter()
            .map(|&age_group| AgeBucket {
                age_group,
                male: 0,
                female: 0,
                total: 0,
            })
            .collect();

        for employee in self.employees {
            gender_counts.add(employee.gender());

            let bucket = &mut buckets[employee.age_group() as usize];
            match employee.gender() {
                Gender::Male => bucket.male += 1,
                Gender::Female => bucket.female += 1,
            }
            bucket.total += 1;
        }

        let total_employees = self.employees.len();
        GenderAgeDistribution {
            gender_counts,
            gender_percentages: GenderPercentages {
                male: round_to(percentage(gender_counts.male, total_employees), 1),
                female: round_to(percentage(gender_counts.female, total_employees), 1),
            },
            age_groups: buckets,
            total_employees,
        }
    }

    /// Age statistics per department, ordered by descending average age.
    pub fn average_age_by_department(&self) -> Vec<DepartmentAge> {
        debug!(employees = self.employees.len(), "Computing average age by department");

        let mut result: Vec<DepartmentAge> = group_by_department(self.employees)
            .into_iter()
            .map(|(department, members)| {
                let ages: Vec<f64> = members.iter().map(|e| e.age()).collect();
                let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
                let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                DepartmentAge {
                    department: department.to_string(),
                    average_age: round_to(mean(&ages), 1),
                    employee_count: ages.len(),
                    min_age: round_to(min, 1),
                    max_age: round_to(max, 1),
                    age_range: round_to(max - min, 1),
                }
            })
            .collect();

        result.sort_by(|a, b| b.average_age.total_cmp(&a.average_age));
        result
    }

    /// Gender balance per department, ordered by descending imbalance score.
    pub fn gender_imbalance(&self) -> GenderImbalance {
        debug!(employees = self.employees.len(), "Computing gender imbalance");

        let mut departments: Vec<DepartmentGenderBalance> = group_by_department(self.employees)
            .into_iter()
            .map(|(department, members)| {
                let mut counts = GenderCounts::default();
                for employee in &members {
                    counts.add(employee.gender());
                }
                let total = counts.total();
                let male_percentage = percentage(counts.male, total);
                let female_percentage = percentage(counts.female, total);

                DepartmentGenderBalance {
                    department: department.to_string(),
                    male_count: counts.male,
                    female_count: counts.female,
                    total_employees: total,
                    male_percentage: round_to(male_percentage, 1),
                    female_percentage: round_to(female_percentage, 1),
                    imbalance_score: round_to((male_percentage - 50.0).abs(), 1),
                    status: GenderBalanceStatus::classify(male_percentage, female_percentage),
                }
            })
            .collect();

        departments.sort_by(|a, b| b.imbalance_score.total_cmp(&a.imbalance_score));

        let summary = GenderImbalanceSummary {
            male_dominated_count: departments
                .iter()
                .filter(|d| d.male_percentage > DOMINANCE_THRESHOLD)
                .count(),
            female_dominated_count: departments
                .iter()
                .filter(|d| d.female_percentage > DOMINANCE_THRESHOLD)
                .count(),
            balanced_count: departments
                .iter()
                .filter(|d| {
                    (BALANCED_LOWER_BOUND..=DOMINANCE_THRESHOLD).contains(&d.male_percentage)
                })
                .count(),
        };

        GenderImbalance {
            most_imbalanced: departments.first().cloned(),
            most_balanced: departments.last().cloned(),
            departments,
            summary,
        }
    }
}
