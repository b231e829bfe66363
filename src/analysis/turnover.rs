//! Turnover analysis.
//!
//! Turnover here is a proxy: the share of a department's employees whose
//! tenure is below a threshold. It measures recent-hire exposure, not
//! recorded departures.

use serde::Serialize;
use tracing::debug;

use crate::models::{DEFAULT_SHORT_TENURE_THRESHOLD, EmployeeRecord};

use super::stats::{group_by_department, mean, pearson, percentage, round_to};
use super::strategy::TurnoverSource;

/// Number of departments listed at each end of the turnover ranking.
pub const EXTREME_LIST_LEN: usize = 3;

/// Turnover figures for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTurnover {
    /// Department name.
    pub department: String,
    /// Department headcount.
    pub total_employees: usize,
    /// Employees with tenure below the threshold.
    pub short_tenure_count: usize,
    /// `short_tenure_count / total_employees * 100`, one decimal.
    pub turnover_rate: f64,
    /// Mean performance score, one decimal.
    pub average_performance: f64,
    /// Mean tenure in years, one decimal.
    pub average_tenure: f64,
}

/// A department at one end of the turnover ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverExtreme {
    /// Department name.
    pub department: String,
    /// Its turnover rate.
    pub turnover_rate: f64,
    /// Its headcount.
    pub employee_count: usize,
    /// Its mean performance.
    pub average_performance: f64,
}

/// Department name and rate, used in the top/bottom lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRate {
    /// Department name.
    pub department: String,
    /// Its turnover rate.
    pub rate: f64,
}

/// Highest and lowest turnover departments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverExtremes {
    /// Department with the highest rate.
    pub highest: TurnoverExtreme,
    /// Department with the lowest rate.
    pub lowest: TurnoverExtreme,
    /// Up to three highest-rate departments, highest first.
    pub top_highest: Vec<RankedRate>,
    /// Up to three lowest-rate departments, in descending rate order.
    pub top_lowest: Vec<RankedRate>,
    /// Highest minus lowest rate, in percentage points.
    pub turnover_gap: f64,
}

/// Turnover/performance quadrant of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverQuadrant {
    /// Turnover above the mean, performance below the mean.
    HighTurnoverLowPerformance,
    /// Turnover above the mean, performance at or above the mean.
    HighTurnoverHighPerformance,
    /// Turnover at or below the mean, performance at or above the mean.
    LowTurnoverHighPerformance,
    /// Turnover at or below the mean, performance below the mean.
    LowTurnoverLowPerformance,
}

impl TurnoverQuadrant {
    /// Classifies a department against the cross-department means.
    ///
    /// Turnover splits on strictly-greater, performance on greater-or-equal.
    pub fn classify(
        turnover_rate: f64,
        performance: f64,
        mean_turnover: f64,
        mean_performance: f64,
    ) -> Self {
        let high_turnover = turnover_rate > mean_turnover;
        let high_performance = performance >= mean_performance;
        match (high_turnover, high_performance) {
            (true, false) => TurnoverQuadrant::HighTurnoverLowPerformance,
            (true, true) => TurnoverQuadrant::HighTurnoverHighPerformance,
            (false, true) => TurnoverQuadrant::LowTurnoverHighPerformance,
            (false, false) => TurnoverQuadrant::LowTurnoverLowPerformance,
        }
    }
}

/// Departments grouped by quadrant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentQuadrants {
    /// High turnover, low performance.
    pub high_turnover_low_performance: Vec<String>,
    /// High turnover, high performance.
    pub high_turnover_high_performance: Vec<String>,
    /// Low turnover, high performance.
    pub low_turnover_high_performance: Vec<String>,
    /// Low turnover, low performance.
    pub low_turnover_low_performance: Vec<String>,
}

impl DepartmentQuadrants {
    fn push(&mut self, quadrant: TurnoverQuadrant, department: String) {
        let bucket = match quadrant {
            TurnoverQuadrant::HighTurnoverLowPerformance => &mut self.high_turnover_low_performance,
            TurnoverQuadrant::HighTurnoverHighPerformance => {
                &mut self.high_turnover_high_performance
            }
            TurnoverQuadrant::LowTurnoverHighPerformance => &mut self.low_turnover_high_performance,
            TurnoverQuadrant::LowTurnoverLowPerformance => &mut self.low_turnover_low_performance,
        };
        bucket.push(department);
    }
}

/// One department's point in the correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverDataPoint {
    /// Department name.
    pub department: String,
    /// Its turnover rate.
    pub turnover_rate: f64,
    /// Its mean performance.
    pub average_performance: f64,
}

/// Department-level relationship between turnover and performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnoverPerformanceRelationship {
    /// Pearson correlation over departments, three decimals; 0 with fewer than two.
    pub correlation_coefficient: f64,
    /// Text band for the correlation.
    pub correlation_interpretation: String,
    /// Mean turnover rate across departments, one decimal.
    pub average_turnover_rate: f64,
    /// Mean of department performance averages, one decimal.
    pub average_performance_score: f64,
    /// Departments per quadrant.
    pub department_categories: DepartmentQuadrants,
    /// The points the correlation was computed over.
    pub data_points: Vec<TurnoverDataPoint>,
}

/// Interprets a turnover/performance correlation.
///
/// Negative values are split into strong/moderate/weak bands, positive
/// values likewise; exactly zero means no correlation.
pub fn interpret_turnover_correlation(correlation: f64) -> &'static str {
    if correlation < -0.7 {
        "Strong negative correlation - higher turnover strongly correlates with lower performance"
    } else if correlation < -0.3 {
        "Moderate negative correlation - turnover affects performance"
    } else if correlation < 0.0 {
        "Weak negative correlation - slight relationship between turnover and performance"
    } else if correlation == 0.0 {
        "No correlation - turnover doesn't affect performance"
    } else if correlation < 0.3 {
        "Weak positive correlation"
    } else if correlation < 0.7 {
        "Moderate positive correlation"
    } else {
        "Strong positive correlation"
    }
}

/// Computes turnover exposure over a read-only roster.
#[derive(Debug, Clone, Copy)]
pub struct TurnoverAnalyzer<'a> {
    employees: &'a [EmployeeRecord],
    tenure_threshold: f64,
}

impl<'a> TurnoverAnalyzer<'a> {
    /// Creates an analyzer using the default two-year tenure threshold.
    pub fn new(employees: &'a [EmployeeRecord]) -> Self {
        Self {
            employees,
            tenure_threshold: DEFAULT_SHORT_TENURE_THRESHOLD,
        }
    }

    /// Overrides the threshold used by [`extremes`](Self::turnover_extremes),
    /// the performance relationship, and the strategy queries.
    pub fn with_tenure_threshold(mut self, tenure_threshold: f64) -> Self {
        self.tenure_threshold = tenure_threshold;
        self
    }

    /// The threshold used by the derived analyses.
    pub fn tenure_threshold(&self) -> f64 {
        self.tenure_threshold
    }

    /// Turnover per department, ordered by descending rate.
    pub fn turnover_rates(&self, tenure_threshold: f64) -> Vec<DepartmentTurnover> {
        debug!(
            employees = self.employees.len(),
            tenure_threshold, "Computing turnover rates"
        );

        let mut result: Vec<DepartmentTurnover> = group_by_department(self.employees)
            .into_iter()
            .map(|(department, members)| {
                let short_tenure_count = members
                    .iter()
                    .filter(|e| e.is_short_tenure(tenure_threshold))
                    .count();
                let performance: Vec<f64> = members.iter().map(|e| e.performance_score()).collect();
                let tenure: Vec<f64> = members.iter().map(|e| e.tenure_years()).collect();

                DepartmentTurnover {
                    department: department.to_string(),
                    total_employees: members.len(),
                    short_tenure_count,
                    turnover_rate: round_to(percentage(short_tenure_count, members.len()), 1),
                    average_performance: round_to(mean(&performance), 1),
                    average_tenure: round_to(mean(&tenure), 1),
                }
            })
            .collect();

        result.sort_by(|a, b| b.turnover_rate.total_cmp(&a.turnover_rate));
        result
    }

    /// Highest and lowest turnover departments; `None` for an empty roster.
    pub fn turnover_extremes(&self) -> Option<TurnoverExtremes> {
        let rates = self.turnover_rates(self.tenure_threshold);

        // Rates are sorted descending: the highest is the first entry, the
        // lowest is the first entry carrying the minimum rate.
        let highest = rates.first()?;
        let min_rate = rates.last()?.turnover_rate;
        let lowest = rates.iter().find(|d| d.turnover_rate == min_rate)?;

        let ranked = |d: &DepartmentTurnover| RankedRate {
            department: d.department.clone(),
            rate: d.turnover_rate,
        };
        let tail_start = rates.len().saturating_sub(EXTREME_LIST_LEN);

        Some(TurnoverExtremes {
            highest: extreme(highest),
            lowest: extreme(lowest),
            top_highest: rates.iter().take(EXTREME_LIST_LEN).map(ranked).collect(),
            top_lowest: rates[tail_start..].iter().map(ranked).collect(),
            turnover_gap: round_to(highest.turnover_rate - lowest.turnover_rate, 1),
        })
    }

    /// Correlation and quadrant split between turnover and performance.
    ///
    /// Each department contributes one point.
    pub fn turnover_performance_relationship(&self) -> TurnoverPerformanceRelationship {
        let rates = self.turnover_rates(self.tenure_threshold);

        let turnover: Vec<f64> = rates.iter().map(|d| d.turnover_rate).collect();
        let performance: Vec<f64> = rates.iter().map(|d| d.average_performance).collect();

        let correlation = pearson(&turnover, &performance);
        let mean_turnover = mean(&turnover);
        let mean_performance = mean(&performance);

        let mut categories = DepartmentQuadrants::default();
        for department in &rates {
            let quadrant = TurnoverQuadrant::classify(
                department.turnover_rate,
                department.average_performance,
                mean_turnover,
                mean_performance,
            );
            categories.push(quadrant, department.department.clone());
        }

        TurnoverPerformanceRelationship {
            correlation_coefficient: round_to(correlation, 3),
            correlation_interpretation: interpret_turnover_correlation(correlation).to_string(),
            average_turnover_rate: round_to(mean_turnover, 1),
            average_performance_score: round_to(mean_performance, 1),
            department_categories: categories,
            data_points: rates
                .into_iter()
                .map(|d| TurnoverDataPoint {
                    department: d.department,
                    turnover_rate: d.turnover_rate,
                    average_performance: d.average_performance,
                })
                .collect(),
        }
    }
}

fn extreme(department: &DepartmentTurnover) -> TurnoverExtreme {
    TurnoverExtreme {
        department: department.department.clone(),
        turnover_rate: department.turnover_rate,
        employee_count: department.total_employees,
        average_performance: department.average_performance,
    }
}

impl TurnoverSource for TurnoverAnalyzer<'_> {
    fn department_turnover(&self) -> Vec<DepartmentTurnover> {
        self.turnover_rates(self.tenure_threshold)
    }
}
