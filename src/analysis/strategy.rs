//! HR strategy recommendations.
//!
//! The advisor never reads employee records. It works from the outputs of
//! the turnover and career analyzers, obtained through [`TurnoverSource`]
//! and [`HighPotentialSource`], and from a [`StrategyConfig`].

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DepartmentCategory, StrategyConfig};

use super::career::HighPotentialReport;
use super::turnover::DepartmentTurnover;

/// Read-only access to per-department turnover figures.
pub trait TurnoverSource {
    /// Turnover figures of every department.
    fn department_turnover(&self) -> Vec<DepartmentTurnover>;
}

/// Read-only access to the high-potential selection.
pub trait HighPotentialSource {
    /// The current high-potential selection.
    fn high_potential(&self) -> HighPotentialReport;
}

/// Immediate actions recommended for every problem department.
pub const IMMEDIATE_ACTIONS: [&str; 4] = [
    "Conduct stay interviews with current employees",
    "Review and benchmark compensation packages",
    "Implement mentorship program for new hires",
    "Enhance onboarding process",
];

/// Medium-term strategies recommended for every problem department.
pub const MEDIUM_TERM_STRATEGIES: [&str; 4] = [
    "Develop clear career progression paths",
    "Implement flexible work arrangements",
    "Create departmental recognition programs",
    "Provide professional development opportunities",
];

/// Long-term initiatives recommended for every problem department.
pub const LONG_TERM_INITIATIVES: [&str; 4] = [
    "Build strong departmental culture",
    "Develop leadership pipeline",
    "Create cross-training opportunities",
    "Implement succession planning",
];

/// Organisation-wide recommendations.
pub const STRATEGIC_RECOMMENDATIONS: [&str; 6] = [
    "Implement targeted retention programs in high-turnover departments",
    "Launch leadership development program for high-potential employees",
    "Review and optimize compensation structures",
    "Enhance career progression frameworks",
    "Implement regular employee engagement surveys",
    "Develop departmental succession plans",
];

const PROGRAM_NAME: &str = "Future Leaders Development Program";
const PHASE_DURATION_MONTHS: u32 = 3;

/// A non-fatal condition found while computing a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisWarning {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl AnalysisWarning {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Retention plan for a department whose turnover exceeds the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionPlan {
    /// Department name.
    pub department: String,
    /// Current turnover rate.
    pub current_turnover_rate: f64,
    /// Department headcount.
    pub employee_count: usize,
    /// Mean tenure in years.
    pub average_tenure: f64,
    /// Mean performance score.
    pub average_performance: f64,
    /// Category matched by the department keyword table.
    pub category: DepartmentCategory,
    /// Actions for the next few weeks.
    pub immediate_actions: &'static [&'static str],
    /// Strategies for the next few quarters.
    pub medium_term_strategies: &'static [&'static str],
    /// Initiatives for the next few years.
    pub long_term_initiatives: &'static [&'static str],
    /// Recommendations specific to the department category.
    pub specific_recommendations: &'static [&'static str],
}

/// Turnover cost and savings of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentEconomics {
    /// Department name.
    pub department: String,
    /// Short-tenure employees today.
    pub current_turnover_count: usize,
    /// Short-tenure employees after the reduction; may be fractional.
    pub reduced_turnover_count: Decimal,
    /// `current_turnover_count * cost_per_turnover`.
    pub current_turnover_cost: Decimal,
    /// Cost avoided by the reduction.
    pub potential_savings: Decimal,
}

/// Economic effect of reducing turnover.
///
/// Amounts are rounded to whole units; ROI and payback to one decimal.
/// ROI and payback are `None` when their denominator is zero, with a
/// matching entry in `warnings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicEffect {
    /// Reduction applied to every department, in percent.
    pub reduction_percent: Decimal,
    /// Sum of the cost model components.
    pub cost_per_turnover: Decimal,
    /// Cost of today's short-tenure headcount.
    pub current_annual_turnover_cost: Decimal,
    /// Cost avoided by the reduction.
    pub potential_savings: Decimal,
    /// Investment needed to achieve the reduction.
    pub required_investment: Decimal,
    /// Savings minus investment.
    pub net_annual_savings: Decimal,
    /// `(savings - investment) / investment * 100`.
    pub return_on_investment: Option<Decimal>,
    /// `investment / (savings / 12)`.
    pub payback_period_months: Option<Decimal>,
    /// Per-department figures, in turnover order.
    pub department_breakdown: Vec<DepartmentEconomics>,
    /// Guarded divisions that could not be computed.
    pub warnings: Vec<AnalysisWarning>,
}

/// One phase of the development program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramPhase {
    /// 1-based phase number.
    pub phase: u32,
    /// Duration in months.
    pub duration_months: u32,
    /// Theme of the phase.
    pub focus: &'static str,
    /// Activities.
    pub components: &'static [&'static str],
}

/// Who qualifies for the development program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionCriteria {
    /// Minimum performance score.
    pub performance_threshold: f64,
    /// Minimum tenure in years.
    pub minimum_tenure: f64,
    /// How leadership potential is assessed.
    pub leadership_potential: &'static str,
    /// Education requirement.
    pub education_preference: &'static str,
}

/// Outcomes the program aims for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedOutcomes {
    /// Within a year.
    pub short_term: &'static [&'static str],
    /// Beyond a year.
    pub long_term: &'static [&'static str],
}

/// Program budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramBudget {
    /// Cost per participant.
    pub per_participant: Decimal,
    /// `participants * per_participant`.
    pub total_program_cost: Decimal,
    /// What the budget pays for.
    pub cost_components: &'static [&'static str],
}

/// Development program for high-potential employees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPotentialProgram {
    /// Program name.
    pub program_name: &'static str,
    /// Number of participants.
    pub participant_count: usize,
    /// Participant description.
    pub target_audience: String,
    /// Total duration in months.
    pub duration_months: u32,
    /// The three phases in order.
    pub program_phases: Vec<ProgramPhase>,
    /// Entry criteria.
    pub selection_criteria: SelectionCriteria,
    /// Goals.
    pub expected_outcomes: ExpectedOutcomes,
    /// Budget.
    pub budget_estimation: ProgramBudget,
    /// How success is measured.
    pub success_metrics: &'static [&'static str],
}

/// All strategy outputs together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    /// Retention plans of problem departments.
    pub turnover_reduction_measures: Vec<RetentionPlan>,
    /// Economic effect of the configured default reduction.
    pub economic_impact: EconomicEffect,
    /// The development program.
    pub high_potential_program: HighPotentialProgram,
    /// Organisation-wide recommendations.
    pub strategic_recommendations: &'static [&'static str],
}

/// Builds retention plans, economic estimates and the development program.
#[derive(Debug, Clone)]
pub struct HrStrategyAdvisor<'a, T, H> {
    turnover: T,
    high_potential: H,
    config: &'a StrategyConfig,
}

impl<'a, T, H> HrStrategyAdvisor<'a, T, H>
where
    T: TurnoverSource,
    H: HighPotentialSource,
{
    /// Creates an advisor over the given sources.
    pub fn new(turnover: T, high_potential: H, config: &'a StrategyConfig) -> Self {
        Self {
            turnover,
            high_potential,
            config,
        }
    }

    /// Retention plans for departments whose reported turnover rate is above
    /// the configured threshold, in turnover order.
    pub fn turnover_reduction_measures(&self) -> Vec<RetentionPlan> {
        let threshold = self.config.problem_turnover_threshold;
        let departments = self.turnover.department_turnover();
        debug!(
            departments = departments.len(),
            threshold, "Selecting problem departments"
        );

        departments
            .into_iter()
            .filter(|d| d.turnover_rate > threshold)
            .map(|d| {
                let category = self.config.department_keywords.classify(&d.department);
                RetentionPlan {
                    current_turnover_rate: d.turnover_rate,
                    employee_count: d.total_employees,
                    average_tenure: d.average_tenure,
                    average_performance: d.average_performance,
                    category,
                    immediate_actions: &IMMEDIATE_ACTIONS,
                    medium_term_strategies: &MEDIUM_TERM_STRATEGIES,
                    long_term_initiatives: &LONG_TERM_INITIATIVES,
                    specific_recommendations: category.recommendations(),
                    department: d.department,
                }
            })
            .collect()
    }

    /// Economic effect of cutting every department's short-tenure headcount
    /// by `reduction_percent`.
    pub fn economic_effect(&self, reduction_percent: Decimal) -> EconomicEffect {
        let cost_per_turnover = self.config.cost_model.cost_per_turnover();
        let retained_share = Decimal::ONE - reduction_percent / Decimal::from(100);
        let departments = self.turnover.department_turnover();
        debug!(
            departments = departments.len(),
            %reduction_percent, "Computing economic effect"
        );

        let mut total_cost = Decimal::ZERO;
        let mut savings = Decimal::ZERO;
        let mut department_breakdown = Vec::with_capacity(departments.len());

        for department in departments {
            let current = Decimal::from(department.short_tenure_count);
            let reduced = current * retained_share;
            let cost = current * cost_per_turnover;
            let saved = (current - reduced) * cost_per_turnover;

            total_cost += cost;
            savings += saved;

            department_breakdown.push(DepartmentEconomics {
                department: department.department,
                current_turnover_count: department.short_tenure_count,
                reduced_turnover_count: reduced.normalize(),
                current_turnover_cost: cost.round_dp(0),
                potential_savings: saved.round_dp(0),
            });
        }

        let investment = savings * self.config.investment_ratio;
        let mut warnings = Vec::new();

        let return_on_investment = if investment.is_zero() {
            warn!(%savings, "Required investment is zero; ROI is undefined");
            warnings.push(AnalysisWarning::new(
                "zero_investment",
                "Required investment is zero, so return on investment is undefined",
            ));
            None
        } else {
            Some(((savings - investment) / investment * Decimal::from(100)).round_dp(1))
        };

        let payback_period_months = if savings.is_zero() {
            warn!("Potential savings are zero; payback period is undefined");
            warnings.push(AnalysisWarning::new(
                "zero_savings",
                "Potential savings are zero, so the payback period is undefined",
            ));
            None
        } else {
            Some((investment * Decimal::from(12) / savings).round_dp(1))
        };

        EconomicEffect {
            reduction_percent,
            cost_per_turnover,
            current_annual_turnover_cost: total_cost.round_dp(0),
            potential_savings: savings.round_dp(0),
            required_investment: investment.round_dp(0),
            net_annual_savings: (savings - investment).round_dp(0),
            return_on_investment,
            payback_period_months,
            department_breakdown,
            warnings,
        }
    }

    /// Nine-month program sized to the current high-potential headcount.
    pub fn high_potential_program(&self) -> HighPotentialProgram {
        let selection = self.high_potential.high_potential();
        let participants = selection.total_high_potential;
        let per_participant = self.config.program_budget_per_participant;
        debug!(participants, "Building high-potential program");

        let program_phases = vec![
            ProgramPhase {
                phase: 1,
                duration_months: PHASE_DURATION_MONTHS,
                focus: "Leadership Fundamentals",
                components: &[
                    "Leadership assessment and 360 feedback",
                    "Communication and influence training",
                    "Strategic thinking workshops",
                    "Mentorship program kickoff",
                ],
            },
            ProgramPhase {
                phase: 2,
                duration_months: PHASE_DURATION_MONTHS,
                focus: "Applied Leadership",
                components: &[
                    "Cross-departmental project assignment",
                    "Problem-solving simulations",
                    "Presentation skills development",
                    "Peer coaching circles",
                ],
            },
            ProgramPhase {
                phase: 3,
                duration_months: PHASE_DURATION_MONTHS,
                focus: "Strategic Impact",
                components: &[
                    "Executive exposure and networking",
                    "Business case development",
                    "Change management training",
                    "Career path planning",
                ],
            },
        ];
        let duration_months = program_phases.iter().map(|p| p.duration_months).sum();

        HighPotentialProgram {
            program_name: PROGRAM_NAME,
            participant_count: participants,
            target_audience: format!("{participants} high-potential employees"),
            duration_months,
            program_phases,
            selection_criteria: SelectionCriteria {
                performance_threshold: selection.performance_threshold,
                minimum_tenure: selection.minimum_tenure,
                leadership_potential: "Based on manager recommendations",
                education_preference: "All levels considered",
            },
            expected_outcomes: ExpectedOutcomes {
                short_term: &[
                    "30% promotion rate within 12 months",
                    "Improved employee engagement scores",
                    "Enhanced leadership capabilities",
                ],
                long_term: &[
                    "Stronger leadership pipeline",
                    "Improved retention of top talent",
                    "Succession planning readiness",
                ],
            },
            budget_estimation: ProgramBudget {
                per_participant,
                total_program_cost: Decimal::from(participants) * per_participant,
                cost_components: &[
                    "External training facilitators",
                    "Materials and resources",
                    "Venue and catering",
                    "Participant time allocation",
                ],
            },
            success_metrics: &[
                "Promotion rates of participants vs non-participants",
                "Retention rates of high-potential employees",
                "360-degree feedback improvement",
                "Business impact of cross-functional projects",
            ],
        }
    }

    /// The six organisation-wide recommendations.
    pub fn strategic_recommendations(&self) -> &'static [&'static str] {
        &STRATEGIC_RECOMMENDATIONS
    }

    /// Every strategy output, using the configured default reduction.
    pub fn strategy_report(&self) -> StrategyReport {
        StrategyReport {
            turnover_reduction_measures: self.turnover_reduction_measures(),
            economic_impact: self.economic_effect(self.config.default_reduction_percent),
            high_potential_program: self.high_potential_program(),
            strategic_recommendations: self.strategic_recommendations(),
        }
    }
}
