//! Integration tests for the workforce analytics engine.
//!
//! Rosters are written as JSON documents and go through the public loader,
//! analyzers and report exactly as a caller would use them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use workforce_analytics::analysis::{
    CareerDevelopmentAnalyzer, DemographicAnalyzer, EducationAnalyzer, HrStrategyAdvisor,
    ReadinessBand, TurnoverAnalyzer,
};
use workforce_analytics::config::{AnalysisConfig, ConfigLoader, DepartmentCategory, StrategyConfig};
use workforce_analytics::error::AnalyticsError;
use workforce_analytics::models::RawEmployee;
use workforce_analytics::report::WorkforceReport;
use workforce_analytics::roster::{Roster, RosterLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
}

struct Entry {
    id: u64,
    department: &'static str,
    gender: &'static str,
    birth_date: &'static str,
    hire_date: &'static str,
    performance: f64,
    experience: f64,
    salary: i64,
    education: &'static str,
    team_lead: bool,
}

impl Entry {
    fn new(id: u64, department: &'static str) -> Self {
        Self {
            id,
            department,
            gender: "male",
            birth_date: "1990-10-05",
            hire_date: "2021-10-05",
            performance: 75.0,
            experience: 6.0,
            salary: 100_000,
            education: "Высшее",
            team_lead: false,
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "employee_id": self.id,
            "personal_info": {
                "first_name": format!("Name{}", self.id),
                "last_name": "Tester",
                "middle_name": null,
                "full_name": format!("Tester Name{}", self.id),
                "gender": self.gender,
                "birth_date": self.birth_date,
                "email": format!("e{}@example.com", self.id),
                "phone": "+7 900 000 00 00",
                "address": "Novosibirsk"
            },
            "work_info": {
                "department_id": 1,
                "department_name": self.department,
                "position": if self.team_lead { "Team Lead" } else { "Specialist" },
                "salary": self.salary,
                "hire_date": self.hire_date,
                "experience_years": self.experience,
                "performance_score": self.performance,
                "skills": ["excel"],
                "is_team_lead": self.team_lead,
                "work_schedule": "full-time"
            },
            "additional_info": {
                "education": self.education,
                "language_skills": ["Russian"],
                "certifications": [],
                "has_company_car": false,
                "security_clearance": false
            }
        })
    }
}

fn load(entries: &[Entry]) -> Roster {
    let employees: Vec<Value> = entries.iter().map(Entry::to_json).collect();
    let document = json!({ "employees": employees });
    RosterLoader::from_json_str(&document.to_string(), reference_date())
        .expect("roster should load")
}

fn mixed_roster() -> Roster {
    load(&[
        Entry {
            gender: "female",
            hire_date: "2025-01-10",
            performance: 91.0,
            ..Entry::new(1, "Отдел продаж")
        },
        Entry {
            hire_date: "2018-03-01",
            team_lead: true,
            performance: 82.0,
            salary: 180_000,
            education: "Магистратура",
            ..Entry::new(2, "Отдел продаж")
        },
        Entry {
            gender: "female",
            hire_date: "2024-12-01",
            performance: 68.0,
            ..Entry::new(3, "Отдел продаж")
        },
        Entry {
            hire_date: "2019-06-15",
            performance: 93.0,
            experience: 12.0,
            salary: 210_000,
            education: "Кандидат наук",
            ..Entry::new(4, "Отдел разработки")
        },
        Entry {
            gender: "female",
            hire_date: "2015-02-01",
            team_lead: true,
            salary: 240_000,
            education: "Доктор наук",
            ..Entry::new(5, "Отдел разработки")
        },
        Entry {
            birth_date: "1970-01-20",
            hire_date: "2010-09-01",
            salary: 70_000,
            education: "Среднее специальное",
            ..Entry::new(6, "Производственный цех")
        },
    ])
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_engineering_pair_scenario() {
    let roster = load(&[
        Entry {
            hire_date: "2025-04-06",
            performance: 90.0,
            ..Entry::new(1, "Engineering")
        },
        Entry {
            hire_date: "2020-10-05",
            performance: 60.0,
            team_lead: true,
            ..Entry::new(2, "Engineering")
        },
    ]);
    let employees = roster.employees();

    let rates = TurnoverAnalyzer::new(employees).turnover_rates(2.0);
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].turnover_rate, 50.0);

    let leads = CareerDevelopmentAnalyzer::new(employees).team_lead_distribution();
    assert_eq!(leads[0].team_lead_ratio, 50.0);

    // Half a year of tenure is below the one-year selection floor.
    let default_selection =
        CareerDevelopmentAnalyzer::new(employees).high_potential_employees(85.0);
    assert_eq!(default_selection.total_high_potential, 0);

    let relaxed = CareerDevelopmentAnalyzer::new(employees)
        .with_min_tenure(0.0)
        .high_potential_employees(85.0);
    let ids: Vec<&str> = relaxed
        .high_potential_employees
        .iter()
        .map(|e| e.employee_id.as_str())
        .collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn test_single_department_without_team_leads() {
    let roster = load(&[Entry::new(1, "Support"), Entry::new(2, "Support")]);
    let promotion = CareerDevelopmentAnalyzer::new(roster.employees()).promotion_time();

    assert_eq!(promotion.team_lead_count, 0);
    assert_eq!(promotion.average_tenure_to_promotion, 0.0);
    assert_eq!(promotion.average_experience_at_promotion, 0.0);
    assert_eq!(promotion.min_tenure, 0.0);
    assert_eq!(promotion.max_tenure, 0.0);
    assert_eq!(promotion.tenure_distribution.total(), 0);

    let leads = CareerDevelopmentAnalyzer::new(roster.employees()).team_lead_distribution();
    assert_eq!(leads[0].team_lead_density, 2.0);
}

#[test]
fn test_single_education_level_has_zero_correlation() {
    let roster = load(&[
        Entry { salary: 90_000, ..Entry::new(1, "A") },
        Entry { salary: 130_000, ..Entry::new(2, "B") },
    ]);
    let correlation = EducationAnalyzer::new(roster.employees()).education_salary_correlation();

    assert_eq!(correlation.category_count, 1);
    assert_eq!(correlation.correlation_coefficient, 0.0);
    assert!(correlation.statistically_fragile);
}

#[test]
fn test_missing_structure_aborts_the_load() {
    let mut broken = Entry::new(2, "A").to_json();
    broken["personal_info"]
        .as_object_mut()
        .unwrap()
        .remove("birth_date");
    let document = json!([Entry::new(1, "A").to_json(), broken]);

    let err = RosterLoader::from_json_str(&document.to_string(), reference_date()).unwrap_err();
    match err {
        AnalyticsError::MissingField { field, entry } => {
            assert_eq!(field, "birth_date");
            assert_eq!(entry, 1);
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_null_middle_name_is_accepted_but_absent_is_not() {
    let mut absent = Entry::new(1, "A").to_json();
    absent["personal_info"]
        .as_object_mut()
        .unwrap()
        .remove("middle_name");

    let err =
        RosterLoader::from_json_str(&json!([absent]).to_string(), reference_date()).unwrap_err();
    assert!(err.is_missing_field());

    let roster = load(&[Entry::new(1, "A")]);
    assert_eq!(roster.employees()[0].personal().middle_name, None);
}

// =============================================================================
// Properties over a mixed roster
// =============================================================================

#[test]
fn test_gender_percentages_sum_to_one_hundred() {
    let roster = mixed_roster();
    let distribution = DemographicAnalyzer::new(roster.employees()).gender_age_distribution();

    let sum = distribution.gender_percentages.male + distribution.gender_percentages.female;
    assert!((sum - 100.0).abs() <= 0.1);
    assert_eq!(distribution.gender_counts.total(), 6);
}

#[test]
fn test_turnover_rates_are_bounded() {
    let roster = mixed_roster();
    let rates = TurnoverAnalyzer::new(roster.employees()).turnover_rates(2.0);

    let short: usize = rates.iter().map(|d| d.short_tenure_count).sum();
    let total: usize = rates.iter().map(|d| d.total_employees).sum();
    assert!(short <= total);
    assert!(rates.iter().all(|d| (0.0..=100.0).contains(&d.turnover_rate)));
}

#[test]
fn test_readiness_of_selected_employees() {
    let roster = mixed_roster();
    let report = CareerDevelopmentAnalyzer::new(roster.employees()).high_potential_employees(85.0);

    // Employee 1 has under a year of tenure; employee 2 is a team lead.
    let ids: Vec<&str> = report
        .high_potential_employees
        .iter()
        .map(|e| e.employee_id.as_str())
        .collect();
    assert_eq!(ids, vec!["4"]);

    let candidate = &report.high_potential_employees[0];
    assert_eq!(candidate.readiness_score, 40 + 30 + 20 + 9);
    assert_eq!(candidate.promotion_readiness, ReadinessBand::ReadyForPromotion);
    assert_eq!(candidate.name, "Name4 Tester");
}

#[test]
fn test_strategy_over_loaded_roster() {
    let roster = mixed_roster();
    let employees = roster.employees();
    let config = StrategyConfig::default();
    let advisor = HrStrategyAdvisor::new(
        TurnoverAnalyzer::new(employees),
        CareerDevelopmentAnalyzer::new(employees),
        &config,
    );

    let plans = advisor.turnover_reduction_measures();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].department, "Отдел продаж");
    assert_eq!(plans[0].category, DepartmentCategory::Sales);

    let effect = advisor.economic_effect(Decimal::new(10, 0));
    assert_eq!(effect.current_annual_turnover_cost, Decimal::new(440_000, 0));
    assert_eq!(effect.potential_savings, Decimal::new(44_000, 0));
    assert_eq!(effect.required_investment, Decimal::new(6_600, 0));
    assert_eq!(effect.return_on_investment, Some(Decimal::new(5667, 1)));

    let program = advisor.high_potential_program();
    assert_eq!(program.budget_estimation.total_program_cost, Decimal::new(150_000, 0));
}

#[test]
fn test_round_trip_preserves_raw_entries() {
    let entries = [Entry::new(1, "A").to_json(), Entry::new(2, "B").to_json()];
    let roster =
        RosterLoader::from_json_str(&json!(entries).to_string(), reference_date()).unwrap();

    for (record, original) in roster.employees().iter().zip(entries) {
        let expected: RawEmployee = serde_json::from_value(original).unwrap();
        assert_eq!(record.to_raw(), expected);
    }
}

#[test]
fn test_reference_date_drives_derived_fields() {
    let document = json!([Entry::new(1, "A").to_json()]).to_string();
    let now = RosterLoader::from_json_str(&document, reference_date()).unwrap();
    let later_date = NaiveDate::from_ymd_opt(2030, 10, 5).unwrap();
    let later = RosterLoader::from_json_str(&document, later_date).unwrap();

    let delta = later.employees()[0].age() - now.employees()[0].age();
    assert!((delta - 5.0).abs() < 0.01);
    assert!((later.employees()[0].tenure_years() - 9.0).abs() < 0.01);
}

// =============================================================================
// Full report
// =============================================================================

#[test]
fn test_full_report_from_default_configuration() {
    let (analysis, strategy) = ConfigLoader::load("./config/default")
        .expect("default configuration should load")
        .into_parts();
    let roster = mixed_roster();

    let report = WorkforceReport::generate(&roster, &analysis, &strategy);
    let value: Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(value["summary"]["total_employees"], 6);
    assert_eq!(value["turnover"]["extremes"]["highest"]["department"], "Отдел продаж");
    assert_eq!(
        value["career"]["high_potential"]["high_potential_employees"][0]["promotion_readiness"],
        "Ready for promotion"
    );
    assert_eq!(
        value["strategy"]["strategic_recommendations"].as_array().unwrap().len(),
        6
    );
    assert_eq!(
        value["strategy"]["high_potential_program"]["program_name"],
        "Future Leaders Development Program"
    );
}

#[test]
fn test_empty_roster_yields_defined_results() {
    let roster = load(&[]);
    let report =
        WorkforceReport::generate(&roster, &AnalysisConfig::default(), &StrategyConfig::default());

    assert_eq!(report.summary.total_employees, 0);
    assert_eq!(report.demographics.gender_age_distribution.gender_percentages.male, 0.0);
    assert!(report.demographics.gender_age_distribution.age_groups.iter().all(|b| b.total == 0));
    assert!(report.turnover.department_turnover.is_empty());
    assert!(report.turnover.extremes.is_none());
    assert_eq!(report.turnover.performance_relationship.correlation_coefficient, 0.0);
    assert!(report.education.distribution.is_empty());
    assert_eq!(report.education.salary_correlation.correlation_coefficient, 0.0);
    assert_eq!(report.career.promotion_time.team_lead_count, 0);
    assert_eq!(report.strategy.economic_impact.return_on_investment, None);
    assert_eq!(report.strategy.economic_impact.warnings.len(), 2);
    assert_eq!(
        report.strategy.high_potential_program.budget_estimation.total_program_cost,
        Decimal::ZERO
    );
}

#[test]
fn test_report_is_idempotent() {
    let roster = mixed_roster();
    let analysis = AnalysisConfig::default();
    let strategy = StrategyConfig::default();

    let first = WorkforceReport::generate(&roster, &analysis, &strategy).to_json_pretty().unwrap();
    let second = WorkforceReport::generate(&roster, &analysis, &strategy).to_json_pretty().unwrap();
    assert_eq!(first, second);
}
