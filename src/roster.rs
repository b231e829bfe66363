//! Loading the personnel document and querying the resulting roster.
//!
//! The document is JSON, either `{ "employees": [...] }` or a bare array of
//! entries. Every entry must be structurally complete; the first incomplete
//! entry aborts the load with [`AnalyticsError::MissingField`].

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::{group_by, group_by_department, mean, mean_decimal, round_to};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{EmployeeRecord, Gender, RawEmployee};

const INLINE_SOURCE: &str = "<inline>";

/// Builds a [`Roster`] from a JSON personnel document.
///
/// # Example
///
/// ```no_run
/// use workforce_analytics::config::default_reference_date;
/// use workforce_analytics::roster::RosterLoader;
///
/// let roster = RosterLoader::load("employees.json", default_reference_date())?;
/// println!("{} employees", roster.len());
/// # Ok::<(), workforce_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterLoader;

impl RosterLoader {
    /// Reads and parses the document at `path`.
    pub fn load<P: AsRef<Path>>(path: P, reference_date: NaiveDate) -> AnalyticsResult<Roster> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::DataNotFound {
            path: path_str.clone(),
        })?;

        let roster = Self::parse(&content, &path_str, reference_date)?;
        info!(
            path = %path_str,
            employees = roster.len(),
            %reference_date,
            "Loaded roster"
        );
        Ok(roster)
    }

    /// Parses a document held in memory.
    pub fn from_json_str(text: &str, reference_date: NaiveDate) -> AnalyticsResult<Roster> {
        let roster = Self::parse(text, INLINE_SOURCE, reference_date)?;
        info!(employees = roster.len(), %reference_date, "Loaded roster");
        Ok(roster)
    }

    fn parse(text: &str, source: &str, reference_date: NaiveDate) -> AnalyticsResult<Roster> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| AnalyticsError::DataParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("employees") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(AnalyticsError::DataParseError {
                        path: source.to_string(),
                        message: "expected an 'employees' array".to_string(),
                    });
                }
            },
            _ => {
                return Err(AnalyticsError::DataParseError {
                    path: source.to_string(),
                    message: "expected an array of employees or an object with an 'employees' array"
                        .to_string(),
                });
            }
        };
        debug!(entries = entries.len(), source, "Parsing roster entries");

        let raws = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| parse_entry(index, entry))
            .collect::<AnalyticsResult<Vec<_>>>()?;

        Ok(Roster::from_raw(raws, reference_date))
    }
}

fn parse_entry(index: usize, entry: Value) -> AnalyticsResult<RawEmployee> {
    serde_json::from_value(entry).map_err(|e| {
        let message = e.to_string();
        match missing_field_name(&message) {
            Some(field) => AnalyticsError::MissingField {
                field: field.to_string(),
                entry: index,
            },
            None => AnalyticsError::InvalidField {
                field: format!("employees[{index}]"),
                message,
            },
        }
    })
}

/// Extracts `name` from serde's "missing field `name`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.split_once("missing field `")?.1;
    rest.split_once('`').map(|(field, _)| field)
}

/// Number of employees holding one education level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationCount {
    /// Source label of the level; unrecognised labels are kept as written.
    pub education: String,
    /// Number of employees.
    pub count: usize,
}

/// Headline figures of a roster.
///
/// All counts and averages are zero for an empty roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    /// Headcount.
    pub total_employees: usize,
    /// Male headcount.
    pub male_count: usize,
    /// Female headcount.
    pub female_count: usize,
    /// Mean age, one decimal.
    pub average_age: f64,
    /// Mean monthly salary, whole units.
    pub average_salary: Decimal,
    /// Mean performance score, one decimal.
    pub average_performance: f64,
    /// Mean tenure, one decimal.
    pub average_tenure: f64,
    /// Number of team leads.
    pub team_lead_count: usize,
    /// Number of distinct departments.
    pub department_count: usize,
    /// Headcount per education level, in order of first appearance.
    pub education_counts: Vec<EducationCount>,
}

/// The employee collection together with the reference date its derived
/// fields were computed against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    reference_date: NaiveDate,
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    /// Wraps already-derived records.
    pub fn new(employees: Vec<EmployeeRecord>, reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            employees,
        }
    }

    /// Derives records from raw entries as of `reference_date`.
    pub fn from_raw(raws: Vec<RawEmployee>, reference_date: NaiveDate) -> Self {
        let employees = raws
            .into_iter()
            .map(|raw| EmployeeRecord::derive(raw, reference_date))
            .collect();
        Self::new(employees, reference_date)
    }

    /// The date ages and tenures are measured against.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// All records, in document order.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Headcount.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True when the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// First record with the given identifier.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.id() == employee_id)
    }

    /// Distinct department names, in order of first appearance.
    pub fn departments(&self) -> Vec<&str> {
        group_by_department(&self.employees)
            .into_iter()
            .map(|(department, _)| department)
            .collect()
    }

    /// Employees of a department.
    pub fn by_department(&self, department: &str) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.department() == department)
            .collect()
    }

    /// Employees holding a position.
    pub fn by_position(&self, position: &str) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.position() == position)
            .collect()
    }

    /// Employees with performance at or above `threshold`.
    pub fn high_performers(&self, threshold: f64) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.is_high_performer(threshold))
            .collect()
    }

    /// Current team leads.
    pub fn team_leads(&self) -> Vec<&EmployeeRecord> {
        self.employees.iter().filter(|e| e.is_team_lead()).collect()
    }

    /// Employees with a master's degree or higher.
    pub fn with_higher_education(&self) -> Vec<&EmployeeRecord> {
        self.employees
            .iter()
            .filter(|e| e.has_higher_education())
            .collect()
    }

    /// Headline figures.
    pub fn summary(&self) -> RosterSummary {
        let ages: Vec<f64> = self.employees.iter().map(|e| e.age()).collect();
        let performance: Vec<f64> = self.employees.iter().map(|e| e.performance_score()).collect();
        let tenures: Vec<f64> = self.employees.iter().map(|e| e.tenure_years()).collect();
        let salaries: Vec<Decimal> = self.employees.iter().map(|e| e.salary()).collect();
        let male_count = self
            .employees
            .iter()
            .filter(|e| e.gender() == Gender::Male)
            .count();

        RosterSummary {
            total_employees: self.employees.len(),
            male_count,
            female_count: self.employees.len() - male_count,
            average_age: round_to(mean(&ages), 1),
            average_salary: mean_decimal(&salaries).round_dp(0),
            average_performance: round_to(mean(&performance), 1),
            average_tenure: round_to(mean(&tenures), 1),
            team_lead_count: self.team_leads().len(),
            department_count: self.departments().len(),
            education_counts: group_by(&self.employees, EmployeeRecord::canonical_education)
                .into_iter()
                .map(|(education, members)| EducationCount {
                    education: education.to_string(),
                    count: members.len(),
                })
                .collect(),
        }
    }
}
