//! Raw employee entries as they appear in the imported personnel document.
//!
//! Every field is structurally required. Nullable fields (the middle name)
//! must still be present in the entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Gender as recorded in the personnel document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male employee.
    Male,
    /// Female employee.
    Female,
}

/// One entry of the personnel document, grouped the way the document groups it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmployee {
    /// Unique employee identifier. Numeric identifiers are kept as text.
    #[serde(deserialize_with = "identifier")]
    pub employee_id: String,
    /// Personal details.
    pub personal_info: PersonalInfo,
    /// Employment details.
    pub work_info: WorkInfo,
    /// Education and miscellaneous details.
    pub additional_info: AdditionalInfo,
}

/// Personal details of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Middle name or patronymic; must be present but may be null.
    #[serde(deserialize_with = "Option::deserialize")]
    pub middle_name: Option<String>,
    /// Full name as written in the source document.
    pub full_name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Work email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

/// Employment details of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkInfo {
    /// Department identifier. Numeric identifiers are kept as text.
    #[serde(deserialize_with = "identifier")]
    pub department_id: String,
    /// Department name; all per-department analytics group by this value.
    pub department_name: String,
    /// Position title.
    pub position: String,
    /// Monthly salary, currency agnostic.
    pub salary: Decimal,
    /// Date the employee was hired.
    pub hire_date: NaiveDate,
    /// Total professional experience in years, independent of tenure.
    pub experience_years: f64,
    /// Performance score, nominally 0 to 100.
    pub performance_score: f64,
    /// Skill set.
    pub skills: Vec<String>,
    /// Whether the employee currently holds a team-lead position.
    pub is_team_lead: bool,
    /// Work schedule description (e.g. "full-time", "hybrid").
    pub work_schedule: String,
}

/// Education and miscellaneous details of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Education level label as written in the source document.
    pub education: String,
    /// Spoken languages.
    pub language_skills: Vec<String>,
    /// Professional certifications.
    pub certifications: Vec<String>,
    /// Whether the employee has a company car.
    pub has_company_car: bool,
    /// Whether the employee holds a security clearance.
    pub security_clearance: bool,
}

/// Accepts identifiers written either as strings or as integers.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(u64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(text) => text,
        Repr::Number(number) => number.to_string(),
    })
}
