//! Employee record with its derived fields.
//!
//! An [`EmployeeRecord`] is built exactly once from a [`RawEmployee`] and a
//! reference date and is read-only afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::derived::{AgeGroup, DerivedFields, derive_fields};
use super::education::EducationLevel;
use super::raw::{AdditionalInfo, Gender, PersonalInfo, RawEmployee, WorkInfo};

/// Default performance score at or above which an employee is a high performer.
pub const DEFAULT_HIGH_PERFORMER_THRESHOLD: f64 = 85.0;

/// Default tenure in years below which an employee counts as short-tenure.
pub const DEFAULT_SHORT_TENURE_THRESHOLD: f64 = 2.0;

/// An immutable employee record.
///
/// # Example
///
/// ```
/// use workforce_analytics::models::{EmployeeRecord, RawEmployee};
/// use chrono::NaiveDate;
///
/// let raw: RawEmployee = serde_json::from_value(serde_json::json!({
///     "employee_id": 1,
///     "personal_info": {
///         "first_name": "Ivan", "last_name": "Petrov", "middle_name": null,
///         "full_name": "Ivan Petrov", "gender": "male", "birth_date": "1985-10-05",
///         "email": "ivan@example.com", "phone": "", "address": ""
///     },
///     "work_info": {
///         "department_id": 1, "department_name": "Engineering", "position": "Engineer",
///         "salary": 100000, "hire_date": "2020-10-05", "experience_years": 12,
///         "performance_score": 91, "skills": [], "is_team_lead": false,
///         "work_schedule": "full-time"
///     },
///     "additional_info": {
///         "education": "Магистратура", "language_skills": [], "certifications": [],
///         "has_company_car": false, "security_clearance": false
///     }
/// })).unwrap();
///
/// let reference = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
/// let record = EmployeeRecord::derive(raw.clone(), reference);
/// assert!(record.tenure_years() > 4.99 && record.tenure_years() < 5.01);
/// assert!(record.has_higher_education());
/// assert_eq!(record.to_raw(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    #[serde(flatten)]
    raw: RawEmployee,
    #[serde(flatten)]
    derived: DerivedFields,
}

impl EmployeeRecord {
    /// Builds a record from a raw entry, computing derived fields as of `reference_date`.
    pub fn derive(raw: RawEmployee, reference_date: NaiveDate) -> Self {
        let derived = derive_fields(&raw, reference_date);
        Self { raw, derived }
    }

    /// Builds a record with explicit derived fields.
    #[cfg(test)]
    pub(crate) fn with_derived(raw: RawEmployee, derived: DerivedFields) -> Self {
        Self { raw, derived }
    }

    /// Converts the record back into the raw entry it was built from.
    pub fn to_raw(&self) -> RawEmployee {
        self.raw.clone()
    }

    /// Unique employee identifier.
    pub fn id(&self) -> &str {
        &self.raw.employee_id
    }

    /// Personal details.
    pub fn personal(&self) -> &PersonalInfo {
        &self.raw.personal_info
    }

    /// Employment details.
    pub fn work(&self) -> &WorkInfo {
        &self.raw.work_info
    }

    /// Education and miscellaneous details.
    pub fn additional(&self) -> &AdditionalInfo {
        &self.raw.additional_info
    }

    /// All derived fields.
    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.raw.personal_info.first_name, self.raw.personal_info.last_name
        )
    }

    /// Recorded gender.
    pub fn gender(&self) -> Gender {
        self.raw.personal_info.gender
    }

    /// Department name.
    pub fn department(&self) -> &str {
        &self.raw.work_info.department_name
    }

    /// Position title.
    pub fn position(&self) -> &str {
        &self.raw.work_info.position
    }

    /// Monthly salary.
    pub fn salary(&self) -> Decimal {
        self.raw.work_info.salary
    }

    /// Professional experience in years.
    pub fn experience_years(&self) -> f64 {
        self.raw.work_info.experience_years
    }

    /// Performance score.
    pub fn performance_score(&self) -> f64 {
        self.raw.work_info.performance_score
    }

    /// Whether the employee is a team lead.
    pub fn is_team_lead(&self) -> bool {
        self.raw.work_info.is_team_lead
    }

    /// Education label as written in the source document.
    pub fn education(&self) -> &str {
        &self.raw.additional_info.education
    }

    /// Age in fractional years.
    pub fn age(&self) -> f64 {
        self.derived.age
    }

    /// Tenure in fractional years.
    pub fn tenure_years(&self) -> f64 {
        self.derived.tenure_years
    }

    /// Age bucket.
    pub fn age_group(&self) -> AgeGroup {
        self.derived.age_group
    }

    /// Recognised education level, if any.
    pub fn education_level(&self) -> Option<EducationLevel> {
        self.derived.education_level
    }

    /// Source label of the recognised level, or the label as written when
    /// unrecognised. Spellings of one level share this key.
    pub fn canonical_education(&self) -> &str {
        self.education_level()
            .map_or(self.education(), |level| level.source_label())
    }

    /// Education ordinal, 0 when unrecognised.
    pub fn education_ordinal(&self) -> u8 {
        self.derived.education_ordinal
    }

    /// Performance score at or above `threshold`.
    pub fn is_high_performer(&self, threshold: f64) -> bool {
        self.performance_score() >= threshold
    }

    /// Tenure strictly below `threshold_years`.
    pub fn is_short_tenure(&self, threshold_years: f64) -> bool {
        self.tenure_years() < threshold_years
    }

    /// Master's level or above.
    pub fn has_higher_education(&self) -> bool {
        self.education_level().is_some_and(EducationLevel::is_higher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::RecordBuilder;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap()
    }

    #[test]
    fn test_canonical_education_merges_spellings() {
        let source = RecordBuilder::new("1").education("Магистратура").build();
        let english = RecordBuilder::new("2").education(" master ").build();
        let unknown = RecordBuilder::new("3").education("Курсы").build();

        assert_eq!(source.canonical_education(), "Магистратура");
        assert_eq!(english.canonical_education(), "Магистратура");
        assert_eq!(english.education(), " master ");
        assert_eq!(unknown.canonical_education(), "Курсы");
    }

    #[test]
    fn test_derive_computes_age_and_tenure() {
        let raw = RecordBuilder::new("e1")
            .birth_date(NaiveDate::from_ymd_opt(1995, 10, 5).unwrap())
            .hire_date(NaiveDate::from_ymd_opt(2023, 10, 5).unwrap())
            .raw();
        let record = EmployeeRecord::derive(raw, reference());

        assert!((record.age() - 30.0).abs() < 0.01);
        assert!((record.tenure_years() - 2.0).abs() < 0.01);
        assert_eq!(record.age_group(), AgeGroup::From26To35);
    }

    #[test]
    fn test_unknown_education_maps_to_ordinal_zero() {
        let raw = RecordBuilder::new("e1").education("Online courses").raw();
        let record = EmployeeRecord::derive(raw, reference());

        assert_eq!(record.education_level(), None);
        assert_eq!(record.education_ordinal(), 0);
        assert!(!record.has_higher_education());
    }

    #[test]
    fn test_to_raw_round_trips_every_field() {
        let raw = RecordBuilder::new("e42")
            .department("Отдел разработки")
            .education("Доктор наук")
            .team_lead(true)
            .raw();
        let record = EmployeeRecord::derive(raw.clone(), reference());
        assert_eq!(record.to_raw(), raw);
    }

    #[test]
    fn test_high_performer_threshold_is_inclusive() {
        let record = RecordBuilder::new("e1").performance(85.0).build();
        assert!(record.is_high_performer(DEFAULT_HIGH_PERFORMER_THRESHOLD));
        assert!(!record.is_high_performer(85.1));
    }

    #[test]
    fn test_short_tenure_threshold_is_exclusive() {
        let record = RecordBuilder::new("e1").tenure(2.0).build();
        assert!(!record.is_short_tenure(DEFAULT_SHORT_TENURE_THRESHOLD));
        assert!(record.is_short_tenure(2.5));
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        let record = RecordBuilder::new("e1").build();
        assert_eq!(record.full_name(), "Test e1");
    }
}
