//! Derived employee fields.
//!
//! Age, tenure, age group and education level are computed once, from a
//! reference date passed in by the caller. Nothing here reads the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::education::{EducationLevel, education_ordinal};
use super::raw::RawEmployee;

/// Average number of days in a year, used for age and tenure.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Age bucket. Every bucket is closed on its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Up to and including 25 years.
    #[serde(rename = "18-25")]
    UpTo25,
    /// Over 25, up to and including 35 years.
    #[serde(rename = "26-35")]
    From26To35,
    /// Over 35, up to and including 45 years.
    #[serde(rename = "36-45")]
    From36To45,
    /// Over 45, up to and including 55 years.
    #[serde(rename = "46-55")]
    From46To55,
    /// Over 55, up to and including 65 years.
    #[serde(rename = "56-65")]
    From56To65,
    /// Over 65 years.
    #[serde(rename = "65+")]
    Over65,
}

impl AgeGroup {
    /// All buckets, youngest first.
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::UpTo25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::From56To65,
        AgeGroup::Over65,
    ];

    /// Buckets an age given in fractional years.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_analytics::models::AgeGroup;
    ///
    /// assert_eq!(AgeGroup::from_age(25.0), AgeGroup::UpTo25);
    /// assert_eq!(AgeGroup::from_age(25.01), AgeGroup::From26To35);
    /// assert_eq!(AgeGroup::from_age(70.0), AgeGroup::Over65);
    /// ```
    pub fn from_age(age: f64) -> Self {
        if age <= 25.0 {
            AgeGroup::UpTo25
        } else if age <= 35.0 {
            AgeGroup::From26To35
        } else if age <= 45.0 {
            AgeGroup::From36To45
        } else if age <= 55.0 {
            AgeGroup::From46To55
        } else if age <= 65.0 {
            AgeGroup::From56To65
        } else {
            AgeGroup::Over65
        }
    }

    /// Display label, e.g. "36-45".
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::UpTo25 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::From56To65 => "56-65",
            AgeGroup::Over65 => "65+",
        }
    }
}

/// Fields computed from a raw entry and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// Age in fractional years.
    pub age: f64,
    /// Tenure in fractional years.
    pub tenure_years: f64,
    /// Age bucket.
    pub age_group: AgeGroup,
    /// Recognised education level, if any.
    pub education_level: Option<EducationLevel>,
    /// Education ordinal, 0 when unrecognised.
    pub education_ordinal: u8,
}

/// Fractional years from `from` to `to`, never negative.
///
/// Dates after the reference date clamp to zero.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    let days = (to - from).num_days() as f64;
    (days / DAYS_PER_YEAR).max(0.0)
}

/// Computes the derived fields of a raw entry as of `reference_date`.
pub fn derive_fields(raw: &RawEmployee, reference_date: NaiveDate) -> DerivedFields {
    let age = years_between(raw.personal_info.birth_date, reference_date);
    let tenure_years = years_between(raw.work_info.hire_date, reference_date);

    let education_level = EducationLevel::from_label(&raw.additional_info.education);
    if education_level.is_none() {
        warn!(
            employee_id = %raw.employee_id,
            education = %raw.additional_info.education,
            "Unrecognised education level, using ordinal 0"
        );
    }

    DerivedFields {
        age,
        tenure_years,
        age_group: AgeGroup::from_age(age),
        education_level,
        education_ordinal: education_ordinal(education_level),
    }
}
