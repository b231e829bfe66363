//! Core data models for the workforce analytics engine.
//!
//! Raw entries as imported, the immutable employee record built from them,
//! and the closed enumerations (education level, age group) the analyzers key on.

mod derived;
mod education;
mod employee;
#[cfg(test)]
pub(crate) mod fixtures;
mod raw;

pub use derived::{AgeGroup, DAYS_PER_YEAR, DerivedFields, derive_fields, years_between};
pub use education::{
    EducationLevel, UNKNOWN_EDUCATION_ORDINAL, UNKNOWN_EDUCATION_POINTS, education_ordinal,
    education_points,
};
pub use employee::{
    DEFAULT_HIGH_PERFORMER_THRESHOLD, DEFAULT_SHORT_TENURE_THRESHOLD, EmployeeRecord,
};
pub use raw::{AdditionalInfo, Gender, PersonalInfo, RawEmployee, WorkInfo};
