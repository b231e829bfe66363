//! Education levels and their lookup tables.
//!
//! Education is a closed, ordered enumeration. Every table that keys off an
//! education level (ordinal, display label, readiness points) lives here so
//! that unrecognised values have exactly one documented fallback.

use serde::{Deserialize, Serialize};

/// Ordinal reported for an education value outside the closed enumeration.
pub const UNKNOWN_EDUCATION_ORDINAL: u8 = 0;

/// Promotion-readiness points awarded for an unrecognised education value.
pub const UNKNOWN_EDUCATION_POINTS: u32 = 5;

/// A recognised education level, declared from lowest to highest.
///
/// The derived `Ord` follows declaration order, so comparisons between
/// levels agree with [`EducationLevel::ordinal`].
///
/// # Example
///
/// ```
/// use workforce_analytics::models::EducationLevel;
///
/// let level = EducationLevel::from_label("Магистратура").unwrap();
/// assert_eq!(level, EducationLevel::Master);
/// assert_eq!(level.ordinal(), 3);
/// assert!(level > EducationLevel::Bachelor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Vocational or technical secondary education.
    Vocational,
    /// Bachelor's degree (general higher education).
    Bachelor,
    /// Master's degree.
    Master,
    /// Candidate of sciences (PhD equivalent).
    PhdCandidate,
    /// Doctor of sciences.
    DoctorOfSciences,
}

impl EducationLevel {
    /// All levels, lowest first.
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::Vocational,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::PhdCandidate,
        EducationLevel::DoctorOfSciences,
    ];

    /// Parses a level from either the source-data label or its English label.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|level| {
            level.source_label() == label || level.label().eq_ignore_ascii_case(label)
        })
    }

    /// Position in the ordering, 1 (vocational) through 5 (doctor).
    pub fn ordinal(self) -> u8 {
        match self {
            EducationLevel::Vocational => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::PhdCandidate => 4,
            EducationLevel::DoctorOfSciences => 5,
        }
    }

    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Vocational => "Vocational/Technical",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhdCandidate => "PhD Candidate",
            EducationLevel::DoctorOfSciences => "Doctor of Sciences",
        }
    }

    /// Label used by the personnel records this engine imports.
    pub fn source_label(self) -> &'static str {
        match self {
            EducationLevel::Vocational => "Среднее специальное",
            EducationLevel::Bachelor => "Высшее",
            EducationLevel::Master => "Магистратура",
            EducationLevel::PhdCandidate => "Кандидат наук",
            EducationLevel::DoctorOfSciences => "Доктор наук",
        }
    }

    /// Master's level and above count as higher education.
    pub fn is_higher(self) -> bool {
        self >= EducationLevel::Master
    }

    /// Points contributed to the promotion-readiness score (max 10).
    pub fn readiness_points(self) -> u32 {
        match self {
            EducationLevel::DoctorOfSciences => 10,
            EducationLevel::PhdCandidate => 9,
            EducationLevel::Master => 8,
            EducationLevel::Bachelor => 6,
            EducationLevel::Vocational => 4,
        }
    }
}

/// Ordinal of an optional level, with unknown values mapped to 0.
pub fn education_ordinal(level: Option<EducationLevel>) -> u8 {
    level.map_or(UNKNOWN_EDUCATION_ORDINAL, EducationLevel::ordinal)
}

/// Readiness points of an optional level, with unknown values mapped to 5.
pub fn education_points(level: Option<EducationLevel>) -> u32 {
    level.map_or(UNKNOWN_EDUCATION_POINTS, EducationLevel::readiness_points)
}
