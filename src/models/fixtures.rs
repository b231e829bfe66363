//! Record builders shared by unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::derived::{AgeGroup, DerivedFields};
use super::education::{EducationLevel, education_ordinal};
use super::employee::EmployeeRecord;
use super::raw::{AdditionalInfo, Gender, PersonalInfo, RawEmployee, WorkInfo};

pub(crate) struct RecordBuilder {
    id: String,
    department: String,
    position: String,
    gender: Gender,
    age: f64,
    tenure: f64,
    performance: f64,
    experience: f64,
    salary: Decimal,
    education: String,
    team_lead: bool,
    birth_date: NaiveDate,
    hire_date: NaiveDate,
}

impl RecordBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            gender: Gender::Male,
            age: 30.0,
            tenure: 3.0,
            performance: 75.0,
            experience: 5.0,
            salary: Decimal::new(100_000, 0),
            education: EducationLevel::Bachelor.source_label().to_string(),
            team_lead: false,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    pub(crate) fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub(crate) fn position(mut self, position: &str) -> Self {
        self.position = position.to_string();
        self
    }

    pub(crate) fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub(crate) fn age(mut self, age: f64) -> Self {
        self.age = age;
        self
    }

    pub(crate) fn tenure(mut self, tenure: f64) -> Self {
        self.tenure = tenure;
        self
    }

    pub(crate) fn performance(mut self, performance: f64) -> Self {
        self.performance = performance;
        self
    }

    pub(crate) fn experience(mut self, experience: f64) -> Self {
        self.experience = experience;
        self
    }

    pub(crate) fn salary(mut self, salary: i64) -> Self {
        self.salary = Decimal::new(salary, 0);
        self
    }

    pub(crate) fn education(mut self, education: &str) -> Self {
        self.education = education.to_string();
        self
    }

    pub(crate) fn level(self, level: EducationLevel) -> Self {
        self.education(level.source_label())
    }

    pub(crate) fn team_lead(mut self, team_lead: bool) -> Self {
        self.team_lead = team_lead;
        self
    }

    pub(crate) fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = date;
        self
    }

    pub(crate) fn hire_date(mut self, date: NaiveDate) -> Self {
        self.hire_date = date;
        self
    }

    pub(crate) fn raw(&self) -> RawEmployee {
        RawEmployee {
            employee_id: self.id.clone(),
            personal_info: PersonalInfo {
                first_name: "Test".to_string(),
                last_name: self.id.clone(),
                middle_name: None,
                full_name: format!("Test {}", self.id),
                gender: self.gender,
                birth_date: self.birth_date,
                email: format!("{}@example.com", self.id),
                phone: String::new(),
                address: String::new(),
            },
            work_info: WorkInfo {
                department_id: "1".to_string(),
                department_name: self.department.clone(),
                position: self.position.clone(),
                salary: self.salary,
                hire_date: self.hire_date,
                experience_years: self.experience,
                performance_score: self.performance,
                skills: vec![],
                is_team_lead: self.team_lead,
                work_schedule: "full-time".to_string(),
            },
            additional_info: AdditionalInfo {
                education: self.education.clone(),
                language_skills: vec![],
                certifications: vec![],
                has_company_car: false,
                security_clearance: false,
            },
        }
    }

    /// Builds a record whose age and tenure are exactly the configured values.
    pub(crate) fn build(self) -> EmployeeRecord {
        let education_level = EducationLevel::from_label(&self.education);
        let derived = DerivedFields {
            age: self.age,
            tenure_years: self.tenure,
            age_group: AgeGroup::from_age(self.age),
            education_level,
            education_ordinal: education_ordinal(education_level),
        };
        EmployeeRecord::with_derived(self.raw(), derived)
    }
}
