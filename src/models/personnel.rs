//! Roster personnel model
//!
//! A [`Personnel`] record holds the service history of one roster member:
//! identity, rank, assignments, key dates, and employment status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::rank::Rank;

/// Gender of a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Employment status of a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonnelStatus {
    Active,
    Retired,
    Suspended,
}

impl fmt::Display for PersonnelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Retired => write!(f, "Retired"),
            Self::Suspended => write!(f, "Suspended"),
        }
    }
}

impl Default for PersonnelStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A member of the personnel roster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    /// Unique identifier, stable across updates
    pub id: String,

    pub rank: Rank,

    pub last_name: String,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Name suffix such as "Jr." or "III"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    pub gender: Gender,

    /// Offices the member is assigned to, possibly several
    #[serde(default)]
    pub office_assignment: Vec<String>,

    /// Duty designations held, possibly several
    #[serde(default)]
    pub designation: Vec<String>,

    /// Highest educational attainment
    pub education: String,

    /// Civil service eligibility
    pub eligibility: String,

    pub date_of_birth: NaiveDate,

    pub date_of_appointment: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_last_promotion: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_type: Option<String>,

    pub status: PersonnelStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Personnel {
    /// Create a new active record with a generated identity
    pub fn new(
        rank: Rank,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
        date_of_appointment: NaiveDate,
    ) -> Self {
        Self {
            id: format!("p-{}", Uuid::new_v4()),
            rank,
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: None,
            extension: None,
            gender,
            office_assignment: Vec::new(),
            designation: Vec::new(),
            education: String::new(),
            eligibility: String::new(),
            date_of_birth,
            date_of_appointment,
            date_of_last_promotion: None,
            training_type: None,
            status: PersonnelStatus::Active,
            remarks: None,
        }
    }

    /// The name operators know the member by: first, optional middle, last
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Short roster label, e.g. `JO1 Cruz, Pedro`
    pub fn short_label(&self) -> String {
        format!("{} {}, {}", self.rank, self.last_name, self.first_name)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), PersonnelValidationError> {
        if self.last_name.trim().is_empty() {
            return Err(PersonnelValidationError::EmptyLastName);
        }
        if self.first_name.trim().is_empty() {
            return Err(PersonnelValidationError::EmptyFirstName);
        }
        if self.date_of_appointment < self.date_of_birth {
            return Err(PersonnelValidationError::AppointmentBeforeBirth);
        }
        Ok(())
    }
}

impl fmt::Display for Personnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_label())
    }
}

/// Validation errors for personnel records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonnelValidationError {
    EmptyLastName,
    EmptyFirstName,
    AppointmentBeforeBirth,
}

impl fmt::Display for PersonnelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLastName => write!(f, "Last name cannot be empty"),
            Self::EmptyFirstName => write!(f, "First name cannot be empty"),
            Self::AppointmentBeforeBirth => {
                write!(f, "Date of appointment cannot precede date of birth")
            }
        }
    }
}

impl std::error::Error for PersonnelValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_personnel() -> Personnel {
        Personnel::new(
            Rank::Jo1,
            "Cruz",
            "Pedro",
            Gender::Male,
            date(1990, 3, 14),
            date(2015, 6, 1),
        )
    }

    #[test]
    fn test_new_record_defaults() {
        let member = sample_personnel();
        assert!(member.id.starts_with("p-"));
        assert_eq!(member.status, PersonnelStatus::Active);
        assert!(member.office_assignment.is_empty());
        assert!(member.date_of_last_promotion.is_none());
    }

    #[test]
    fn test_display_name() {
        let mut member = sample_personnel();
        assert_eq!(member.display_name(), "Pedro Cruz");

        member.middle_name = Some("San".into());
        assert_eq!(member.display_name(), "Pedro San Cruz");
    }

    #[test]
    fn test_short_label() {
        let member = sample_personnel();
        assert_eq!(member.short_label(), "JO1 Cruz, Pedro");
    }

    #[test]
    fn test_validation() {
        let mut member = sample_personnel();
        assert!(member.validate().is_ok());

        member.last_name = "  ".into();
        assert_eq!(member.validate(), Err(PersonnelValidationError::EmptyLastName));

        member.last_name = "Cruz".into();
        member.date_of_appointment = date(1980, 1, 1);
        assert_eq!(
            member.validate(),
            Err(PersonnelValidationError::AppointmentBeforeBirth)
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PersonnelStatus::Active.to_string(), "Active");
        assert_eq!(PersonnelStatus::Retired.to_string(), "Retired");
        assert_eq!(PersonnelStatus::Suspended.to_string(), "Suspended");
    }

    #[test]
    fn test_serialization_field_names() {
        let member = sample_personnel();
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"officeAssignment\""));
        assert!(json.contains("\"dateOfBirth\""));
        assert!(json.contains("\"dateOfAppointment\""));
        assert!(json.contains("\"Male\""));
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "p-1",
            "rank": "NUP",
            "lastName": "Santos",
            "firstName": "Ana",
            "gender": "Female",
            "education": "BS Accountancy",
            "eligibility": "CSC Professional",
            "dateOfBirth": "1988-11-02",
            "dateOfAppointment": "2012-04-16",
            "status": "Active"
        }"#;

        let member: Personnel = serde_json::from_str(json).unwrap();
        assert_eq!(member.rank, Rank::Nup);
        assert!(member.office_assignment.is_empty());
        assert!(member.designation.is_empty());
        assert!(member.remarks.is_none());
    }
}
