//! Default accounts and starter roster
//!
//! Seed data applied on first run. Both administrative accounts start
//! with the shared default password and must rotate it at first login.

use chrono::{NaiveDate, Utc};

use crate::models::{Gender, Personnel, PersonnelStatus, Rank, Role, UserAccount};

/// Password every seeded account starts with; rotation is forced at
/// first login
pub const DEFAULT_PASSWORD: &str = "Admin@123";

/// Email of the seeded super admin account
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@agency.gov";

/// Email of the seeded admin account
pub const ADMIN_EMAIL: &str = "admin@agency.gov";

/// The administrative accounts guaranteed to exist after initialization
pub fn default_accounts() -> Vec<UserAccount> {
    vec![
        account("user-1", "Super", "Admin", SUPER_ADMIN_EMAIL, Role::SuperAdmin, Rank::Jdir),
        account("user-2", "Admin", "User", ADMIN_EMAIL, Role::Admin, Rank::Jssup),
    ]
}

fn account(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
    rank: Rank,
) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: None,
        extension: None,
        email: email.to_string(),
        password: DEFAULT_PASSWORD.to_string(),
        role,
        rank,
        is_active: true,
        must_change_password: true,
        last_login: None,
        created_at: Utc::now(),
        created_by: None,
    }
}

/// Starter roster seeded when the personnel collection is empty
pub fn starter_personnel() -> Vec<Personnel> {
    vec![
        Personnel {
            id: "p-1".to_string(),
            rank: Rank::Jsinsp,
            last_name: "Bautista".to_string(),
            first_name: "Carlos".to_string(),
            middle_name: Some("Reyes".to_string()),
            extension: None,
            gender: Gender::Male,
            office_assignment: vec!["Administration".to_string()],
            designation: vec!["Warden".to_string()],
            education: "BS Criminology".to_string(),
            eligibility: "Criminologist (RA 6506)".to_string(),
            date_of_birth: date(1978, 5, 21),
            date_of_appointment: date(2003, 2, 10),
            date_of_last_promotion: Some(date(2019, 7, 1)),
            training_type: Some("Officer Basic Course".to_string()),
            status: PersonnelStatus::Active,
            remarks: None,
        },
        Personnel {
            id: "p-2".to_string(),
            rank: Rank::Sjo2,
            last_name: "Mendoza".to_string(),
            first_name: "Liza".to_string(),
            middle_name: Some("Cruz".to_string()),
            extension: None,
            gender: Gender::Female,
            office_assignment: vec!["Operations".to_string()],
            designation: vec!["Escort".to_string()],
            education: "BS Criminology".to_string(),
            eligibility: "Penology Officer Eligibility".to_string(),
            date_of_birth: date(1985, 9, 30),
            date_of_appointment: date(2008, 11, 3),
            date_of_last_promotion: Some(date(2021, 3, 15)),
            training_type: None,
            status: PersonnelStatus::Active,
            remarks: None,
        },
        Personnel {
            id: "p-3".to_string(),
            rank: Rank::Jo1,
            last_name: "Navarro".to_string(),
            first_name: "Ramon".to_string(),
            middle_name: None,
            extension: Some("Jr.".to_string()),
            gender: Gender::Male,
            office_assignment: vec!["Custodial".to_string()],
            designation: vec!["Gater".to_string()],
            education: "BS Criminology".to_string(),
            eligibility: "CSC Professional".to_string(),
            date_of_birth: date(1993, 1, 17),
            date_of_appointment: date(2018, 6, 25),
            date_of_last_promotion: None,
            training_type: Some("Basic Recruit Course".to_string()),
            status: PersonnelStatus::Active,
            remarks: None,
        },
        Personnel {
            id: "p-4".to_string(),
            rank: Rank::Nup,
            last_name: "Villanueva".to_string(),
            first_name: "Grace".to_string(),
            middle_name: Some("Santos".to_string()),
            extension: None,
            gender: Gender::Female,
            office_assignment: vec!["Records".to_string()],
            designation: vec!["Records Officer".to_string()],
            education: "BS Office Administration".to_string(),
            eligibility: "CSC Sub-Professional".to_string(),
            date_of_birth: date(1988, 12, 5),
            date_of_appointment: date(2014, 8, 18),
            date_of_last_promotion: None,
            training_type: None,
            status: PersonnelStatus::Active,
            remarks: None,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accounts() {
        let accounts = default_accounts();
        assert_eq!(accounts.len(), 2);

        assert_eq!(accounts[0].email, SUPER_ADMIN_EMAIL);
        assert_eq!(accounts[0].role, Role::SuperAdmin);
        assert_eq!(accounts[1].email, ADMIN_EMAIL);
        assert_eq!(accounts[1].role, Role::Admin);

        for account in &accounts {
            assert_eq!(account.password, DEFAULT_PASSWORD);
            assert!(account.must_change_password);
            assert!(account.is_active);
            assert!(account.validate().is_ok());
        }
    }

    #[test]
    fn test_starter_personnel_is_valid() {
        let roster = starter_personnel();
        assert!(!roster.is_empty());

        for member in &roster {
            assert!(member.validate().is_ok(), "invalid seed: {}", member.id);
        }

        let mut ids: Vec<_> = roster.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}
