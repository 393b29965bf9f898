//! Field-level change summaries
//!
//! Each record type carries a table of field descriptors pairing a display
//! label with a projection to comparable text. Diffing walks the table in
//! order and emits one fragment per changed field, so summaries list
//! fields in a stable order no matter which fields changed.

use chrono::NaiveDate;

use crate::models::{Personnel, UserAccount};

/// One diffable field: a display label and a projection to text
pub struct FieldDescriptor<T> {
    pub label: &'static str,
    pub value: fn(&T) -> String,
}

/// Diff table for one record type
///
/// Tables are declared as constants, so the record type must own its
/// data (`T: 'static`).
pub struct FieldTable<T: 'static> {
    /// Name used to prefix update summaries, taken from the prior record
    pub display_name: fn(&T) -> String,
    /// Summary used when there is no prior record
    pub created: fn(&T) -> String,
    pub fields: &'static [FieldDescriptor<T>],
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn opt_date(value: Option<NaiveDate>) -> String {
    value.map(date).unwrap_or_default()
}

/// Diff table for roster records
pub const PERSONNEL_FIELDS: FieldTable<Personnel> = FieldTable {
    display_name: |p: &Personnel| p.display_name(),
    created: |p: &Personnel| format!("Added New Personnel: {}", p.short_label()),
    fields: &[
        FieldDescriptor {
            label: "Rank",
            value: |p: &Personnel| p.rank.to_string(),
        },
        FieldDescriptor {
            label: "Last Name",
            value: |p: &Personnel| p.last_name.clone(),
        },
        FieldDescriptor {
            label: "First Name",
            value: |p: &Personnel| p.first_name.clone(),
        },
        FieldDescriptor {
            label: "Middle Name",
            value: |p: &Personnel| opt_str(p.middle_name.as_deref()),
        },
        FieldDescriptor {
            label: "Extension",
            value: |p: &Personnel| opt_str(p.extension.as_deref()),
        },
        FieldDescriptor {
            label: "Gender",
            value: |p: &Personnel| p.gender.to_string(),
        },
        FieldDescriptor {
            label: "Office Assignment",
            value: |p: &Personnel| p.office_assignment.join(", "),
        },
        FieldDescriptor {
            label: "Designation",
            value: |p: &Personnel| p.designation.join(", "),
        },
        FieldDescriptor {
            label: "Education",
            value: |p: &Personnel| p.education.clone(),
        },
        FieldDescriptor {
            label: "Eligibility",
            value: |p: &Personnel| p.eligibility.clone(),
        },
        FieldDescriptor {
            label: "Date of Birth",
            value: |p: &Personnel| date(p.date_of_birth),
        },
        FieldDescriptor {
            label: "Date of Appointment",
            value: |p: &Personnel| date(p.date_of_appointment),
        },
        FieldDescriptor {
            label: "Date Last Promotion",
            value: |p: &Personnel| opt_date(p.date_of_last_promotion),
        },
        FieldDescriptor {
            label: "Training",
            value: |p: &Personnel| opt_str(p.training_type.as_deref()),
        },
        FieldDescriptor {
            label: "Status",
            value: |p: &Personnel| p.status.to_string(),
        },
        FieldDescriptor {
            label: "Remarks",
            value: |p: &Personnel| opt_str(p.remarks.as_deref()),
        },
    ],
};

/// Diff table for administrative accounts
///
/// Deliberately narrow: credentials never appear here. Password updates
/// are reported by callers as a fixed `Password: (Updated)` fragment.
pub const USER_FIELDS: FieldTable<UserAccount> = FieldTable {
    display_name: |u: &UserAccount| u.display_name(),
    created: |u: &UserAccount| format!("Created new user: {}", u.short_label()),
    fields: &[
        FieldDescriptor {
            label: "Rank",
            value: |u: &UserAccount| u.rank.to_string(),
        },
        FieldDescriptor {
            label: "First Name",
            value: |u: &UserAccount| u.first_name.clone(),
        },
        FieldDescriptor {
            label: "Last Name",
            value: |u: &UserAccount| u.last_name.clone(),
        },
        FieldDescriptor {
            label: "Email",
            value: |u: &UserAccount| u.email.clone(),
        },
        FieldDescriptor {
            label: "Role",
            value: |u: &UserAccount| u.role.to_string(),
        },
        FieldDescriptor {
            label: "Active Status",
            value: |u: &UserAccount| u.is_active.to_string(),
        },
    ],
};

/// Compare two records field by field
///
/// Returns one `Label: "old" → "new"` fragment per changed field, in
/// table order. Unchanged fields produce nothing.
pub fn field_changes<T>(old: &T, new: &T, fields: &[FieldDescriptor<T>]) -> Vec<String> {
    let mut changes = Vec::new();
    for field in fields {
        let before = (field.value)(old);
        let after = (field.value)(new);
        if before != after {
            changes.push(format!("{}: \"{}\" → \"{}\"", field.label, before, after));
        }
    }
    changes
}

/// Join change fragments under a display-name prefix
///
/// An empty fragment list still yields a summary, so a no-op save is
/// visible in the log.
pub fn summarize(display_name: &str, fragments: &[String]) -> String {
    if fragments.is_empty() {
        format!("{} | No specific changes detected", display_name)
    } else {
        format!("{} | {}", display_name, fragments.join(" | "))
    }
}

/// Full change summary for a save
///
/// With a prior record this diffs against it, prefixing with the prior
/// record's display name. Without one it reports a creation.
pub fn diff_summary<T>(old: Option<&T>, new: &T, table: &FieldTable<T>) -> String {
    match old {
        Some(previous) => {
            let fragments = field_changes(previous, new, table.fields);
            summarize(&(table.display_name)(previous), &fragments)
        }
        None => (table.created)(new),
    }
}
