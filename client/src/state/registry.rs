//! View logic for the registry list and the staff dashboard.
//!
//! DESIGN
//! ======
//! Records come from `net::api` as loose wire structs with optional fields.
//! The helpers here decide what each table cell shows, which staff rows match
//! a filter, and the role counts on the dashboard cards.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::net::types::Employee;
use crate::state::session::Role;

/// Placeholder for an empty registry field.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder for a staff account without a phone number.
pub const NOT_REGISTERED: &str = "Not registered";

/// Field value for display, or `fallback` when absent or blank.
#[must_use]
pub fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

/// Search text to send to the registry search endpoint. A blank box means
/// "list everything".
#[must_use]
pub fn search_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Totals shown above the staff table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub total: usize,
    pub employees: usize,
    pub admins: usize,
}

impl RoleCounts {
    #[must_use]
    pub fn tally(staff: &[Employee]) -> Self {
        staff.iter().fold(Self::default(), |mut counts, employee| {
            counts.total += 1;
            match employee.role() {
                Role::Admin => counts.admins += 1,
                Role::Employee => counts.employees += 1,
                Role::Other(_) => {}
            }
            counts
        })
    }
}

/// Case-insensitive match of `term` against name, email and username. An
/// empty term matches everyone.
#[must_use]
pub fn employee_matches(employee: &Employee, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [&employee.first_name, &employee.last_name, &employee.email, &employee.username]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

#[must_use]
pub fn filter_employees(staff: &[Employee], term: &str) -> Vec<Employee> {
    staff.iter().filter(|e| employee_matches(e, term)).cloned().collect()
}

#[must_use]
pub fn role_label(role: &Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::Employee | Role::Other(_) => "Employee",
    }
}

#[must_use]
pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}
