use super::*;

fn employee(first: &str, last: &str, username: &str, role: &str) -> Employee {
    Employee {
        first_name: Some(first.to_owned()),
        last_name: Some(last.to_owned()),
        email: Some(format!("{username}@dmm.org")),
        username: Some(username.to_owned()),
        role: Some(role.to_owned()),
        ..Employee::default()
    }
}

fn staff() -> Vec<Employee> {
    vec![
        employee("Ana", "Lopez", "ana", "ADMIN_ROLE"),
        employee("Bruno", "Diaz", "bdiaz", "EMPLOYEE_ROLE"),
        employee("Carla", "Ruiz", "carla", "EMPLOYEE_ROLE"),
        employee("Dario", "Mejia", "dario", "GUEST"),
    ]
}

#[test]
fn display_or_falls_back_for_missing_and_blank() {
    assert_eq!(display_or(Some("San Juan"), NOT_SPECIFIED), "San Juan");
    assert_eq!(display_or(Some("  "), NOT_SPECIFIED), NOT_SPECIFIED);
    assert_eq!(display_or(None, NOT_REGISTERED), NOT_REGISTERED);
}

#[test]
fn blank_search_lists_everything() {
    assert_eq!(search_query("   "), None);
    assert_eq!(search_query(" 1234567890101 "), Some("1234567890101".to_owned()));
}

#[test]
fn role_counts_split_by_role() {
    assert_eq!(RoleCounts::tally(&staff()), RoleCounts { total: 4, employees: 2, admins: 1 });
    assert_eq!(RoleCounts::tally(&[]), RoleCounts::default());
}

#[test]
fn filter_matches_any_field_case_insensitively() {
    let staff = staff();
    let names = |term: &str| -> Vec<Option<String>> {
        filter_employees(&staff, term).into_iter().map(|e| e.username).collect()
    };
    assert_eq!(names("LOPEZ"), vec![Some("ana".to_owned())]);
    assert_eq!(names("bdiaz@"), vec![Some("bdiaz".to_owned())]);
    assert_eq!(names("ar"), vec![Some("carla".to_owned()), Some("dario".to_owned())]);
    assert_eq!(names("").len(), 4);
    assert!(names("zzz").is_empty());
}

#[test]
fn employee_without_fields_only_matches_empty_term() {
    let blank = Employee::default();
    assert!(employee_matches(&blank, ""));
    assert!(!employee_matches(&blank, "a"));
}

#[test]
fn labels() {
    assert_eq!(role_label(&Role::Admin), "Administrator");
    assert_eq!(role_label(&Role::Employee), "Employee");
    assert_eq!(role_label(&Role::from("GUEST")), "Employee");
    assert_eq!(status_label(true), "Active");
    assert_eq!(status_label(false), "Inactive");
}
