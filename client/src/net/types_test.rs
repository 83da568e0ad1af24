use super::*;

#[test]
fn register_request_uses_service_field_names() {
    let req = RegisterRequest {
        email: "ana@example.com".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Lopez".to_owned(),
        username: "ana".to_owned(),
        phone: "55551234".to_owned(),
        password: "secret123".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["nombre"], "Ana");
    assert_eq!(value["apellido"], "Lopez");
    assert!(value.get("first_name").is_none());
}

#[test]
fn auth_response_unwraps_nested_details() {
    let body = r#"{"authDetails":{"role":"ADMIN_ROLE","token":"abc","username":"ana","email":"x@y.z"}}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    let session = resp.auth_details.into_session().unwrap();
    assert_eq!(session, SessionRecord::new(Role::Admin, "abc").with_username("ana"));
}

#[test]
fn auth_details_without_token_is_not_a_session() {
    let details = AuthDetails { role: Some("ADMIN_ROLE".to_owned()), ..AuthDetails::default() };
    assert!(details.into_session().is_none());
}

#[test]
fn auth_details_with_empty_token_is_not_a_session() {
    let details = AuthDetails {
        role: Some("EMPLOYEE_ROLE".to_owned()),
        token: Some(String::new()),
        username: None,
    };
    assert!(details.into_session().is_none());
}

#[test]
fn auth_details_without_role_is_not_a_session() {
    let details = AuthDetails { token: Some("abc".to_owned()), ..AuthDetails::default() };
    assert!(details.into_session().is_none());
}

#[test]
fn error_body_msg_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
    assert!(body.msg.is_none());
    let body: ErrorBody = serde_json::from_str(r#"{"msg":"Usuario no encontrado"}"#).unwrap();
    assert_eq!(body.msg.as_deref(), Some("Usuario no encontrado"));
}

// =============================================================
// Registry and staff records
// =============================================================

#[test]
fn registry_user_reads_service_field_names() {
    let body = r#"{"users":[{"_id":"u1","numero":7,"nombreE":"Marta Perez","nombreN":"Luis Perez",
        "DPI":"1234567890101","comunidad":"San Juan","direccion":"Calle 3","telefono":"55551234","genero":"M"}]}"#;
    let resp: UsersResponse = serde_json::from_str(body).unwrap();
    let user = &resp.users[0];
    assert_eq!(user.number, Some(7));
    assert_eq!(user.guardian_name.as_deref(), Some("Marta Perez"));
    assert_eq!(user.child_name.as_deref(), Some("Luis Perez"));
    assert_eq!(user.dpi.as_deref(), Some("1234567890101"));
    assert_eq!(user.email, None);
}

#[test]
fn users_response_without_list_is_empty() {
    let resp: UsersResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(resp.users.is_empty());
}

#[test]
fn employee_reads_role_and_status() {
    let body = r#"{"employees":[{"_id":"e1","nombre":"Ana","apellido":"Lopez","email":"ana@example.com",
        "username":"ana","role":"ADMIN_ROLE","status":true}]}"#;
    let resp: EmployeesResponse = serde_json::from_str(body).unwrap();
    let employee = &resp.employees[0];
    assert_eq!(employee.role(), Role::Admin);
    assert!(employee.status);
    assert_eq!(employee.full_name(), "Ana Lopez");
    assert_eq!(employee.phone, None);
}

#[test]
fn employee_without_role_or_status_is_inactive_other() {
    let employee: Employee = serde_json::from_str(r#"{"nombre":"Ana"}"#).unwrap();
    assert_eq!(employee.role(), Role::Other(String::new()));
    assert!(!employee.status);
    assert_eq!(employee.full_name(), "Ana");
}
