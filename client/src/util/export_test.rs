use super::*;
use crate::net::types::{Role, Status};

fn user(id: &str, name: &str, last_login: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{id}@example.com"),
        role: Role::Admin,
        status: Status::Inactive,
        last_login: last_login.map(str::to_owned),
        profile_image: None,
    }
}

#[test]
fn export_rows_has_one_row_per_user() {
    let users = vec![
        user("1", "Ada", Some("2024-03-05T14:07:09Z")),
        user("2", "Bob", None),
        user("3", "Cy", None),
    ];
    assert_eq!(export_rows(&users).len(), users.len());
    assert!(export_rows(&[]).is_empty());
}

#[test]
fn export_row_formats_fields() {
    let row = ExportRow::from_user(&user("1", "Ada", Some("2024-03-05T14:07:09Z")));
    assert_eq!(
        row,
        ExportRow {
            name: "Ada".to_owned(),
            email: "1@example.com".to_owned(),
            status: "inactive".to_owned(),
            role: "admin".to_owned(),
            last_login: "05/03/2024, 14:07:09".to_owned(),
        }
    );
}

#[test]
fn last_login_is_na_iff_absent() {
    let rows = export_rows(&[user("1", "Ada", Some("2024-03-05T14:07:09Z")), user("2", "Bob", None)]);
    assert_ne!(rows[0].last_login, "N/A");
    assert_eq!(rows[1].last_login, "N/A");
}

#[test]
fn export_rows_preserve_list_order() {
    let rows = export_rows(&[user("2", "Bob", None), user("1", "Ada", None)]);
    assert_eq!(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["Bob", "Ada"]);
}

#[test]
fn build_workbook_produces_zip_container() {
    let rows = export_rows(&[user("1", "Ada", None)]);
    let bytes = build_workbook(&rows).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
}

#[test]
fn build_workbook_accepts_empty_list() {
    let bytes = build_workbook(&[]).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn export_users_without_browser_reports_download_error() {
    let err = export_users(&[user("1", "Ada", None)]).unwrap_err();
    assert!(matches!(err, ExportError::Download(_)));
}
