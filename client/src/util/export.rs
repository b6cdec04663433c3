//! Spreadsheet export of the loaded user list.
//!
//! Export is purely local: it formats whatever the directory currently holds,
//! writes an `.xlsx` workbook in memory, and hands the bytes to the browser as
//! a download. No request is made.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::time::Duration;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::datetime::{EXPORT_MISSING, Layout, format_local};
use crate::net::types::User;

pub const EXPORT_FILE_NAME: &str = "users.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Users";
pub const EXPORT_COLUMNS: [&str; 5] = ["name", "email", "status", "role", "lastLogin"];

/// How long the download's object URL outlives the click. Revoking it in the
/// same tick can cancel the download in some browsers.
pub const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(40);

#[cfg(feature = "hydrate")]
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("workbook: {0}")]
    Workbook(#[from] XlsxError),
    #[error("browser download failed: {0}")]
    Download(String),
}

/// One spreadsheet row, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
    pub last_login: String,
}

impl ExportRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            status: user.status.as_str().to_owned(),
            role: user.role.as_str().to_owned(),
            last_login: format_local(user.last_login.as_deref(), Layout::DateTime, EXPORT_MISSING),
        }
    }

    fn cells(&self) -> [&str; 5] {
        [&self.name, &self.email, &self.status, &self.role, &self.last_login]
    }
}

/// One row per user, in list order.
pub fn export_rows(users: &[User]) -> Vec<ExportRow> {
    users.iter().map(ExportRow::from_user).collect()
}

/// Serialize rows into an in-memory `.xlsx` file with a header row.
///
/// # Errors
///
/// Returns [`ExportError::Workbook`] if the workbook cannot be assembled.
pub fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, title) in (0u16..).zip(EXPORT_COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }
    for (row, record) in (1u32..).zip(rows) {
        for (col, value) in (0u16..).zip(record.cells()) {
            sheet.write_string(row, col, value)?;
        }
    }
    sheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook for `users` and start a browser download.
///
/// Returns the number of exported rows.
///
/// # Errors
///
/// Returns an [`ExportError`] if the workbook cannot be built or the browser
/// refuses the download.
pub fn export_users(users: &[User]) -> Result<usize, ExportError> {
    let rows = export_rows(users);
    let bytes = build_workbook(&rows)?;
    download(&bytes, EXPORT_FILE_NAME)?;
    Ok(rows.len())
}

/// Offer `bytes` to the user as a file named `file_name`.
#[cfg(feature = "hydrate")]
fn download(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| ExportError::Download(format!("{e:?}"));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("anchor cast failed".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(DOWNLOAD_URL_TTL).await;
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("revoking export url failed: {e:?}");
        }
    });
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn download(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    let _ = (bytes, file_name);
    Err(ExportError::Download("not available on server".to_owned()))
}
