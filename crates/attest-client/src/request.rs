//! Retained request descriptions.
//!
//! Requests are kept as plain data rather than `reqwest::RequestBuilder`s so
//! the same operation can be rebuilt and resent after a CSRF refresh,
//! multipart uploads included.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Endpoint that issues the `csrftoken` cookie.
pub const CSRF_PATH: &str = "/auth/csrf/";
/// Endpoint that authenticates a user; exempt from the CSRF policy.
pub const LOGIN_PATH: &str = "/auth/login/";

/// A file to upload as part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Build from a name and contents, guessing the MIME type from the
    /// extension.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// MIME type for the common evidence formats; anything else is
/// `application/octet-stream`.
#[must_use]
pub fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormField>),
}

/// One logical API operation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, starting and ending with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn multipart(mut self, fields: Vec<FormField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// POST/PUT/PATCH/DELETE.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self.method,
            Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        )
    }

    /// Login and the token endpoint itself never carry a CSRF header and are
    /// never retried.
    #[must_use]
    pub fn is_csrf_exempt(&self) -> bool {
        self.path.contains(LOGIN_PATH) || self.path.contains(CSRF_PATH)
    }

    #[must_use]
    pub fn needs_csrf_token(&self) -> bool {
        self.is_mutating() && !self.is_csrf_exempt()
    }

    /// Build a fresh multipart form from the retained fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if a part's MIME type is rejected.
    pub(crate) fn build_form(fields: &[FormField]) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for field in fields {
            form = match field {
                FormField::Text { name, value } => form.text(name.clone(), value.clone()),
                FormField::File { name, file } => {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.mime_type)?;
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

/// `(key, value)` pair for a query string.
pub(crate) fn pair(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Method::POST, "/categories/", true)]
    #[case(Method::PATCH, "/categories/4/", true)]
    #[case(Method::DELETE, "/categories/4/", true)]
    #[case(Method::GET, "/categories/", false)]
    #[case(Method::POST, "/auth/login/", false)]
    #[case(Method::GET, "/auth/csrf/", false)]
    fn csrf_header_policy(#[case] method: Method, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(ApiRequest::new(method, path).needs_csrf_token(), expected);
    }

    #[rstest]
    #[case("evidence.PDF", "application/pdf")]
    #[case("screenshot.jpeg", "image/jpeg")]
    #[case("report.xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")]
    #[case("README", "application/octet-stream")]
    fn mime_from_extension(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(mime_for(name), expected);
    }

    #[test]
    fn form_rebuilds_from_retained_parts() {
        let fields = vec![
            FormField::File {
                name: "files".into(),
                file: UploadFile::new("a.txt", b"hello".to_vec()),
            },
            FormField::Text {
                name: "notes".into(),
                value: "quarterly export".into(),
            },
        ];
        assert!(ApiRequest::build_form(&fields).is_ok());
        assert!(ApiRequest::build_form(&fields).is_ok());
    }
}
