use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use attest_client::UploadFile;
use attest_core::errors::CoreError;
use chrono::NaiveDate;

/// Parse a user-supplied enum value through its `FromStr`, which accepts
/// case and dash/underscore variants.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_optional<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    raw.map(|value| parse_enum(value, field)).transpose()
}

/// `YYYY-MM-DD`.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Read a file from disk into an upload part named after the file.
pub fn read_upload(path: &str) -> anyhow::Result<UploadFile> {
    let path = Path::new(path);
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    Ok(UploadFile::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use attest_core::enums::{ReviewPeriod, StatusFilter};

    use super::*;

    #[test]
    fn parses_dashed_and_cased_variants() {
        let status: StatusFilter = parse_enum("under-review", "status").expect("should parse");
        assert_eq!(status, StatusFilter::UnderReview);
        let period: ReviewPeriod = parse_enum("Monthly", "review period").expect("should parse");
        assert_eq!(period, ReviewPeriod::Monthly);
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_enum::<StatusFilter>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn dates_must_be_iso() {
        assert_eq!(
            parse_date("2025-04-30", "due date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
        );
        assert!(parse_date("30/04/2025", "due date").is_err());
        assert_eq!(parse_optional_date(None, "from").unwrap(), None);
    }

    #[test]
    fn reads_upload_with_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evidence.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let upload = read_upload(path.to_str().unwrap()).unwrap();
        assert_eq!(upload.file_name, "evidence.pdf");
        assert_eq!(upload.mime_type, "application/pdf");
        assert_eq!(upload.size(), 8);
    }

    #[test]
    fn missing_upload_names_the_path() {
        let err = read_upload("/nonexistent/attest/evidence.pdf").expect_err("should fail");
        assert!(err.to_string().contains("evidence.pdf"));
    }
}
