//! Serde roundtrip and JsonSchema validation tests for the entity types.

use std::collections::BTreeMap;

use attest_core::entities::*;
use attest_core::enums::*;
use attest_core::responses::*;
use chrono::{NaiveDate, Utc};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reviewer() -> UserRef {
    UserRef {
        id: Some(4),
        username: "dlee".into(),
        email: Some("dlee@example.com".into()),
        first_name: Some("Dana".into()),
        last_name: Some("Lee".into()),
    }
}

fn submission() -> Submission {
    Submission {
        id: 31,
        category: 8,
        category_name: "Quarterly access review".into(),
        period_start_date: date(2025, 1, 1),
        period_end_date: date(2025, 3, 31),
        due_date: date(2025, 4, 10),
        status: SubmissionStatus::Submitted,
        submitted_by: Some(reviewer()),
        submitted_at: Some(Utc::now()),
        reviewed_by: None,
        reviewed_at: None,
        submission_notes: "Exported from the IdP".into(),
        review_notes: String::new(),
        files: vec![EvidenceFile {
            id: 90,
            filename: "access.csv".into(),
            file_url: Some("/media/access.csv".into()),
            google_drive_file_id: None,
            google_drive_file_url: None,
            file_size: 2048,
            mime_type: "text/csv".into(),
            uploaded_at: Utc::now(),
        }],
        comments: vec![Comment {
            id: 3,
            user: reviewer(),
            comment: "Looks complete".into(),
            created_at: Utc::now(),
        }],
        is_overdue: false,
        days_until_due: 6,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn category() -> Category {
    Category {
        id: 8,
        name: "Quarterly access review".into(),
        description: "Review of privileged accounts".into(),
        evidence_requirements: "User export with approver sign-off".into(),
        review_period: ReviewPeriod::Quarterly,
        category_group: CategoryGroupCode::AccessControls,
        google_drive_folder_id: "1AbC".into(),
        assigned_reviewers: vec![reviewer()],
        assignee: Some(reviewer()),
        approver: None,
        created_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        is_active: true,
        current_submission: Some(submission()),
        compliance_score: Some(87.5),
    }
}

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: 1,
        username: "admin".into(),
        email: "admin@example.com".into(),
        first_name: "Ada".into(),
        last_name: String::new(),
        google_drive_authenticated: Some(true),
    }
);

roundtrip_and_validate!(submission_roundtrip, Submission, submission());

roundtrip_and_validate!(category_roundtrip, Category, category());

roundtrip_and_validate!(
    category_detail_roundtrip,
    CategoryDetail,
    CategoryDetail {
        category: category(),
        past_submissions: vec![submission()],
    }
);

roundtrip_and_validate!(
    category_group_roundtrip,
    CategoryGroup,
    CategoryGroup {
        code: CategoryGroupCode::BackupRecovery,
        label: "Backup & Recovery".into(),
        count: 6,
        compliance_score: Some(50.0),
        pending_evidence_count: Some(2),
    }
);

roundtrip_and_validate!(
    category_patch_roundtrip,
    CategoryPatch,
    CategoryPatch {
        review_period: Some(ReviewPeriod::Monthly),
        approver_id: Some(Some(4)),
        ..CategoryPatch::default()
    }
);

roundtrip_and_validate!(
    notification_roundtrip,
    Notification,
    Notification {
        id: 77,
        notification_type: NotificationKind::PendingApproval,
        title: "Evidence awaiting approval".into(),
        message: "Quarterly access review was submitted".into(),
        category: Some(8),
        category_name: Some("Quarterly access review".into()),
        category_id: Some(8),
        submission: Some(31),
        submission_id: Some(31),
        is_read: false,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    document_day_roundtrip,
    DocumentDay,
    DocumentDay {
        date: date(2025, 4, 2),
        users: vec![UploaderFiles {
            user: reviewer(),
            files: vec![Document {
                id: 90,
                filename: "access.csv".into(),
                file_url: None,
                google_drive_file_id: Some("drv-1".into()),
                google_drive_file_url: Some("https://drive.example/drv-1".into()),
                file_size: 2048,
                mime_type: "text/csv".into(),
                uploaded_at: Utc::now(),
                uploaded_by: Some(reviewer()),
                category_name: Some("Quarterly access review".into()),
                submission_id: Some(31),
            }],
        }],
    }
);

roundtrip_and_validate!(
    analytics_roundtrip,
    Analytics,
    Analytics {
        overdue_count: 3,
        rejection_rate: 12.5,
        overall_compliance_score: 71.0,
        compliance_trend: ComplianceTrend::Up,
        overdue_aging: OverdueAging {
            one_to_seven_days: 2,
            eight_to_thirty_days: 1,
            over_30_days: 0,
        },
        upcoming_deadlines_by_period: BTreeMap::from([("QUARTERLY".to_string(), 4)]),
        upcoming_deadlines: vec![UpcomingDeadline {
            control_id: 8,
            control_name: "Quarterly access review".into(),
            due_date: date(2025, 4, 10),
            days_until_due: 6,
            review_period: ReviewPeriod::Quarterly,
            assignee_name: Some("Dana Lee".into()),
            status: "SUBMITTED".into(),
        }],
        bottleneck_approvers: vec![BottleneckApprover {
            username: "dlee".into(),
            name: "Dana Lee".into(),
            pending_count: 5,
        }],
        ..Analytics::default()
    }
);

roundtrip_and_validate!(
    paginated_roundtrip,
    Paginated<Category>,
    Paginated {
        count: 41,
        next: Some("http://localhost:8000/api/categories/?page=2".into()),
        previous: None,
        results: vec![category()],
    }
);
