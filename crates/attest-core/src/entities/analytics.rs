//! Dashboard and analytics payloads. Read-only; the server computes every
//! figure.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Submission;
use crate::enums::{CategoryGroupCode, ReviewPeriod};

/// Headline counters from `GET /submissions/dashboard/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DashboardStats {
    pub total_categories: u64,
    pub pending_submissions: u64,
    pub overdue_submissions: u64,
    pub approved_this_month: u64,
    pub controls_without_evidence: u64,
    pub controls_without_assignee: u64,
    pub controls_without_approver: u64,
    pub controls_with_overdue: u64,
    pub controls_with_low_compliance: u64,
    pub controls_pending_approval: u64,
    pub upcoming_deadlines: Vec<Submission>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverdueAging {
    #[serde(rename = "1_7_days", default)]
    pub one_to_seven_days: u64,
    #[serde(rename = "8_30_days", default)]
    pub eight_to_thirty_days: u64,
    #[serde(default)]
    pub over_30_days: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GroupCompliance {
    pub group_code: CategoryGroupCode,
    pub group_label: String,
    pub total_controls: u64,
    pub compliance_score: f64,
    pub overdue_count: u64,
    pub at_risk_count: u64,
    pub compliant_count: u64,
    pub no_data_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpcomingDeadline {
    pub control_id: u64,
    pub control_name: String,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub review_period: ReviewPeriod,
    #[serde(default)]
    pub assignee_name: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionTrendPoint {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BottleneckApprover {
    pub username: String,
    pub name: String,
    pub pending_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PriorityIssue {
    pub priority: String,
    pub control_id: u64,
    pub control_name: String,
    pub status: String,
    #[serde(default)]
    pub days_overdue: Option<i64>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<u64>,
    pub issue_type: String,
    #[serde(default)]
    pub compliance_score: Option<f64>,
}

/// `GET /submissions/analytics/` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Analytics {
    pub overdue_count: u64,
    pub my_assignments_count: u64,
    pub pending_approvals_count: u64,
    pub no_evidence_count: u64,
    pub missing_assignees_count: u64,
    pub missing_approvers_count: u64,
    pub at_risk_controls_count: u64,
    pub due_next_7_days: u64,
    pub due_next_14_days: u64,
    pub due_next_30_days: u64,
    pub average_approval_time_hours: Option<f64>,
    pub rejection_rate: f64,
    pub overall_compliance_score: f64,
    pub compliance_trend: ComplianceTrend,
    pub overdue_aging: OverdueAging,
    pub category_groups: Vec<GroupCompliance>,
    pub upcoming_deadlines_by_period: BTreeMap<String, u64>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
    pub submission_trends: Vec<SubmissionTrendPoint>,
    pub bottleneck_approvers: Vec<BottleneckApprover>,
    pub priority_issues: Vec<PriorityIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aging_buckets_use_numeric_keys() {
        let analytics: Analytics = serde_json::from_value(json!({
            "overdue_count": 4,
            "compliance_trend": "down",
            "overdue_aging": {"1_7_days": 1, "8_30_days": 2, "over_30_days": 1}
        }))
        .unwrap();
        assert_eq!(analytics.overdue_aging.eight_to_thirty_days, 2);
        assert_eq!(analytics.compliance_trend, ComplianceTrend::Down);
        assert!(analytics.priority_issues.is_empty());
    }

    #[test]
    fn dashboard_defaults_missing_counters() {
        let stats: DashboardStats =
            serde_json::from_value(json!({"total_categories": 12})).unwrap();
        assert_eq!(stats.total_categories, 12);
        assert_eq!(stats.pending_submissions, 0);
    }
}
