//! Status enums, cadences, and filter values for attest.
//!
//! Backend-owned enums use `SCREAMING_SNAKE_CASE` on the wire, matching the
//! REST API's choice values. Status enums with a state machine provide
//! `allowed_next_states()` so callers can check a transition before asking the
//! server to perform it.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ReviewPeriod
// ---------------------------------------------------------------------------

/// How often a control needs fresh evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewPeriod {
    Daily,
    DailyWeekly,
    Weekly,
    WeeklyMonthly,
    Monthly,
    Regular,
    RegularMonthly,
    MonthlyQuarterly,
    Quarterly,
    HalfYearlyQuarterly,
    QuarterlyHalfyearlyAnnually,
    Annually,
}

/// Offset from "today" used to suggest the next due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueOffset {
    Days(u64),
    Months(u32),
}

impl DueOffset {
    /// Apply the offset to `from`. Month arithmetic clamps to the last day of
    /// the target month.
    #[must_use]
    pub fn apply(self, from: NaiveDate) -> NaiveDate {
        let shifted = match self {
            Self::Days(days) => from.checked_add_days(Days::new(days)),
            Self::Months(months) => from.checked_add_months(Months::new(months)),
        };
        shifted.unwrap_or(from)
    }
}

impl ReviewPeriod {
    pub const ALL: [Self; 12] = [
        Self::Daily,
        Self::DailyWeekly,
        Self::Weekly,
        Self::WeeklyMonthly,
        Self::Monthly,
        Self::Regular,
        Self::RegularMonthly,
        Self::MonthlyQuarterly,
        Self::Quarterly,
        Self::HalfYearlyQuarterly,
        Self::QuarterlyHalfyearlyAnnually,
        Self::Annually,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::DailyWeekly => "DAILY_WEEKLY",
            Self::Weekly => "WEEKLY",
            Self::WeeklyMonthly => "WEEKLY_MONTHLY",
            Self::Monthly => "MONTHLY",
            Self::Regular => "REGULAR",
            Self::RegularMonthly => "REGULAR_MONTHLY",
            Self::MonthlyQuarterly => "MONTHLY_QUARTERLY",
            Self::Quarterly => "QUARTERLY",
            Self::HalfYearlyQuarterly => "HALF_YEARLY_QUARTERLY",
            Self::QuarterlyHalfyearlyAnnually => "QUARTERLY_HALFYEARLY_ANNUALLY",
            Self::Annually => "ANNUALLY",
        }
    }

    /// Human-readable label shown in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::DailyWeekly => "Daily/Weekly",
            Self::Weekly => "Weekly",
            Self::WeeklyMonthly => "Weekly/Monthly",
            Self::Monthly => "Monthly",
            Self::Regular => "Regular",
            Self::RegularMonthly => "Regular - meeting monthly",
            Self::MonthlyQuarterly => "Monthly/Quarterly",
            Self::Quarterly => "Quarterly",
            Self::HalfYearlyQuarterly => "Half yearly/Quarterly",
            Self::QuarterlyHalfyearlyAnnually => "Quarterly/Halfyearly/Annually",
            Self::Annually => "Annually",
        }
    }

    /// Suggested distance to the next due date. Compound cadences use the
    /// shorter of their two periods.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn recommended_offset(self) -> DueOffset {
        match self {
            Self::Daily | Self::DailyWeekly => DueOffset::Days(1),
            Self::Weekly => DueOffset::Days(7),
            Self::WeeklyMonthly | Self::Monthly | Self::Regular | Self::RegularMonthly => {
                DueOffset::Months(1)
            }
            Self::MonthlyQuarterly | Self::Quarterly => DueOffset::Months(3),
            Self::HalfYearlyQuarterly => DueOffset::Months(6),
            Self::QuarterlyHalfyearlyAnnually | Self::Annually => DueOffset::Months(12),
        }
    }

    /// Recommended due date counted from `today`.
    #[must_use]
    pub fn recommended_due_date(self, today: NaiveDate) -> NaiveDate {
        self.recommended_offset().apply(today)
    }
}

impl fmt::Display for ReviewPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "review period",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

/// Status of one evidence-gathering cycle.
///
/// ```text
/// pending → submitted → under_review → approved
///                     → approved       → rejected
///                     → rejected → submitted (resubmission)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Submitted],
            Self::Submitted => &[Self::UnderReview, Self::Approved, Self::Rejected],
            Self::UnderReview => &[Self::Approved, Self::Rejected],
            Self::Rejected => &[Self::Submitted],
            Self::Approved => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether new evidence may be uploaded in this state.
    #[must_use]
    pub const fn accepts_evidence(self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    /// Whether the submission is waiting on an approver.
    #[must_use]
    pub const fn awaiting_approval(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PENDING" => Ok(Self::Pending),
            "SUBMITTED" => Ok(Self::Submitted),
            "UNDER_REVIEW" => Ok(Self::UnderReview),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(CoreError::UnknownVariant {
                kind: "submission status",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    DueSoon,
    Overdue,
    PendingApproval,
    ControlAssigned,
    Approved,
    Rejected,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueSoon => "DUE_SOON",
            Self::Overdue => "OVERDUE",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::ControlAssigned => "CONTROL_ASSIGNED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CategoryGroupCode
// ---------------------------------------------------------------------------

/// Grouping code assigned to each control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryGroupCode {
    AccessControls,
    NetworkSecurity,
    PhysicalSecurity,
    DataProtection,
    EndpointSecurity,
    MonitoringIncident,
    InfrastructureCapacity,
    BackupRecovery,
    BusinessContinuity,
    Confidentiality,
    ControlEnvironment,
    CommunicationInfo,
    RiskAssessment,
    Monitoring,
    HrTraining,
    ChangeManagement,
    VendorManagement,
    Uncategorized,
}

/// Top-level section a group is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GroupSection {
    Security,
    Availability,
    Confidentiality,
    CommonCriteria,
}

impl GroupSection {
    pub const ALL: [Self; 4] = [
        Self::Security,
        Self::Availability,
        Self::Confidentiality,
        Self::CommonCriteria,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Availability => "Availability",
            Self::Confidentiality => "Confidentiality",
            Self::CommonCriteria => "Common Criteria",
        }
    }
}

impl CategoryGroupCode {
    pub const ALL: [Self; 18] = [
        Self::AccessControls,
        Self::NetworkSecurity,
        Self::PhysicalSecurity,
        Self::DataProtection,
        Self::EndpointSecurity,
        Self::MonitoringIncident,
        Self::InfrastructureCapacity,
        Self::BackupRecovery,
        Self::BusinessContinuity,
        Self::Confidentiality,
        Self::ControlEnvironment,
        Self::CommunicationInfo,
        Self::RiskAssessment,
        Self::Monitoring,
        Self::HrTraining,
        Self::ChangeManagement,
        Self::VendorManagement,
        Self::Uncategorized,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessControls => "ACCESS_CONTROLS",
            Self::NetworkSecurity => "NETWORK_SECURITY",
            Self::PhysicalSecurity => "PHYSICAL_SECURITY",
            Self::DataProtection => "DATA_PROTECTION",
            Self::EndpointSecurity => "ENDPOINT_SECURITY",
            Self::MonitoringIncident => "MONITORING_INCIDENT",
            Self::InfrastructureCapacity => "INFRASTRUCTURE_CAPACITY",
            Self::BackupRecovery => "BACKUP_RECOVERY",
            Self::BusinessContinuity => "BUSINESS_CONTINUITY",
            Self::Confidentiality => "CONFIDENTIALITY",
            Self::ControlEnvironment => "CONTROL_ENVIRONMENT",
            Self::CommunicationInfo => "COMMUNICATION_INFO",
            Self::RiskAssessment => "RISK_ASSESSMENT",
            Self::Monitoring => "MONITORING",
            Self::HrTraining => "HR_TRAINING",
            Self::ChangeManagement => "CHANGE_MANAGEMENT",
            Self::VendorManagement => "VENDOR_MANAGEMENT",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AccessControls => "Access Controls",
            Self::NetworkSecurity => "Network Security",
            Self::PhysicalSecurity => "Physical Security",
            Self::DataProtection => "Data Protection",
            Self::EndpointSecurity => "Endpoint Security",
            Self::MonitoringIncident => "Monitoring & Incident Response",
            Self::InfrastructureCapacity => "Infrastructure & Capacity",
            Self::BackupRecovery => "Backup & Recovery",
            Self::BusinessContinuity => "Business Continuity",
            Self::Confidentiality => "Confidentiality",
            Self::ControlEnvironment => "Control Environment (CC1)",
            Self::CommunicationInfo => "Communication & Information (CC2)",
            Self::RiskAssessment => "Risk Assessment (CC3)",
            Self::Monitoring => "Monitoring (CC4)",
            Self::HrTraining => "Control Activities - HR & Training (CC5)",
            Self::ChangeManagement => "Control Activities - Change Management (CC5)",
            Self::VendorManagement => "Control Activities - Vendor Management (CC5)",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Section this group belongs to. `Uncategorized` belongs to none.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn section(self) -> Option<GroupSection> {
        match self {
            Self::AccessControls
            | Self::NetworkSecurity
            | Self::PhysicalSecurity
            | Self::DataProtection
            | Self::EndpointSecurity
            | Self::MonitoringIncident => Some(GroupSection::Security),
            Self::InfrastructureCapacity | Self::BackupRecovery | Self::BusinessContinuity => {
                Some(GroupSection::Availability)
            }
            Self::Confidentiality => Some(GroupSection::Confidentiality),
            Self::ControlEnvironment
            | Self::CommunicationInfo
            | Self::RiskAssessment
            | Self::Monitoring
            | Self::HrTraining
            | Self::ChangeManagement
            | Self::VendorManagement => Some(GroupSection::CommonCriteria),
            Self::Uncategorized => None,
        }
    }
}

impl fmt::Display for CategoryGroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryGroupCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "category group",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Submission-state filter applied to the control listing. Wire values mix
/// submission statuses (`PENDING`, `SUBMITTED`, ...) with the derived
/// `overdue` and `no-submission` buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StatusFilter {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "SUBMITTED")]
    Submitted,
    #[serde(rename = "UNDER_REVIEW")]
    UnderReview,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
    #[serde(rename = "no-submission")]
    NoSubmission,
}

impl StatusFilter {
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Overdue,
        Self::Submitted,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
        Self::NoSubmission,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Overdue => "overdue",
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::NoSubmission => "no-submission",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::Submitted | Self::UnderReview => "Pending Approval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::NoSubmission => "No Active Submission",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(Self::Pending),
            "overdue" => Ok(Self::Overdue),
            "submitted" | "pending-approval" => Ok(Self::Submitted),
            "under-review" => Ok(Self::UnderReview),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "no-submission" | "none" => Ok(Self::NoSubmission),
            _ => Err(CoreError::UnknownVariant {
                kind: "status filter",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }

    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
        }
    }

    /// Default download name for an export.
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("controls_export.{}", self.file_extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "excel" | "xlsx" => Ok(Self::Excel),
            _ => Err(CoreError::UnknownVariant {
                kind: "export format",
                value: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// Layout used for the control listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Card,
    List,
    Table,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            _ => Err(CoreError::UnknownVariant {
                kind: "view mode",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[rstest]
    #[case(ReviewPeriod::Daily, date(2025, 1, 2))]
    #[case(ReviewPeriod::DailyWeekly, date(2025, 1, 2))]
    #[case(ReviewPeriod::Weekly, date(2025, 1, 8))]
    #[case(ReviewPeriod::RegularMonthly, date(2025, 2, 1))]
    #[case(ReviewPeriod::Quarterly, date(2025, 4, 1))]
    #[case(ReviewPeriod::HalfYearlyQuarterly, date(2025, 7, 1))]
    #[case(ReviewPeriod::Annually, date(2026, 1, 1))]
    fn recommended_due_dates(#[case] period: ReviewPeriod, #[case] expected: NaiveDate) {
        assert_eq!(period.recommended_due_date(date(2025, 1, 1)), expected);
    }

    #[test]
    fn month_offsets_clamp_to_month_end() {
        let due = ReviewPeriod::Monthly.recommended_due_date(date(2025, 1, 31));
        assert_eq!(due, date(2025, 2, 28));
    }

    #[test]
    fn review_period_wire_format() {
        let json = serde_json::to_string(&ReviewPeriod::QuarterlyHalfyearlyAnnually).unwrap();
        assert_eq!(json, "\"QUARTERLY_HALFYEARLY_ANNUALLY\"");
        let parsed: ReviewPeriod = serde_json::from_str("\"REGULAR_MONTHLY\"").unwrap();
        assert_eq!(parsed.label(), "Regular - meeting monthly");
    }

    #[test]
    fn review_period_parses_loose_input() {
        assert_eq!("daily-weekly".parse::<ReviewPeriod>().unwrap(), ReviewPeriod::DailyWeekly);
        assert!("fortnightly".parse::<ReviewPeriod>().is_err());
    }

    #[test]
    fn submission_state_machine() {
        assert!(SubmissionStatus::Pending.can_transition_to(SubmissionStatus::Submitted));
        assert!(SubmissionStatus::Rejected.can_transition_to(SubmissionStatus::Submitted));
        assert!(!SubmissionStatus::Approved.can_transition_to(SubmissionStatus::Rejected));
        assert!(!SubmissionStatus::Pending.can_transition_to(SubmissionStatus::Approved));
    }

    #[test]
    fn only_pending_and_rejected_accept_evidence() {
        let accepting: Vec<_> = [
            SubmissionStatus::Pending,
            SubmissionStatus::Submitted,
            SubmissionStatus::UnderReview,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ]
        .into_iter()
        .filter(|status| status.accepts_evidence())
        .collect();
        assert_eq!(
            accepting,
            vec![SubmissionStatus::Pending, SubmissionStatus::Rejected]
        );
    }

    #[test]
    fn group_sections_partition_codes() {
        let uncategorized: Vec<_> = CategoryGroupCode::ALL
            .into_iter()
            .filter(|code| code.section().is_none())
            .collect();
        assert_eq!(uncategorized, vec![CategoryGroupCode::Uncategorized]);
        assert_eq!(
            CategoryGroupCode::Confidentiality.section(),
            Some(GroupSection::Confidentiality)
        );
        assert_eq!(
            CategoryGroupCode::VendorManagement.section(),
            Some(GroupSection::CommonCriteria)
        );
    }

    #[test]
    fn status_filter_aliases() {
        assert_eq!("UNDER_REVIEW".parse::<StatusFilter>().unwrap(), StatusFilter::UnderReview);
        assert_eq!(StatusFilter::Pending.to_string(), "PENDING");
        assert_eq!("no_submission".parse::<StatusFilter>().unwrap(), StatusFilter::NoSubmission);
        assert_eq!(StatusFilter::NoSubmission.to_string(), "no-submission");
    }

    #[test]
    fn export_format_file_names() {
        assert_eq!(ExportFormat::Pdf.default_file_name(), "controls_export.pdf");
        assert_eq!(ExportFormat::Excel.default_file_name(), "controls_export.xlsx");
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
    }
}
