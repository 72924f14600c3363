//! Groups page: drop empty and uncategorized groups, then bucket the rest by
//! section.

use attest_core::entities::CategoryGroup;
use attest_core::enums::{CategoryGroupCode, GroupSection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionGroups {
    pub section: GroupSection,
    pub label: &'static str,
    pub groups: Vec<CategoryGroup>,
}

impl SectionGroups {
    /// Controls in this section that are waiting for evidence.
    #[must_use]
    pub fn pending_evidence(&self) -> u64 {
        self.groups
            .iter()
            .filter_map(|group| group.pending_evidence_count)
            .sum()
    }
}

/// Groups worth showing: not `UNCATEGORIZED` and with at least one control.
#[must_use]
pub fn visible_groups(groups: Vec<CategoryGroup>) -> Vec<CategoryGroup> {
    groups
        .into_iter()
        .filter(|group| group.code != CategoryGroupCode::Uncategorized && group.count > 0)
        .collect()
}

/// Visible groups organised into sections, in section order. Sections with
/// no visible group are left out. Group order inside a section is the
/// server's order.
#[must_use]
pub fn organize(groups: Vec<CategoryGroup>) -> Vec<SectionGroups> {
    let visible = visible_groups(groups);
    GroupSection::ALL
        .into_iter()
        .filter_map(|section| {
            let groups: Vec<CategoryGroup> = visible
                .iter()
                .filter(|group| group.code.section() == Some(section))
                .cloned()
                .collect();
            (!groups.is_empty()).then(|| SectionGroups {
                section,
                label: section.label(),
                groups,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(code: CategoryGroupCode, count: u64, pending: Option<u64>) -> CategoryGroup {
        CategoryGroup {
            code,
            label: code.label().to_string(),
            count,
            compliance_score: None,
            pending_evidence_count: pending,
        }
    }

    #[test]
    fn hides_uncategorized_and_empty_groups() {
        let groups = vec![
            group(CategoryGroupCode::Uncategorized, 12, None),
            group(CategoryGroupCode::NetworkSecurity, 0, None),
            group(CategoryGroupCode::AccessControls, 4, Some(1)),
        ];
        let visible = visible_groups(groups);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, CategoryGroupCode::AccessControls);
    }

    #[test]
    fn buckets_by_section_in_section_order() {
        let sections = organize(vec![
            group(CategoryGroupCode::RiskAssessment, 2, Some(2)),
            group(CategoryGroupCode::BackupRecovery, 3, None),
            group(CategoryGroupCode::AccessControls, 4, Some(1)),
            group(CategoryGroupCode::ChangeManagement, 1, Some(1)),
        ]);
        let order: Vec<_> = sections.iter().map(|s| s.section).collect();
        assert_eq!(
            order,
            vec![
                GroupSection::Security,
                GroupSection::Availability,
                GroupSection::CommonCriteria
            ]
        );
        assert_eq!(sections[2].groups.len(), 2);
        assert_eq!(sections[2].pending_evidence(), 3);
    }
}
