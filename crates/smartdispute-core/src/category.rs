//! Issue categories for tenant complaints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse classification bucket for a tenant complaint.
///
/// Closed set: every classification yields exactly one of these, and every
/// variant must have a form recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Repairs, maintenance, vital services.
    MaintenanceDispute,
    /// Eviction or termination notices.
    Eviction,
    /// Discrimination by a landlord or housing provider.
    HumanRightsComplaint,
    /// Rent deposit or key deposit not returned.
    SecurityDepositDispute,
    /// Anything without a more specific signal.
    GeneralHousingIssue,
}

impl IssueCategory {
    /// Every category, in declaration order.
    pub const ALL: [IssueCategory; 5] = [
        Self::MaintenanceDispute,
        Self::Eviction,
        Self::HumanRightsComplaint,
        Self::SecurityDepositDispute,
        Self::GeneralHousingIssue,
    ];

    /// Stable snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaintenanceDispute => "maintenance_dispute",
            Self::Eviction => "eviction",
            Self::HumanRightsComplaint => "human_rights_complaint",
            Self::SecurityDepositDispute => "security_deposit_dispute",
            Self::GeneralHousingIssue => "general_housing_issue",
        }
    }

    /// Label shown to tenants.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MaintenanceDispute => "Tenant Rights – Maintenance",
            Self::Eviction => "Eviction",
            Self::HumanRightsComplaint => "Human Rights",
            Self::SecurityDepositDispute => "Security Deposit Issue",
            Self::GeneralHousingIssue => "General Housing Issue",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the snake_case identifier, case-insensitively.
impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown issue category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_each_variant_once() {
        let distinct: HashSet<_> = IssueCategory::ALL.iter().collect();
        assert_eq!(distinct.len(), IssueCategory::ALL.len());
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        for category in IssueCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn parses_ids_loosely() {
        assert_eq!("eviction".parse::<IssueCategory>(), Ok(IssueCategory::Eviction));
        assert_eq!(
            "Security-Deposit-Dispute".parse::<IssueCategory>(),
            Ok(IssueCategory::SecurityDepositDispute)
        );
        assert!("noise".parse::<IssueCategory>().is_err());
    }

    #[test]
    fn display_uses_tenant_facing_label() {
        assert_eq!(
            IssueCategory::MaintenanceDispute.to_string(),
            "Tenant Rights – Maintenance"
        );
        assert_eq!(IssueCategory::HumanRightsComplaint.to_string(), "Human Rights");
    }
}
