use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::AgencyId;

/// Subscription tier of an agency.
///
/// Older backend endpoints still emit the legacy `starter` spelling for the
/// essential tier and upper-cased codes; both are accepted on deserialization.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[serde(alias = "FREE")]
    Free,
    #[serde(alias = "ESSENTIAL", alias = "starter", alias = "STARTER")]
    Essential,
    #[serde(alias = "PROFESSIONAL")]
    Professional,
    #[serde(alias = "ENTERPRISE")]
    Enterprise,
    /// Any code this build does not know about.
    #[serde(other)]
    Unknown,
}

impl PlanTier {
    pub const ALL: [PlanTier; 5] = [
        PlanTier::Free,
        PlanTier::Essential,
        PlanTier::Professional,
        PlanTier::Enterprise,
        PlanTier::Unknown,
    ];
}

/// Lifecycle status of an agency account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgencyStatus {
    Active,
    Inactive,
    Suspended,
    Trial,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AgencyStatus {
    pub const ALL: [AgencyStatus; 6] = [
        AgencyStatus::Active,
        AgencyStatus::Inactive,
        AgencyStatus::Suspended,
        AgencyStatus::Trial,
        AgencyStatus::Cancelled,
        AgencyStatus::Unknown,
    ];
}

/// Usage counters reported by the backend per agency.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgencyUsage {
    #[serde(default)]
    pub users: u32,
    #[serde(default)]
    pub properties: u32,
    #[serde(default)]
    pub contracts: u32,
}

/// An agency account as consumed by the dashboards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    pub id: AgencyId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Registration document number (CNPJ or equivalent).
    pub document: Option<String>,
    pub plan: PlanTier,
    pub status: AgencyStatus,
    #[serde(default)]
    pub usage: AgencyUsage,
    pub billing_status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Counts derived from a fetched agency list in a single pass.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct AgencyStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
    pub trial: usize,
    pub cancelled: usize,
    pub paying: usize,
}

impl AgencyStats {
    /// Aggregates status counts over the provided list.
    pub fn collect(agencies: &[Agency]) -> Self {
        let mut stats = Self::default();
        for agency in agencies {
            stats.total += 1;
            match agency.status {
                AgencyStatus::Active => stats.active += 1,
                AgencyStatus::Inactive => stats.inactive += 1,
                AgencyStatus::Suspended => stats.suspended += 1,
                AgencyStatus::Trial => stats.trial += 1,
                AgencyStatus::Cancelled => stats.cancelled += 1,
                AgencyStatus::Unknown => {}
            }
            if !matches!(agency.plan, PlanTier::Free | PlanTier::Unknown) {
                stats.paying += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AgencyId;

    fn agency(status: AgencyStatus, plan: PlanTier) -> Agency {
        Agency {
            id: AgencyId::new(1).unwrap(),
            name: "Habita Imóveis".into(),
            email: None,
            phone: None,
            document: None,
            plan,
            status,
            usage: AgencyUsage::default(),
            billing_status: None,
            created_at: None,
        }
    }

    #[test]
    fn accepts_legacy_plan_spellings() {
        let tier: PlanTier = serde_json::from_str("\"starter\"").unwrap();
        assert_eq!(tier, PlanTier::Essential);
        let tier: PlanTier = serde_json::from_str("\"PROFESSIONAL\"").unwrap();
        assert_eq!(tier, PlanTier::Professional);
    }

    #[test]
    fn unknown_codes_do_not_fail_deserialization() {
        let tier: PlanTier = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(tier, PlanTier::Unknown);
        let status: AgencyStatus = serde_json::from_str("\"frozen\"").unwrap();
        assert_eq!(status, AgencyStatus::Unknown);
    }

    #[test]
    fn stats_match_predicates() {
        let agencies = vec![
            agency(AgencyStatus::Active, PlanTier::Professional),
            agency(AgencyStatus::Active, PlanTier::Free),
            agency(AgencyStatus::Suspended, PlanTier::Essential),
            agency(AgencyStatus::Trial, PlanTier::Unknown),
        ];
        let stats = AgencyStats::collect(&agencies);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.suspended, 1);
        assert_eq!(stats.trial, 1);
        assert_eq!(stats.cancelled, 0);
        assert_eq!(stats.paying, 2);
    }

    #[test]
    fn stats_over_empty_list_are_zero() {
        assert_eq!(AgencyStats::collect(&[]), AgencyStats::default());
    }
}
