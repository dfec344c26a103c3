//! View models for the platform manager pages.

use serde::Serialize;

use crate::api::platform::{PlatformOverview, RevenuePoint};
use crate::domain::agency::{Agency, AgencyStats, AgencyStatus, PlanTier};
use crate::domain::log::LogEntry;
use crate::domain::user::{User, UserRole, UserStatus};
use crate::dto::labels::{
    Badge, agency_status_badge, display_or_dash, format_currency, log_kind_label,
    log_severity_badge, plan_badge, role_label, user_status_badge,
};
use crate::dto::{Widget, matches_search};
use crate::pagination::Paginated;

/// Headline cards with display-formatted figures.
#[derive(Debug, Serialize)]
pub struct OverviewCards {
    pub agencies_total: u32,
    pub agencies_active: u32,
    pub users_total: u32,
    pub mrr: String,
    pub transactions_this_month: u32,
}

impl From<PlatformOverview> for OverviewCards {
    fn from(overview: PlatformOverview) -> Self {
        Self {
            agencies_total: overview.agencies_total,
            agencies_active: overview.agencies_active,
            users_total: overview.users_total,
            mrr: format_currency(overview.mrr),
            transactions_this_month: overview.transactions_this_month,
        }
    }
}

/// One agency row on the management table.
#[derive(Debug, Serialize)]
pub struct AgencyRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub document: String,
    pub plan: Badge,
    pub status: Badge,
    pub users: u32,
    pub properties: u32,
    pub contracts: u32,
    pub billing: String,
}

impl AgencyRow {
    pub fn from_agency(agency: &Agency) -> Self {
        Self {
            id: agency.id.get(),
            name: agency.name.clone(),
            email: display_or_dash(agency.email.as_deref()),
            document: display_or_dash(agency.document.as_deref()),
            plan: plan_badge(agency.plan),
            status: agency_status_badge(agency.status),
            users: agency.usage.users,
            properties: agency.usage.properties,
            contracts: agency.usage.contracts,
            billing: display_or_dash(agency.billing_status.as_deref()),
        }
    }
}

/// Flat export shape for the agencies CSV download.
#[derive(Debug, Serialize)]
pub struct AgencyExportRow {
    pub name: String,
    pub email: String,
    pub document: String,
    pub plan: &'static str,
    pub status: &'static str,
    pub users: u32,
    pub properties: u32,
    pub contracts: u32,
}

impl AgencyExportRow {
    pub fn from_agency(agency: &Agency) -> Self {
        Self {
            name: agency.name.clone(),
            email: agency.email.clone().unwrap_or_default(),
            document: agency.document.clone().unwrap_or_default(),
            plan: plan_badge(agency.plan).label,
            status: agency_status_badge(agency.status).label,
            users: agency.usage.users,
            properties: agency.usage.properties,
            contracts: agency.usage.contracts,
        }
    }
}

/// Client-side filter applied to the fetched agency list, recomputed per
/// request from the full set.
#[derive(Clone, Debug, Default)]
pub struct AgencyFilter {
    pub search: Option<String>,
    pub status: Option<AgencyStatus>,
    pub plan: Option<PlanTier>,
}

impl AgencyFilter {
    pub fn matches(&self, agency: &Agency) -> bool {
        if let Some(status) = self.status
            && agency.status != status
        {
            return false;
        }
        if let Some(plan) = self.plan
            && agency.plan != plan
        {
            return false;
        }
        match &self.search {
            Some(needle) => matches_search(
                needle,
                &[
                    Some(agency.name.as_str()),
                    agency.email.as_deref(),
                    agency.document.as_deref(),
                ],
            ),
            None => true,
        }
    }
}

/// Data required to render the agencies management page.
#[derive(Serialize)]
pub struct AgenciesPageData {
    pub rows: Paginated<AgencyRow>,
    pub stats: AgencyStats,
    pub search_query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub status: Badge,
    pub agency: String,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: role_label(user.role),
            status: user_status_badge(user.status),
            agency: display_or_dash(user.agency_name.as_deref()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role
            && user.role != role
        {
            return false;
        }
        if let Some(status) = self.status
            && user.status != status
        {
            return false;
        }
        match &self.search {
            Some(needle) => matches_search(
                needle,
                &[Some(user.name.as_str()), Some(user.email.as_str())],
            ),
            None => true,
        }
    }
}

#[derive(Serialize)]
pub struct UsersPageData {
    pub rows: Vec<UserRow>,
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    pub search_query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogRow {
    pub timestamp: String,
    pub event: String,
    pub kind: &'static str,
    pub severity: Badge,
    pub actor: String,
}

impl LogRow {
    pub fn from_entry(entry: &LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            event: entry.event.clone(),
            kind: log_kind_label(entry.resolved_kind()),
            severity: log_severity_badge(entry.resolved_severity()),
            actor: display_or_dash(entry.actor.as_deref()),
        }
    }
}

#[derive(Serialize)]
pub struct LogsPageData {
    pub rows: Paginated<LogRow>,
    pub total: u64,
    pub search_query: Option<String>,
}

/// Data required to render the platform manager dashboard. Each widget keeps
/// its own error state.
#[derive(Serialize)]
pub struct PlatformDashboardData {
    pub overview: Widget<OverviewCards>,
    pub revenue: Widget<Vec<RevenuePoint>>,
    pub agency_stats: Widget<AgencyStats>,
    pub recent_logs: Widget<Vec<LogRow>>,
}

impl PlatformDashboardData {
    /// Aggregate load failure: true only when every widget failed.
    pub fn all_failed(&self) -> bool {
        self.overview.is_err()
            && self.revenue.is_err()
            && self.agency_stats.is_err()
            && self.recent_logs.is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agency::AgencyUsage;
    use crate::domain::types::AgencyId;

    fn agency(name: &str, status: AgencyStatus, plan: PlanTier) -> Agency {
        Agency {
            id: AgencyId::new(1).unwrap(),
            name: name.into(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: None,
            document: Some("12.345.678/0001-00".into()),
            plan,
            status,
            usage: AgencyUsage {
                users: 4,
                properties: 12,
                contracts: 9,
            },
            billing_status: None,
            created_at: None,
        }
    }

    #[test]
    fn filter_combines_search_and_exact_matches() {
        let habita = agency("Habita", AgencyStatus::Active, PlanTier::Professional);
        let zenith = agency("Zenith", AgencyStatus::Trial, PlanTier::Free);

        let filter = AgencyFilter {
            search: Some("habi".into()),
            status: Some(AgencyStatus::Active),
            plan: None,
        };
        assert!(filter.matches(&habita));
        assert!(!filter.matches(&zenith));

        let by_document = AgencyFilter {
            search: Some("0001-00".into()),
            ..Default::default()
        };
        assert!(by_document.matches(&habita));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = AgencyFilter::default();
        assert!(filter.matches(&agency("Any", AgencyStatus::Cancelled, PlanTier::Unknown)));
    }

    #[test]
    fn rows_render_placeholders_for_missing_fields() {
        let mut sparse = agency("Sparse", AgencyStatus::Active, PlanTier::Free);
        sparse.email = None;
        sparse.document = None;
        let row = AgencyRow::from_agency(&sparse);
        assert_eq!(row.email, "—");
        assert_eq!(row.document, "—");
        assert_eq!(row.plan.label, "Free");
    }

    #[test]
    fn overview_cards_format_revenue() {
        let cards = OverviewCards::from(PlatformOverview {
            agencies_total: 10,
            agencies_active: 8,
            users_total: 120,
            mrr: 15499.9,
            transactions_this_month: 342,
        });
        assert_eq!(cards.mrr, "$15,499.90");
    }
}
