//! Services behind the platform manager pages.

use crate::api::agencies::{AgencyApi, AgencyListQuery};
use crate::api::audit::{AuditApi, LogListQuery};
use crate::api::platform::PlatformApi;
use crate::api::users::{UserApi, UserListQuery};
use crate::api::{ApiResult, QueryPairs};
use crate::cache::QueryCache;
use crate::domain::agency::{Agency, AgencyStats, AgencyStatus};
use crate::domain::types::{AgencyId, UserId};
use crate::domain::user::{User, UserStatus};
use crate::dto::Widget;
use crate::dto::platform::{
    AgenciesPageData, AgencyExportRow, AgencyFilter, AgencyRow, LogRow, LogsPageData,
    OverviewCards, PlatformDashboardData, UserFilter, UserRow, UsersPageData,
};
use crate::export::rows_to_csv;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::services::{DASHBOARD_TTL, LIST_TTL, ServiceError, ServiceResult};
use crate::ROLE_PLATFORM_MANAGER;

const RECENT_LOG_ROWS: usize = 8;
const REVENUE_MONTHS: u32 = 12;

fn ensure_manager(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ROLE_PLATFORM_MANAGER) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

async fn fetch_agencies<A>(api: &A, cache: &QueryCache) -> ApiResult<Vec<Agency>>
where
    A: AgencyApi + Sync + ?Sized,
{
    cache
        .get_or_fetch("agencies", Some(LIST_TTL), || {
            api.list_agencies(AgencyListQuery::new())
        })
        .await
}

/// Assembles the manager dashboard. The four queries are independent; a
/// failing one degrades its widget while the others render.
pub async fn load_dashboard<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
) -> ServiceResult<PlatformDashboardData>
where
    A: PlatformApi + AgencyApi + AuditApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let overview = cache
        .get_or_fetch("platform-manager/overview", Some(DASHBOARD_TTL), || {
            api.platform_overview()
        })
        .await
        .map(OverviewCards::from);

    let mut revenue_pairs = QueryPairs::new();
    revenue_pairs.set("months", REVENUE_MONTHS);
    let revenue = cache
        .get_or_fetch(
            &QueryCache::key("platform-manager/revenue", &revenue_pairs),
            Some(DASHBOARD_TTL),
            || api.revenue_series(REVENUE_MONTHS),
        )
        .await;

    let agency_stats = fetch_agencies(api, cache)
        .await
        .map(|agencies| AgencyStats::collect(&agencies));

    let recent_query = LogListQuery::new().paginate(1, RECENT_LOG_ROWS);
    let recent_logs = cache
        .get_or_fetch(
            &QueryCache::key("audit/logs", &recent_query.to_pairs()),
            Some(DASHBOARD_TTL),
            || api.list_logs(recent_query.clone()),
        )
        .await
        .map(|page| page.data.iter().map(LogRow::from_entry).collect::<Vec<_>>());

    Ok(PlatformDashboardData {
        overview: Widget::from_result(overview),
        revenue: Widget::from_result(revenue),
        agency_stats: Widget::from_result(agency_stats),
        recent_logs: Widget::from_result(recent_logs),
    })
}

/// Loads the agencies management page: the full list comes from the cache and
/// filtering/pagination happen in memory, recomputed per request.
pub async fn load_agencies_page<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    filter: AgencyFilter,
    page: usize,
) -> ServiceResult<AgenciesPageData>
where
    A: AgencyApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let agencies = fetch_agencies(api, cache).await?;
    let stats = AgencyStats::collect(&agencies);

    let filtered: Vec<&Agency> = agencies
        .iter()
        .filter(|agency| filter.matches(agency))
        .collect();

    let page = if page == 0 { 1 } else { page };
    let total_pages = filtered.len().div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let rows: Vec<AgencyRow> = filtered
        .iter()
        .skip((page - 1) * DEFAULT_ITEMS_PER_PAGE)
        .take(DEFAULT_ITEMS_PER_PAGE)
        .map(|agency| AgencyRow::from_agency(agency))
        .collect();

    Ok(AgenciesPageData {
        rows: Paginated::new(rows, page, total_pages),
        stats,
        search_query: filter.search.clone(),
    })
}

/// Serializes the currently filtered agency set for the CSV download.
pub async fn export_agencies_csv<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    filter: AgencyFilter,
) -> ServiceResult<Vec<u8>>
where
    A: AgencyApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let agencies = fetch_agencies(api, cache).await?;
    let rows: Vec<AgencyExportRow> = agencies
        .iter()
        .filter(|agency| filter.matches(agency))
        .map(AgencyExportRow::from_agency)
        .collect();

    Ok(rows_to_csv(&rows)?)
}

/// Changes an agency's lifecycle status and drops the stale cache entries.
pub async fn update_agency_status<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    agency_id: AgencyId,
    status: AgencyStatus,
) -> ServiceResult<Agency>
where
    A: AgencyApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let agency = api.update_agency_status(agency_id, status).await?;
    cache.invalidate_resource("agencies").await;
    Ok(agency)
}

/// Loads the user management page with in-memory filtering.
pub async fn load_users_page<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    filter: UserFilter,
) -> ServiceResult<UsersPageData>
where
    A: UserApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let users: Vec<User> = cache
        .get_or_fetch("users", Some(LIST_TTL), || {
            api.list_users(UserListQuery::new())
        })
        .await?;

    let filtered: Vec<&User> = users.iter().filter(|row| filter.matches(row)).collect();
    let active = filtered
        .iter()
        .filter(|row| row.status == UserStatus::Active)
        .count();
    let suspended = filtered
        .iter()
        .filter(|row| row.status == UserStatus::Suspended)
        .count();

    Ok(UsersPageData {
        rows: filtered.iter().map(|row| UserRow::from_user(row)).collect(),
        total: filtered.len(),
        active,
        suspended,
        search_query: filter.search.clone(),
    })
}

/// Suspends or reactivates a user account, then invalidates the user list.
pub async fn set_user_suspended<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    target: UserId,
    suspended: bool,
) -> ServiceResult<User>
where
    A: UserApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let updated = if suspended {
        api.suspend_user(target).await?
    } else {
        api.reactivate_user(target).await?
    };
    cache.invalidate_resource("users").await;
    Ok(updated)
}

/// Filter inputs for the audit log page; filtering is server-side here, so
/// every change produces a new query (and a new cache key).
#[derive(Clone, Debug, Default)]
pub struct LogPageFilter {
    pub query: LogListQuery,
    pub page: usize,
}

/// Loads one server-side page of the audit log.
pub async fn load_logs_page<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    filter: LogPageFilter,
) -> ServiceResult<LogsPageData>
where
    A: AuditApi + Sync + ?Sized,
{
    ensure_manager(user)?;

    let page = if filter.page == 0 { 1 } else { filter.page };
    let query = filter.query.paginate(page, DEFAULT_ITEMS_PER_PAGE);
    let search_query = query.search.clone();

    let log_page = cache
        .get_or_fetch(
            &QueryCache::key("audit/logs", &query.to_pairs()),
            Some(DASHBOARD_TTL),
            || api.list_logs(query.clone()),
        )
        .await?;

    let rows: Vec<LogRow> = log_page.data.iter().map(LogRow::from_entry).collect();
    let total_pages = (log_page.total as usize).div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(LogsPageData {
        rows: Paginated::new(rows, page, total_pages),
        total: log_page.total,
        search_query,
    })
}
