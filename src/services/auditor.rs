//! Services behind the legal auditor pages.

use crate::ROLE_LEGAL_AUDITOR;
use crate::api::agreements::{AgreementApi, AgreementListQuery};
use crate::api::audit::{AuditApi, LogListQuery};
use crate::api::auditor::AuditorApi;
use crate::cache::QueryCache;
use crate::domain::document::DocumentStatus;
use crate::dto::Widget;
use crate::dto::auditor::{AuditTrailPageData, AuditorDashboardData, DocumentRow};
use crate::dto::platform::LogRow;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::services::{DASHBOARD_TTL, LIST_TTL, ServiceError, ServiceResult};

fn ensure_auditor(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ROLE_LEGAL_AUDITOR) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Assembles the auditor dashboard: compliance counters plus the pending
/// review queue, each with its own error state.
pub async fn load_dashboard<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
) -> ServiceResult<AuditorDashboardData>
where
    A: AuditorApi + AgreementApi + Sync + ?Sized,
{
    ensure_auditor(user)?;

    let summary = cache
        .get_or_fetch("auditor/summary", Some(DASHBOARD_TTL), || {
            api.audit_summary()
        })
        .await;

    let pending = cache
        .get_or_fetch("auditor/pending-reviews", Some(DASHBOARD_TTL), || {
            api.pending_reviews()
        })
        .await
        .map(|documents| {
            documents
                .iter()
                .map(DocumentRow::from_document)
                .collect::<Vec<_>>()
        });

    let signed_query = AgreementListQuery::new().status(DocumentStatus::Signed);
    let recent_signed = cache
        .get_or_fetch(
            &QueryCache::key("agreements", &signed_query.to_pairs()),
            Some(LIST_TTL),
            || api.list_agreements(signed_query.clone()),
        )
        .await
        .map(|documents| {
            documents
                .iter()
                .map(DocumentRow::from_document)
                .collect::<Vec<_>>()
        });

    Ok(AuditorDashboardData {
        summary: Widget::from_result(summary),
        pending: Widget::from_result(pending),
        recent_signed: Widget::from_result(recent_signed),
    })
}

/// Loads one server-side page of the audit trail for the auditor role.
pub async fn load_audit_trail<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    query: LogListQuery,
    page: usize,
) -> ServiceResult<AuditTrailPageData>
where
    A: AuditApi + Sync + ?Sized,
{
    ensure_auditor(user)?;

    let page = if page == 0 { 1 } else { page };
    let query = query.paginate(page, DEFAULT_ITEMS_PER_PAGE);
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

    Ok(AuditTrailPageData {
        rows: Paginated::new(rows, page, total_pages),
        total: log_page.total,
        search_query,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::auditor::AuditSummary;
    use crate::api::mock::MockBackend;

    fn auditor() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "u-2".into(),
            email: "auditor@rentora.com".into(),
            name: "Auditor".into(),
            roles: vec![ROLE_LEGAL_AUDITOR.to_string()],
            agency_id: None,
            exp: 4_102_444_800,
        }
    }

    #[tokio::test]
    async fn dashboard_keeps_summary_when_queue_fails() {
        let mut backend = MockBackend::new();
        backend.expect_audit_summary().times(1).returning(|| {
            Ok(AuditSummary {
                pending: 4,
                approved: 20,
                rejected: 1,
            })
        });
        backend
            .expect_pending_reviews()
            .times(1)
            .returning(|| Err(ApiError::Transport("timeout".into())));
        backend
            .expect_list_agreements()
            .times(1)
            .returning(|_| Ok(vec![]));
        let cache = QueryCache::new(std::time::Duration::from_secs(60));

        let data = load_dashboard(&backend, &cache, &auditor()).await.unwrap();
        assert!(!data.summary.is_err());
        assert!(data.pending.is_err());
        assert!(!data.recent_signed.is_err());
    }

    #[tokio::test]
    async fn audit_trail_requires_the_auditor_role() {
        let backend = MockBackend::new();
        let cache = QueryCache::new(std::time::Duration::from_secs(60));
        let mut user = auditor();
        user.roles = vec!["sales_rep".into()];

        let result =
            load_audit_trail(&backend, &cache, &user, LogListQuery::new(), 1).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
