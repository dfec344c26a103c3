//! Services behind the tenant analysis workflow.

use uuid::Uuid;
use validator::Validate;

use crate::ROLE_AGENCY_STAFF;
use crate::api::tenant_analysis::{AnalysisRequest, AnalysisStatus, TenantAnalysisApi};
use crate::cache::QueryCache;
use crate::dto::tenant_analysis::{AnalysesPageData, AnalysisRow};
use crate::forms::tenant_analysis::AnalysisRequestForm;
use crate::models::auth::AuthenticatedUser;
use crate::services::{DASHBOARD_TTL, ServiceError, ServiceResult};

fn ensure_agency_staff(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ROLE_AGENCY_STAFF) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Loads the analyses listing, optionally narrowed to one status
/// (server-side filter, so the cache key includes it).
pub async fn load_analyses_page<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    status: Option<AnalysisStatus>,
) -> ServiceResult<AnalysesPageData>
where
    A: TenantAnalysisApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    let key = match status {
        // Status moves while requests are processed, so keep the TTL short.
        Some(status) => format!(
            "tenant-analysis/requests?status={}",
            crate::api::wire_code(&status)
        ),
        None => "tenant-analysis/requests".to_string(),
    };
    let requests = cache
        .get_or_fetch(&key, Some(DASHBOARD_TTL), || api.list_analyses(status))
        .await?;

    Ok(AnalysesPageData::build(&requests))
}

/// Fetches one request for the detail page; uncached so status transitions
/// show up as soon as the page is refreshed.
pub async fn show_analysis<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: Uuid,
) -> ServiceResult<AnalysisRow>
where
    A: TenantAnalysisApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    let request = api.get_analysis(id).await?;
    Ok(AnalysisRow::from_request(&request))
}

/// Validates the submission form and opens a new analysis request.
pub async fn submit_analysis<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    form: AnalysisRequestForm,
) -> ServiceResult<AnalysisRequest>
where
    A: TenantAnalysisApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate analysis form: {err}");
        return Err(ServiceError::Form(
            "The analysis form has invalid fields.".to_string(),
        ));
    }

    let request = form.to_request()?;
    let created = api.create_analysis(request).await?;
    cache.invalidate_resource("tenant-analysis/requests").await;
    Ok(created)
}

/// Forwards an uploaded supporting document to the backend.
pub async fn upload_document<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: Uuid,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> ServiceResult<()>
where
    A: TenantAnalysisApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    if bytes.is_empty() {
        return Err(ServiceError::Form("The uploaded file is empty.".to_string()));
    }

    api.upload_analysis_document(id, file_name, content_type, bytes)
        .await?;
    Ok(())
}

/// Streams the finished report back to the caller.
pub async fn download_report<A>(
    api: &A,
    user: &AuthenticatedUser,
    id: Uuid,
) -> ServiceResult<Vec<u8>>
where
    A: TenantAnalysisApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    Ok(api.download_analysis_report(id).await?)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "u-4".into(),
            email: "staff@habita.com".into(),
            name: "Staff".into(),
            roles: vec![ROLE_AGENCY_STAFF.to_string()],
            agency_id: Some(7),
            exp: 4_102_444_800,
        }
    }

    fn form() -> AnalysisRequestForm {
        AnalysisRequestForm {
            tenant_name: "Maria".into(),
            tenant_email: "maria@example.com".into(),
            tenant_phone: None,
            document: "123.456.789-00".into(),
            monthly_income: Some("4000".into()),
        }
    }

    #[tokio::test]
    async fn submit_creates_and_invalidates() {
        let mut backend = MockBackend::new();
        backend.expect_create_analysis().times(1).returning(|req| {
            Ok(AnalysisRequest {
                id: Uuid::nil(),
                tenant_name: req.tenant_name,
                status: AnalysisStatus::Queued,
                score: None,
                created_at: None,
            })
        });
        let cache = QueryCache::new(std::time::Duration::from_secs(60));

        let created = submit_analysis(&backend, &cache, &staff(), form())
            .await
            .unwrap();
        assert_eq!(created.status, AnalysisStatus::Queued);
    }

    #[tokio::test]
    async fn invalid_forms_never_reach_the_backend() {
        let backend = MockBackend::new();
        let cache = QueryCache::new(std::time::Duration::from_secs(60));
        let mut bad = form();
        bad.tenant_email = "nope".into();

        let result = submit_analysis(&backend, &cache, &staff(), bad).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn empty_uploads_are_rejected() {
        let backend = MockBackend::new();
        let result = upload_document(
            &backend,
            &staff(),
            Uuid::nil(),
            "doc.pdf".into(),
            "application/pdf".into(),
            Vec::new(),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
