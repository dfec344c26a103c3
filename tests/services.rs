//! Service-layer tests against hand-rolled fake backends.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use rentora_dashboard::api::agencies::{AgencyApi, AgencyListQuery};
use rentora_dashboard::api::plans::PlanApi;
use rentora_dashboard::api::sales::{Commission, Lead, LeadStage, SalesApi};
use rentora_dashboard::api::tenant_analysis::{
    AnalysisDocument, AnalysisRequest, AnalysisStatus, NewAnalysisRequest, TenantAnalysisApi,
};
use rentora_dashboard::api::{ApiError, ApiResult};
use rentora_dashboard::cache::QueryCache;
use rentora_dashboard::domain::agency::{Agency, AgencyStatus, AgencyUsage, PlanTier};
use rentora_dashboard::domain::billing::Plan;
use rentora_dashboard::domain::payment::PaymentStatus;
use rentora_dashboard::domain::types::AgencyId;
use rentora_dashboard::dto::platform::AgencyFilter;
use rentora_dashboard::forms::tenant_analysis::AnalysisRequestForm;
use rentora_dashboard::models::auth::AuthenticatedUser;
use rentora_dashboard::services::{ServiceError, platform, sales, tenant_analysis};
use rentora_dashboard::{ROLE_AGENCY_STAFF, ROLE_PLATFORM_MANAGER, ROLE_SALES_REP};

fn user(roles: &[&str], agency_id: Option<i64>) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "u-1".into(),
        email: "user@rentora.com".into(),
        name: "User".into(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        agency_id,
        exp: 4_102_444_800,
    }
}

fn agency(id: i64, name: &str, status: AgencyStatus, plan: PlanTier) -> Agency {
    Agency {
        id: AgencyId::new(id).unwrap(),
        name: name.into(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: None,
        document: None,
        plan,
        status,
        usage: AgencyUsage {
            users: 3,
            properties: 10,
            contracts: 6,
        },
        billing_status: None,
        created_at: None,
    }
}

struct FakeAgencyBackend {
    agencies: Vec<Agency>,
    list_calls: Mutex<usize>,
}

impl FakeAgencyBackend {
    fn new(agencies: Vec<Agency>) -> Self {
        Self {
            agencies,
            list_calls: Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl AgencyApi for FakeAgencyBackend {
    async fn list_agencies(&self, _query: AgencyListQuery) -> ApiResult<Vec<Agency>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.agencies.clone())
    }

    async fn get_agency(&self, id: AgencyId) -> ApiResult<Agency> {
        self.agencies
            .iter()
            .find(|agency| agency.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: "agency not found".into(),
            })
    }

    async fn update_agency_status(
        &self,
        id: AgencyId,
        status: AgencyStatus,
    ) -> ApiResult<Agency> {
        let mut updated = self.get_agency(id).await?;
        updated.status = status;
        Ok(updated)
    }
}

#[actix_web::test]
async fn agencies_page_reuses_the_cached_list_across_filter_changes() {
    let backend = FakeAgencyBackend::new(vec![
        agency(1, "Habita", AgencyStatus::Active, PlanTier::Professional),
        agency(2, "Zenith", AgencyStatus::Trial, PlanTier::Free),
        agency(3, "Morada", AgencyStatus::Suspended, PlanTier::Essential),
    ]);
    let cache = QueryCache::new(Duration::from_secs(60));
    let manager = user(&[ROLE_PLATFORM_MANAGER], None);

    let all = platform::load_agencies_page(
        &backend,
        &cache,
        &manager,
        AgencyFilter::default(),
        1,
    )
    .await
    .unwrap();
    assert_eq!(all.rows.items.len(), 3);
    assert_eq!(all.stats.active, 1);

    // A new client-side filter must not refetch: the full set is filtered in
    // memory.
    let filtered = platform::load_agencies_page(
        &backend,
        &cache,
        &manager,
        AgencyFilter {
            status: Some(AgencyStatus::Trial),
            ..Default::default()
        },
        1,
    )
    .await
    .unwrap();
    assert_eq!(filtered.rows.items.len(), 1);
    assert_eq!(filtered.rows.items[0].name, "Zenith");
    assert_eq!(backend.calls(), 1);
}

#[actix_web::test]
async fn agency_status_update_invalidates_the_cached_list() {
    let backend = FakeAgencyBackend::new(vec![agency(
        1,
        "Habita",
        AgencyStatus::Active,
        PlanTier::Professional,
    )]);
    let cache = QueryCache::new(Duration::from_secs(60));
    let manager = user(&[ROLE_PLATFORM_MANAGER], None);

    platform::load_agencies_page(&backend, &cache, &manager, AgencyFilter::default(), 1)
        .await
        .unwrap();
    let updated = platform::update_agency_status(
        &backend,
        &cache,
        &manager,
        AgencyId::new(1).unwrap(),
        AgencyStatus::Suspended,
    )
    .await
    .unwrap();
    assert_eq!(updated.status, AgencyStatus::Suspended);

    platform::load_agencies_page(&backend, &cache, &manager, AgencyFilter::default(), 1)
        .await
        .unwrap();
    assert_eq!(backend.calls(), 2);
}

#[actix_web::test]
async fn export_matches_the_csv_contract() {
    let backend = FakeAgencyBackend::new(vec![agency(
        1,
        "Habita, Lda",
        AgencyStatus::Active,
        PlanTier::Professional,
    )]);
    let cache = QueryCache::new(Duration::from_secs(60));
    let manager = user(&[ROLE_PLATFORM_MANAGER], None);

    let csv = platform::export_agencies_csv(&backend, &cache, &manager, AgencyFilter::default())
        .await
        .unwrap();
    let text = String::from_utf8(csv).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("name,email,document,plan,status,users,properties,contracts")
    );
    // Comma-containing fields must be quoted.
    assert_eq!(
        lines.next(),
        Some("\"Habita, Lda\",\"habita, lda@example.com\",,Professional,Active,3,10,6")
    );
}

struct FakeSalesBackend;

#[async_trait]
impl SalesApi for FakeSalesBackend {
    async fn list_leads(&self) -> ApiResult<Vec<Lead>> {
        Ok(vec![
            Lead {
                id: 1,
                agency_name: "Zenith".into(),
                contact: Some("zen@zenith.com".into()),
                stage: LeadStage::Demo,
                value: Some(1200.0),
            },
            Lead {
                id: 2,
                agency_name: "Morada".into(),
                contact: None,
                stage: LeadStage::Lost,
                value: Some(700.0),
            },
        ])
    }

    async fn list_commissions(&self) -> ApiResult<Vec<Commission>> {
        Ok(vec![Commission {
            id: 1,
            amount: 250.0,
            status: PaymentStatus::Pending,
            period: "2026-08".into(),
        }])
    }
}

#[async_trait]
impl PlanApi for FakeSalesBackend {
    async fn list_plans(&self) -> ApiResult<Vec<Plan>> {
        Ok(vec![Plan {
            tier: PlanTier::Professional,
            name: "Professional".into(),
            monthly_price: 299.0,
            max_users: Some(25),
            max_properties: None,
            max_contracts: None,
        }])
    }
}

#[actix_web::test]
async fn sales_dashboard_summarizes_pipeline_and_commissions() {
    let cache = QueryCache::new(Duration::from_secs(60));
    let rep = user(&[ROLE_SALES_REP], None);

    let data = sales::load_dashboard(&FakeSalesBackend, &cache, &rep)
        .await
        .unwrap();

    let pipeline = data.pipeline.data.unwrap();
    assert_eq!(pipeline.summary.open, 1);
    assert_eq!(pipeline.summary.lost, 1);
    assert_eq!(pipeline.summary.projected_value, 1200.0);

    let commissions = data.commissions.data.unwrap();
    assert_eq!(commissions.outstanding_display, "$250.00");

    let plans = data.plans.data.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].monthly_price, "$299.00");
    assert_eq!(plans[0].max_properties, "Unlimited");
}

#[actix_web::test]
async fn sales_dashboard_rejects_other_roles() {
    let cache = QueryCache::new(Duration::from_secs(60));
    let intruder = user(&[ROLE_PLATFORM_MANAGER], None);

    let result = sales::load_dashboard(&FakeSalesBackend, &cache, &intruder).await;
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

struct FakeAnalysisBackend {
    created: Mutex<Vec<NewAnalysisRequest>>,
}

#[async_trait]
impl TenantAnalysisApi for FakeAnalysisBackend {
    async fn create_analysis(&self, request: NewAnalysisRequest) -> ApiResult<AnalysisRequest> {
        let created = AnalysisRequest {
            id: Uuid::nil(),
            tenant_name: request.tenant_name.clone(),
            status: AnalysisStatus::Queued,
            score: None,
            created_at: None,
        };
        self.created.lock().unwrap().push(request);
        Ok(created)
    }

    async fn get_analysis(&self, id: Uuid) -> ApiResult<AnalysisRequest> {
        Ok(AnalysisRequest {
            id,
            tenant_name: "Maria".into(),
            status: AnalysisStatus::Completed,
            score: Some(780),
            created_at: None,
        })
    }

    async fn list_analyses(
        &self,
        _status: Option<AnalysisStatus>,
    ) -> ApiResult<Vec<AnalysisRequest>> {
        Ok(vec![])
    }

    async fn upload_analysis_document(
        &self,
        _id: Uuid,
        file_name: String,
        _content_type: String,
        bytes: Vec<u8>,
    ) -> ApiResult<AnalysisDocument> {
        Ok(AnalysisDocument {
            id: Uuid::nil(),
            file_name,
            size_bytes: Some(bytes.len() as u64),
        })
    }

    async fn download_analysis_report(&self, _id: Uuid) -> ApiResult<Vec<u8>> {
        Ok(b"%PDF-1.7".to_vec())
    }
}

#[actix_web::test]
async fn analysis_submission_normalizes_the_payload() {
    let backend = FakeAnalysisBackend {
        created: Mutex::new(vec![]),
    };
    let cache = QueryCache::new(Duration::from_secs(60));
    let staff = user(&[ROLE_AGENCY_STAFF], Some(7));

    let form = AnalysisRequestForm {
        tenant_name: " Maria Souza ".into(),
        tenant_email: "Maria@Example.com".into(),
        tenant_phone: None,
        document: "123.456.789-00".into(),
        monthly_income: Some("5200".into()),
    };
    let created = tenant_analysis::submit_analysis(&backend, &cache, &staff, form)
        .await
        .unwrap();
    assert_eq!(created.status, AnalysisStatus::Queued);

    let sent = backend.created.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tenant_name, "Maria Souza");
    assert_eq!(sent[0].tenant_email, "maria@example.com");
}

#[actix_web::test]
async fn report_download_requires_agency_staff() {
    let backend = FakeAnalysisBackend {
        created: Mutex::new(vec![]),
    };
    let outsider = user(&[ROLE_SALES_REP], None);

    let result = tenant_analysis::download_report(&backend, &outsider, Uuid::nil()).await;
    assert!(matches!(result, Err(ServiceError::Unauthorized)));

    let staff = user(&[ROLE_AGENCY_STAFF], Some(7));
    let bytes = tenant_analysis::download_report(&backend, &staff, Uuid::nil())
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
