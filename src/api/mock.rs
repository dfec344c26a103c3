//! Mock backend implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::api::agencies::{AgencyApi, AgencyListQuery};
use crate::api::agreements::{AgreementApi, AgreementListQuery};
use crate::api::audit::{AuditApi, LogListQuery};
use crate::api::auditor::{AuditSummary, AuditorApi};
use crate::api::contracts::{ContractApi, ContractListQuery};
use crate::api::errors::ApiResult;
use crate::api::inspections::{InspectionApi, InspectionListQuery};
use crate::api::invoices::{InvoiceApi, InvoiceListQuery};
use crate::api::notifications::NotificationApi;
use crate::api::payments::{PaymentApi, PaymentListQuery};
use crate::api::plans::PlanApi;
use crate::api::platform::{PlatformApi, PlatformOverview, RevenuePoint};
use crate::api::properties::{PropertyApi, PropertyListQuery};
use crate::api::sales::{Commission, Lead, SalesApi};
use crate::api::tenant_analysis::{
    AnalysisDocument, AnalysisRequest, AnalysisStatus, NewAnalysisRequest, TenantAnalysisApi,
};
use crate::api::users::{UserApi, UserListQuery};
use crate::api::Page;
use crate::domain::agency::{Agency, AgencyStatus};
use crate::domain::billing::{Invoice, Notification, Plan};
use crate::domain::contract::Contract;
use crate::domain::document::Document;
use crate::domain::log::LogEntry;
use crate::domain::payment::Payment;
use crate::domain::property::{Inspection, Property};
use crate::domain::types::{AgencyId, ContractId, PaymentId, PropertyId, UserId};
use crate::domain::user::User;

mock! {
    pub Backend {}

    #[async_trait]
    impl AgencyApi for Backend {
        async fn list_agencies(&self, query: AgencyListQuery) -> ApiResult<Vec<Agency>>;
        async fn get_agency(&self, id: AgencyId) -> ApiResult<Agency>;
        async fn update_agency_status(&self, id: AgencyId, status: AgencyStatus) -> ApiResult<Agency>;
    }

    #[async_trait]
    impl UserApi for Backend {
        async fn list_users(&self, query: UserListQuery) -> ApiResult<Vec<User>>;
        async fn get_user(&self, id: UserId) -> ApiResult<User>;
        async fn suspend_user(&self, id: UserId) -> ApiResult<User>;
        async fn reactivate_user(&self, id: UserId) -> ApiResult<User>;
    }

    #[async_trait]
    impl PropertyApi for Backend {
        async fn list_properties(&self, query: PropertyListQuery) -> ApiResult<Vec<Property>>;
        async fn get_property(&self, id: PropertyId) -> ApiResult<Property>;
    }

    #[async_trait]
    impl ContractApi for Backend {
        async fn list_contracts(&self, query: ContractListQuery) -> ApiResult<Vec<Contract>>;
        async fn get_contract(&self, id: ContractId) -> ApiResult<Contract>;
    }

    #[async_trait]
    impl PaymentApi for Backend {
        async fn list_payments(&self, query: PaymentListQuery) -> ApiResult<Vec<Payment>>;
        async fn get_payment(&self, id: PaymentId) -> ApiResult<Payment>;
    }

    #[async_trait]
    impl PlanApi for Backend {
        async fn list_plans(&self) -> ApiResult<Vec<Plan>>;
    }

    #[async_trait]
    impl InspectionApi for Backend {
        async fn list_inspections(&self, query: InspectionListQuery) -> ApiResult<Vec<Inspection>>;
    }

    #[async_trait]
    impl AgreementApi for Backend {
        async fn list_agreements(&self, query: AgreementListQuery) -> ApiResult<Vec<Document>>;
    }

    #[async_trait]
    impl InvoiceApi for Backend {
        async fn list_invoices(&self, query: InvoiceListQuery) -> ApiResult<Vec<Invoice>>;
    }

    #[async_trait]
    impl NotificationApi for Backend {
        async fn list_notifications(&self, unread_only: bool) -> ApiResult<Vec<Notification>>;
        async fn mark_notification_read(&self, id: i64) -> ApiResult<Notification>;
    }

    #[async_trait]
    impl AuditApi for Backend {
        async fn list_logs(&self, query: LogListQuery) -> ApiResult<Page<LogEntry>>;
    }

    #[async_trait]
    impl PlatformApi for Backend {
        async fn platform_overview(&self) -> ApiResult<PlatformOverview>;
        async fn revenue_series(&self, months: u32) -> ApiResult<Vec<RevenuePoint>>;
    }

    #[async_trait]
    impl AuditorApi for Backend {
        async fn audit_summary(&self) -> ApiResult<AuditSummary>;
        async fn pending_reviews(&self) -> ApiResult<Vec<Document>>;
    }

    #[async_trait]
    impl SalesApi for Backend {
        async fn list_leads(&self) -> ApiResult<Vec<Lead>>;
        async fn list_commissions(&self) -> ApiResult<Vec<Commission>>;
    }

    #[async_trait]
    impl TenantAnalysisApi for Backend {
        async fn create_analysis(&self, request: NewAnalysisRequest) -> ApiResult<AnalysisRequest>;
        async fn get_analysis(&self, id: Uuid) -> ApiResult<AnalysisRequest>;
        async fn list_analyses(&self, status: Option<AnalysisStatus>) -> ApiResult<Vec<AnalysisRequest>>;
        async fn upload_analysis_document(
            &self,
            id: Uuid,
            file_name: String,
            content_type: String,
            bytes: Vec<u8>,
        ) -> ApiResult<AnalysisDocument>;
        async fn download_analysis_report(&self, id: Uuid) -> ApiResult<Vec<u8>>;
    }
}
