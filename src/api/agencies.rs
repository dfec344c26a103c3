//! `/agencies` endpoints.

use async_trait::async_trait;
use serde::Serialize;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::agency::{Agency, AgencyStatus, PlanTier};
use crate::domain::types::AgencyId;
use crate::pagination::PageQuery;

/// Filters accepted by the agency listing endpoints.
#[derive(Clone, Debug, Default)]
pub struct AgencyListQuery {
    pub status: Option<AgencyStatus>,
    pub plan: Option<PlanTier>,
    pub search: Option<String>,
    pub pagination: Option<PageQuery>,
}

impl AgencyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: AgencyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn plan(mut self, plan: PlanTier) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(PageQuery::new(page, per_page));
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("status", self.status.as_ref().map(wire_code));
        pairs.set_opt("plan", self.plan.as_ref().map(wire_code));
        pairs.set_opt("search", self.search.clone());
        if let Some(pagination) = self.pagination {
            pagination.apply(&mut pairs);
        }
        pairs
    }
}

#[derive(Debug, Serialize)]
struct UpdateAgencyStatus {
    status: AgencyStatus,
}

#[async_trait]
pub trait AgencyApi {
    async fn list_agencies(&self, query: AgencyListQuery) -> ApiResult<Vec<Agency>>;
    async fn get_agency(&self, id: AgencyId) -> ApiResult<Agency>;
    async fn update_agency_status(&self, id: AgencyId, status: AgencyStatus) -> ApiResult<Agency>;
}

#[async_trait]
impl AgencyApi for ApiClient {
    async fn list_agencies(&self, query: AgencyListQuery) -> ApiResult<Vec<Agency>> {
        self.get_list("/agencies", &query.to_pairs()).await
    }

    async fn get_agency(&self, id: AgencyId) -> ApiResult<Agency> {
        self.get_json(&format!("/agencies/{id}"), &QueryPairs::new())
            .await
    }

    async fn update_agency_status(&self, id: AgencyId, status: AgencyStatus) -> ApiResult<Agency> {
        self.patch_json(&format!("/agencies/{id}/status"), &UpdateAgencyStatus { status })
            .await
    }
}
