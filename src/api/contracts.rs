//! `/contracts` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::contract::Contract;
use crate::domain::document::DocumentStatus;
use crate::domain::types::{AgencyId, ContractId};

#[derive(Clone, Debug, Default)]
pub struct ContractListQuery {
    pub agency_id: Option<AgencyId>,
    pub status: Option<DocumentStatus>,
}

impl ContractListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    pub fn status(mut self, status: DocumentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("agencyId", self.agency_id);
        pairs.set_opt("status", self.status.as_ref().map(wire_code));
        pairs
    }
}

#[async_trait]
pub trait ContractApi {
    async fn list_contracts(&self, query: ContractListQuery) -> ApiResult<Vec<Contract>>;
    async fn get_contract(&self, id: ContractId) -> ApiResult<Contract>;
}

#[async_trait]
impl ContractApi for ApiClient {
    async fn list_contracts(&self, query: ContractListQuery) -> ApiResult<Vec<Contract>> {
        self.get_list("/contracts", &query.to_pairs()).await
    }

    async fn get_contract(&self, id: ContractId) -> ApiResult<Contract> {
        self.get_json(&format!("/contracts/{id}"), &QueryPairs::new())
            .await
    }
}
