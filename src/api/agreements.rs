//! `/agreements` endpoints. Agreements share the document shape; only a
//! subset of fields is populated by this endpoint.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::document::{Document, DocumentStatus};
use crate::domain::types::AgencyId;

#[derive(Clone, Debug, Default)]
pub struct AgreementListQuery {
    pub agency_id: Option<AgencyId>,
    pub status: Option<DocumentStatus>,
}

impl AgreementListQuery {
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
pub trait AgreementApi {
    async fn list_agreements(&self, query: AgreementListQuery) -> ApiResult<Vec<Document>>;
}

#[async_trait]
impl AgreementApi for ApiClient {
    async fn list_agreements(&self, query: AgreementListQuery) -> ApiResult<Vec<Document>> {
        self.get_list("/agreements", &query.to_pairs()).await
    }
}
