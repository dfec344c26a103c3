//! `/invoices` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::billing::Invoice;
use crate::domain::payment::PaymentStatus;
use crate::domain::types::AgencyId;

#[derive(Clone, Debug, Default)]
pub struct InvoiceListQuery {
    pub agency_id: Option<AgencyId>,
    pub status: Option<PaymentStatus>,
}

impl InvoiceListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
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
pub trait InvoiceApi {
    async fn list_invoices(&self, query: InvoiceListQuery) -> ApiResult<Vec<Invoice>>;
}

#[async_trait]
impl InvoiceApi for ApiClient {
    async fn list_invoices(&self, query: InvoiceListQuery) -> ApiResult<Vec<Invoice>> {
        self.get_list("/invoices", &query.to_pairs()).await
    }
}
