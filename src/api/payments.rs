//! `/payments` endpoints.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::types::{AgencyId, PaymentId};

#[derive(Clone, Debug, Default)]
pub struct PaymentListQuery {
    pub agency_id: Option<AgencyId>,
    pub status: Option<PaymentStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PaymentListQuery {
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

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("agencyId", self.agency_id);
        pairs.set_opt("status", self.status.as_ref().map(wire_code));
        pairs.set_opt("from", self.from);
        pairs.set_opt("to", self.to);
        pairs
    }
}

#[async_trait]
pub trait PaymentApi {
    async fn list_payments(&self, query: PaymentListQuery) -> ApiResult<Vec<Payment>>;
    async fn get_payment(&self, id: PaymentId) -> ApiResult<Payment>;
}

#[async_trait]
impl PaymentApi for ApiClient {
    async fn list_payments(&self, query: PaymentListQuery) -> ApiResult<Vec<Payment>> {
        self.get_list("/payments", &query.to_pairs()).await
    }

    async fn get_payment(&self, id: PaymentId) -> ApiResult<Payment> {
        self.get_json(&format!("/payments/{id}"), &QueryPairs::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_uses_iso_dates() {
        let pairs = PaymentListQuery::new()
            .status(PaymentStatus::Completed)
            .between(
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            )
            .to_pairs();
        assert_eq!(pairs.encode(), "status=completed&from=2026-01-01&to=2026-01-31");
    }
}
