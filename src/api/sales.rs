//! `/sales-rep/*` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiResult, QueryPairs};
use crate::domain::payment::PaymentStatus;

/// Stage of a lead in the sales pipeline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    New,
    Contacted,
    Demo,
    Negotiation,
    Won,
    Lost,
    #[serde(other)]
    Unknown,
}

impl LeadStage {
    pub const ALL: [LeadStage; 7] = [
        LeadStage::New,
        LeadStage::Contacted,
        LeadStage::Demo,
        LeadStage::Negotiation,
        LeadStage::Won,
        LeadStage::Lost,
        LeadStage::Unknown,
    ];
}

/// A prospective agency in the rep's pipeline.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Lead {
    pub id: i64,
    pub agency_name: String,
    pub contact: Option<String>,
    pub stage: LeadStage,
    /// Expected monthly contract value.
    pub value: Option<f64>,
}

/// A commission accrued by the rep. Shares the payment status lifecycle.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Commission {
    pub id: i64,
    pub amount: f64,
    pub status: PaymentStatus,
    /// `YYYY-MM` accrual period.
    pub period: String,
}

#[async_trait]
pub trait SalesApi {
    async fn list_leads(&self) -> ApiResult<Vec<Lead>>;
    async fn list_commissions(&self) -> ApiResult<Vec<Commission>>;
}

#[async_trait]
impl SalesApi for ApiClient {
    async fn list_leads(&self) -> ApiResult<Vec<Lead>> {
        self.get_list("/sales-rep/leads", &QueryPairs::new()).await
    }

    async fn list_commissions(&self) -> ApiResult<Vec<Commission>> {
        self.get_list("/sales-rep/commissions", &QueryPairs::new())
            .await
    }
}
