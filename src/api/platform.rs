//! `/platform-manager/*` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiResult, QueryPairs};

/// Headline metrics for the platform manager dashboard.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PlatformOverview {
    pub agencies_total: u32,
    pub agencies_active: u32,
    pub users_total: u32,
    /// Monthly recurring revenue.
    pub mrr: f64,
    pub transactions_this_month: u32,
}

/// One month of the revenue series chart.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RevenuePoint {
    /// `YYYY-MM` month bucket.
    pub month: String,
    pub amount: f64,
}

#[async_trait]
pub trait PlatformApi {
    async fn platform_overview(&self) -> ApiResult<PlatformOverview>;
    async fn revenue_series(&self, months: u32) -> ApiResult<Vec<RevenuePoint>>;
}

#[async_trait]
impl PlatformApi for ApiClient {
    async fn platform_overview(&self) -> ApiResult<PlatformOverview> {
        self.get_json("/platform-manager/overview", &QueryPairs::new())
            .await
    }

    async fn revenue_series(&self, months: u32) -> ApiResult<Vec<RevenuePoint>> {
        let mut pairs = QueryPairs::new();
        pairs.set("months", months);
        self.get_list("/platform-manager/revenue", &pairs).await
    }
}
