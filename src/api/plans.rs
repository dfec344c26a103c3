//! `/plans` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs};
use crate::domain::billing::Plan;

#[async_trait]
pub trait PlanApi {
    async fn list_plans(&self) -> ApiResult<Vec<Plan>>;
}

#[async_trait]
impl PlanApi for ApiClient {
    async fn list_plans(&self) -> ApiResult<Vec<Plan>> {
        self.get_list("/plans", &QueryPairs::new()).await
    }
}
