//! `/auditor/*` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiResult, QueryPairs};
use crate::domain::document::Document;

/// Compliance review counters for the auditor dashboard.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuditSummary {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
}

#[async_trait]
pub trait AuditorApi {
    async fn audit_summary(&self) -> ApiResult<AuditSummary>;
    async fn pending_reviews(&self) -> ApiResult<Vec<Document>>;
}

#[async_trait]
impl AuditorApi for ApiClient {
    async fn audit_summary(&self) -> ApiResult<AuditSummary> {
        self.get_json("/auditor/summary", &QueryPairs::new()).await
    }

    async fn pending_reviews(&self) -> ApiResult<Vec<Document>> {
        self.get_list("/auditor/pending-reviews", &QueryPairs::new())
            .await
    }
}
