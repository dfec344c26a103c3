//! `/tenant-analysis/*` endpoints: credit/background analysis requests for
//! prospective tenants, with multipart document upload and a binary report
//! download.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl AnalysisStatus {
    pub const ALL: [AnalysisStatus; 5] = [
        AnalysisStatus::Queued,
        AnalysisStatus::Processing,
        AnalysisStatus::Completed,
        AnalysisStatus::Failed,
        AnalysisStatus::Unknown,
    ];
}

/// Payload submitted to open an analysis request.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewAnalysisRequest {
    pub tenant_name: String,
    pub tenant_email: String,
    pub tenant_phone: Option<String>,
    /// Tax/identity document number of the prospective tenant.
    pub document: String,
    pub monthly_income: Option<u64>,
}

/// An analysis request as reported by the backend.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub tenant_name: String,
    pub status: AnalysisStatus,
    /// 0–1000 risk score, present once the analysis completes.
    pub score: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Metadata for a supporting document attached to a request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AnalysisDocument {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: Option<u64>,
}

#[async_trait]
pub trait TenantAnalysisApi {
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
    /// Downloads the finished report as raw bytes (PDF passthrough).
    async fn download_analysis_report(&self, id: Uuid) -> ApiResult<Vec<u8>>;
}

#[async_trait]
impl TenantAnalysisApi for ApiClient {
    async fn create_analysis(&self, request: NewAnalysisRequest) -> ApiResult<AnalysisRequest> {
        self.post_json("/tenant-analysis/requests", &request).await
    }

    async fn get_analysis(&self, id: Uuid) -> ApiResult<AnalysisRequest> {
        self.get_json(&format!("/tenant-analysis/requests/{id}"), &QueryPairs::new())
            .await
    }

    async fn list_analyses(&self, status: Option<AnalysisStatus>) -> ApiResult<Vec<AnalysisRequest>> {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("status", status.as_ref().map(wire_code));
        self.get_list("/tenant-analysis/requests", &pairs).await
    }

    async fn upload_analysis_document(
        &self,
        id: Uuid,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> ApiResult<AnalysisDocument> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart(&format!("/tenant-analysis/requests/{id}/documents"), form)
            .await
    }

    async fn download_analysis_report(&self, id: Uuid) -> ApiResult<Vec<u8>> {
        self.get_bytes(&format!("/tenant-analysis/requests/{id}/report"))
            .await
    }
}
