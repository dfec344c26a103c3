//! View models for the tenant analysis pages.

use serde::Serialize;

use crate::api::tenant_analysis::{AnalysisRequest, AnalysisStatus};
use crate::dto::labels::{Badge, analysis_status_badge};

#[derive(Debug, Serialize)]
pub struct AnalysisRow {
    pub id: String,
    pub tenant_name: String,
    pub status: Badge,
    pub score: String,
    pub created_at: String,
    /// The report download link is only offered for completed analyses.
    pub report_ready: bool,
}

impl AnalysisRow {
    pub fn from_request(request: &AnalysisRequest) -> Self {
        Self {
            id: request.id.to_string(),
            tenant_name: request.tenant_name.clone(),
            status: analysis_status_badge(request.status),
            score: request
                .score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "—".to_string()),
            created_at: request
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "—".to_string()),
            report_ready: request.status == AnalysisStatus::Completed,
        }
    }
}

/// Data required to render the analyses listing page.
#[derive(Serialize)]
pub struct AnalysesPageData {
    pub rows: Vec<AnalysisRow>,
    pub completed: usize,
    pub in_progress: usize,
}

impl AnalysesPageData {
    pub fn build(requests: &[AnalysisRequest]) -> Self {
        let mut completed = 0;
        let mut in_progress = 0;
        for request in requests {
            match request.status {
                AnalysisStatus::Completed => completed += 1,
                AnalysisStatus::Queued | AnalysisStatus::Processing => in_progress += 1,
                AnalysisStatus::Failed | AnalysisStatus::Unknown => {}
            }
        }
        Self {
            rows: requests.iter().map(AnalysisRow::from_request).collect(),
            completed,
            in_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn request(status: AnalysisStatus, score: Option<u32>) -> AnalysisRequest {
        AnalysisRequest {
            id: Uuid::nil(),
            tenant_name: "Maria Souza".into(),
            status,
            score,
            created_at: None,
        }
    }

    #[test]
    fn report_link_only_for_completed_requests() {
        assert!(AnalysisRow::from_request(&request(AnalysisStatus::Completed, Some(812))).report_ready);
        assert!(!AnalysisRow::from_request(&request(AnalysisStatus::Processing, None)).report_ready);
    }

    #[test]
    fn page_counters_match_statuses() {
        let requests = vec![
            request(AnalysisStatus::Completed, Some(700)),
            request(AnalysisStatus::Queued, None),
            request(AnalysisStatus::Processing, None),
            request(AnalysisStatus::Failed, None),
        ];
        let page = AnalysesPageData::build(&requests);
        assert_eq!(page.completed, 1);
        assert_eq!(page.in_progress, 2);
        assert_eq!(page.rows.len(), 4);
        assert_eq!(page.rows[1].score, "—");
    }
}
