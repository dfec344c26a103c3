//! View models for the legal auditor pages.

use serde::Serialize;

use crate::api::auditor::AuditSummary;
use crate::domain::document::Document;
use crate::dto::Widget;
use crate::dto::labels::{Badge, display_or_dash, document_kind_label, document_status_badge, format_size};
use crate::dto::platform::LogRow;
use crate::pagination::Paginated;

#[derive(Debug, Serialize)]
pub struct DocumentRow {
    pub id: i64,
    pub title: String,
    pub kind: &'static str,
    pub status: Badge,
    pub version: String,
    pub size: String,
}

impl DocumentRow {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document.id.get(),
            title: display_or_dash(document.title.as_deref()),
            kind: document_kind_label(document.kind),
            status: document_status_badge(document.status),
            version: document
                .version
                .map(|version| format!("v{version}"))
                .unwrap_or_else(|| "—".to_string()),
            size: format_size(document.size_bytes),
        }
    }
}

/// Data required to render the auditor dashboard.
#[derive(Serialize)]
pub struct AuditorDashboardData {
    pub summary: Widget<AuditSummary>,
    pub pending: Widget<Vec<DocumentRow>>,
    /// Agreements signed recently, surfaced for spot checks.
    pub recent_signed: Widget<Vec<DocumentRow>>,
}

/// Data required to render the auditor's audit-trail page.
#[derive(Serialize)]
pub struct AuditTrailPageData {
    pub rows: Paginated<LogRow>,
    pub total: u64,
    pub search_query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{DocumentKind, DocumentStatus};
    use crate::domain::types::DocumentId;

    #[test]
    fn sparse_documents_render_placeholders() {
        let document = Document {
            id: DocumentId::new(5).unwrap(),
            title: None,
            kind: DocumentKind::Agreement,
            status: DocumentStatus::Draft,
            version: None,
            size_bytes: None,
            agency_id: None,
            updated_at: None,
        };
        let row = DocumentRow::from_document(&document);
        assert_eq!(row.title, "—");
        assert_eq!(row.version, "—");
        assert_eq!(row.size, "—");
        assert_eq!(row.kind, "Agreement");
    }

    #[test]
    fn populated_documents_render_fields() {
        let document = Document {
            id: DocumentId::new(6).unwrap(),
            title: Some("Lease 2026".into()),
            kind: DocumentKind::Contract,
            status: DocumentStatus::Signed,
            version: Some(3),
            size_bytes: Some(2048),
            agency_id: None,
            updated_at: None,
        };
        let row = DocumentRow::from_document(&document);
        assert_eq!(row.title, "Lease 2026");
        assert_eq!(row.version, "v3");
        assert_eq!(row.size, "2.0 KB");
        assert_eq!(row.status.label, "Signed");
    }
}
