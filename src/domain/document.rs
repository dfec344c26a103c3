use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AgencyId, DocumentId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Contract,
    Agreement,
    Notification,
    Inspection,
    #[serde(other)]
    Unknown,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Contract,
        DocumentKind::Agreement,
        DocumentKind::Notification,
        DocumentKind::Inspection,
        DocumentKind::Unknown,
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Active,
    Signed,
    Archived,
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Draft,
        DocumentStatus::Active,
        DocumentStatus::Signed,
        DocumentStatus::Archived,
        DocumentStatus::Unknown,
    ];
}

/// A stored document (contract, agreement, notification or inspection
/// report). Several fields are only populated by some source endpoints, so
/// they stay optional here and the view layer renders a placeholder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub title: Option<String>,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub version: Option<u32>,
    pub size_bytes: Option<u64>,
    pub agency_id: Option<AgencyId>,
    pub updated_at: Option<DateTime<Utc>>,
}
