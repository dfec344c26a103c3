//! Static lookup tables translating enumerated backend codes into display
//! labels and style classes, plus the shared display-formatting helpers.
//!
//! Every mapping is total over its enumeration: unknown codes land on a
//! defined neutral badge instead of panicking or leaking raw codes.

use serde::Serialize;

use crate::api::sales::LeadStage;
use crate::api::tenant_analysis::AnalysisStatus;
use crate::domain::agency::{AgencyStatus, PlanTier};
use crate::domain::document::{DocumentKind, DocumentStatus};
use crate::domain::log::{LogKind, LogSeverity};
use crate::domain::payment::PaymentStatus;
use crate::domain::property::{InspectionStatus, PropertyStatus};
use crate::domain::user::{UserRole, UserStatus};

/// A label plus the style class the templates attach to it.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

const UNKNOWN_BADGE: Badge = Badge {
    label: "Unknown",
    class: "secondary",
};

pub fn plan_badge(plan: PlanTier) -> Badge {
    match plan {
        PlanTier::Free => Badge { label: "Free", class: "secondary" },
        PlanTier::Essential => Badge { label: "Essential", class: "info" },
        PlanTier::Professional => Badge { label: "Professional", class: "primary" },
        PlanTier::Enterprise => Badge { label: "Enterprise", class: "dark" },
        PlanTier::Unknown => UNKNOWN_BADGE,
    }
}

pub fn agency_status_badge(status: AgencyStatus) -> Badge {
    match status {
        AgencyStatus::Active => Badge { label: "Active", class: "success" },
        AgencyStatus::Inactive => Badge { label: "Inactive", class: "secondary" },
        AgencyStatus::Suspended => Badge { label: "Suspended", class: "danger" },
        AgencyStatus::Trial => Badge { label: "Trial", class: "info" },
        AgencyStatus::Cancelled => Badge { label: "Cancelled", class: "warning" },
        AgencyStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn user_status_badge(status: UserStatus) -> Badge {
    match status {
        UserStatus::Active => Badge { label: "Active", class: "success" },
        UserStatus::Suspended => Badge { label: "Suspended", class: "danger" },
        UserStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::PlatformManager => "Platform manager",
        UserRole::PlatformAdmin => "Platform admin",
        UserRole::LegalAuditor => "Legal auditor",
        UserRole::SalesRep => "Sales representative",
        UserRole::Support => "Support",
        UserRole::AgencyOwner => "Agency owner",
        UserRole::AgencyAdmin => "Agency admin",
        UserRole::AgencyManager => "Agency manager",
        UserRole::Agent => "Agent",
        UserRole::Inspector => "Inspector",
        UserRole::Financial => "Financial",
        UserRole::Unknown => "Unknown role",
    }
}

pub fn payment_status_badge(status: PaymentStatus) -> Badge {
    match status {
        PaymentStatus::Completed => Badge { label: "Completed", class: "success" },
        PaymentStatus::Pending => Badge { label: "Pending", class: "warning" },
        PaymentStatus::Scheduled => Badge { label: "Scheduled", class: "info" },
        PaymentStatus::Failed => Badge { label: "Failed", class: "danger" },
        PaymentStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn document_status_badge(status: DocumentStatus) -> Badge {
    match status {
        DocumentStatus::Draft => Badge { label: "Draft", class: "secondary" },
        DocumentStatus::Active => Badge { label: "Active", class: "primary" },
        DocumentStatus::Signed => Badge { label: "Signed", class: "success" },
        DocumentStatus::Archived => Badge { label: "Archived", class: "dark" },
        DocumentStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn document_kind_label(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Contract => "Contract",
        DocumentKind::Agreement => "Agreement",
        DocumentKind::Notification => "Notification",
        DocumentKind::Inspection => "Inspection",
        DocumentKind::Unknown => "Document",
    }
}

pub fn property_status_badge(status: PropertyStatus) -> Badge {
    match status {
        PropertyStatus::Available => Badge { label: "Available", class: "success" },
        PropertyStatus::Rented => Badge { label: "Rented", class: "primary" },
        PropertyStatus::Maintenance => Badge { label: "Maintenance", class: "warning" },
        PropertyStatus::Unlisted => Badge { label: "Unlisted", class: "secondary" },
        PropertyStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn inspection_status_badge(status: InspectionStatus) -> Badge {
    match status {
        InspectionStatus::Scheduled => Badge { label: "Scheduled", class: "info" },
        InspectionStatus::Completed => Badge { label: "Completed", class: "success" },
        InspectionStatus::Cancelled => Badge { label: "Cancelled", class: "secondary" },
        InspectionStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn lead_stage_badge(stage: LeadStage) -> Badge {
    match stage {
        LeadStage::New => Badge { label: "New", class: "info" },
        LeadStage::Contacted => Badge { label: "Contacted", class: "primary" },
        LeadStage::Demo => Badge { label: "Demo", class: "primary" },
        LeadStage::Negotiation => Badge { label: "Negotiation", class: "warning" },
        LeadStage::Won => Badge { label: "Won", class: "success" },
        LeadStage::Lost => Badge { label: "Lost", class: "secondary" },
        LeadStage::Unknown => UNKNOWN_BADGE,
    }
}

pub fn analysis_status_badge(status: AnalysisStatus) -> Badge {
    match status {
        AnalysisStatus::Queued => Badge { label: "Queued", class: "secondary" },
        AnalysisStatus::Processing => Badge { label: "Processing", class: "info" },
        AnalysisStatus::Completed => Badge { label: "Completed", class: "success" },
        AnalysisStatus::Failed => Badge { label: "Failed", class: "danger" },
        AnalysisStatus::Unknown => UNKNOWN_BADGE,
    }
}

pub fn log_kind_label(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Access => "Access",
        LogKind::Activity => "Activity",
        LogKind::System => "System",
        LogKind::Auth => "Authentication",
        LogKind::Error => "Error",
    }
}

pub fn log_severity_badge(severity: LogSeverity) -> Badge {
    match severity {
        LogSeverity::Info => Badge { label: "Info", class: "info" },
        LogSeverity::Warning => Badge { label: "Warning", class: "warning" },
        LogSeverity::Error => Badge { label: "Error", class: "danger" },
        LogSeverity::Success => Badge { label: "Success", class: "success" },
    }
}

/// Formats a monetary amount with thousands separators and two decimals.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${grouped}.{frac:02}", if negative { "-" } else { "" })
}

/// Formats an optional byte size; sparse endpoints omit it.
pub fn format_size(size_bytes: Option<u64>) -> String {
    match size_bytes {
        None => "—".to_string(),
        Some(bytes) if bytes < 1024 => format!("{bytes} B"),
        Some(bytes) if bytes < 1024 * 1024 => format!("{:.1} KB", bytes as f64 / 1024.0),
        Some(bytes) => format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
    }
}

/// Renders an optional display value, falling back to an em dash for fields
/// the backend does not supply.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "—".to_string(),
    }
}
