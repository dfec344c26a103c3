use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AgencyId, PropertyId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Rented,
    Maintenance,
    Unlisted,
    #[serde(other)]
    Unknown,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::Available,
        PropertyStatus::Rented,
        PropertyStatus::Maintenance,
        PropertyStatus::Unlisted,
        PropertyStatus::Unknown,
    ];
}

/// A managed property as listed on the agency dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub agency_id: Option<AgencyId>,
    pub title: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub status: PropertyStatus,
    pub rent_amount: Option<f64>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl InspectionStatus {
    pub const ALL: [InspectionStatus; 4] = [
        InspectionStatus::Scheduled,
        InspectionStatus::Completed,
        InspectionStatus::Cancelled,
        InspectionStatus::Unknown,
    ];
}

/// A move-in/move-out inspection appointment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub id: i64,
    pub property_id: PropertyId,
    pub scheduled_for: Option<NaiveDate>,
    pub status: InspectionStatus,
    pub inspector: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}
