use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::agency::PlanTier;
use crate::domain::payment::PaymentStatus;
use crate::domain::types::AgencyId;

/// A subscription plan as advertised by the platform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: String,
    pub monthly_price: f64,
    pub max_users: Option<u32>,
    pub max_properties: Option<u32>,
    pub max_contracts: Option<u32>,
}

/// A subscription invoice issued to an agency. Shares the payment status
/// lifecycle with the payments endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub agency_id: AgencyId,
    pub amount: f64,
    pub status: PaymentStatus,
    pub issued_at: Option<NaiveDate>,
    pub due_at: Option<NaiveDate>,
}

/// An in-app notification addressed to the current user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}
