use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AgencyId, PaymentId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Scheduled,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 5] = [
        PaymentStatus::Completed,
        PaymentStatus::Pending,
        PaymentStatus::Scheduled,
        PaymentStatus::Failed,
        PaymentStatus::Unknown,
    ];
}

/// One leg of a payment split between recipients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaymentSplit {
    pub recipient: String,
    /// Recipient classification (owner, agency, platform fee, ...); free-form
    /// on the wire.
    pub recipient_type: Option<String>,
    pub amount: f64,
    pub percentage: Option<f64>,
}

/// A payment transaction between a payer and one or more recipients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub agency_id: Option<AgencyId>,
    pub amount: f64,
    pub status: PaymentStatus,
    pub payer: Option<String>,
    pub recipient: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub splits: Vec<PaymentSplit>,
}

/// Amount sums and counts per payment status, derived in a single pass.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct PaymentTotals {
    pub count: usize,
    pub completed: f64,
    pub pending: f64,
    pub scheduled: f64,
    pub failed: f64,
}

impl PaymentTotals {
    pub fn collect(payments: &[Payment]) -> Self {
        let mut totals = Self::default();
        for payment in payments {
            totals.count += 1;
            match payment.status {
                PaymentStatus::Completed => totals.completed += payment.amount,
                PaymentStatus::Pending => totals.pending += payment.amount,
                PaymentStatus::Scheduled => totals.scheduled += payment.amount,
                PaymentStatus::Failed => totals.failed += payment.amount,
                PaymentStatus::Unknown => {}
            }
        }
        totals
    }
}
