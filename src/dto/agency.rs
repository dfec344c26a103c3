//! View models for the agency staff pages.

use serde::Serialize;

use crate::domain::billing::{Invoice, Notification};
use crate::domain::contract::Contract;
use crate::domain::payment::{Payment, PaymentTotals};
use crate::domain::property::{Inspection, Property, PropertyStatus};
use crate::dto::labels::{
    Badge, display_or_dash, document_status_badge, format_currency, inspection_status_badge,
    payment_status_badge, property_status_badge,
};
use crate::dto::{Widget, matches_search};

#[derive(Debug, Serialize)]
pub struct PropertyRow {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub status: Badge,
    pub rent: String,
}

impl PropertyRow {
    pub fn from_property(property: &Property) -> Self {
        Self {
            id: property.id.get(),
            title: property.title.clone(),
            address: display_or_dash(property.address.as_deref()),
            status: property_status_badge(property.status),
            rent: property
                .rent_amount
                .map(format_currency)
                .unwrap_or_else(|| "—".to_string()),
        }
    }
}

/// Client-side filter for the property list.
#[derive(Clone, Debug, Default)]
pub struct PropertyFilter {
    pub search: Option<String>,
    pub status: Option<PropertyStatus>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(status) = self.status
            && property.status != status
        {
            return false;
        }
        match &self.search {
            Some(needle) => matches_search(
                needle,
                &[
                    Some(property.title.as_str()),
                    property.address.as_deref(),
                    property.city.as_deref(),
                ],
            ),
            None => true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContractRow {
    pub id: i64,
    pub tenant: String,
    pub status: Badge,
    pub rent: String,
    pub period: String,
}

impl ContractRow {
    pub fn from_contract(contract: &Contract) -> Self {
        let period = match (contract.starts_at, contract.ends_at) {
            (Some(start), Some(end)) => format!("{start} – {end}"),
            (Some(start), None) => format!("since {start}"),
            _ => "—".to_string(),
        };
        Self {
            id: contract.id.get(),
            tenant: display_or_dash(contract.tenant_name.as_deref()),
            status: document_status_badge(contract.status),
            rent: contract
                .monthly_rent
                .map(format_currency)
                .unwrap_or_else(|| "—".to_string()),
            period,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentRow {
    pub id: i64,
    pub amount: String,
    pub status: Badge,
    pub payer: String,
    pub recipient: String,
    pub split_count: usize,
}

impl PaymentRow {
    pub fn from_payment(payment: &Payment) -> Self {
        Self {
            id: payment.id.get(),
            amount: format_currency(payment.amount),
            status: payment_status_badge(payment.status),
            payer: display_or_dash(payment.payer.as_deref()),
            recipient: display_or_dash(payment.recipient.as_deref()),
            split_count: payment.splits.len(),
        }
    }
}

/// Payment table plus the formatted status totals row.
#[derive(Serialize)]
pub struct PaymentsWidget {
    pub rows: Vec<PaymentRow>,
    pub totals: PaymentTotals,
    pub completed_display: String,
    pub pending_display: String,
}

impl PaymentsWidget {
    pub fn build(payments: &[Payment]) -> Self {
        let totals = PaymentTotals::collect(payments);
        Self {
            rows: payments.iter().map(PaymentRow::from_payment).collect(),
            totals,
            completed_display: format_currency(totals.completed),
            pending_display: format_currency(totals.pending),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InspectionRow {
    pub id: i64,
    pub property_id: i64,
    pub scheduled_for: String,
    pub status: Badge,
    pub inspector: String,
}

impl InspectionRow {
    pub fn from_inspection(inspection: &Inspection) -> Self {
        Self {
            id: inspection.id,
            property_id: inspection.property_id.get(),
            scheduled_for: inspection
                .scheduled_for
                .map(|date| date.to_string())
                .unwrap_or_else(|| "—".to_string()),
            status: inspection_status_badge(inspection.status),
            inspector: display_or_dash(inspection.inspector.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceRow {
    pub id: i64,
    pub amount: String,
    pub status: Badge,
    pub issued_at: String,
    pub due_at: String,
}

impl InvoiceRow {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            amount: format_currency(invoice.amount),
            status: payment_status_badge(invoice.status),
            issued_at: invoice
                .issued_at
                .map(|date| date.to_string())
                .unwrap_or_else(|| "—".to_string()),
            due_at: invoice
                .due_at
                .map(|date| date.to_string())
                .unwrap_or_else(|| "—".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub read: bool,
}

impl NotificationRow {
    pub fn from_notification(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title.clone(),
            body: display_or_dash(notification.body.as_deref()),
            read: notification.read,
        }
    }
}

/// Data required to render the agency staff dashboard.
#[derive(Serialize)]
pub struct AgencyDashboardData {
    pub properties: Widget<Vec<PropertyRow>>,
    pub contracts: Widget<Vec<ContractRow>>,
    pub payments: Widget<PaymentsWidget>,
    pub inspections: Widget<Vec<InspectionRow>>,
    pub invoices: Widget<Vec<InvoiceRow>>,
    pub notifications: Widget<Vec<NotificationRow>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{PaymentId, PropertyId};

    fn property(title: &str, status: PropertyStatus) -> Property {
        Property {
            id: PropertyId::new(1).unwrap(),
            agency_id: None,
            title: title.into(),
            address: Some("Rua das Flores, 100".into()),
            city: Some("Curitiba".into()),
            status,
            rent_amount: Some(1800.0),
        }
    }

    #[test]
    fn property_filter_by_status_and_search() {
        let available = property("Apto Centro", PropertyStatus::Available);
        let rented = property("Casa Jardim", PropertyStatus::Rented);

        let filter = PropertyFilter {
            search: Some("centro".into()),
            status: Some(PropertyStatus::Available),
        };
        assert!(filter.matches(&available));
        assert!(!filter.matches(&rented));

        let by_city = PropertyFilter {
            search: Some("curitiba".into()),
            status: None,
        };
        assert!(by_city.matches(&rented));
    }

    #[test]
    fn payments_widget_formats_totals() {
        let payments = vec![Payment {
            id: PaymentId::new(1).unwrap(),
            agency_id: None,
            amount: 2500.0,
            status: crate::domain::payment::PaymentStatus::Completed,
            payer: Some("Tenant".into()),
            recipient: None,
            due_date: None,
            paid_at: None,
            splits: vec![],
        }];
        let widget = PaymentsWidget::build(&payments);
        assert_eq!(widget.rows.len(), 1);
        assert_eq!(widget.completed_display, "$2,500.00");
        assert_eq!(widget.rows[0].recipient, "—");
    }
}
