//! View models for the sales representative pages.

use serde::Serialize;

use crate::api::sales::{Commission, Lead, LeadStage};
use crate::domain::billing::Plan;
use crate::domain::payment::PaymentStatus;
use crate::dto::Widget;
use crate::dto::labels::{
    Badge, display_or_dash, format_currency, lead_stage_badge, payment_status_badge, plan_badge,
};

#[derive(Debug, Serialize)]
pub struct LeadRow {
    pub id: i64,
    pub agency_name: String,
    pub contact: String,
    pub stage: Badge,
    pub value: String,
}

impl LeadRow {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            agency_name: lead.agency_name.clone(),
            contact: display_or_dash(lead.contact.as_deref()),
            stage: lead_stage_badge(lead.stage),
            value: lead
                .value
                .map(format_currency)
                .unwrap_or_else(|| "—".to_string()),
        }
    }
}

/// Pipeline counters derived from the lead list in a single pass.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct PipelineSummary {
    pub total: usize,
    pub open: usize,
    pub won: usize,
    pub lost: usize,
    /// Sum of expected values across open leads.
    pub projected_value: f64,
}

impl PipelineSummary {
    pub fn collect(leads: &[Lead]) -> Self {
        let mut summary = Self::default();
        for lead in leads {
            summary.total += 1;
            match lead.stage {
                LeadStage::Won => summary.won += 1,
                LeadStage::Lost => summary.lost += 1,
                _ => {
                    summary.open += 1;
                    summary.projected_value += lead.value.unwrap_or(0.0);
                }
            }
        }
        summary
    }
}

#[derive(Debug, Serialize)]
pub struct CommissionRow {
    pub id: i64,
    pub period: String,
    pub amount: String,
    pub status: Badge,
}

impl CommissionRow {
    pub fn from_commission(commission: &Commission) -> Self {
        Self {
            id: commission.id,
            period: commission.period.clone(),
            amount: format_currency(commission.amount),
            status: payment_status_badge(commission.status),
        }
    }
}

/// Paid vs outstanding commission sums, one pass over the list.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct CommissionSummary {
    pub paid: f64,
    pub outstanding: f64,
}

impl CommissionSummary {
    pub fn collect(commissions: &[Commission]) -> Self {
        let mut summary = Self::default();
        for commission in commissions {
            match commission.status {
                PaymentStatus::Completed => summary.paid += commission.amount,
                PaymentStatus::Pending | PaymentStatus::Scheduled => {
                    summary.outstanding += commission.amount
                }
                PaymentStatus::Failed | PaymentStatus::Unknown => {}
            }
        }
        summary
    }
}

#[derive(Serialize)]
pub struct PipelineWidget {
    pub summary: PipelineSummary,
    pub rows: Vec<LeadRow>,
}

#[derive(Serialize)]
pub struct CommissionsWidget {
    pub summary: CommissionSummary,
    pub paid_display: String,
    pub outstanding_display: String,
    pub rows: Vec<CommissionRow>,
}

impl CommissionsWidget {
    pub fn build(commissions: &[Commission]) -> Self {
        let summary = CommissionSummary::collect(commissions);
        Self {
            summary,
            paid_display: format_currency(summary.paid),
            outstanding_display: format_currency(summary.outstanding),
            rows: commissions.iter().map(CommissionRow::from_commission).collect(),
        }
    }
}

/// One row of the price list the rep pitches from.
#[derive(Debug, Serialize)]
pub struct PlanRow {
    pub name: String,
    pub tier: Badge,
    pub monthly_price: String,
    pub max_users: String,
    pub max_properties: String,
}

impl PlanRow {
    pub fn from_plan(plan: &Plan) -> Self {
        let limit = |value: Option<u32>| {
            value
                .map(|limit| limit.to_string())
                .unwrap_or_else(|| "Unlimited".to_string())
        };
        Self {
            name: plan.name.clone(),
            tier: plan_badge(plan.tier),
            monthly_price: format_currency(plan.monthly_price),
            max_users: limit(plan.max_users),
            max_properties: limit(plan.max_properties),
        }
    }
}

/// Data required to render the sales rep dashboard.
#[derive(Serialize)]
pub struct SalesDashboardData {
    pub pipeline: Widget<PipelineWidget>,
    pub commissions: Widget<CommissionsWidget>,
    pub plans: Widget<Vec<PlanRow>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(stage: LeadStage, value: Option<f64>) -> Lead {
        Lead {
            id: 1,
            agency_name: "Zenith".into(),
            contact: None,
            stage,
            value,
        }
    }

    #[test]
    fn pipeline_summary_counts_match_predicates() {
        let leads = vec![
            lead(LeadStage::New, Some(500.0)),
            lead(LeadStage::Negotiation, Some(1500.0)),
            lead(LeadStage::Won, Some(900.0)),
            lead(LeadStage::Lost, None),
        ];
        let summary = PipelineSummary::collect(&leads);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.open, 2);
        assert_eq!(summary.won, 1);
        assert_eq!(summary.lost, 1);
        assert_eq!(summary.projected_value, 2000.0);
    }

    #[test]
    fn pipeline_summary_over_empty_list() {
        assert_eq!(PipelineSummary::collect(&[]), PipelineSummary::default());
    }

    #[test]
    fn commission_sums_split_paid_and_outstanding() {
        let commissions = vec![
            Commission {
                id: 1,
                amount: 300.0,
                status: PaymentStatus::Completed,
                period: "2026-07".into(),
            },
            Commission {
                id: 2,
                amount: 120.0,
                status: PaymentStatus::Pending,
                period: "2026-08".into(),
            },
            Commission {
                id: 3,
                amount: 80.0,
                status: PaymentStatus::Failed,
                period: "2026-08".into(),
            },
        ];
        let widget = CommissionsWidget::build(&commissions);
        assert_eq!(widget.summary.paid, 300.0);
        assert_eq!(widget.summary.outstanding, 120.0);
        assert_eq!(widget.paid_display, "$300.00");
        assert_eq!(widget.rows.len(), 3);
    }
}
