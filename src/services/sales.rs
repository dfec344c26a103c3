//! Services behind the sales representative pages.

use crate::ROLE_SALES_REP;
use crate::api::plans::PlanApi;
use crate::api::sales::SalesApi;
use crate::cache::QueryCache;
use crate::dto::Widget;
use crate::dto::sales::{
    CommissionsWidget, LeadRow, PipelineSummary, PipelineWidget, PlanRow, SalesDashboardData,
};
use crate::models::auth::AuthenticatedUser;
use crate::services::{DASHBOARD_TTL, LIST_TTL, REFERENCE_TTL, ServiceError, ServiceResult};

fn ensure_sales_rep(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ROLE_SALES_REP) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Assembles the sales dashboard: lead pipeline, commissions and the current
/// price list, each widget independent of the others.
pub async fn load_dashboard<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
) -> ServiceResult<SalesDashboardData>
where
    A: SalesApi + PlanApi + Sync + ?Sized,
{
    ensure_sales_rep(user)?;

    let pipeline = cache
        .get_or_fetch("sales-rep/leads", Some(DASHBOARD_TTL), || api.list_leads())
        .await
        .map(|leads| PipelineWidget {
            summary: PipelineSummary::collect(&leads),
            rows: leads.iter().map(LeadRow::from_lead).collect(),
        });

    let commissions = cache
        .get_or_fetch("sales-rep/commissions", Some(LIST_TTL), || {
            api.list_commissions()
        })
        .await
        .map(|commissions| CommissionsWidget::build(&commissions));

    let plans = cache
        .get_or_fetch("plans", Some(REFERENCE_TTL), || api.list_plans())
        .await
        .map(|plans| plans.iter().map(PlanRow::from_plan).collect::<Vec<_>>());

    Ok(SalesDashboardData {
        pipeline: Widget::from_result(pipeline),
        commissions: Widget::from_result(commissions),
        plans: Widget::from_result(plans),
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;
    use crate::api::sales::{Commission, Lead, LeadStage};
    use crate::domain::payment::PaymentStatus;

    fn rep() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "u-3".into(),
            email: "rep@rentora.com".into(),
            name: "Rep".into(),
            roles: vec![ROLE_SALES_REP.to_string()],
            agency_id: None,
            exp: 4_102_444_800,
        }
    }

    #[tokio::test]
    async fn dashboard_derives_pipeline_and_commission_sums() {
        let mut backend = MockBackend::new();
        backend.expect_list_leads().times(1).returning(|| {
            Ok(vec![
                Lead {
                    id: 1,
                    agency_name: "Zenith".into(),
                    contact: None,
                    stage: LeadStage::Negotiation,
                    value: Some(2400.0),
                },
                Lead {
                    id: 2,
                    agency_name: "Morada".into(),
                    contact: Some("ana@morada.com".into()),
                    stage: LeadStage::Won,
                    value: Some(900.0),
                },
            ])
        });
        backend.expect_list_commissions().times(1).returning(|| {
            Ok(vec![Commission {
                id: 9,
                amount: 350.0,
                status: PaymentStatus::Completed,
                period: "2026-08".into(),
            }])
        });
        backend.expect_list_plans().times(1).returning(|| Ok(vec![]));
        let cache = QueryCache::new(std::time::Duration::from_secs(60));

        let data = load_dashboard(&backend, &cache, &rep()).await.unwrap();
        let pipeline = data.pipeline.data.unwrap();
        assert_eq!(pipeline.summary.open, 1);
        assert_eq!(pipeline.summary.won, 1);
        assert_eq!(pipeline.summary.projected_value, 2400.0);
        let commissions = data.commissions.data.unwrap();
        assert_eq!(commissions.paid_display, "$350.00");
    }
}
