//! Services behind the agency staff pages.

use crate::ROLE_AGENCY_STAFF;
use crate::api::contracts::{ContractApi, ContractListQuery};
use crate::api::inspections::{InspectionApi, InspectionListQuery};
use crate::api::invoices::{InvoiceApi, InvoiceListQuery};
use crate::api::notifications::NotificationApi;
use crate::api::payments::{PaymentApi, PaymentListQuery};
use crate::api::properties::{PropertyApi, PropertyListQuery};
use crate::cache::QueryCache;
use crate::domain::property::Property;
use crate::domain::types::AgencyId;
use crate::dto::Widget;
use crate::dto::agency::{
    AgencyDashboardData, ContractRow, InspectionRow, InvoiceRow, NotificationRow, PaymentsWidget,
    PropertyFilter, PropertyRow,
};
use crate::models::auth::AuthenticatedUser;
use crate::services::{DASHBOARD_TTL, LIST_TTL, ServiceError, ServiceResult};

/// Resolves the caller's agency scope or rejects the request.
fn ensure_agency_staff(user: &AuthenticatedUser) -> ServiceResult<AgencyId> {
    if !user.has_role(ROLE_AGENCY_STAFF) {
        return Err(ServiceError::Unauthorized);
    }
    let agency_id = user.agency_id.ok_or(ServiceError::Unauthorized)?;
    AgencyId::new(agency_id).map_err(|_| ServiceError::Unauthorized)
}

async fn fetch_properties<A>(
    api: &A,
    cache: &QueryCache,
    agency_id: AgencyId,
) -> Result<Vec<Property>, crate::api::ApiError>
where
    A: PropertyApi + Sync + ?Sized,
{
    let query = PropertyListQuery::new().agency(agency_id);
    cache
        .get_or_fetch(
            &QueryCache::key("properties", &query.to_pairs()),
            Some(LIST_TTL),
            || api.list_properties(query.clone()),
        )
        .await
}

/// Assembles the agency staff dashboard. The widgets query independently;
/// the page degrades widget by widget.
pub async fn load_dashboard<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
) -> ServiceResult<AgencyDashboardData>
where
    A: PropertyApi
        + ContractApi
        + PaymentApi
        + InspectionApi
        + InvoiceApi
        + NotificationApi
        + Sync
        + ?Sized,
{
    let agency_id = ensure_agency_staff(user)?;

    let properties = fetch_properties(api, cache, agency_id).await.map(|rows| {
        rows.iter()
            .map(PropertyRow::from_property)
            .collect::<Vec<_>>()
    });

    let contract_query = ContractListQuery::new().agency(agency_id);
    let contracts = cache
        .get_or_fetch(
            &QueryCache::key("contracts", &contract_query.to_pairs()),
            Some(LIST_TTL),
            || api.list_contracts(contract_query.clone()),
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(ContractRow::from_contract)
                .collect::<Vec<_>>()
        });

    let payment_query = PaymentListQuery::new().agency(agency_id);
    let payments = cache
        .get_or_fetch(
            &QueryCache::key("payments", &payment_query.to_pairs()),
            Some(DASHBOARD_TTL),
            || api.list_payments(payment_query.clone()),
        )
        .await
        .map(|rows| PaymentsWidget::build(&rows));

    let inspection_query = InspectionListQuery::new().agency(agency_id);
    let inspections = cache
        .get_or_fetch(
            &QueryCache::key("inspections", &inspection_query.to_pairs()),
            Some(LIST_TTL),
            || api.list_inspections(inspection_query.clone()),
        )
        .await
        .map(|rows| {
            rows.iter()
                .map(InspectionRow::from_inspection)
                .collect::<Vec<_>>()
        });

    let invoice_query = InvoiceListQuery::new().agency(agency_id);
    let invoices = cache
        .get_or_fetch(
            &QueryCache::key("invoices", &invoice_query.to_pairs()),
            Some(LIST_TTL),
            || api.list_invoices(invoice_query.clone()),
        )
        .await
        .map(|rows| rows.iter().map(InvoiceRow::from_invoice).collect::<Vec<_>>());

    let notifications = cache
        .get_or_fetch("notifications?unread=true", Some(DASHBOARD_TTL), || {
            api.list_notifications(true)
        })
        .await
        .map(|rows| {
            rows.iter()
                .map(NotificationRow::from_notification)
                .collect::<Vec<_>>()
        });

    Ok(AgencyDashboardData {
        properties: Widget::from_result(properties),
        contracts: Widget::from_result(contracts),
        payments: Widget::from_result(payments),
        inspections: Widget::from_result(inspections),
        invoices: Widget::from_result(invoices),
        notifications: Widget::from_result(notifications),
    })
}

/// Loads the property list with in-memory filtering over the fetched set.
pub async fn load_properties_page<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    filter: PropertyFilter,
) -> ServiceResult<Vec<PropertyRow>>
where
    A: PropertyApi + Sync + ?Sized,
{
    let agency_id = ensure_agency_staff(user)?;

    let properties = fetch_properties(api, cache, agency_id).await?;
    Ok(properties
        .iter()
        .filter(|property| filter.matches(property))
        .map(PropertyRow::from_property)
        .collect())
}

/// Marks a notification as read and drops the cached notification lists.
pub async fn mark_notification_read<A>(
    api: &A,
    cache: &QueryCache,
    user: &AuthenticatedUser,
    notification_id: i64,
) -> ServiceResult<()>
where
    A: NotificationApi + Sync + ?Sized,
{
    ensure_agency_staff(user)?;

    api.mark_notification_read(notification_id).await?;
    cache.invalidate_resource("notifications").await;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;
    use crate::domain::property::PropertyStatus;
    use crate::domain::types::PropertyId;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "u-4".into(),
            email: "staff@habita.com".into(),
            name: "Staff".into(),
            roles: vec![ROLE_AGENCY_STAFF.to_string()],
            agency_id: Some(7),
            exp: 4_102_444_800,
        }
    }

    fn property(id: i64, title: &str, status: PropertyStatus) -> Property {
        Property {
            id: PropertyId::new(id).unwrap(),
            agency_id: Some(AgencyId::new(7).unwrap()),
            title: title.into(),
            address: None,
            city: None,
            status,
            rent_amount: None,
        }
    }

    #[tokio::test]
    async fn property_page_filters_the_fetched_set() {
        let mut backend = MockBackend::new();
        backend.expect_list_properties().times(1).returning(|_| {
            Ok(vec![
                property(1, "Apto Centro", PropertyStatus::Available),
                property(2, "Casa Jardim", PropertyStatus::Rented),
            ])
        });
        let cache = QueryCache::new(std::time::Duration::from_secs(60));

        let rows = load_properties_page(
            &backend,
            &cache,
            &staff(),
            PropertyFilter {
                status: Some(PropertyStatus::Rented),
                search: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Casa Jardim");
    }

    #[tokio::test]
    async fn users_without_an_agency_are_rejected() {
        let backend = MockBackend::new();
        let cache = QueryCache::new(std::time::Duration::from_secs(60));
        let mut user = staff();
        user.agency_id = None;

        let result =
            load_properties_page(&backend, &cache, &user, PropertyFilter::default()).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
