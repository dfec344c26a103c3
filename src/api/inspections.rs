//! `/inspections` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs};
use crate::domain::property::Inspection;
use crate::domain::types::{AgencyId, PropertyId};

#[derive(Clone, Debug, Default)]
pub struct InspectionListQuery {
    pub agency_id: Option<AgencyId>,
    pub property_id: Option<PropertyId>,
}

impl InspectionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    pub fn property(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("agencyId", self.agency_id);
        pairs.set_opt("propertyId", self.property_id);
        pairs
    }
}

#[async_trait]
pub trait InspectionApi {
    async fn list_inspections(&self, query: InspectionListQuery) -> ApiResult<Vec<Inspection>>;
}

#[async_trait]
impl InspectionApi for ApiClient {
    async fn list_inspections(&self, query: InspectionListQuery) -> ApiResult<Vec<Inspection>> {
        self.get_list("/inspections", &query.to_pairs()).await
    }
}
