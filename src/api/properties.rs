//! `/properties` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::property::{Property, PropertyStatus};
use crate::domain::types::{AgencyId, PropertyId};

#[derive(Clone, Debug, Default)]
pub struct PropertyListQuery {
    pub agency_id: Option<AgencyId>,
    pub status: Option<PropertyStatus>,
    pub search: Option<String>,
}

impl PropertyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("agencyId", self.agency_id);
        pairs.set_opt("status", self.status.as_ref().map(wire_code));
        pairs.set_opt("search", self.search.clone());
        pairs
    }
}

#[async_trait]
pub trait PropertyApi {
    async fn list_properties(&self, query: PropertyListQuery) -> ApiResult<Vec<Property>>;
    async fn get_property(&self, id: PropertyId) -> ApiResult<Property>;
}

#[async_trait]
impl PropertyApi for ApiClient {
    async fn list_properties(&self, query: PropertyListQuery) -> ApiResult<Vec<Property>> {
        self.get_list("/properties", &query.to_pairs()).await
    }

    async fn get_property(&self, id: PropertyId) -> ApiResult<Property> {
        self.get_json(&format!("/properties/{id}"), &QueryPairs::new())
            .await
    }
}
