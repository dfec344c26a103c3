//! `/users` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs, wire_code};
use crate::domain::types::{AgencyId, UserId};
use crate::domain::user::{User, UserRole, UserStatus};

/// Filters accepted by the user listing endpoint.
#[derive(Clone, Debug, Default)]
pub struct UserListQuery {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub agency_id: Option<AgencyId>,
    pub search: Option<String>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn agency(mut self, agency_id: AgencyId) -> Self {
        self.agency_id = Some(agency_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("role", self.role.as_ref().map(wire_code));
        pairs.set_opt("status", self.status.as_ref().map(wire_code));
        pairs.set_opt("agencyId", self.agency_id);
        pairs.set_opt("search", self.search.clone());
        pairs
    }
}

#[async_trait]
pub trait UserApi {
    async fn list_users(&self, query: UserListQuery) -> ApiResult<Vec<User>>;
    async fn get_user(&self, id: UserId) -> ApiResult<User>;
    async fn suspend_user(&self, id: UserId) -> ApiResult<User>;
    async fn reactivate_user(&self, id: UserId) -> ApiResult<User>;
}

#[async_trait]
impl UserApi for ApiClient {
    async fn list_users(&self, query: UserListQuery) -> ApiResult<Vec<User>> {
        self.get_list("/users", &query.to_pairs()).await
    }

    async fn get_user(&self, id: UserId) -> ApiResult<User> {
        self.get_json(&format!("/users/{id}"), &QueryPairs::new())
            .await
    }

    async fn suspend_user(&self, id: UserId) -> ApiResult<User> {
        self.post_json(&format!("/users/{id}/suspend"), &serde_json::json!({}))
            .await
    }

    async fn reactivate_user(&self, id: UserId) -> ApiResult<User> {
        self.post_json(&format!("/users/{id}/reactivate"), &serde_json::json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filters_use_snake_case_codes() {
        let pairs = UserListQuery::new()
            .role(UserRole::LegalAuditor)
            .status(UserStatus::Active)
            .to_pairs();
        assert_eq!(pairs.encode(), "role=legal_auditor&status=active");
    }
}
