//! `/notifications` endpoints.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, QueryPairs};
use crate::domain::billing::Notification;

#[async_trait]
pub trait NotificationApi {
    async fn list_notifications(&self, unread_only: bool) -> ApiResult<Vec<Notification>>;
    async fn mark_notification_read(&self, id: i64) -> ApiResult<Notification>;
}

#[async_trait]
impl NotificationApi for ApiClient {
    async fn list_notifications(&self, unread_only: bool) -> ApiResult<Vec<Notification>> {
        let mut pairs = QueryPairs::new();
        if unread_only {
            pairs.set("unread", "true");
        }
        self.get_list("/notifications", &pairs).await
    }

    async fn mark_notification_read(&self, id: i64) -> ApiResult<Notification> {
        self.post_json(&format!("/notifications/{id}/read"), &serde_json::json!({}))
            .await
    }
}
