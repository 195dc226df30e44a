use crate::{NotlifyClient, SdkResult};
use async_trait::async_trait;
use notlify_core::{HealthResponse, NotificationList, NotificationReceipt, NotificationRequest};

/// The calls a UI needs from the notification service.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    async fn send_notification(
        &self,
        request: &NotificationRequest,
    ) -> SdkResult<Option<NotificationReceipt>>;

    async fn list_notifications(&self, limit: u32) -> SdkResult<NotificationList>;

    async fn health(&self) -> SdkResult<HealthResponse>;
}

#[async_trait]
impl NotificationBackend for NotlifyClient {
    async fn send_notification(
        &self,
        request: &NotificationRequest,
    ) -> SdkResult<Option<NotificationReceipt>> {
        NotlifyClient::send_notification(self, request).await
    }

    async fn list_notifications(&self, limit: u32) -> SdkResult<NotificationList> {
        NotlifyClient::list_notifications(self, limit).await
    }

    async fn health(&self) -> SdkResult<HealthResponse> {
        NotlifyClient::health(self).await
    }
}
