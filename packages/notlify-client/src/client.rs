use crate::banner::{BANNER_TIMEOUT, BannerKind};
use crate::form::NotificationForm;
use crate::render::render_list;
use crate::state::{LoadingGuard, SharedUiState, UiState, lock};
use notlify_sdk::{
    AppConfig, DEFAULT_LIST_LIMIT, NotificationBackend, NotificationReceipt, NotlifyClient,
    SdkError,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Notification sent successfully!";
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to send notification";
pub const LIST_FAILURE_MESSAGE: &str = "Failed to load notifications";
pub const HEALTH_WARNING_MESSAGE: &str = "Backend service is unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted by the backend. The receipt is present when the response
    /// body could be read as one.
    Sent(Option<NotificationReceipt>),
    /// Rejected or never delivered; carries the message shown to the user.
    Failed(String),
}

/// Mediates between the operator's form/list and the notification backend.
pub struct NotificationClient<B: NotificationBackend = NotlifyClient> {
    pub backend: B,
    pub ui: SharedUiState,
    pub list_limit: u32,
    banner_timeout: Duration,
}

impl NotificationClient<NotlifyClient> {
    pub fn from_config(config: &AppConfig) -> Self {
        let mut client = Self::new(NotlifyClient::from_config(config));
        client.list_limit = config.list_limit;
        client
    }
}

impl<B: NotificationBackend> NotificationClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            ui: Arc::new(Mutex::new(UiState::default())),
            list_limit: DEFAULT_LIST_LIMIT,
            banner_timeout: BANNER_TIMEOUT,
        }
    }

    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    /// Copy of the current UI state.
    pub fn snapshot(&self) -> UiState {
        lock(&self.ui).clone()
    }

    pub fn fill_form(&self, form: NotificationForm) {
        lock(&self.ui).form = form;
    }

    pub fn set_loading(&self, show: bool) {
        lock(&self.ui).loading = show;
    }

    /// Shows `message` in the banner slot and schedules its hide. Outside a
    /// tokio runtime the banner simply stays up.
    pub fn show_banner(&self, message: &str, kind: BannerKind) {
        let generation = lock(&self.ui).banner.show(message, kind);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!("no runtime available, banner will not auto-hide");
            return;
        };
        let ui = Arc::clone(&self.ui);
        let timeout = self.banner_timeout;
        handle.spawn(async move {
            tokio::time::sleep(timeout).await;
            lock(&ui).banner.hide(generation);
        });
    }

    /// Sends the current form contents. On success the form is cleared and
    /// the list refreshed once; on failure both are left untouched.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = lock(&self.ui).form.to_request();
        debug!("submitting notification: {}", request.subject);

        let result = {
            let _loading = LoadingGuard::new(&self.ui);
            self.backend.send_notification(&request).await
        };

        match result {
            Ok(receipt) => {
                self.show_banner(SUBMIT_SUCCESS_MESSAGE, BannerKind::Success);
                lock(&self.ui).form.reset();
                self.refresh().await;
                SubmitOutcome::Sent(receipt)
            }
            Err(err) => {
                let message = failure_message(&err);
                warn!("failed to send notification: {err}");
                self.show_banner(&message, BannerKind::Error);
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Refreshes with the configured limit.
    pub async fn refresh(&self) {
        self.refresh_list(self.list_limit).await;
    }

    /// Replaces the rendered list with the latest `limit` notifications. A
    /// failed call keeps whatever was rendered before.
    pub async fn refresh_list(&self, limit: u32) {
        let rendered = match self.backend.list_notifications(limit).await {
            Ok(list) => render_list(&list.notifications)
                .map(|html| (html, list.notifications))
                .map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        match rendered {
            Ok((html, notifications)) => {
                let mut ui = lock(&self.ui);
                ui.list_html = html;
                ui.notifications = notifications;
            }
            Err(err) => {
                warn!("failed to load notifications: {err}");
                self.show_banner(LIST_FAILURE_MESSAGE, BannerKind::Error);
            }
        }
    }

    pub async fn check_health(&self) -> bool {
        match self.backend.health().await {
            Ok(health) => health.is_healthy(),
            Err(err) => {
                warn!("health check failed: {err}");
                false
            }
        }
    }

    /// Page-load sequence: health check, then the first listing refresh.
    pub async fn startup(&self) -> bool {
        let healthy = self.check_health().await;
        if !healthy {
            self.show_banner(HEALTH_WARNING_MESSAGE, BannerKind::Error);
        }
        self.refresh().await;
        healthy
    }
}

fn failure_message(err: &SdkError) -> String {
    match err {
        SdkError::Rejected { detail, .. } => detail
            .clone()
            .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string()),
        // transport errors surface their own description
        SdkError::HttpError(e) => e.to_string(),
        other => other.to_string(),
    }
}
