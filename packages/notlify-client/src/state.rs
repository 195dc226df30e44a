use crate::banner::Banner;
use crate::form::NotificationForm;
use notlify_sdk::NotificationRecord;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Everything the page shows, owned by one client instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub form: NotificationForm,
    pub banner: Banner,
    pub loading: bool,
    /// Records from the latest successful listing call.
    pub notifications: Vec<NotificationRecord>,
    /// Markup currently held by the list container.
    pub list_html: String,
}

pub type SharedUiState = Arc<Mutex<UiState>>;

pub(crate) fn lock(state: &SharedUiState) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps the loading indicator on for as long as it is alive.
pub(crate) struct LoadingGuard {
    state: SharedUiState,
}

impl LoadingGuard {
    pub(crate) fn new(state: &SharedUiState) -> Self {
        lock(state).loading = true;
        Self {
            state: Arc::clone(state),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        lock(&self.state).loading = false;
    }
}
