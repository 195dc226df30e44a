pub mod banner;
pub mod client;
pub mod form;
pub mod page;
pub mod render;
pub mod state;

pub use banner::{BANNER_TIMEOUT, Banner, BannerKind};
pub use client::{
    HEALTH_WARNING_MESSAGE, LIST_FAILURE_MESSAGE, NotificationClient, SUBMIT_FALLBACK_MESSAGE,
    SUBMIT_SUCCESS_MESSAGE, SubmitOutcome,
};
pub use form::NotificationForm;
pub use render::{EMPTY_PLACEHOLDER, format_notification, render_list};
pub use state::{SharedUiState, UiState};
