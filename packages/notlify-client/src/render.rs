use askama::Template;
use chrono::{DateTime, Local, NaiveDateTime};
use notlify_sdk::NotificationRecord;

pub const EMPTY_PLACEHOLDER: &str = "No notifications yet";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders an ISO-8601 timestamp in local time. Offset-aware values are
/// converted; naive ones are taken as already local. Anything else is
/// returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(TIME_FORMAT).to_string();
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return naive.format(TIME_FORMAT).to_string();
    }
    raw.to_string()
}

/// Display fields of one notification; the templates escape every value.
pub struct NotificationItem<'a> {
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub status_class: &'static str,
    pub status_label: String,
    pub time: String,
}

impl<'a> From<&'a NotificationRecord> for NotificationItem<'a> {
    fn from(record: &'a NotificationRecord) -> Self {
        Self {
            email: &record.email,
            subject: &record.subject,
            message: &record.message,
            status_class: record.status.css_class(),
            status_label: record.status.label(),
            time: format_timestamp(&record.timestamp),
        }
    }
}

#[derive(Template)]
#[template(path = "notification_item.html")]
pub struct NotificationItemTemplate<'a> {
    pub item: NotificationItem<'a>,
}

#[derive(Template)]
#[template(path = "notification_list.html")]
pub struct NotificationListTemplate<'a> {
    pub items: Vec<NotificationItem<'a>>,
    pub placeholder: &'a str,
}

pub fn render_notification(record: &NotificationRecord) -> askama::Result<String> {
    NotificationItemTemplate {
        item: record.into(),
    }
    .render()
}

/// Markup for the whole list container. An empty sequence yields the
/// placeholder paragraph.
pub fn render_list(records: &[NotificationRecord]) -> askama::Result<String> {
    NotificationListTemplate {
        items: records.iter().map(NotificationItem::from).collect(),
        placeholder: EMPTY_PLACEHOLDER,
    }
    .render()
}

/// Plain-text rendering for terminals.
pub fn format_notification(record: &NotificationRecord) -> String {
    format!(
        "[{}] {} -> {}\n{}\nReceived: {}",
        record.status.label(),
        record.subject,
        record.email,
        record.message,
        format_timestamp(&record.timestamp)
    )
}
