use notlify_sdk::{NotificationRequest, Priority};

/// Field values of the notification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationForm {
    pub email: String,
    pub subject: String,
    pub message: String,
    pub priority: Priority,
}

impl NotificationForm {
    pub fn new(email: &str, subject: &str, message: &str, priority: Priority) -> Self {
        Self {
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            priority,
        }
    }

    pub fn to_request(&self) -> NotificationRequest {
        NotificationRequest {
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            priority: self.priority,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}
