use crate::utils::NormalizedUrl;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

// Transient toast shown to the user after an analyze attempt
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(title: &str, description: String, variant: NotificationVariant) -> Self {
        Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description,
            variant,
            created_at: Utc::now(),
        }
    }

    pub fn validation() -> Self {
        Notification::new(
            "Error",
            "Please enter a URL".to_string(),
            NotificationVariant::Destructive,
        )
    }

    pub fn failure() -> Self {
        Notification::new(
            "Error",
            "Failed to analyze website. Please try again.".to_string(),
            NotificationVariant::Destructive,
        )
    }

    pub fn success(url: &NormalizedUrl) -> Self {
        Notification::new(
            "Analysis complete",
            format!("Performance analysis finished for {}", url),
            NotificationVariant::Default,
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_url;

    #[test]
    fn error_notifications_are_destructive() {
        assert!(Notification::validation().is_destructive());
        assert!(Notification::failure().is_destructive());
        assert!(!Notification::success(&normalize_url("example.com")).is_destructive());
    }

    #[test]
    fn success_names_the_url() {
        let note = Notification::success(&normalize_url("www.example.com"));
        assert_eq!(note.title, "Analysis complete");
        assert!(note.description.ends_with("https://example.com"));
    }

    #[test]
    fn every_notification_gets_its_own_id() {
        assert_ne!(Notification::validation().id, Notification::validation().id);
    }
}
