use super::{EmptyResponse, List, Request};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListNotifications;

impl Request for ListNotifications {
    type Data = ();
    type Response = List<Notification>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/notifications".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkNotificationRead {
    notification_id: String,
}

impl MarkNotificationRead {
    pub fn new(notification_id: impl Into<String>) -> Self {
        Self {
            notification_id: notification_id.into(),
        }
    }
}

impl Request for MarkNotificationRead {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/notifications/{}/read", self.notification_id).into()
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct MarkAllNotificationsRead;

impl Request for MarkAllNotificationsRead {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/notifications/read-all".into()
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetUnreadCount;

impl Request for GetUnreadCount {
    type Data = ();
    type Response = UnreadCount;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/notifications/unread-count".into()
    }
}

// Responses

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}
