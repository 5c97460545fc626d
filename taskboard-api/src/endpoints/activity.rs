use super::{List, Request};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

/// One entry of an activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// e.g. `task_completed`, `project_created`, `task_assigned`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub action: Option<String>,
    /// Actor and project come either embedded or as bare ids/names
    #[serde(default)]
    pub user: Option<serde_json::Value>,
    #[serde(default)]
    pub project: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListRecentActivity;

impl Request for ListRecentActivity {
    type Data = ();
    type Response = List<Activity>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/activity".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListProjectActivity {
    project_id: String,
}

impl ListProjectActivity {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Request for ListProjectActivity {
    type Data = ();
    type Response = List<Activity>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/activity", self.project_id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_with_embedded_and_bare_references() {
        let feed: List<Activity> = serde_json::from_value(json!([
            {"_id": "a1", "type": "task_completed", "user": {"_id": "u1", "name": "Ada"}, "project": "p1"},
            {"_id": "a2", "type": "project_created", "action": "created project"}
        ]))
        .unwrap();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind, "task_completed");
        assert_eq!(feed[0].project, Some(json!("p1")));
        assert_eq!(feed[1].action.as_deref(), Some("created project"));
    }
}
