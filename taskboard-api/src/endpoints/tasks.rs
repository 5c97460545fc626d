use super::{EmptyResponse, List, MemberRef, Request, RequestData};
use crate::macros::setter;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// e.g. `todo`, `in-progress`, `done`
    pub status: String,
    /// e.g. `low`, `medium`, `high`
    pub priority: String,
    /// Free-form date as entered by the user
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignees: Option<Vec<Assignee>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub user: MemberRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<MemberRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Fields shared by task creation and update bodies
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct ListTasks {
    project_id: String,
}

impl ListTasks {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Request for ListTasks {
    type Data = ();
    type Response = List<Task>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/tasks", self.project_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTask {
    project_id: String,
    task_id: String,
}

impl GetTask {
    pub fn new(project_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: task_id.into(),
        }
    }
}

impl Request for GetTask {
    type Data = ();
    type Response = Task;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/tasks/{}", self.project_id, self.task_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    #[serde(skip)]
    project_id: String,
    #[serde(flatten)]
    fields: TaskFields,
}

impl CreateTask {
    pub fn new(project_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            fields: TaskFields {
                title: Some(title.into()),
                ..TaskFields::default()
            },
        }
    }

    setter!(opt fields.description: String);
    setter!(opt fields.status: String);
    setter!(opt fields.priority: String);
    setter!(opt fields.due_date: String);
}

impl Request for CreateTask {
    type Data = Self;
    type Response = Task;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/tasks", self.project_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTask {
    #[serde(skip)]
    project_id: String,
    #[serde(skip)]
    task_id: String,
    #[serde(flatten)]
    fields: TaskFields,
}

impl UpdateTask {
    pub fn new(project_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: task_id.into(),
            fields: TaskFields::default(),
        }
    }

    setter!(opt fields.title: String);
    setter!(opt fields.description: String);
    setter!(opt fields.status: String);
    setter!(opt fields.priority: String);
    setter!(opt fields.due_date: String);
}

impl Request for UpdateTask {
    type Data = Self;
    type Response = Task;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/tasks/{}", self.project_id, self.task_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTask {
    project_id: String,
    task_id: String,
}

impl DeleteTask {
    pub fn new(project_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: task_id.into(),
        }
    }
}

impl Request for DeleteTask {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/tasks/{}", self.project_id, self.task_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListComments {
    project_id: String,
    task_id: String,
}

impl ListComments {
    pub fn new(project_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: task_id.into(),
        }
    }
}

impl Request for ListComments {
    type Data = ();
    type Response = List<Comment>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!(
            "/api/projects/{}/tasks/{}/comments",
            self.project_id, self.task_id
        )
        .into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddComment {
    #[serde(skip)]
    project_id: String,
    #[serde(skip)]
    task_id: String,
    content: String,
}

impl AddComment {
    pub fn new(
        project_id: impl Into<String>,
        task_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            task_id: task_id.into(),
            content: content.into(),
        }
    }
}

impl Request for AddComment {
    type Data = Self;
    type Response = Comment;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!(
            "/api/projects/{}/tasks/{}/comments",
            self.project_id, self.task_id
        )
        .into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

/// Subtasks are addressed by task alone.
#[derive(Debug, Clone, Serialize)]
pub struct AddSubtask {
    #[serde(skip)]
    task_id: String,
    title: String,
}

impl AddSubtask {
    pub fn new(task_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            title: title.into(),
        }
    }
}

impl Request for AddSubtask {
    type Data = Self;
    type Response = Subtask;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/tasks/{}/subtasks", self.task_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleSubtask {
    task_id: String,
    subtask_id: String,
}

impl ToggleSubtask {
    pub fn new(task_id: impl Into<String>, subtask_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            subtask_id: subtask_id.into(),
        }
    }
}

impl Request for ToggleSubtask {
    type Data = ();
    type Response = Subtask;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        format!(
            "/api/tasks/{}/subtasks/{}/toggle",
            self.task_id, self.subtask_id
        )
        .into()
    }
}
