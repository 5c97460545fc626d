use super::{EmptyResponse, List, MemberRef, Request, RequestData};
use crate::macros::setter;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// e.g. `active`, `in-progress`, `completed`
    pub status: String,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Only present when the backend embeds task summaries
    #[serde(default)]
    pub tasks: Option<Vec<TaskStatusSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub user: MemberRef,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusSummary {
    pub status: String,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListProjects;

impl Request for ListProjects {
    type Data = ();
    type Response = List<Project>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/projects".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProject {
    project_id: String,
}

impl GetProject {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Request for GetProject {
    type Data = ();
    type Response = Project;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}", self.project_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreateProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    setter!(opt description: String);
}

impl Request for CreateProject {
    type Data = Self;
    type Response = Project;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/projects".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProject {
    #[serde(skip)]
    project_id: String,
    #[serde(flatten)]
    update: ProjectUpdate,
}

impl UpdateProject {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            update: ProjectUpdate::default(),
        }
    }

    setter!(opt update.name: String);
    setter!(opt update.description: String);
    setter!(opt update.status: String);
}

impl Request for UpdateProject {
    type Data = Self;
    type Response = Project;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}", self.project_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteProject {
    project_id: String,
}

impl DeleteProject {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Request for DeleteProject {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}", self.project_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListMembers {
    project_id: String,
}

impl ListMembers {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Request for ListMembers {
    type Data = ();
    type Response = List<ProjectMember>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/members", self.project_id).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddMember {
    #[serde(skip)]
    project_id: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl AddMember {
    pub fn new(project_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            email: email.into(),
            role: None,
        }
    }

    setter!(opt role: String);
}

impl Request for AddMember {
    type Data = Self;
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/projects/{}/members", self.project_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveMember {
    project_id: String,
    member_id: String,
}

impl RemoveMember {
    pub fn new(project_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            member_id: member_id.into(),
        }
    }
}

impl Request for RemoveMember {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!(
            "/api/projects/{}/members/{}",
            self.project_id, self.member_id
        )
        .into()
    }
}
