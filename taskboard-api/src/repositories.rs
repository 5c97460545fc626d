use crate::endpoints::{
    activity::{ListProjectActivity, ListRecentActivity},
    auth::{ForgotPassword, GetProfile, Login, Logout, Register, ResetPassword, VerifyEmail},
    notifications::{GetUnreadCount, ListNotifications, MarkAllNotificationsRead, MarkNotificationRead},
    projects::{
        AddMember, CreateProject, DeleteProject, GetProject, ListMembers, ListProjects,
        RemoveMember, UpdateProject,
    },
    tasks::{
        AddComment, AddSubtask, CreateTask, DeleteTask, GetTask, ListComments, ListTasks,
        ToggleSubtask, UpdateTask,
    },
};

pub struct ActivityRepository;

impl ActivityRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn recent(&self) -> ListRecentActivity {
        ListRecentActivity
    }

    pub fn for_project(&self, project_id: impl Into<String>) -> ListProjectActivity {
        ListProjectActivity::new(project_id)
    }
}

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn login(&self, email: impl Into<String>, password: impl Into<String>) -> Login {
        Login::new(email, password)
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Register {
        Register::new(name, email, password)
    }

    pub fn logout(&self) -> Logout {
        Logout
    }

    pub fn profile(&self) -> GetProfile {
        GetProfile
    }

    pub fn forgot_password(&self, email: impl Into<String>) -> ForgotPassword {
        ForgotPassword::new(email)
    }

    pub fn reset_password(
        &self,
        token: impl Into<String>,
        password: impl Into<String>,
    ) -> ResetPassword {
        ResetPassword::new(token, password)
    }

    pub fn verify_email(&self, token: impl Into<String>) -> VerifyEmail {
        VerifyEmail::new(token)
    }
}

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListNotifications {
        ListNotifications
    }

    pub fn mark_read(&self, notification_id: impl Into<String>) -> MarkNotificationRead {
        MarkNotificationRead::new(notification_id)
    }

    pub fn mark_all_read(&self) -> MarkAllNotificationsRead {
        MarkAllNotificationsRead
    }

    pub fn unread_count(&self) -> GetUnreadCount {
        GetUnreadCount
    }
}

pub struct ProjectRepository;

impl ProjectRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListProjects {
        ListProjects
    }

    pub fn get(&self, project_id: impl Into<String>) -> GetProject {
        GetProject::new(project_id)
    }

    pub fn create(&self, name: impl Into<String>) -> CreateProject {
        CreateProject::new(name)
    }

    pub fn update(&self, project_id: impl Into<String>) -> UpdateProject {
        UpdateProject::new(project_id)
    }

    pub fn delete(&self, project_id: impl Into<String>) -> DeleteProject {
        DeleteProject::new(project_id)
    }

    pub fn members(&self, project_id: impl Into<String>) -> ListMembers {
        ListMembers::new(project_id)
    }

    pub fn add_member(
        &self,
        project_id: impl Into<String>,
        email: impl Into<String>,
    ) -> AddMember {
        AddMember::new(project_id, email)
    }

    pub fn remove_member(
        &self,
        project_id: impl Into<String>,
        member_id: impl Into<String>,
    ) -> RemoveMember {
        RemoveMember::new(project_id, member_id)
    }
}

/// Task requests within one project.
pub struct TaskRepository {
    project_id: String,
}

impl TaskRepository {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    pub fn list(&self) -> ListTasks {
        ListTasks::new(self.project_id.clone())
    }

    pub fn get(&self, task_id: impl Into<String>) -> GetTask {
        GetTask::new(self.project_id.clone(), task_id)
    }

    pub fn create(&self, title: impl Into<String>) -> CreateTask {
        CreateTask::new(self.project_id.clone(), title)
    }

    pub fn update(&self, task_id: impl Into<String>) -> UpdateTask {
        UpdateTask::new(self.project_id.clone(), task_id)
    }

    pub fn delete(&self, task_id: impl Into<String>) -> DeleteTask {
        DeleteTask::new(self.project_id.clone(), task_id)
    }

    pub fn comments(&self, task_id: impl Into<String>) -> ListComments {
        ListComments::new(self.project_id.clone(), task_id)
    }

    pub fn add_comment(
        &self,
        task_id: impl Into<String>,
        content: impl Into<String>,
    ) -> AddComment {
        AddComment::new(self.project_id.clone(), task_id, content)
    }

    pub fn add_subtask(&self, task_id: impl Into<String>, title: impl Into<String>) -> AddSubtask {
        AddSubtask::new(task_id, title)
    }

    pub fn toggle_subtask(
        &self,
        task_id: impl Into<String>,
        subtask_id: impl Into<String>,
    ) -> ToggleSubtask {
        ToggleSubtask::new(task_id, subtask_id)
    }
}
