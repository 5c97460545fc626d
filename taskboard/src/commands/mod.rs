pub mod executor;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_auth::RoutePolicy;

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Project and task board client")]
pub struct Cli {
    /// Settings file; `config.toml` in the working directory when unset
    #[arg(long, global = true, env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the settings file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in and store the session
    Login {
        email: String,
        #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    ForgotPassword {
        email: String,
    },
    ResetPassword {
        token: String,
        #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    VerifyEmail {
        token: String,
    },
    Projects(ProjectArgs),
    Tasks(TaskArgs),
    Notifications(NotificationArgs),
    /// Recent activity, optionally for one project
    Activity {
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProjectCommand {
    List,
    Show {
        project_id: String,
    },
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        project_id: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    List {
        project_id: String,
    },
    Create {
        project_id: String,
        title: String,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Move a task to another status
    Status {
        project_id: String,
        task_id: String,
        status: String,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NotificationArgs {
    #[command(subcommand)]
    pub command: NotificationCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum NotificationCommand {
    List,
    Read { notification_id: String },
    ReadAll,
    Unread,
}

impl Command {
    /// The page this command stands for, checked against the route policy before it runs
    pub fn route(&self, policy: &RoutePolicy) -> String {
        match self {
            Command::Login { .. } => policy.login.clone(),
            Command::Register { .. } => "/register".to_string(),
            Command::ForgotPassword { .. } => "/forgot-password".to_string(),
            Command::ResetPassword { token, .. } => format!("/reset-password/{}", token),
            Command::VerifyEmail { token } => format!("/verify-email/{}", token),
            Command::Logout | Command::Whoami => policy.landing.clone(),
            Command::Projects(args) => match &args.command {
                ProjectCommand::Show { project_id } | ProjectCommand::Delete { project_id } => {
                    format!("/projects/{}", project_id)
                }
                _ => "/projects".to_string(),
            },
            Command::Tasks(args) => match &args.command {
                TaskCommand::List { project_id }
                | TaskCommand::Create { project_id, .. }
                | TaskCommand::Status { project_id, .. } => format!("/projects/{}", project_id),
            },
            Command::Notifications(_) => "/notifications".to_string(),
            Command::Activity { project: Some(project_id) } => format!("/projects/{}", project_id),
            Command::Activity { project: None } => policy.landing.clone(),
        }
    }

    /// Commands that only make sense without a session
    pub fn signs_in(&self) -> bool {
        matches!(self, Command::Login { .. } | Command::Register { .. })
    }
}
