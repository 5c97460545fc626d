use anyhow::{bail, Result};
use serde_json::Value;
use std::sync::Arc;
use taskboard_auth::{MemoryNavigator, SessionGuard, Settings};

use crate::commands::{executor, Command};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self, command: Command) -> Result<Value> {
        tracing::info!(api_url = %self.settings.base_url(), "taskboard starting");

        let client = taskboard_auth::connect(&self.settings)?;
        let navigator = Arc::new(MemoryNavigator::new(command.route(&self.settings.routes)));
        let session = Arc::new(SessionGuard::new(
            client,
            self.settings.routes.clone(),
            navigator,
        ));

        Self::dispatch(&session, command).await
    }

    /// Resolve the session on the command's route, then run the command if
    /// the route policy lets it through.
    pub async fn dispatch(session: &Arc<SessionGuard>, command: Command) -> Result<Value> {
        let requested = session.current_route();
        let state = session.start().await;
        let landed = session.current_route();

        if landed != requested {
            if landed == session.policy().login {
                bail!("Not signed in. Run `taskboard login` first");
            }
            if command.signs_in() {
                tracing::info!("Already signed in");
                return Ok(serde_json::to_value(state.user())?);
            }
        }

        tracing::info!(
            route = %session.policy().redact(&landed),
            "Executing command: {}",
            command_name(&command)
        );
        executor::execute(command, session).await
    }
}

// Command arguments may carry passwords, keep them out of the logs
fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Login { .. } => "login",
        Command::Register { .. } => "register",
        Command::Logout => "logout",
        Command::Whoami => "whoami",
        Command::ForgotPassword { .. } => "forgot-password",
        Command::ResetPassword { .. } => "reset-password",
        Command::VerifyEmail { .. } => "verify-email",
        Command::Projects(_) => "projects",
        Command::Tasks(_) => "tasks",
        Command::Notifications(_) => "notifications",
        Command::Activity { .. } => "activity",
    }
}
