use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::{json, Value};
use taskboard_api::Request;
use taskboard_auth::{AuthError, SessionGuard};

use super::{Command, NotificationCommand, ProjectCommand, TaskCommand};

/// Run `command` against the backend and return what should be printed
pub async fn execute(command: Command, session: &SessionGuard) -> Result<Value> {
    let client = session.client();

    match command {
        Command::Login { email, password } => {
            let user = session.login(&email, &password).await.map_err(plain)?;
            to_json(user)
        }

        Command::Register {
            name,
            email,
            password,
        } => {
            let user = session
                .register(&name, &email, &password)
                .await
                .map_err(plain)?;
            to_json(user)
        }

        Command::Logout => {
            session.logout().await;
            Ok(json!({ "signedIn": false }))
        }

        Command::Whoami => to_json(session.state().user()),

        Command::ForgotPassword { email } => {
            session.forgot_password(&email).await.map_err(plain)?;
            Ok(json!({ "message": "If the address is registered, a reset link is on its way" }))
        }

        Command::ResetPassword { token, password } => {
            session
                .reset_password(&token, &password)
                .await
                .map_err(plain)?;
            Ok(json!({ "message": "Password updated" }))
        }

        Command::VerifyEmail { token } => {
            session.verify_email(&token).await.map_err(plain)?;
            Ok(json!({ "message": "Email verified" }))
        }

        Command::Projects(args) => match args.command {
            ProjectCommand::List => to_json(client.send(Request::projects().list()).await?),
            ProjectCommand::Show { project_id } => {
                to_json(client.send(Request::projects().get(project_id)).await?)
            }
            ProjectCommand::Create { name, description } => {
                let mut request = Request::projects().create(name);
                if let Some(description) = description {
                    request = request.description(description);
                }
                to_json(client.send(request).await?)
            }
            ProjectCommand::Delete { project_id } => {
                client
                    .send(Request::projects().delete(project_id.clone()))
                    .await?;
                Ok(json!({ "deleted": project_id }))
            }
        },

        Command::Tasks(args) => match args.command {
            TaskCommand::List { project_id } => {
                to_json(client.send(Request::tasks(project_id).list()).await?)
            }
            TaskCommand::Create {
                project_id,
                title,
                priority,
                due,
            } => {
                let mut request = Request::tasks(project_id).create(title);
                if let Some(priority) = priority {
                    request = request.priority(priority);
                }
                if let Some(due) = due {
                    request = request.due_date(due);
                }
                to_json(client.send(request).await?)
            }
            TaskCommand::Status {
                project_id,
                task_id,
                status,
            } => {
                let request = Request::tasks(project_id)
                    .update(task_id)
                    .status(status);
                to_json(client.send(request).await?)
            }
        },

        Command::Notifications(args) => match args.command {
            NotificationCommand::List => {
                to_json(client.send(Request::notifications().list()).await?)
            }
            NotificationCommand::Read { notification_id } => {
                client
                    .send(Request::notifications().mark_read(notification_id.clone()))
                    .await?;
                Ok(json!({ "read": notification_id }))
            }
            NotificationCommand::ReadAll => {
                client
                    .send(Request::notifications().mark_all_read())
                    .await?;
                Ok(json!({ "read": "all" }))
            }
            NotificationCommand::Unread => {
                to_json(client.send(Request::notifications().unread_count()).await?)
            }
        },

        Command::Activity { project } => match project {
            Some(project_id) => {
                to_json(client.send(Request::activity().for_project(project_id)).await?)
            }
            None => to_json(client.send(Request::activity().recent()).await?),
        },
    }
}

fn to_json(value: impl Serialize) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Keep only the message the backend meant for the user
fn plain(err: AuthError) -> anyhow::Error {
    anyhow!(err.user_message())
}
