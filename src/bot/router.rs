use std::sync::Arc;

use super::commands::Command;
use super::handlers;
use super::reply::Reply;
use super::BotState;
use crate::error::AppError;

/// Who issued a command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub user_id: String,
    pub user_name: Option<String>,
}

impl CommandContext {
    pub fn new(user_id: impl Into<String>, user_name: Option<String>) -> Self {
        Self { user_id: user_id.into(), user_name }
    }
}

/// Maps a parsed command to its handler and always produces a reply.
#[derive(Clone)]
pub struct CommandRouter {
    state: Arc<BotState>,
}

impl CommandRouter {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Run `cmd` under the configured command timeout. Handler errors, panics
    /// and timeouts all end up as error replies.
    pub async fn dispatch(&self, ctx: CommandContext, cmd: Command) -> Reply {
        let name = cmd.name();
        let action = cmd.action();
        tracing::debug!("Dispatching /{} for user {}", name, ctx.user_id);

        let state = self.state.clone();
        let mut task = tokio::spawn(async move { handlers::handle(&state, &ctx, cmd).await });

        let outcome = match tokio::time::timeout(self.state.config.command_timeout, &mut task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(AppError::Internal(format!("command task failed: {}", join_error))),
            Err(_) => {
                task.abort();
                Err(AppError::Timeout(format!("/{}", name)))
            }
        };

        match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Error {} (/{}): {}", action, name, e);
                Reply::from_error(action, &e)
            }
        }
    }
}
