use anyhow::{bail, Result};
use tokio::runtime::{Builder, Runtime};

use crate::{
    chat,
    cli::{Cli, Command},
    domain::{self, events::LoginEvent},
    infra::{self, error::AppError},
    ui::{self, terminal::StdTerminal},
    usecases::{self, bootstrap, context::AppContext},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        chat = chat::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let runtime = build_runtime()?;

    match cli.command_or_default() {
        Command::Run => {
            let mut terminal = StdTerminal;
            runtime.block_on(ui::shell::start(&context, &mut terminal))?;
        }
        Command::Login { username, token } => {
            let event = runtime.block_on(login_once(&context, &username, token.as_deref()));
            report_login(&event, context.config.chat.min_username_length)?;
        }
    }

    Ok(())
}

fn build_runtime() -> Result<Runtime, AppError> {
    Builder::new_multi_thread()
        .enable_time()
        .thread_name("chatapp-worker")
        .build()
        .map_err(AppError::RuntimeBuild)
}

async fn login_once(context: &AppContext, username: &str, token: Option<&str>) -> LoginEvent {
    let auth = context.auth_orchestrator();
    let event = auth.login(username, token).await;
    context.client.disconnect().await;
    event
}

fn report_login(event: &LoginEvent, min_username_length: usize) -> Result<()> {
    match event {
        LoginEvent::Success => {
            println!("Login Successful");
            Ok(())
        }
        LoginEvent::InputTooShort => {
            bail!("invalid username: enter more than {min_username_length} characters")
        }
        LoginEvent::LoginFailed { message } => bail!("login failed: {message}"),
    }
}
