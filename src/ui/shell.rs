use anyhow::Result;

use crate::usecases::context::AppContext;

use super::{
    channel_list_screen, login_screen, messages_screen, navigation::Screen,
    terminal::ScreenTerminal,
};

pub async fn start(context: &AppContext, terminal: &mut dyn ScreenTerminal) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        user_login_enabled = context.user_token().is_some(),
        "starting chat shell"
    );

    let auth = context.auth_orchestrator();
    let creator = context.channel_creation_orchestrator();
    let mut screen = Screen::Login;

    loop {
        tracing::debug!(screen = ?screen, "entering screen");

        screen = match screen {
            Screen::Login => login_screen::run(terminal, &auth, context.user_token()).await?,
            Screen::ChannelList => {
                channel_list_screen::run(terminal, context.client.as_ref(), &creator).await?
            }
            Screen::Messages { cid } => {
                messages_screen::run(terminal, context.client.as_ref(), cid.as_deref()).await?
            }
            Screen::Exit => break,
        };
    }

    context.client.disconnect().await;
    tracing::info!("chat shell stopped");

    Ok(())
}
