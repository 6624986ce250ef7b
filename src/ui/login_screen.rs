use anyhow::Result;

use crate::{domain::events::LoginEvent, usecases::login::AuthOrchestrator};

use super::{navigation::Screen, terminal::ScreenTerminal};

/// Login screen: asks for a username and a login mode until a login
/// succeeds or input ends.
pub async fn run(
    terminal: &mut dyn ScreenTerminal,
    auth: &AuthOrchestrator,
    user_token: Option<&str>,
) -> Result<Screen> {
    terminal.print_line("Welcome to ChatApp")?;

    loop {
        let Some(username) = terminal.prompt_line("Enter your username: ")? else {
            return Ok(Screen::Exit);
        };

        let Some(mode) = terminal.prompt_line("Login as [u]ser or [g]uest: ")? else {
            return Ok(Screen::Exit);
        };

        let token = match mode.trim() {
            "u" | "user" => match user_token {
                Some(token) => Some(token.to_owned()),
                None => {
                    terminal.print_line("No user token is configured. Log in as guest instead.")?;
                    continue;
                }
            },
            "g" | "guest" => None,
            other => {
                terminal.print_line(&format!("Unknown login mode '{other}'. Use u or g."))?;
                continue;
            }
        };

        let event = submit(terminal, auth, username, token).await?;
        terminal.print_line(&login_toast(&event, auth.min_username_length()))?;

        match event {
            LoginEvent::Success => return Ok(Screen::ChannelList),
            LoginEvent::InputTooShort | LoginEvent::LoginFailed { .. } => {}
        }
    }
}

/// Launches the login and renders the loading indicator until the outcome
/// arrives on the event stream.
async fn submit(
    terminal: &mut dyn ScreenTerminal,
    auth: &AuthOrchestrator,
    username: String,
    token: Option<String>,
) -> Result<LoginEvent> {
    let mut events = auth.subscribe();
    let mut loading = auth.subscribe_loading();
    let task = auth.launch_login(username, token);

    let event = loop {
        tokio::select! {
            Ok(()) = loading.changed() => {
                if loading.borrow_and_update().is_loading() {
                    terminal.print_line("Connecting...")?;
                }
            }
            event = events.recv() => break event?,
        }
    };

    task.await?;
    Ok(event)
}

fn login_toast(event: &LoginEvent, min_username_length: usize) -> String {
    match event {
        LoginEvent::InputTooShort => {
            format!("Invalid! Enter more than {min_username_length} characters.")
        }
        LoginEvent::LoginFailed { message } => format!("Error: {message}"),
        LoginEvent::Success => "Login Successful".to_owned(),
    }
}
