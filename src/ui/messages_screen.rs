use anyhow::Result;

use crate::{chat::ChatClient, domain::message::MESSAGE_LIMIT};

use super::{navigation::Screen, terminal::ScreenTerminal};

const HELP: &str = "Type a message to send it. Empty line refreshes, 'back' returns.";

/// Shows the newest messages of one channel and posts every other line the
/// user types to it.
pub async fn run(
    terminal: &mut dyn ScreenTerminal,
    client: &dyn ChatClient,
    cid: Option<&str>,
) -> Result<Screen> {
    let Some(cid) = cid.map(str::trim).filter(|cid| !cid.is_empty()) else {
        tracing::debug!("messages screen opened without channel id");
        return Ok(Screen::ChannelList);
    };

    terminal.print_line(&format!("# {cid}"))?;
    render_messages(terminal, client, cid).await?;
    terminal.print_line(HELP)?;

    loop {
        let Some(input) = terminal.prompt_line(&format!("{cid}> "))? else {
            return Ok(Screen::Exit);
        };

        match input.trim() {
            "" => render_messages(terminal, client, cid).await?,
            "back" => return Ok(Screen::ChannelList),
            text => match client.send_message(cid, text).await {
                Ok(message) => terminal.print_line(&message.display_line())?,
                Err(error) => {
                    tracing::warn!(cid, error = %error, "message send failed");
                    terminal.print_line(&format!("Error: {error}"))?;
                }
            },
        }
    }
}

async fn render_messages(
    terminal: &mut dyn ScreenTerminal,
    client: &dyn ChatClient,
    cid: &str,
) -> Result<()> {
    match client.query_messages(cid, MESSAGE_LIMIT).await {
        Ok(messages) if messages.is_empty() => terminal.print_line("No messages yet.")?,
        Ok(messages) => {
            for message in messages {
                terminal.print_line(&message.display_line())?;
            }
        }
        Err(error) => {
            tracing::warn!(cid, error = %error, "message query failed");
            terminal.print_line(&format!("Error: {error}"))?;
        }
    }

    Ok(())
}
