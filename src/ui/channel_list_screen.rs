use anyhow::Result;

use crate::{
    chat::ChatClient,
    domain::{
        channel::{ChannelSummary, LISTED_CHANNEL_TYPES},
        events::ChannelCreationEvent,
        menu::{MenuAction, MenuItem, DRAWER_ITEMS},
    },
    usecases::create_channel::ChannelCreationOrchestrator,
};

use super::{navigation::Screen, terminal::ScreenTerminal};

const HELP: &str = "Commands: list | new <name> | open <cid> | menu | logout | quit";

pub async fn run(
    terminal: &mut dyn ScreenTerminal,
    client: &dyn ChatClient,
    creator: &ChannelCreationOrchestrator,
) -> Result<Screen> {
    let mut listed = render_channels(terminal, client).await?;
    terminal.print_line(HELP)?;

    loop {
        let Some(input) = terminal.prompt_line("channels> ")? else {
            return Ok(Screen::Exit);
        };

        let (command, argument) = split_command(&input);
        match command {
            "" | "list" => listed = render_channels(terminal, client).await?,
            "new" => {
                let event = submit(creator, argument).await?;
                terminal.print_line(&creation_toast(&event))?;
                if event == ChannelCreationEvent::Success {
                    listed = render_channels(terminal, client).await?;
                }
            }
            "open" if argument.is_empty() => return Ok(Screen::Messages { cid: None }),
            "open" => {
                if listed.iter().any(|channel| channel.cid == argument) {
                    return Ok(Screen::Messages {
                        cid: Some(argument.to_owned()),
                    });
                }
                terminal.print_line(&format!(
                    "No listed channel '{argument}'. Type 'list' to refresh."
                ))?;
            }
            "menu" => {
                if let Some(item) = choose_menu_item(terminal)? {
                    if let Some(next) = apply_menu_item(terminal, client, item).await? {
                        return Ok(next);
                    }
                }
            }
            "logout" => return logout(client).await,
            "quit" | "exit" => return Ok(Screen::Exit),
            _ => terminal.print_line(HELP)?,
        }
    }
}

async fn submit(
    creator: &ChannelCreationOrchestrator,
    name: &str,
) -> Result<ChannelCreationEvent> {
    let mut events = creator.subscribe();
    let task = creator.launch_create_channel(name);
    let event = events.recv().await?;

    task.await?;
    Ok(event)
}

fn creation_toast(event: &ChannelCreationEvent) -> String {
    match event {
        ChannelCreationEvent::Error { message } => message.clone(),
        ChannelCreationEvent::Success => "Channel Created".to_owned(),
    }
}

/// Prints the listed channels and returns them so `open` can be checked
/// against what the user saw.
async fn render_channels(
    terminal: &mut dyn ScreenTerminal,
    client: &dyn ChatClient,
) -> Result<Vec<ChannelSummary>> {
    let channels = match client.query_channels(&LISTED_CHANNEL_TYPES).await {
        Ok(channels) => channels,
        Err(error) => {
            tracing::warn!(error = %error, "channel query failed");
            terminal.print_line(&format!("Error: {error}"))?;
            return Ok(Vec::new());
        }
    };

    if channels.is_empty() {
        terminal.print_line("No channels yet. Create one with: new <name>")?;
    }
    for channel in &channels {
        terminal.print_line(&channel_line(channel))?;
    }

    Ok(channels)
}

fn channel_line(channel: &ChannelSummary) -> String {
    match &channel.image {
        Some(image) => format!("  {}  {}  [{image}]", channel.cid, channel.name),
        None => format!("  {}  {}", channel.cid, channel.name),
    }
}

fn choose_menu_item(terminal: &mut dyn ScreenTerminal) -> Result<Option<&'static MenuItem>> {
    for (index, item) in DRAWER_ITEMS.iter().enumerate() {
        terminal.print_line(&format!(
            "  {}. {} ({})",
            index + 1,
            item.title,
            item.content_description
        ))?;
    }

    let Some(choice) = terminal.prompt_line("Select item: ")? else {
        return Ok(None);
    };

    let item = choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| DRAWER_ITEMS.get(index));

    if item.is_none() {
        terminal.print_line("No such menu item.")?;
    }

    Ok(item)
}

async fn apply_menu_item(
    terminal: &mut dyn ScreenTerminal,
    client: &dyn ChatClient,
    item: &MenuItem,
) -> Result<Option<Screen>> {
    match item.action() {
        MenuAction::Logout => Ok(Some(logout(client).await?)),
        MenuAction::Unsupported => {
            terminal.print_line(&format!("Clicked on {}", item.title))?;
            Ok(None)
        }
    }
}

async fn logout(client: &dyn ChatClient) -> Result<Screen> {
    client.disconnect().await;
    tracing::info!("user logged out");
    Ok(Screen::Login)
}

fn split_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (input, ""),
    }
}
