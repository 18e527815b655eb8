use std::time::Duration;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use proximo_core::chat::{ChatBot, ChatLog, Sender};

use crate::render::Render;

pub async fn run(reply_delay: Duration) -> Result<()> {
    println!("{}", "Type /quit to leave the chat.".dimmed());
    converse(reply_delay).await
}

/// Read messages until the user quits, answering each with a canned reply.
pub async fn converse(reply_delay: Duration) -> Result<()> {
    let bot = ChatBot::default();
    let mut log = ChatLog::default();

    for message in log.messages() {
        println!("{}", message.render());
    }

    loop {
        let input: String = Input::new()
            .with_prompt("  you")
            .allow_empty(true)
            .interact_text()?;

        if input.trim() == "/quit" {
            return Ok(());
        }

        let Some(reply) = bot.reply(&input) else {
            continue;
        };
        log.push(Sender::User, input.trim());

        tokio::time::sleep(reply_delay).await;
        log.push(Sender::Bot, reply);

        if let Some(message) = log.last() {
            println!("{}", message.render());
        }
    }
}
