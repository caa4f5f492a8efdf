//! Telegram adapter
//!
//! Long-polling dispatcher with two branches: the `/start` welcome and the
//! exact-phrase position report. The report endpoint is the sole catch point
//! for pipeline errors; on failure it logs once and sends nothing.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

use issbot_core::{BotContext, IssBotError, Reply, TriggerEvent};

use crate::{ChannelAdapter, report};

/// The phrase that triggers a position report. Matched exactly,
/// case-sensitive.
pub const REPORT_TRIGGER: &str = "So, where is ISS right now?";

pub const WELCOME_TEXT: &str = "ISS coordinates tracker welcomes you!";

pub struct TelegramAdapter {
    bot: Bot,
    ctx: Arc<BotContext>,
}

impl TelegramAdapter {
    pub fn new(token: &str, ctx: Arc<BotContext>) -> Self {
        Self {
            bot: Bot::new(token),
            ctx,
        }
    }
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    #[command(description = "greet and suggest the tracking phrase")]
    Start,
}

fn is_report_trigger(text: &str) -> bool {
    text == REPORT_TRIGGER
}

fn welcome_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new([[KeyboardButton::new(REPORT_TRIGGER)]]).resize_keyboard(true)
}

async fn send_welcome(bot: Bot, msg: Message) -> ResponseResult<()> {
    info!(chat_id = msg.chat.id.0, "sending welcome");
    bot.send_message(msg.chat.id, WELCOME_TEXT)
        .reply_markup(welcome_keyboard())
        .await?;
    Ok(())
}

async fn send_report(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> ResponseResult<()> {
    let event = TriggerEvent {
        conversation_id: msg.chat.id.0,
        language: msg.from().and_then(|user| user.language_code.clone()),
    };
    info!(chat_id = event.conversation_id, "position report requested");

    match report::build_report(&ctx, &event).await {
        Ok(replies) => {
            for reply in replies {
                let sent = match reply {
                    Reply::Text(text) => bot.send_message(msg.chat.id, text).await.map(|_| ()),
                    Reply::Location {
                        latitude,
                        longitude,
                    } => bot
                        .send_location(msg.chat.id, latitude, longitude)
                        .await
                        .map(|_| ()),
                };
                if let Err(err) = sent {
                    error!(chat_id = event.conversation_id, error = %err, "failed to deliver reply");
                }
            }
        }
        // No reply on failure; the error is recorded and that is all.
        Err(err) => log_pipeline_error(&err),
    }
    Ok(())
}

fn log_pipeline_error(err: &IssBotError) {
    match err {
        IssBotError::SourceUnreachable(cause) => {
            error!(cause = %cause, "position source unreachable, dropping reply");
        }
        IssBotError::CoordsUnavailable(detail) => {
            error!(detail = %detail, "coordinates unavailable, dropping reply");
        }
        other => error!(error = %other, "report pipeline failed, dropping reply"),
    }
}

#[async_trait]
impl ChannelAdapter for TelegramAdapter {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> anyhow::Result<()> {
        info!("starting Telegram adapter");

        let handler = Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(send_welcome),
            )
            .branch(
                dptree::filter(|msg: Message| msg.text().is_some_and(is_report_trigger))
                    .endpoint(send_report),
            );

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.ctx.clone()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_match_is_exact() {
        assert!(is_report_trigger("So, where is ISS right now?"));
        assert!(!is_report_trigger("so, where is iss right now?"));
        assert!(!is_report_trigger("So, where is ISS right now"));
        assert!(!is_report_trigger("So where is ISS right now?"));
        assert!(!is_report_trigger(" So, where is ISS right now? "));
    }

    #[test]
    fn start_command_parses() {
        assert!(matches!(Command::parse("/start", "issbot"), Ok(Command::Start)));
        assert!(Command::parse("/stop", "issbot").is_err());
    }

    #[test]
    fn welcome_keyboard_suggests_the_trigger() {
        let keyboard = welcome_keyboard();
        assert_eq!(keyboard.keyboard.len(), 1);
        assert_eq!(keyboard.keyboard[0][0].text, REPORT_TRIGGER);
    }
}
