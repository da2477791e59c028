//! Telegram-facing side: reduces raw updates to [`Event`]s for the
//! dispatcher and implements [`Transport`] over the Bot API.

use crate::dispatcher::Dispatcher;
use crate::model::commands::BotCommand;
use crate::model::event::{CallbackPayload, Event, EventKind, OutboundMessage};
use crate::transport::Transport;
use crate::utils::keyboard::to_markup;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub(crate) struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub(crate) fn new(bot: Bot) -> Arc<Self> {
        Arc::new(Self { bot })
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, chat_id: ChatId, message: OutboundMessage) -> Result<()> {
        let request = self.bot.send_message(chat_id, message.text);
        match message.keyboard {
            Some(keyboard) => request.reply_markup(to_markup(keyboard)).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot.answer_callback_query(callback_id).await?;
        Ok(())
    }
}

type HandlerOutput = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub(crate) fn update_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    let message_handler = Update::filter_message()
        .branch(teloxide::filter_command::<BotCommand, _>().endpoint(received_command))
        .branch(dptree::endpoint(received_text));

    dptree::entry()
        .branch(message_handler)
        .branch(Update::filter_callback_query().endpoint(received_callback_query))
}

async fn received_command(
    conversations: Arc<Dispatcher>,
    msg: Message,
    command: BotCommand,
) -> HandlerOutput {
    conversations
        .dispatch(Event {
            chat_id: msg.chat.id,
            kind: EventKind::Command(command.name().to_owned()),
        })
        .await;
    Ok(())
}

async fn received_text(conversations: Arc<Dispatcher>, msg: Message) -> HandlerOutput {
    // Unrecognized commands fall through filter_command; they are not free text.
    match msg.text() {
        Some(text) if !text.starts_with('/') => {
            conversations
                .dispatch(Event {
                    chat_id: msg.chat.id,
                    kind: EventKind::Text(text.to_owned()),
                })
                .await;
        }
        _ => {}
    }
    Ok(())
}

async fn received_callback_query(
    conversations: Arc<Dispatcher>,
    query: CallbackQuery,
) -> HandlerOutput {
    let Some(chat_id) = query.message.as_ref().map(|message| message.chat.id) else {
        return Ok(());
    };
    let payload = match query.data {
        Some(data) => CallbackPayload::Data(data),
        None => CallbackPayload::Invalid,
    };
    conversations
        .dispatch(Event {
            chat_id,
            kind: EventKind::Callback {
                id: query.id,
                payload,
            },
        })
        .await;
    Ok(())
}
