use crate::model::event::OutboundMessage;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::ChatId;

/// Outbound side of the bot transport.
///
/// The dispatcher and handlers only ever talk to this trait; the Telegram
/// implementation lives in [`crate::telegram`] and tests substitute a
/// recording double.
#[async_trait]
pub(crate) trait Transport: Send + Sync {
    /// Sends a text message, optionally with a reply keyboard.
    async fn send_message(&self, chat_id: ChatId, message: OutboundMessage) -> Result<()>;

    /// Acknowledges a button press so the client stops showing a spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
