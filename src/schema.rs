use crate::dispatcher::{Binding, CallbackFilter, Matcher, Scope};
use crate::model::event::{Event, EventKind, OutboundMessage};
use crate::model::state::State;
use crate::model::types::HandlerResult;
use crate::transport::Transport;
use crate::utils::constants::{HELP_MESSAGE, PLACEHOLDER_REPLY, WELCOME_MESSAGE};
use crate::utils::keyboard::make_main_keyboard;

use std::sync::Arc;

/// The conversation table. Bindings are scanned in registration order, so the
/// entry rule comes first and restarts the dialogue from any state.
pub(crate) fn schema() -> Vec<Binding> {
    vec![
        Binding::entry(Matcher::Command("start"), start),
        Binding::new(Scope::In(State::Main), Matcher::Command("help"), help),
        Binding::new(
            Scope::In(State::Main),
            Matcher::Callback(CallbackFilter::Data),
            main_callback,
        ),
        Binding::new(
            Scope::In(State::Main),
            Matcher::Callback(CallbackFilter::Invalid),
            stale_callback,
        ),
        Binding::new(Scope::In(State::Main), Matcher::Text, dispatch_text),
        // State::Topic and State::Exercise have no bindings yet; the lesson
        // flow lands together with real topic content.
    ]
}

/// COMMAND HANDLERS

async fn start(bot: Arc<dyn Transport>, event: Event) -> HandlerResult {
    bot.send_message(
        event.chat_id,
        OutboundMessage::with_keyboard(WELCOME_MESSAGE, make_main_keyboard()),
    )
    .await?;
    Ok(Some(State::Main))
}

async fn help(bot: Arc<dyn Transport>, event: Event) -> HandlerResult {
    bot.send_message(event.chat_id, OutboundMessage::text(HELP_MESSAGE))
        .await?;
    Ok(Some(State::Help))
}

/// CALLBACK AND TEXT HANDLERS

async fn main_callback(bot: Arc<dyn Transport>, event: Event) -> HandlerResult {
    if let EventKind::Callback { id, .. } = &event.kind {
        bot.answer_callback(id).await?;
    }
    Ok(Some(State::Main))
}

/// A stale button press still gets acknowledged so the client stops spinning.
async fn stale_callback(bot: Arc<dyn Transport>, event: Event) -> HandlerResult {
    if let EventKind::Callback { id, .. } = &event.kind {
        bot.answer_callback(id).await?;
    }
    Ok(Some(State::Main))
}

async fn dispatch_text(bot: Arc<dyn Transport>, event: Event) -> HandlerResult {
    bot.send_message(event.chat_id, OutboundMessage::text(PLACEHOLDER_REPLY))
        .await?;
    Ok(None)
}
