//! Test doubles shared by the dispatcher and schema tests.

use crate::dispatcher::ErrorSink;
use crate::model::event::{CallbackPayload, Event, EventKind, OutboundMessage};
use crate::transport::Transport;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use teloxide::prelude::ChatId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Message {
        chat_id: ChatId,
        message: OutboundMessage,
    },
    CallbackAnswer {
        callback_id: String,
    },
}

/// Records every outbound call instead of talking to Telegram.
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(&self, chat_id: ChatId, message: OutboundMessage) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Message { chat_id, message });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.calls.lock().unwrap().push(Call::CallbackAnswer {
            callback_id: callback_id.to_owned(),
        });
        Ok(())
    }
}

/// Captures reported handler errors for assertions.
pub(crate) struct CapturingSink {
    reports: Mutex<Vec<(ChatId, String)>>,
}

impl CapturingSink {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            reports: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn reports(&self) -> Vec<(ChatId, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorSink for CapturingSink {
    fn report(&self, chat_id: ChatId, error: &anyhow::Error) {
        self.reports
            .lock()
            .unwrap()
            .push((chat_id, error.to_string()));
    }
}

pub(crate) fn command(chat_id: i64, name: &str) -> Event {
    Event {
        chat_id: ChatId(chat_id),
        kind: EventKind::Command(name.to_owned()),
    }
}

pub(crate) fn free_text(chat_id: i64, text: &str) -> Event {
    Event {
        chat_id: ChatId(chat_id),
        kind: EventKind::Text(text.to_owned()),
    }
}

pub(crate) fn callback(chat_id: i64, callback_id: &str, payload: CallbackPayload) -> Event {
    Event {
        chat_id: ChatId(chat_id),
        kind: EventKind::Callback {
            id: callback_id.to_owned(),
            payload,
        },
    }
}
