use teloxide::prelude::ChatId;

/// Rows of button labels, rendered by the transport as a reply keyboard.
pub(crate) type Keyboard = Vec<Vec<String>>;

/// One inbound update, already reduced to what the dispatcher cares about.
#[derive(Clone, Debug)]
pub(crate) struct Event {
    pub chat_id: ChatId,
    pub kind: EventKind,
}

#[derive(Clone, Debug)]
pub(crate) enum EventKind {
    /// A slash command, name without the leading slash.
    Command(String),
    /// A button press. `id` is needed to acknowledge the press.
    Callback {
        id: String,
        payload: CallbackPayload,
    },
    /// Free text that is not a command.
    Text(String),
}

/// Callback payloads can go stale (e.g. a button from before a restart);
/// the transport marks those with the `Invalid` sentinel.
#[derive(Clone, Debug)]
pub(crate) enum CallbackPayload {
    Data(String),
    Invalid,
}

/// What a handler hands back to the transport for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OutboundMessage {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl OutboundMessage {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub(crate) fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}
