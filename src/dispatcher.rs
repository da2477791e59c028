use crate::model::event::{CallbackPayload, Event, EventKind};
use crate::model::state::State;
use crate::model::types::{Db, HandlerResult};
use crate::transport::Transport;

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use teloxide::prelude::ChatId;
use tokio::sync::Mutex;

type Handler =
    Arc<dyn Fn(Arc<dyn Transport>, Event) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// Which sessions a binding applies to.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Scope {
    /// Entry bindings run from any recorded state, or none at all.
    Any,
    In(State),
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Matcher {
    /// Command name without the leading slash.
    Command(&'static str),
    Callback(CallbackFilter),
    Text,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum CallbackFilter {
    /// Any button press that still carries its payload.
    Data,
    /// A stale press whose payload the transport could not recover.
    Invalid,
}

impl Matcher {
    fn accepts(&self, kind: &EventKind) -> bool {
        match (self, kind) {
            (Matcher::Command(name), EventKind::Command(command)) => command == name,
            (
                Matcher::Callback(CallbackFilter::Data),
                EventKind::Callback {
                    payload: CallbackPayload::Data(_),
                    ..
                },
            ) => true,
            (
                Matcher::Callback(CallbackFilter::Invalid),
                EventKind::Callback {
                    payload: CallbackPayload::Invalid,
                    ..
                },
            ) => true,
            (Matcher::Text, EventKind::Text(_)) => true,
            _ => false,
        }
    }
}

/// One (scope, matcher, handler) rule. Registered at startup, immutable after.
pub(crate) struct Binding {
    scope: Scope,
    matcher: Matcher,
    handler: Handler,
}

impl Binding {
    pub(crate) fn new<F, Fut>(scope: Scope, matcher: Matcher, handler: F) -> Self
    where
        F: Fn(Arc<dyn Transport>, Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            scope,
            matcher,
            handler: Arc::new(move |transport, event| -> BoxFuture<'static, HandlerResult> {
                Box::pin(handler(transport, event))
            }),
        }
    }

    pub(crate) fn entry<F, Fut>(matcher: Matcher, handler: F) -> Self
    where
        F: Fn(Arc<dyn Transport>, Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self::new(Scope::Any, matcher, handler)
    }

    fn accepts(&self, state: Option<State>, kind: &EventKind) -> bool {
        let in_scope = match self.scope {
            Scope::Any => true,
            Scope::In(scoped) => state == Some(scoped),
        };
        in_scope && self.matcher.accepts(kind)
    }
}

/// Per-chat dialogue record. `state` stays `None` until the entry command
/// records one.
pub(crate) struct ChatSession {
    chat_id: ChatId,
    state: Option<State>,
}

/// Receives handler failures at the dispatch boundary.
pub(crate) trait ErrorSink: Send + Sync {
    fn report(&self, chat_id: ChatId, error: &anyhow::Error);
}

pub(crate) struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, chat_id: ChatId, error: &anyhow::Error) {
        log::error!("Handler failed for chat with id = {}: {:?}", chat_id, error);
    }
}

/// Routes inbound events to the first matching binding and commits the
/// state the handler returns.
///
/// Owns the chat id -> session map explicitly instead of leaning on the bot
/// framework's dialogue storage. Sessions for different chats are handled
/// concurrently; the per-chat mutex is held across handler execution and
/// state commit, so at most one event is in flight per chat.
pub(crate) struct Dispatcher {
    transport: Arc<dyn Transport>,
    bindings: Vec<Binding>,
    sessions: Db<ChatId, Arc<Mutex<ChatSession>>>,
    errors: Arc<dyn ErrorSink>,
}

impl Dispatcher {
    pub(crate) fn new(
        bindings: Vec<Binding>,
        transport: Arc<dyn Transport>,
        errors: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            transport,
            bindings,
            sessions: Arc::new(scc::HashMap::new()),
            errors,
        }
    }

    /// Routes one event. Never fails: unmatched events are dropped, handler
    /// errors go to the error sink and the failed transition does not commit.
    pub(crate) async fn dispatch(&self, event: Event) {
        let session = self.session(event.chat_id).await;
        let mut session = session.lock().await;

        let matched = self
            .bindings
            .iter()
            .find(|binding| binding.accepts(session.state, &event.kind));
        let Some(binding) = matched else {
            log::debug!(
                "No binding for {:?} in state {:?} for chat with id = {}, event dropped",
                event.kind,
                session.state,
                session.chat_id
            );
            return;
        };

        let chat_id = event.chat_id;
        match (binding.handler)(self.transport.clone(), event).await {
            Ok(Some(next)) => {
                log::info!("Chat with id = {} moved to state {:?}", chat_id, next);
                session.state = Some(next);
            }
            Ok(None) => {}
            Err(error) => self.errors.report(chat_id, &error),
        }
    }

    async fn session(&self, chat_id: ChatId) -> Arc<Mutex<ChatSession>> {
        self.sessions
            .entry_async(chat_id)
            .await
            .or_insert_with(|| {
                Arc::new(Mutex::new(ChatSession {
                    chat_id,
                    state: None,
                }))
            })
            .get()
            .clone()
    }

    #[cfg(test)]
    pub(crate) async fn state_of(&self, chat_id: ChatId) -> Option<State> {
        match self
            .sessions
            .read_async(&chat_id, |_, session| session.clone())
            .await
        {
            Some(session) => session.lock().await.state,
            None => None,
        }
    }
}
