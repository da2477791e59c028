use crate::model::state::State;
use anyhow::Result;
use std::sync::Arc;

/// Handlers return the state to commit; `None` leaves the dialogue where it was.
pub(crate) type HandlerResult = Result<Option<State>>;
pub(crate) type Db<K, T> = Arc<scc::HashMap<K, T>>;
