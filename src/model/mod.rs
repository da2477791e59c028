pub(crate) mod commands;
pub(crate) mod event;
pub(crate) mod state;
pub(crate) mod types;
