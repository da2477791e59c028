/// Conversation states a chat can be in.
///
/// `Topic` and `Exercise` are reserved for the lesson flow; no bindings are
/// registered for them yet, so they are unreachable at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Main,
    Help,
    Topic,
    Exercise,
}
