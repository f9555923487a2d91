use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The active reducer was handed an action kind it does not understand.
    /// Fatal to the dispatch that carried it, never to the store.
    #[error("unsupported action type: {kind}")]
    UnsupportedAction { kind: &'static str },
}
