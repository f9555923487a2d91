use std::rc::Rc;

use crate::{Action, ToggleError, ToggleState};

/// Pure transition function from (state, action) to the next state.
pub type Reducer = Rc<dyn Fn(ToggleState, &Action) -> Result<ToggleState, ToggleError>>;

/// Default two-state reducer: `Toggle` flips `on`, `Reset` restores the state
/// carried on the action, anything else is refused.
///
/// Consumer reducers usually wrap this and fall through for the edges they
/// don't care about:
///
/// ```rust
/// use togglekit_core::*;
///
/// let frozen = |state, action: &Action| match action {
///     Action::Toggle => Ok(state), // ignore flips
///     other => toggle_reducer(state, other),
/// };
/// ```
pub fn toggle_reducer(state: ToggleState, action: &Action) -> Result<ToggleState, ToggleError> {
    match action {
        Action::Toggle => Ok(ToggleState { on: !state.on }),
        Action::Reset(initial) => Ok(*initial),
        other => Err(ToggleError::UnsupportedAction { kind: other.kind() }),
    }
}
