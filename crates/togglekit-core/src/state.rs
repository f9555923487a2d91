/// The one persisted entity: a single boolean flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

/// Transitions understood by a toggle store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Flip `on`.
    Toggle,
    /// Jump back to the state latched at construction, carried on the action.
    Reset(ToggleState),
    /// Consumer-defined action kind, routed untouched to the active reducer.
    /// The default reducer refuses it.
    Custom(&'static str),
}

impl Action {
    /// Stable name used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Toggle => "toggle",
            Action::Reset(_) => "reset",
            Action::Custom(kind) => kind,
        }
    }
}
