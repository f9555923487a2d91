//! Usage-misuse diagnostics.
//!
//! Advisory only: warnings go through the `log` facade and never change what
//! the store does. The policy is plain configuration handed to
//! [`ToggleConfig::diagnostics`](crate::ToggleConfig::diagnostics), so release
//! consumers switch the checks off without a build-mode global.

use crate::store::ControlMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Diagnostics {
    #[default]
    Enabled,
    Disabled,
}

impl Diagnostics {
    pub fn enabled(self) -> bool {
        self == Diagnostics::Enabled
    }
}

pub(crate) fn warn_mode_switch(latched: ControlMode, observed: ControlMode) {
    let direction = match observed {
        ControlMode::Controlled => "from uncontrolled to controlled",
        ControlMode::Uncontrolled => "from controlled to uncontrolled",
    };
    log::warn!(
        "toggle store inputs are changing {direction}. Decide between a \
         controlled or an uncontrolled store for its whole lifetime; the mode \
         latched at construction ({latched:?}) stays in effect."
    );
}

pub(crate) fn warn_read_only() {
    log::warn!(
        "a controlled `on` value was supplied without an `on_change` listener. \
         The value is effectively read-only; supply `on_change` to make it \
         mutable, or set `read_only` to acknowledge this."
    );
}
