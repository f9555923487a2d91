use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::diagnostics::{self, Diagnostics};
use crate::props::{
    ActivateHandler, ON_ACTIVATE, PRESSED, PropOverrides, PropValue, PropsDescriptor,
    compose_activate,
};
use crate::reducer::{Reducer, toggle_reducer};
use crate::{Action, ToggleError, ToggleState};

pub type ChangeListener = Rc<dyn Fn(ToggleState, &Action)>;

/// Who owns the authoritative `on` value. Decided once at construction and
/// never re-derived afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    /// The caller owns the value and feeds it in via `controlled_on`.
    Controlled,
    /// The store's internal state is authoritative.
    Uncontrolled,
}

/// Options for [`ToggleStore::new`].
#[derive(Clone, Default)]
pub struct ToggleConfig {
    initial_on: bool,
    reducer: Option<Reducer>,
    on_change: Option<ChangeListener>,
    controlled_on: Option<bool>,
    read_only: bool,
    diagnostics: Diagnostics,
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting value for the internal state. Latched when the store is
    /// built; the store never looks at this input again.
    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }

    /// Replace the default [`toggle_reducer`].
    pub fn reducer(
        mut self,
        f: impl Fn(ToggleState, &Action) -> Result<ToggleState, ToggleError> + 'static,
    ) -> Self {
        self.reducer = Some(Rc::new(f));
        self
    }

    /// Listener invoked with the suggested next state and the action that
    /// produced it, on every dispatch, in both modes.
    pub fn on_change(mut self, f: impl Fn(ToggleState, &Action) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Supply an owner-held `on` value. Presence of this input at build time
    /// puts the store in [`ControlMode::Controlled`] for its whole lifetime.
    pub fn controlled_on(mut self, on: bool) -> Self {
        self.controlled_on = Some(on);
        self
    }

    /// Acknowledge a controlled value with no `on_change` listener.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

struct StoreInner {
    initial: ToggleState,
    mode: ControlMode,
    state: RefCell<ToggleState>,
    controlled_on: Cell<Option<bool>>,
    reducer: Reducer,
    on_change: Option<ChangeListener>,
    read_only: bool,
    diagnostics: Diagnostics,
}

/// A headless toggle-state store.
///
/// Cheaply clonable handle over one shared state value, so prop-getter
/// callbacks can capture the store they transition.
#[derive(Clone)]
pub struct ToggleStore(Rc<StoreInner>);

impl ToggleStore {
    pub fn new(config: ToggleConfig) -> Self {
        let initial = ToggleState {
            on: config.initial_on,
        };
        let mode = match config.controlled_on {
            Some(_) => ControlMode::Controlled,
            None => ControlMode::Uncontrolled,
        };

        if config.diagnostics.enabled()
            && mode == ControlMode::Controlled
            && config.on_change.is_none()
            && !config.read_only
        {
            diagnostics::warn_read_only();
        }

        Self(Rc::new(StoreInner {
            initial,
            mode,
            state: RefCell::new(initial),
            controlled_on: Cell::new(config.controlled_on),
            reducer: config.reducer.unwrap_or_else(|| Rc::new(toggle_reducer)),
            on_change: config.on_change,
            read_only: config.read_only,
            diagnostics: config.diagnostics,
        }))
    }

    /// The current effective `on`: the controlled override when controlled,
    /// otherwise the internal state.
    pub fn on(&self) -> bool {
        match (self.0.mode, self.0.controlled_on.get()) {
            (ControlMode::Controlled, Some(on)) => on,
            _ => self.0.state.borrow().on,
        }
    }

    /// Effective state in the reducer's shape.
    pub fn state(&self) -> ToggleState {
        ToggleState { on: self.on() }
    }

    pub fn mode(&self) -> ControlMode {
        self.0.mode
    }

    /// The state latched at construction; `reset` jumps back to this.
    pub fn initial_state(&self) -> ToggleState {
        self.0.initial
    }

    pub fn read_only(&self) -> bool {
        self.0.read_only
    }

    /// Owner-side input refresh. Updates the override value when the store is
    /// controlled. The latched mode never changes: an input whose
    /// controlled-ness drifted from it only trips a diagnostic and is
    /// otherwise ignored.
    pub fn set_controlled_on(&self, on: Option<bool>) {
        let observed = match on {
            Some(_) => ControlMode::Controlled,
            None => ControlMode::Uncontrolled,
        };
        if self.0.diagnostics.enabled() && observed != self.0.mode {
            diagnostics::warn_mode_switch(self.0.mode, observed);
        }
        if self.0.mode == ControlMode::Controlled
            && let Some(on) = on
        {
            self.0.controlled_on.set(Some(on));
        }
    }

    pub fn toggle(&self) -> Result<(), ToggleError> {
        self.dispatch(Action::Toggle)
    }

    pub fn reset(&self) -> Result<(), ToggleError> {
        self.dispatch(Action::Reset(self.0.initial))
    }

    /// Low-level dispatch; [`toggle`](Self::toggle) and
    /// [`reset`](Self::reset) are conveniences over this.
    ///
    /// The suggestion handed to `on_change` is always computed from the
    /// effective state, so a controlled owner sees what the store would do
    /// even though only the owner can move the visible value. A reducer error
    /// aborts before any state write.
    pub fn dispatch(&self, action: Action) -> Result<(), ToggleError> {
        let effective = ToggleState { on: self.on() };
        let suggested = (self.0.reducer)(effective, &action)?;

        match self.0.mode {
            ControlMode::Uncontrolled => {
                // effective and internal state coincide here
                *self.0.state.borrow_mut() = suggested;
            }
            ControlMode::Controlled => {
                // The internal copy still advances, even though nothing reads
                // it while the mode is controlled.
                let current = *self.0.state.borrow();
                let next = (self.0.reducer)(current, &action)?;
                *self.0.state.borrow_mut() = next;
            }
        }

        if let Some(on_change) = &self.0.on_change {
            on_change(suggested, &action);
        }
        Ok(())
    }

    /// Descriptor for the interactive element that flips the toggle.
    pub fn toggler_props(&self, overrides: PropOverrides) -> PropsDescriptor {
        let store = self.clone();
        let transition: ActivateHandler = Rc::new(move || store.toggle());
        self.interactive_props(Some(self.on()), overrides, transition)
    }

    /// Descriptor for the element that restores the latched initial state.
    pub fn resetter_props(&self, overrides: PropOverrides) -> PropsDescriptor {
        let store = self.clone();
        let transition: ActivateHandler = Rc::new(move || store.reset());
        self.interactive_props(None, overrides, transition)
    }

    fn interactive_props(
        &self,
        pressed: Option<bool>,
        overrides: PropOverrides,
        transition: ActivateHandler,
    ) -> PropsDescriptor {
        let mut props = PropsDescriptor::new();
        if let Some(pressed) = pressed {
            props.insert(PRESSED, PropValue::Bool(pressed));
        }
        props.insert(
            ON_ACTIVATE,
            PropValue::Activate(compose_activate(overrides.on_activate, transition)),
        );
        for (key, value) in overrides.extra {
            if key == ON_ACTIVATE {
                // the handler is always composed, never replaced
                continue;
            }
            props.insert(key, value);
        }
        props
    }
}
