//! # Toggle state, reducers, and prop descriptors
//!
//! Togglekit is a headless toggle-state store. It owns a single boolean `on`
//! flag and everything a UI layer needs to drive it, without knowing anything
//! about that UI layer. There are three main pieces:
//!
//! - [`ToggleStore`] — the store itself: `toggle`, `reset`, and the effective
//!   `on` value.
//! - [`Reducer`] / [`toggle_reducer`] — the pluggable transition function.
//! - [`PropsDescriptor`] — derived prop bundles for a "toggler" and a
//!   "resetter" element, consumed by an external rendering collaborator.
//!
//! ## An uncontrolled store
//!
//! By default the store owns its state:
//!
//! ```rust
//! use togglekit_core::*;
//!
//! let store = ToggleStore::new(ToggleConfig::new());
//! assert!(!store.on());
//!
//! store.toggle()?;
//! assert!(store.on());
//!
//! store.reset()?;
//! assert!(!store.on());
//! # Ok::<(), ToggleError>(())
//! ```
//!
//! ## Prop getters
//!
//! UI elements are wired through descriptors rather than direct calls. A
//! caller-supplied `on_activate` is composed in front of the store's own
//! transition; any extra entries are merged last and win on key collisions:
//!
//! ```rust
//! use togglekit_core::*;
//!
//! let store = ToggleStore::new(ToggleConfig::new().initial_on(true));
//! let props = store.toggler_props(PropOverrides::new());
//!
//! assert_eq!(props.pressed(), Some(true));
//! props.activate()?;
//! assert!(!store.on());
//! # Ok::<(), ToggleError>(())
//! ```
//!
//! ## Controlled mode
//!
//! Supplying `controlled_on` at build time hands ownership of the visible
//! value to the caller for the lifetime of the store. Dispatches still run the
//! reducer and report the suggestion through `on_change`; only the owner can
//! move the value, by feeding it back in:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use togglekit_core::*;
//!
//! let owner = Rc::new(Cell::new(false));
//! let store = ToggleStore::new(ToggleConfig::new().controlled_on(false).on_change({
//!     let owner = owner.clone();
//!     move |suggested, _action| owner.set(suggested.on)
//! }));
//!
//! store.toggle()?;
//! assert!(!store.on()); // still what the owner supplied
//! assert!(owner.get()); // but the suggestion reached the owner
//!
//! store.set_controlled_on(Some(owner.get()));
//! assert!(store.on());
//! # Ok::<(), ToggleError>(())
//! ```
//!
//! Misuse of the controlled contract (drifting between modes, a controlled
//! value with no way to change it) is reported through the `log` facade,
//! gated by the [`Diagnostics`] policy supplied at construction. The store is
//! single-threaded and fully synchronous; `on_change` runs inline within the
//! dispatch that produced it.

pub mod diagnostics;
pub mod error;
pub mod props;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tests;

pub use diagnostics::*;
pub use error::*;
pub use props::*;
pub use reducer::*;
pub use state::*;
pub use store::*;
