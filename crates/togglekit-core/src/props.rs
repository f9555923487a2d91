use std::rc::Rc;

use smallvec::SmallVec;

use crate::ToggleError;

pub type Callback = Rc<dyn Fn()>;
pub type ActivateHandler = Rc<dyn Fn() -> Result<(), ToggleError>>;

/// Key carrying the effective `on` flag on a toggler descriptor.
pub const PRESSED: &str = "pressed";
/// Key carrying the activation handler on toggler and resetter descriptors.
pub const ON_ACTIVATE: &str = "on_activate";

/// Value universe for descriptor entries. Closed on purpose: the rendering
/// collaborator gets typed values, not reflection over arbitrary objects.
#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Activate(ActivateHandler),
}

impl PropValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_activate(&self) -> Option<&ActivateHandler> {
        match self {
            PropValue::Activate(f) => Some(f),
            _ => None,
        }
    }
}

impl std::fmt::Debug for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            PropValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            PropValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            PropValue::Text(v) => f.debug_tuple("Text").field(v).finish(),
            PropValue::Activate(_) => write!(f, "Activate(<callback>)"),
        }
    }
}

/// Overrides a caller may hand to a prop getter.
///
/// `on_activate` is never replaced: it is composed in front of the store's own
/// transition (caller first, then the transition). Entries in `extra` are
/// merged after the store's defaults, so on a key collision the caller wins.
#[derive(Clone, Default)]
pub struct PropOverrides {
    pub on_activate: Option<Callback>,
    pub extra: Vec<(String, PropValue)>,
}

impl PropOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_activate(mut self, f: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Rc::new(f));
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: PropValue) -> Self {
        self.extra.push((key.into(), value));
        self
    }
}

/// Insertion-ordered props consumed by the external rendering collaborator.
#[derive(Clone, Debug, Default)]
pub struct PropsDescriptor {
    entries: SmallVec<[(String, PropValue); 4]>,
}

impl PropsDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value in place when the key exists (the entry keeps its
    /// original position), appends otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: PropValue) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The effective `on` flag, when this descriptor carries one.
    pub fn pressed(&self) -> Option<bool> {
        self.get(PRESSED).and_then(PropValue::as_bool)
    }

    /// The composed activation handler, when present.
    pub fn on_activate(&self) -> Option<ActivateHandler> {
        self.get(ON_ACTIVATE).and_then(|v| v.as_activate().cloned())
    }

    /// Runs the activation handler. A descriptor without one is inert.
    pub fn activate(&self) -> Result<(), ToggleError> {
        match self.on_activate() {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}

/// Composes the caller's handler in front of a store transition. The caller
/// runs first, then the transition, each exactly once per activation.
pub fn compose_activate(first: Option<Callback>, then: ActivateHandler) -> ActivateHandler {
    Rc::new(move || {
        if let Some(f) = &first {
            f();
        }
        then()
    })
}
