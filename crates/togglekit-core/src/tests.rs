#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::*;

    #[test]
    fn test_toggle_involution() {
        let store = ToggleStore::new(ToggleConfig::new());
        assert!(!store.on());

        store.toggle().unwrap();
        assert!(store.on());

        store.toggle().unwrap();
        assert!(!store.on());
    }

    #[test]
    fn test_reset_restores_latched_initial() {
        for initial in [false, true] {
            let store = ToggleStore::new(ToggleConfig::new().initial_on(initial));
            for _ in 0..5 {
                store.toggle().unwrap();
            }
            store.reset().unwrap();
            assert_eq!(store.on(), initial);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let store = ToggleStore::new(ToggleConfig::new().initial_on(false));
        store.toggle().unwrap();
        assert!(store.on());
        store.toggle().unwrap();
        assert!(!store.on());
        store.reset().unwrap();
        assert!(!store.on());

        let store = ToggleStore::new(ToggleConfig::new().initial_on(true));
        store.toggle().unwrap();
        assert!(!store.on());
        store.reset().unwrap();
        assert!(store.on());
    }

    #[test]
    fn test_on_change_fires_with_suggestion() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let store = ToggleStore::new(ToggleConfig::new().on_change({
            let seen = seen.clone();
            move |suggested, action| seen.borrow_mut().push((suggested, *action))
        }));

        store.toggle().unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![(ToggleState { on: true }, Action::Toggle)]
        );

        store.reset().unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(
            seen.borrow()[1],
            (
                ToggleState { on: false },
                Action::Reset(ToggleState { on: false })
            )
        );
    }

    #[test]
    fn test_controlled_override_supremacy() {
        let store = ToggleStore::new(ToggleConfig::new().controlled_on(true).read_only(true));
        assert_eq!(store.mode(), ControlMode::Controlled);

        for _ in 0..3 {
            store.toggle().unwrap();
            assert!(store.on());
        }
        store.reset().unwrap();
        assert!(store.on());
    }

    #[test]
    fn test_controlled_suggestion_uses_effective_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        // internal state starts at false, but the owner says true
        let store = ToggleStore::new(
            ToggleConfig::new()
                .initial_on(false)
                .controlled_on(true)
                .on_change({
                    let seen = seen.clone();
                    move |suggested, _| seen.borrow_mut().push(suggested.on)
                }),
        );

        store.toggle().unwrap();
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_controlled_owner_feedback_loop() {
        let owner = Rc::new(Cell::new(false));

        let store = ToggleStore::new(ToggleConfig::new().controlled_on(false).on_change({
            let owner = owner.clone();
            move |suggested, _| owner.set(suggested.on)
        }));

        store.toggle().unwrap();
        assert!(!store.on());

        store.set_controlled_on(Some(owner.get()));
        assert!(store.on());

        store.toggle().unwrap();
        store.set_controlled_on(Some(owner.get()));
        assert!(!store.on());
    }

    #[test]
    fn test_unsupported_action_fails_loudly() {
        let err = toggle_reducer(ToggleState::default(), &Action::Custom("bogus")).unwrap_err();
        assert_eq!(err, ToggleError::UnsupportedAction { kind: "bogus" });

        let store = ToggleStore::new(ToggleConfig::new().initial_on(true));
        assert!(store.dispatch(Action::Custom("bogus")).is_err());
        assert!(store.on());
    }

    #[test]
    fn test_custom_reducer_handles_custom_actions() {
        let store = ToggleStore::new(ToggleConfig::new().reducer(|state, action| match action {
            Action::Custom("force_on") => Ok(ToggleState { on: true }),
            other => toggle_reducer(state, other),
        }));

        store.dispatch(Action::Custom("force_on")).unwrap();
        assert!(store.on());
        store.toggle().unwrap();
        assert!(!store.on());
    }

    #[test]
    fn test_prop_composition_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let store = ToggleStore::new(ToggleConfig::new());
        let props = store.toggler_props(PropOverrides::new().on_activate({
            let calls = calls.clone();
            let store = store.clone();
            // the caller's handler must see the state before the transition
            move || calls.borrow_mut().push(("caller", store.on()))
        }));

        props.activate().unwrap();
        assert_eq!(*calls.borrow(), vec![("caller", false)]);
        assert!(store.on());
    }

    #[test]
    fn test_resetter_props_wrap_reset() {
        let store = ToggleStore::new(ToggleConfig::new().initial_on(true));
        store.toggle().unwrap();
        assert!(!store.on());

        let props = store.resetter_props(PropOverrides::new());
        assert_eq!(props.pressed(), None);
        props.activate().unwrap();
        assert!(store.on());
    }

    #[test]
    fn test_descriptor_merge_order_and_precedence() {
        let store = ToggleStore::new(ToggleConfig::new().initial_on(true));
        let props = store.toggler_props(
            PropOverrides::new()
                .with("pressed", PropValue::Bool(false))
                .with("label", PropValue::Text("night mode".into())),
        );

        // caller wins on collisions, but the entry keeps its position
        assert_eq!(props.pressed(), Some(false));
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["pressed", "on_activate", "label"]);
    }

    #[test]
    fn test_activation_handler_cannot_be_replaced() {
        let store = ToggleStore::new(ToggleConfig::new());
        let inert: ActivateHandler = Rc::new(|| Ok(()));
        let props = store
            .toggler_props(PropOverrides::new().with("on_activate", PropValue::Activate(inert)));

        props.activate().unwrap();
        assert!(store.on());
    }

    #[test]
    fn test_mode_is_latched() {
        let store = ToggleStore::new(ToggleConfig::new());
        assert_eq!(store.mode(), ControlMode::Uncontrolled);

        // drifting inputs are diagnosed, never obeyed
        store.set_controlled_on(Some(true));
        assert_eq!(store.mode(), ControlMode::Uncontrolled);
        assert!(!store.on());

        let store = ToggleStore::new(ToggleConfig::new().controlled_on(true).read_only(true));
        store.set_controlled_on(None);
        assert_eq!(store.mode(), ControlMode::Controlled);
        assert!(store.on());
    }

    #[test]
    #[should_panic(expected = "owner rejected the change")]
    fn test_on_change_panics_reach_the_dispatch_caller() {
        let store = ToggleStore::new(
            ToggleConfig::new().on_change(|_, _| panic!("owner rejected the change")),
        );
        let _ = store.toggle();
    }
}
