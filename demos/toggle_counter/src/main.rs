//! State-reducer walkthrough: a consumer reducer that refuses to flip after
//! too many activations, without the store knowing anything about click
//! counting.

use std::cell::Cell;
use std::rc::Rc;

use togglekit_core::*;

const MAX_CLICKS: u32 = 4;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clicks = Rc::new(Cell::new(0u32));

    let store = ToggleStore::new(ToggleConfig::new().reducer({
        let clicks = clicks.clone();
        move |state, action| {
            if matches!(action, Action::Toggle) && clicks.get() > MAX_CLICKS {
                return Ok(state); // clicked too much, keep the current state
            }
            toggle_reducer(state, action)
        }
    }));

    let toggler = store.toggler_props(PropOverrides::new().on_activate({
        let clicks = clicks.clone();
        move || clicks.set(clicks.get() + 1)
    }));
    let resetter = store.resetter_props(PropOverrides::new().on_activate({
        let clicks = clicks.clone();
        move || clicks.set(0)
    }));

    for round in 1..=7 {
        toggler.activate()?;
        if clicks.get() > MAX_CLICKS {
            log::warn!("round {round}: whoa, you clicked too much");
        }
        println!(
            "round {round}: on={} clicks={}",
            store.on(),
            clicks.get()
        );
    }

    resetter.activate()?;
    println!("after reset: on={} clicks={}", store.on(), clicks.get());
    Ok(())
}
