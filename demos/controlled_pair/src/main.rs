//! Control-props walkthrough: one owner-held value drives two controlled
//! stores in lockstep. The stores only ever *suggest* changes through
//! `on_change`; the owner decides what the visible value becomes and feeds it
//! back in.

use std::cell::Cell;
use std::rc::Rc;

use togglekit_core::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let both_on = Rc::new(Cell::new(false));
    let times_clicked = Rc::new(Cell::new(0u32));

    let reconcile = {
        let both_on = both_on.clone();
        let times_clicked = times_clicked.clone();
        move |suggested: ToggleState, action: &Action| {
            // past four clicks the owner stops accepting toggles
            if matches!(action, Action::Toggle) && times_clicked.get() >= 4 {
                log::warn!("whoa, you clicked too much");
                return;
            }
            both_on.set(suggested.on);
            times_clicked.set(times_clicked.get() + 1);
        }
    };

    let left = ToggleStore::new(
        ToggleConfig::new()
            .controlled_on(both_on.get())
            .on_change(reconcile.clone()),
    );
    let right = ToggleStore::new(
        ToggleConfig::new()
            .controlled_on(both_on.get())
            .on_change(reconcile),
    );

    // a controlled store with no listener has to say so
    let frozen = ToggleStore::new(ToggleConfig::new().controlled_on(true).read_only(true));

    // and an uncontrolled one just works on its own
    let standalone = ToggleStore::new(ToggleConfig::new().initial_on(true).on_change(
        |suggested, action| {
            log::info!(
                "standalone suggestion: on={} after `{}`",
                suggested.on,
                action.kind()
            );
        },
    ));

    for round in 1..=6 {
        left.toggle()?;
        left.set_controlled_on(Some(both_on.get()));
        right.set_controlled_on(Some(both_on.get()));
        println!(
            "round {round}: left={} right={} clicks={}",
            left.on(),
            right.on(),
            times_clicked.get()
        );
    }

    // the reset button lives with the owner, not the stores
    both_on.set(false);
    times_clicked.set(0);
    left.set_controlled_on(Some(both_on.get()));
    right.set_controlled_on(Some(both_on.get()));
    println!("after reset: left={} right={}", left.on(), right.on());

    standalone.toggle()?;
    println!(
        "standalone={} frozen={}",
        standalone.on(),
        frozen.on()
    );
    Ok(())
}
