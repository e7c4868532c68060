//! Countdown widget for flash-sale sections.
//!
//! Ticks once a second in the browser; on the server it renders zeros and
//! the client takes over after hydration.

use leptos::prelude::*;

use crate::util::countdown::TimeLeft;
use crate::util::format;

/// Countdown to a sale ending `ends_in_secs` from now, rendered as
/// days / hours / minutes / seconds boxes.
#[component]
pub fn FlashSaleTimer(ends_in_secs: u64) -> impl IntoView {
    let time_left = RwSignal::new(TimeLeft::default());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        #[allow(clippy::cast_precision_loss)]
        let target_ms = js_sys::Date::now() + (ends_in_secs as f64) * 1000.0;

        let stopped = Rc::new(Cell::new(false));
        let stop = Rc::clone(&stopped);
        on_cleanup(move || stop.set(true));

        leptos::task::spawn_local(async move {
            loop {
                if stopped.get() {
                    break;
                }
                #[allow(clippy::cast_possible_truncation)]
                let remaining = (target_ms - js_sys::Date::now()) as i64;
                time_left.set(TimeLeft::from_millis(remaining));
                if remaining <= 0 {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ends_in_secs;

    view! {
        <div class="flash-timer">
            <TimerBox value=Signal::derive(move || time_left.get().days) label="Days"/>
            <TimerBox value=Signal::derive(move || time_left.get().hours) label="Hours"/>
            <TimerBox value=Signal::derive(move || time_left.get().minutes) label="Mins"/>
            <TimerBox value=Signal::derive(move || time_left.get().seconds) label="Secs"/>
        </div>
    }
}

/// One padded digit box with its unit label.
#[component]
fn TimerBox(value: Signal<u64>, label: &'static str) -> impl IntoView {
    view! {
        <div class="flash-timer__box">
            <span class="flash-timer__value">{move || format::pad2(value.get())}</span>
            <span class="flash-timer__label">{label}</span>
        </div>
    }
}
