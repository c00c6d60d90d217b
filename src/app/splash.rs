use leptos::prelude::*;

use crate::splash::{LoaderState, Typewriter, SPLASH_TEXT};

/// Types out the splash text, then hands over to the page via `on_complete`.
#[component]
pub fn Splash(on_complete: Callback<()>) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(SPLASH_TEXT));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // timers only run in the browser
    Effect::new(move |_| schedule(typewriter, pending, on_complete));

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <div
            class="fixed inset-0 z-[70] flex items-center justify-center bg-black text-green-400 font-mono text-xl sm:text-2xl"
            aria-busy=move || (typewriter.with(Typewriter::state) != LoaderState::Complete).to_string()
        >
            <span>{move || typewriter.with(Typewriter::visible)}</span>
            <span class="animate-pulse">"▋"</span>
        </div>
    }
}

/// Arms a timeout for the typewriter's next step, chaining until it completes.
fn schedule(
    typewriter: RwSignal<Typewriter>,
    pending: StoredValue<Option<TimeoutHandle>>,
    on_complete: Callback<()>,
) {
    let Some(next) = typewriter.try_with_untracked(Typewriter::next_delay) else {
        return;
    };
    let Some(delay) = next else {
        on_complete.run(());
        return;
    };
    let step = move || {
        if typewriter.try_update(Typewriter::step).is_some() {
            schedule(typewriter, pending, on_complete);
        }
    };
    match set_timeout_with_handle(step, delay) {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(e) => {
            log::error!("couldn't schedule splash step: {:?}", e);
            on_complete.run(());
        }
    }
}
