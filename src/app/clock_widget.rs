use chrono::{DateTime, Local};
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::clock::{format_date, format_time, meridiem, ClockTheme};

/// Small live clock pinned to the bottom-left corner. Clicking it flips
/// between dark and light.
#[component]
pub fn ClockWidget() -> impl IntoView {
    // None until hydrated so server and client render the same placeholder
    let now = RwSignal::new(None::<DateTime<Local>>);
    let theme = RwSignal::new(ClockTheme::default());

    Effect::new(move |_| now.set(Some(Local::now())));
    let _ = use_interval_fn(move || now.set(Some(Local::now())), 1000);

    view! {
        <div
            role="button"
            title="Click to switch light/dark"
            class="fixed bottom-5 left-5 z-[9999] flex h-16 w-28 cursor-pointer select-none flex-col items-center justify-center rounded-xl text-center font-mono text-xs transition-colors duration-300"
            style=move || theme.get().style()
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <div class="mb-1">{move || now.get().map(|t| format_date(&t)).unwrap_or_default()}</div>
            <div class="flex items-baseline text-sm font-bold tabular-nums">
                <span>
                    {move || now.get().map(|t| format_time(&t)).unwrap_or_else(|| "--:--:--".to_string())}
                </span>
                <span class="ml-1 text-[0.6em]">{move || now.get().map(|t| meridiem(&t))}</span>
            </div>
        </div>
    }
}
