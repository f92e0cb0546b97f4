use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{clipboard::copy_text, reveal::PageSection};
use crate::long_press::{CopyTarget, PressTracker, COPY_TOAST_TIMEOUT, LONG_PRESS};
use crate::profile::{PROFILE, RESUME_PATH};

#[component]
pub fn Hero() -> impl IntoView {
    let copied = RwSignal::new(None::<CopyTarget>);
    let UseTimeoutFnReturn {
        start: start_toast, ..
    } = use_timeout_fn(
        move |_: ()| copied.set(None),
        COPY_TOAST_TIMEOUT.as_millis() as f64,
    );
    let copy = move |target: CopyTarget| {
        let start_toast = start_toast.clone();
        copy_text(target.value(&PROFILE), move || {
            copied.set(Some(target));
            start_toast(());
        });
    };

    view! {
        <PageSection id="home" class="min-h-screen flex items-center pt-28">
            <div class="max-w-3xl mx-auto text-center">
                <p class="text-teal-400 font-mono mb-4">"Hi, my name is"</p>
                <h1 class="text-5xl sm:text-6xl font-extrabold mb-4">{PROFILE.name}</h1>
                <h2 class="text-2xl sm:text-3xl text-slate-300 mb-6">{PROFILE.title}</h2>
                <p class="text-lg text-slate-400 leading-relaxed mb-8">{PROFILE.tagline}</p>
                <div class="flex flex-wrap justify-center gap-4 mb-8 text-sm sm:text-base">
                    <CopyLink target=CopyTarget::Email href=PROFILE.mailto() copy=copy.clone() />
                    <CopyLink target=CopyTarget::Phone href=PROFILE.phone_href() copy=copy.clone() />
                    <span class="rounded-full border border-slate-700 px-4 py-2 text-slate-300">
                        {PROFILE.location}
                    </span>
                </div>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href=RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Opens in a new tab"
                        class="px-6 py-3 rounded-md bg-teal-500 hover:bg-teal-400 text-slate-950 font-semibold transition-colors"
                    >
                        "View / Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md border border-teal-400 text-teal-400 hover:bg-teal-400/10 transition-colors"
                    >
                        "Get in touch"
                    </a>
                </div>
                <div class="flex justify-center gap-5 mt-8 text-3xl">
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-slate-300 hover:text-white"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sky-400 hover:text-sky-300"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
            <div
                aria-live="polite"
                class=move || {
                    if copied.get().is_some() {
                        "fixed bottom-24 right-6 z-50 rounded-lg bg-emerald-600 px-4 py-2 text-sm text-white shadow-lg transition-all duration-300 translate-y-0 opacity-100"
                    } else {
                        "fixed bottom-24 right-6 z-50 rounded-lg bg-emerald-600 px-4 py-2 text-sm text-white shadow-lg transition-all duration-300 translate-y-6 opacity-0 pointer-events-none"
                    }
                }
            >
                "✓ " {move || copied.get().map(CopyTarget::toast)}
            </div>
        </PageSection>
    }
}

/// Contact link that follows its href on click and copies its value on a
/// long press or right click.
#[component]
fn CopyLink<F>(target: CopyTarget, href: String, copy: F) -> impl IntoView
where
    F: Fn(CopyTarget) + Clone + Send + Sync + 'static,
{
    let press = StoredValue::new(PressTracker::default());
    let UseTimeoutFnReturn {
        start: arm,
        stop: disarm,
        ..
    } = use_timeout_fn(
        {
            let copy = copy.clone();
            move |_: ()| {
                if press.try_update_value(|p| p.elapse()).unwrap_or(false) {
                    copy(target);
                }
            }
        },
        LONG_PRESS.as_millis() as f64,
    );

    let start = move || {
        press.update_value(|p| p.start());
        arm(());
    };
    let end = move || {
        press.update_value(|p| p.release());
        disarm();
    };
    let on_context_menu = {
        let end = end.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            end();
            copy(target);
        }
    };
    let (start_touch, end_up, end_leave, end_touch) = (start.clone(), end.clone(), end.clone(), end);
    let on_click = move |ev: MouseEvent| {
        if press.try_update_value(|p| p.suppress_click()).unwrap_or(false) {
            ev.prevent_default();
        }
    };

    view! {
        <a
            href=href
            class="group relative flex items-center gap-2 rounded-full border border-slate-700 px-4 py-2 text-slate-200 hover:border-teal-400 transition-colors"
            on:mousedown=move |_| start()
            on:mouseup=move |_| end_up()
            on:mouseleave=move |_| end_leave()
            on:touchstart=move |_| start_touch()
            on:touchend=move |_| end_touch()
            on:contextmenu=on_context_menu
            on:click=on_click
        >
            <span>{target.value(&PROFILE)}</span>
            <span class="pointer-events-none absolute -top-8 left-1/2 -translate-x-1/2 whitespace-nowrap rounded bg-black/70 px-2 py-1 text-xs text-white opacity-0 group-hover:opacity-100">
                {target.hint()}
            </span>
        </a>
    }
}
