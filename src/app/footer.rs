use leptos::{html, prelude::*, web_sys};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::profile::{PROFILE, SECTIONS};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    // rfc3339, so the first four bytes are the year
    let year = BUILD_TIME.get(..4).unwrap_or_default();
    let built = BUILD_TIME.get(..10).unwrap_or_default();

    // back-to-top only while a fifth of the footer is on screen
    let node = NodeRef::<html::Footer>::new();
    let (in_view, set_in_view) = signal(false);
    use_intersection_observer_with_options::<_, _, web_sys::Element, web_sys::Element, _>(
        node,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                set_in_view.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.2]),
    );

    view! {
        <footer node_ref=node class="relative border-t border-slate-800 px-4 py-10 text-sm text-slate-400">
            <div class="mx-auto flex max-w-5xl flex-col items-center gap-4 md:flex-row md:justify-between">
                <p>"© " {year} " " {PROFILE.name} ". All rights reserved."</p>
                <ul class="flex flex-wrap justify-center gap-4">
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <li>
                                    <a href=format!("#{}", s.id) class="hover:text-white">
                                        {s.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex items-center gap-4 text-xl">
                    <a href=PROFILE.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <span class="text-xs font-mono">"built " {built}</span>
                </div>
            </div>
            <Show when=move || in_view.get()>
                <a
                    href="#home"
                    aria-label="Back to top"
                    class="fixed bottom-24 left-1/2 z-40 -translate-x-1/2 rounded-full bg-teal-500 px-4 py-2 text-sm font-semibold text-slate-950 shadow-lg hover:bg-teal-400 transition-colors"
                >
                    "↑ Back to top"
                </a>
            </Show>
        </footer>
    }
}
