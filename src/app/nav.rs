use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::navigation::{is_scrolled, ActiveSections};
use crate::profile::{PROFILE, SECTIONS};

#[component]
pub fn NavBar() -> impl IntoView {
    let active = expect_context::<RwSignal<ActiveSections>>();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let links = SECTIONS
        .iter()
        .map(|section| {
            let id = section.id;
            view! {
                <li>
                    <a
                        href=format!("#{id}")
                        on:click=move |_| set_menu_open.set(false)
                        class=move || {
                            if active.with(|a| a.is_active(id)) {
                                "block px-3 py-2 rounded-md text-teal-400 font-semibold"
                            } else {
                                "block px-3 py-2 rounded-md text-slate-300 hover:text-white"
                            }
                        }
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed inset-x-0 top-0 z-40 bg-slate-900/95 shadow-lg backdrop-blur transition-colors"
            } else {
                "fixed inset-x-0 top-0 z-40 bg-transparent transition-colors"
            }
        }>
            <nav class="mx-auto flex max-w-6xl flex-wrap items-center justify-between px-4 sm:px-6 lg:px-8 py-3">
                <a href="#home" class="text-xl font-bold text-teal-400">
                    {PROFILE.name}
                </a>
                <button
                    type="button"
                    class="md:hidden px-2 py-1 rounded-md border border-slate-700"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <ul class=move || {
                    if menu_open.get() {
                        "w-full md:w-auto flex flex-col md:flex md:flex-row gap-1 mt-2 md:mt-0"
                    } else {
                        "w-full md:w-auto hidden md:flex md:flex-row gap-1"
                    }
                }>{links}</ul>
            </nav>
        </header>
    }
}
