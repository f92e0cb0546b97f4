use leptos::{html, prelude::*, web_sys};
use leptos_use::{
    use_element_visibility, use_intersection_observer_with_options, UseIntersectionObserverOptions,
};

use crate::navigation::{ActiveSections, MIDLINE_ROOT_MARGIN};

/// A page section that tells the nav bar when it crosses the middle of
/// the viewport.
#[component]
pub fn PageSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let active = expect_context::<RwSignal<ActiveSections>>();

    use_intersection_observer_with_options::<_, _, web_sys::Element, web_sys::Element, _>(
        node,
        move |entries, _| {
            for entry in entries {
                active.update(|a| a.set_visible(id, entry.is_intersecting()));
            }
        },
        UseIntersectionObserverOptions::default().root_margin(MIDLINE_ROOT_MARGIN),
    );

    view! {
        <section id=id node_ref=node class=format!("scroll-mt-20 px-4 sm:px-6 lg:px-8 py-20 {class}")>
            <div class="mx-auto max-w-5xl">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: &'static str) -> impl IntoView {
    view! {
        <Reveal>
            <h2 class="text-3xl font-bold text-center">{title}</h2>
            <div class="mx-auto mt-3 mb-12 h-1 w-16 rounded bg-teal-400"></div>
            {(!subtitle.is_empty())
                .then(|| view! { <p class="text-center text-slate-400 -mt-8 mb-12">{subtitle}</p> })}
        </Reveal>
    }
}

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (shown, set_shown) = signal(false);

    // one-shot: stays shown after leaving the viewport
    Effect::new(move |_| {
        if visible.get() {
            set_shown.set(true);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || {
                if shown.get() {
                    "transition-all duration-700 ease-out opacity-100 translate-y-0"
                } else {
                    "transition-all duration-700 ease-out opacity-0 translate-y-8"
                }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
