use leptos::prelude::*;

use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::profile::{ABOUT, PROFILE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSection id="about">
            <SectionHeading title="About Me" />
            <div class="grid gap-10 md:grid-cols-3">
                <Reveal>
                    <div class="mx-auto flex h-48 w-48 items-center justify-center rounded-full bg-gradient-to-br from-teal-400 to-sky-600 text-6xl font-bold text-slate-950">
                        {PROFILE.name.split_whitespace().filter_map(|w| w.chars().next()).collect::<String>()}
                    </div>
                    <p class="mt-4 text-center text-slate-400">{PROFILE.location}</p>
                </Reveal>
                <div class="md:col-span-2 space-y-4">
                    {ABOUT
                        .iter()
                        .enumerate()
                        .map(|(i, p)| {
                            view! {
                                <Reveal delay_ms={i as u32 * 100}>
                                    <p class="text-lg leading-relaxed text-slate-300">{*p}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
