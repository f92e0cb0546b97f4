use leptos::prelude::*;

use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::profile::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection id="skills" class="bg-slate-900/50">
            <SectionHeading title="Skills" />
            <div class="grid gap-8 sm:grid-cols-2">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <Reveal>
                                <h3 class="text-lg font-semibold text-teal-400 mb-3">{group.category}</h3>
                                <div class="flex flex-wrap gap-2">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <span class="rounded-md border border-slate-700 bg-slate-800 px-3 py-1 text-sm">
                                                    {*s}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
