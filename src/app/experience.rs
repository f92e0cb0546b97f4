use leptos::prelude::*;

use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::profile::EXPERIENCE;

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <PageSection id="experience" class="bg-slate-900/50">
            <SectionHeading title="Experience" />
            <ol class="relative border-l border-slate-700 ml-3">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <li class="mb-10 ml-6">
                                <span class="absolute -left-2 mt-2 h-4 w-4 rounded-full bg-teal-400"></span>
                                <Reveal>
                                    <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between">
                                        <h3 class="text-xl font-semibold">
                                            {job.role}
                                            <span class="text-teal-400">" @ " {job.company}</span>
                                        </h3>
                                        <span class="text-sm font-mono text-slate-400">{job.period}</span>
                                    </div>
                                    <ul class="mt-3 list-disc list-inside space-y-1 text-slate-300">
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>{*h}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </PageSection>
    }
}
