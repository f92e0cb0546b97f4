use leptos::prelude::*;

use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::profile::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <PageSection id="projects">
            <SectionHeading title="Projects" subtitle="A few things I've built recently" />
            <div class="grid gap-6 sm:grid-cols-2">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <Reveal delay_ms={(i % 2) as u32 * 150}>
                                <ProjectCard project=*project />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="h-full flex flex-col rounded-xl border border-slate-800 bg-slate-900 p-6 hover:-translate-y-1 hover:border-teal-400/60 transition-all">
            <h3 class="text-xl font-semibold mb-2">{project.name}</h3>
            <p class="flex-grow text-slate-300 mb-4">{project.summary}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-full bg-teal-400/10 px-3 py-1 text-xs font-mono text-teal-300">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=project.link
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium text-sky-400 hover:text-sky-300"
            >
                "View on GitHub →"
            </a>
        </article>
    }
}
