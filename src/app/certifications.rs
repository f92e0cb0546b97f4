use leptos::prelude::*;

use super::reveal::{PageSection, Reveal, SectionHeading};
use crate::profile::CERTIFICATIONS;

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <PageSection id="certifications">
            <SectionHeading title="Certifications" />
            <ul class="grid gap-4 md:grid-cols-3">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <li>
                                <Reveal>
                                    <div class="h-full rounded-lg border border-slate-800 bg-slate-900 p-5">
                                        <p class="font-semibold">{cert.name}</p>
                                        <p class="mt-1 text-sm text-slate-400">{cert.issuer}</p>
                                        <p class="mt-3 font-mono text-xs text-teal-400">{cert.year}</p>
                                    </div>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </PageSection>
    }
}
