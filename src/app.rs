mod about;
mod certifications;
mod chat_widget;
mod clipboard;
mod clock_widget;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::navigation::ActiveSections;
use crate::profile::PROFILE;

use about::About;
use certifications::Certifications;
use chat_widget::ChatWidget;
use clock_widget::ClockWidget;
use contact::Contact;
use experience::ExperienceTimeline;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-slate-100 font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(ActiveSections::default()));

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <NavBar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <ClockWidget />
            <ChatWidget />
        </Router>
    }
}

/// The whole portfolio lives on one page; the nav bar scrolls between sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ExperienceTimeline />
        <Projects />
        <Skills />
        <Certifications />
        <Contact />
    }
}
