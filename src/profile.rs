//! Hand-authored portfolio content.
//!
//! Everything the page renders, and every fact the chat assistant can
//! answer with, comes from the tables in this module.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

/// A page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Jordan Reyes",
    title: "Full-Stack Software Engineer",
    tagline: "I build fast, accessible web applications and the services behind them.",
    location: "Austin, TX",
    email: "jordan@jordanreyes.dev",
    phone: "+1 (512) 555-0142",
    linkedin: "https://www.linkedin.com/in/jordanreyes",
    github: "https://github.com/jordanreyes",
};

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "skills", label: "Skills" },
    Section { id: "certifications", label: "Certifications" },
    Section { id: "contact", label: "Contact" },
];

pub const ABOUT: &[&str] = &[
    "I'm a software engineer with five years of experience shipping products end to end, from database schema to pixel-perfect UI.",
    "Lately I've been writing a lot of Rust: WebAssembly front ends, Axum services, and the occasional CLI tool when a shell script grows up.",
    "Outside of work I mentor at a local coding bootcamp, run trail races, and keep a stubbornly alive sourdough starter.",
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Software Engineer",
        company: "Brightline Analytics",
        period: "Jan 2023 - Present",
        highlights: &[
            "Led the rewrite of the customer dashboard, cutting median load time from 4.1s to 1.3s.",
            "Designed an event ingestion service handling 40k events per second.",
            "Mentored four engineers through their first production on-call rotations.",
        ],
    },
    Experience {
        role: "Software Engineer",
        company: "Cedar Health",
        period: "Jun 2020 - Dec 2022",
        highlights: &[
            "Built the appointment scheduling API used by 300+ clinics.",
            "Introduced contract tests between the mobile apps and the backend.",
        ],
    },
    Experience {
        role: "Junior Web Developer",
        company: "Pixel & Pine Studio",
        period: "Aug 2019 - May 2020",
        highlights: &[
            "Delivered marketing sites for a dozen small businesses.",
            "Automated image optimisation in the build pipeline.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Trailhead",
        summary: "Offline-first trail running log with GPX import and elevation charts.",
        tech: &["Rust", "Leptos", "IndexedDB"],
        link: "https://github.com/jordanreyes/trailhead",
    },
    Project {
        name: "Ledgerline",
        summary: "Plain-text accounting CLI that reconciles bank CSV exports.",
        tech: &["Rust", "Clap", "SQLite"],
        link: "https://github.com/jordanreyes/ledgerline",
    },
    Project {
        name: "Starter Tracker",
        summary: "Tiny IoT dashboard that watches the temperature of a sourdough starter.",
        tech: &["Axum", "MQTT", "Tailwind"],
        link: "https://github.com/jordanreyes/starter-tracker",
    },
    Project {
        name: "Portfolio Site",
        summary: "This website: server-rendered with Axum and hydrated as WebAssembly.",
        tech: &["Rust", "Leptos", "Axum"],
        link: "https://github.com/jordanreyes/portfolio-site",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &["Rust", "TypeScript", "Python", "Go", "SQL"],
    },
    SkillGroup {
        category: "Frontend",
        skills: &["Leptos", "React", "WebAssembly", "Tailwind CSS", "HTML", "CSS"],
    },
    SkillGroup {
        category: "Backend",
        skills: &["Axum", "Tokio", "PostgreSQL", "Redis", "gRPC"],
    },
    SkillGroup {
        category: "Tooling",
        skills: &["Docker", "GitHub Actions", "Terraform", "AWS", "Linux"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Developer - Associate",
        issuer: "Amazon Web Services",
        year: "2023",
    },
    Certification {
        name: "Certified Kubernetes Application Developer",
        issuer: "The Linux Foundation",
        year: "2022",
    },
    Certification {
        name: "Professional Scrum Master I",
        issuer: "Scrum.org",
        year: "2021",
    },
];

/// Served from `public/`.
pub const RESUME_PATH: &str = "/resume.pdf";

/// Greeting shown the first time the chat widget is opened.
pub const CHAT_GREETING: &str = "Hello! 👋 How can I assist you today?";

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why did the robot go on vacation? It needed to recharge!",
    "Why did the developer go broke? Because he used up all his cache!",
    "Why was the JavaScript developer sad? Because he didn't know how to 'null' his feelings!",
    "Why do Java developers wear glasses? Because they don't C#!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Why do Python programmers have low self-esteem? Because they're constantly comparing themselves to others.",
    "Why was the computer cold? It left its Windows open!",
    "Why did the AI cross the road? To optimize the other side!",
    "Why did the developer go broke? He lost his domain in a bet!",
    "Why do robots love winter? Because they can chill their circuits!",
    "Why did the programmer quit his job? Because he didn't get arrays.",
    "Why do coders always mix up Christmas and Halloween? Because Oct 31 equals Dec 25.",
    "Why did the computer show up at work late? It had a hard drive.",
    "Why did the developer go to therapy? To resolve his inner conflicts.",
    "Why was the robot angry? Because someone kept pushing its buttons.",
    "Why did the AI become a chef? It wanted to byte into everything.",
    "Why do coders hate nature? Too many bugs.",
    "Why did the robot fail school? It kept taking things literally.",
    "Why did the computer go to art school? To learn to draw its GUI.",
];

impl Profile {
    pub fn phone_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.id).collect()
}
