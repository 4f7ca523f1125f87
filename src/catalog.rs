use serde::Serialize;

/// One portfolio project entry. Defined at build time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Screenshot path, resolved relative to the working directory.
    pub image: &'static str,
    /// Technology tags, rendered in declared order.
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
}

pub const RESUME_URL: &str = "https://ken1574.github.io/portfolio-01/resume.pdf";

pub const CONTACT_EMAIL: &str = "mailto:ken1574@outlook.com";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/ken1574/";

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "LearnJapanese",
        description: "A simple frontend only individual school project to showcase my past \
                      passion. This website is built to guide users on the beginning steps of \
                      learning Japanese, solely based on my personal experience.",
        image: "assets/learn_japanese.png",
        tech_stack: &["Javascript", "CSS", "HTML"],
        github_url: "https://github.com/ken1574/LearnJapanese",
        live_url: "https://ken1574.github.io/LearnJapanese/",
    },
    ProjectRecord {
        id: 2,
        title: "reMarkable",
        description: "My contribution as part of a school group project. I created the web-based \
                      notebook editor as part of a e-ink tablet e-commerce website, along with a \
                      community forum for users to share their notebooks with others.",
        image: "assets/remarkable.png",
        tech_stack: &[
            "Python",
            "Flask",
            "SQLite",
            "Javascript",
            "Socket.IO",
            "HTML",
            "CSS",
        ],
        github_url: "https://github.com/ken1574/notebook-editor",
        live_url: "https://github.com/ken1574/",
    },
    ProjectRecord {
        id: 3,
        title: "FinSight AI",
        description: "My contribution as part of a school group project. I created the dashboard \
                      and client portfilo pages, powered by Gemini AI. This website aims to bring \
                      convenience to the workflow for our client, who is a financial advisor.",
        image: "assets/finsight.png",
        tech_stack: &["React", "Express", "SQLite", "MUI", "GeminiAPI"],
        github_url: "https://github.com/ken1574/",
        live_url: "https://github.com/ken1574/",
    },
];

/// The fixed, ordered project catalog.
pub fn projects() -> &'static [ProjectRecord] {
    PROJECTS
}

/// Skills shown in the skills section, in display order.
pub const SKILLS: &[&str] = &[
    "Javascript",
    "Typescript",
    "React",
    "Python",
    "Flask",
    "SQLite",
    "HTML",
    "CSS",
];
