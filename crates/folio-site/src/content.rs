//! Page content.
//!
//! The site has a single author and fixed copy, so the content trees are
//! plain data handed to the templates as a global.

use serde::Serialize;

/// An icon (Font Awesome classes) with a label.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub icon: &'static str,
    pub label: &'static str,
}

/// A card listing tools in one area.
#[derive(Debug, Clone, Serialize)]
pub struct ToolGroup {
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

/// A project card.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Font Awesome classes
    pub icon: &'static str,
    /// Card image URL
    pub image: &'static str,
}

/// A footer link to a social profile.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub icon: &'static str,
    pub href: &'static str,
}

/// Who the site is about.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub bio: &'static str,
    /// Image URL under the assets directory
    pub image: &'static str,
    pub email: &'static str,
}

/// Everything the four pages display.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub resume_blurb: Vec<&'static str>,
    pub tools: Vec<ToolGroup>,
    pub projects: Vec<Project>,
    pub social: Vec<SocialLink>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Purva Pratapwar",
                greeting: "Hey all, welcome to my portfolio!!",
                bio: "I am a B.Tech Mechanical Engineering student at IIT Madras (Batch of 2026), \
                      passionate about technology. I love building intuitive solutions, whether \
                      it's a dashboard, app, or automation script. I have worked on various \
                      projects that showcase my skills in Python, web development, and data \
                      analysis. I have also completed an internship in a software development \
                      role at Bank of New York.",
                image: "/assets/profile.jpg",
                email: "pratapwarpurva@gmail.com",
            },
            skills: vec![
                Skill {
                    icon: "fab fa-html5 me-2 text-danger",
                    label: "HTML",
                },
                Skill {
                    icon: "fab fa-css3-alt me-2 text-primary",
                    label: "CSS",
                },
                Skill {
                    icon: "fab fa-python me-2 text-info",
                    label: "Python",
                },
                Skill {
                    icon: "fas fa-cogs me-2 text-warning",
                    label: "Data Structures and Algorithms",
                },
                Skill {
                    icon: "fab fa-linux me-2",
                    label: "Linux OS",
                },
            ],
            resume_blurb: vec![
                "I am looking forward to have more professional experiences.",
                "Here's my resume !!",
            ],
            tools: vec![
                ToolGroup {
                    title: "Tools & Softwares (Technical)",
                    items: vec![
                        "Git, GitHub",
                        "Latex, Excel",
                        "PowerPoint, AutoCAD",
                        "MS Word, VScode",
                    ],
                },
                ToolGroup {
                    title: "Tools & Softwares (Design)",
                    items: vec!["Canva Pro, Figma", "Illustrator, Photoshop", "MS Clipchamp"],
                },
            ],
            projects: vec![
                Project {
                    title: "Portfolio",
                    description: "Designed a responsive collapsible personal portfolio website",
                    icon: "fas fa-laptop-code fa-2x text-primary mb-2",
                    image: "https://picsum.photos/300/200?random=5",
                },
                Project {
                    title: "Ball Screw Drive System",
                    description: "Ball Screw Drive System (Course Project)",
                    icon: "fas fa-pencil-alt fa-2x text-success mb-2",
                    image: "https://picsum.photos/300/200?random=6",
                },
                Project {
                    title: "Game",
                    description: "User-friendly TicTacToe Game",
                    icon: "fas fa-gamepad fa-2x text-success mb-2",
                    image: "https://picsum.photos/300/200?random=7",
                },
                Project {
                    title: "Cash Flow Minimizer",
                    description: "Cash Flow Minimizer Project",
                    icon: "fas fa-bars fa-2x text-success mb-2",
                    image: "https://picsum.photos/300/200?random=8",
                },
            ],
            social: vec![
                SocialLink {
                    icon: "fab fa-instagram",
                    href: "https://www.instagram.com/purva_p_1109/",
                },
                SocialLink {
                    icon: "fab fa-linkedin",
                    href: "https://www.linkedin.com/in/purva-pratapwar-8a6362263",
                },
                SocialLink {
                    icon: "fab fa-github",
                    href: "https://github.com/me22b179",
                },
            ],
        }
    }
}
