use dioxus::prelude::*;

use crate::modal::{ModalState, ProjectDetails};
use crate::nav::use_active_section;
use crate::reveal::{stagger_delay_ms, use_reveal, APPEAR_THRESHOLD, REVEAL_THRESHOLD};

pub struct ProjectEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub tech: &'static str,
    pub image: &'static str,
    pub live_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
}

impl ProjectEntry {
    pub fn details(&self) -> ProjectDetails {
        ProjectDetails {
            title: self.title.to_string(),
            description: self.blurb.to_string(),
            tech: self.tech.to_string(),
            image_url: self.image.to_string(),
            live_url: self.live_url.map(str::to_string),
            code_url: self.code_url.map(str::to_string),
        }
    }
}

pub static PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        slug: "daily-planner",
        title: "Daily Planner",
        blurb: "A drag-and-drop planner with offline support and calendar sync.",
        tech: "React, IndexedDB, Service Workers",
        image: "/assets/projects/daily-planner.webp",
        live_url: Some("https://planner.amol.dev"),
        code_url: Some("https://github.com/amol-dev/daily-planner"),
    },
    ProjectEntry {
        slug: "recipe-radar",
        title: "Recipe Radar",
        blurb: "Search-as-you-type recipe finder backed by a public food API.",
        tech: "JavaScript, Express, Redis cache",
        image: "/assets/projects/recipe-radar.webp",
        live_url: Some("https://recipes.amol.dev"),
        code_url: None,
    },
    ProjectEntry {
        slug: "pixel-pulse",
        title: "Pixel Pulse",
        blurb: "A tiny canvas game about timing, rendered at a steady 60fps.",
        tech: "TypeScript, Canvas 2D",
        image: "/assets/projects/pixel-pulse.webp",
        live_url: None,
        code_url: Some("https://github.com/amol-dev/pixel-pulse"),
    },
];

#[component]
pub fn ProjectsSection() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let spy = use_active_section("projects");

    rsx! {
        section {
            id: "projects",
            class: if reveal.is_revealed() { "reveal" } else { "pre-reveal" },
            onmounted: move |event| {
                reveal.on_mounted(&event);
                spy.on_mounted(&event);
            },
            h2 { "Projects" }
            div { class: "projects-grid",
                for (index, entry) in PROJECTS.iter().enumerate() {
                    ProjectCard { key: "{entry.slug}", index }
                }
            }
        }
    }
}

/// One project tile. Watched twice: the shared reveal pass at 12% and the
/// independent stagger pass at 25%, which adds its own class and an
/// index-proportional transition delay.
#[component]
fn ProjectCard(index: usize) -> Element {
    let mut modal = use_context::<Signal<ModalState>>();
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let appear = use_reveal(APPEAR_THRESHOLD);
    let entry = &PROJECTS[index];

    let mut classes = String::from("project");
    classes.push_str(if reveal.is_revealed() { " reveal" } else { " pre-reveal" });
    if appear.is_revealed() {
        classes.push_str(" appear");
    }
    let delay = stagger_delay_ms(index);
    let style = if appear.is_revealed() {
        format!("transition-delay: {delay}ms")
    } else {
        String::new()
    };

    rsx! {
        article {
            class: "{classes}",
            style: "{style}",
            "data-title": "{entry.title}",
            "data-desc": "{entry.blurb}",
            "data-tech": "{entry.tech}",
            "data-img": "{entry.image}",
            onmounted: move |event| {
                reveal.on_mounted(&event);
                appear.on_mounted(&event);
            },
            img { src: "{entry.image}", alt: "{entry.title}", loading: "lazy" }
            div { class: "project-body",
                h3 { "{entry.title}" }
                p { "{entry.blurb}" }
                p { class: "project-tech", "{entry.tech}" }
                button {
                    r#type: "button",
                    class: "view-project",
                    onclick: move |_| {
                        tracing::debug!("projects: opening details");
                        modal.write().show(PROJECTS[index].details());
                    },
                    "View project"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_copy_every_field() {
        let details = PROJECTS[0].details();
        assert_eq!(details.title, "Daily Planner");
        assert_eq!(details.tech, "React, IndexedDB, Service Workers");
        assert!(details.live_url.is_some());
        assert!(details.code_url.is_some());
    }

    #[test]
    fn absent_links_stay_absent_in_details() {
        let details = PROJECTS[2].details();
        assert!(details.live_url.is_none());
        assert_eq!(details.code_url.as_deref(), Some("https://github.com/amol-dev/pixel-pulse"));
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in PROJECTS.iter().skip(i + 1) {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
