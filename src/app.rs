use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::contact::ContactSection;
use crate::date::{current_year, years_of_experience};
use crate::modal::{ModalState, ProjectModal};
use crate::nav::{use_active_section, NavBar, NavState};
use crate::projects::ProjectsSection;
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};
use crate::skills::SkillsSection;
use crate::theme::{apply_to_document, load_preference, os_preference, ThemePreference};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);
    let theme = use_context_provider(|| {
        Signal::new(ThemePreference::resolve(load_preference(), os_preference()))
    });
    use_context_provider(|| Signal::new(NavState::default()));
    use_context_provider(|| Signal::new(ModalState::default()));

    use_effect(move || apply_to_document(theme()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{config.owner_name} — Web Developer" }
        document::Meta { name: "description", content: "{config.tagline}" }
        NavBar {}
        main {
            HeroSection {}
            AboutSection {}
            SkillsSection {}
            ProjectsSection {}
            ContactSection {}
        }
        SiteFooter {}
        ProjectModal {}
    }
}

#[component]
fn HeroSection() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let spy = use_active_section("home");

    rsx! {
        section {
            id: "home",
            class: if reveal.is_revealed() { "hero reveal" } else { "hero pre-reveal" },
            onmounted: move |event| {
                reveal.on_mounted(&event);
                spy.on_mounted(&event);
            },
            h1 { "Hi, I'm {config.owner_name}." }
            p { class: "tagline", "{config.tagline}" }
            a { class: "cta", href: "#contact", "Get in touch" }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let spy = use_active_section("about");
    let years = years_of_experience(config.career_start_year, current_year());

    rsx! {
        section {
            id: "about",
            class: if reveal.is_revealed() { "reveal" } else { "pre-reveal" },
            onmounted: move |event| {
                reveal.on_mounted(&event);
                spy.on_mounted(&event);
            },
            h2 { "About" }
            p {
                "I build small, sharp web apps end to end: interfaces people "
                "actually enjoy, APIs that stay out of the way, and tooling "
                "that keeps both honest."
            }
            div { class: "stat-row",
                StatCard {
                    label: "Years of experience".to_string(),
                    value: format!("{years}+"),
                    value_id: Some("yearsExp".to_string()),
                }
                StatCard {
                    label: "Projects shipped".to_string(),
                    value: "12".to_string(),
                    value_id: None,
                }
                StatCard {
                    label: "Happy clients".to_string(),
                    value: "9".to_string(),
                    value_id: None,
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, value_id: Option<String>) -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);

    rsx! {
        div {
            class: if reveal.is_revealed() { "card reveal" } else { "card pre-reveal" },
            onmounted: move |event| reveal.on_mounted(&event),
            if let Some(id) = value_id {
                p { class: "stat-value", span { id: "{id}", "{value}" } }
            } else {
                p { class: "stat-value", "{value}" }
            }
            p { "{label}" }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        footer { class: "site-footer",
            p {
                "© "
                span { id: "year", "{current_year()}" }
                " {config.owner_name} · hand-rolled, no site builder involved"
            }
        }
    }
}
