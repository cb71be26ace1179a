use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::nav::use_active_section;
use crate::reveal::{use_reveal, REVEAL_THRESHOLD};

pub const SKILLS_SECTION_ID: &str = "skills";

/// Fallback fill percentage when a card's value is absent or unusable.
pub const DEFAULT_SKILL_VALUE: u8 = 80;

/// Delay before setting meter widths, so the width transition is primed.
const FILL_DELAY_MS: u32 = 120;

struct SkillEntry {
    name: &'static str,
    data_value: &'static str,
}

static SKILLS: [SkillEntry; 6] = [
    SkillEntry { name: "JavaScript", data_value: "90" },
    SkillEntry { name: "React", data_value: "85" },
    SkillEntry { name: "Node.js", data_value: "80" },
    SkillEntry { name: "HTML & CSS", data_value: "92" },
    SkillEntry { name: "Python", data_value: "70" },
    SkillEntry { name: "Git & CI", data_value: "75" },
];

/// Parses a card's fill percentage. Anything missing, non-numeric, or
/// outside 0–100 falls back to the default.
pub fn parse_skill_value(raw: Option<&str>) -> u8 {
    raw.and_then(|value| value.trim().parse::<u8>().ok())
        .filter(|value| *value <= 100)
        .unwrap_or(DEFAULT_SKILL_VALUE)
}

#[component]
pub fn SkillsSection() -> Element {
    let reveal = use_reveal(REVEAL_THRESHOLD);
    let spy = use_active_section(SKILLS_SECTION_ID);
    let fills = use_signal(|| vec![0u8; SKILLS.len()]);
    #[cfg(target_arch = "wasm32")]
    let mut animated = use_signal(|| false);
    #[cfg(not(target_arch = "wasm32"))]
    let _animated = ();

    // The section's own reveal doubles as the animation trigger; the
    // fire-once law upstream means this runs at most once.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if !reveal.is_revealed() || animated() {
            return;
        }
        animated.set(true);
        tracing::debug!("skills: section revealed, filling meters");
        let mut fills = fills;
        spawn(async move {
            TimeoutFuture::new(FILL_DELAY_MS).await;
            fills.set(
                SKILLS
                    .iter()
                    .map(|entry| parse_skill_value(Some(entry.data_value)))
                    .collect(),
            );
        });
    });

    let widths = fills();

    rsx! {
        section {
            id: SKILLS_SECTION_ID,
            class: if reveal.is_revealed() { "reveal" } else { "pre-reveal" },
            onmounted: move |event| {
                reveal.on_mounted(&event);
                spy.on_mounted(&event);
            },
            h2 { "Skills" }
            div { class: "skills-grid",
                for (entry, width) in SKILLS.iter().zip(widths.into_iter()) {
                    div {
                        key: "{entry.name}",
                        class: "skill-card",
                        "data-value": "{entry.data_value}",
                        h3 { "{entry.name}" }
                        div { class: "meter",
                            span { style: "width: {width}%" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_falls_back_to_80() {
        assert_eq!(parse_skill_value(None), DEFAULT_SKILL_VALUE);
    }

    #[test]
    fn garbage_value_falls_back_to_80() {
        assert_eq!(parse_skill_value(Some("fast")), DEFAULT_SKILL_VALUE);
        assert_eq!(parse_skill_value(Some("")), DEFAULT_SKILL_VALUE);
        assert_eq!(parse_skill_value(Some("-5")), DEFAULT_SKILL_VALUE);
        assert_eq!(parse_skill_value(Some("120")), DEFAULT_SKILL_VALUE);
    }

    #[test]
    fn valid_value_is_used_verbatim() {
        assert_eq!(parse_skill_value(Some("0")), 0);
        assert_eq!(parse_skill_value(Some("65")), 65);
        assert_eq!(parse_skill_value(Some(" 100 ")), 100);
    }

    #[test]
    fn catalog_values_all_parse_cleanly() {
        for entry in SKILLS.iter() {
            let parsed = parse_skill_value(Some(entry.data_value));
            assert_eq!(parsed.to_string(), entry.data_value);
        }
    }
}
