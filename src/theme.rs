use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const THEME_STORAGE_KEY: &str = "portfolio.theme";

/// Color scheme flag, persisted across reloads as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Startup resolution: persisted value wins, then the OS color-scheme
    /// hint, then dark.
    pub fn resolve(persisted: Option<Self>, os_hint: Option<Self>) -> Self {
        persisted.or(os_hint).unwrap_or(Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "🌞",
            Self::Dark => "🌗",
        }
    }
}

pub fn load_preference() -> Option<ThemePreference> {
    LocalStorage::get(THEME_STORAGE_KEY).ok()
}

fn store_preference(preference: ThemePreference) {
    let _ = LocalStorage::set(THEME_STORAGE_KEY, preference);
}

#[cfg(target_arch = "wasm32")]
pub fn os_preference() -> Option<ThemePreference> {
    let window = web_sys::window()?;
    let query = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(if query.matches() {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn os_preference() -> Option<ThemePreference> {
    None
}

/// Mirrors the preference onto the document as a `light` marker class on
/// `<body>`, so the stylesheet can swap palettes.
#[cfg(target_arch = "wasm32")]
pub fn apply_to_document(preference: ThemePreference) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = if preference.is_light() {
        classes.add_1("light")
    } else {
        classes.remove_1("light")
    };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_to_document(_preference: ThemePreference) {}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemePreference>>();
    let current = theme();

    rsx! {
        button {
            id: "themeToggle",
            r#type: "button",
            class: "theme-toggle",
            aria_label: "Toggle color theme",
            aria_pressed: if current.is_light() { "true" } else { "false" },
            onclick: move |_| {
                let next = theme().toggled();
                tracing::debug!("theme: switching");
                theme.set(next);
                store_preference(next);
            },
            "{current.glyph()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_value_wins_over_os_hint() {
        let resolved = ThemePreference::resolve(
            Some(ThemePreference::Light),
            Some(ThemePreference::Dark),
        );
        assert_eq!(resolved, ThemePreference::Light);
    }

    #[test]
    fn os_hint_used_when_nothing_persisted() {
        let resolved = ThemePreference::resolve(None, Some(ThemePreference::Light));
        assert_eq!(resolved, ThemePreference::Light);
        let resolved = ThemePreference::resolve(None, Some(ThemePreference::Dark));
        assert_eq!(resolved, ThemePreference::Dark);
    }

    #[test]
    fn defaults_to_dark_without_any_signal() {
        assert_eq!(ThemePreference::resolve(None, None), ThemePreference::Dark);
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn storage_tokens_are_lowercase_words() {
        let light = serde_json::to_string(&ThemePreference::Light).unwrap();
        let dark = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(light, "\"light\"");
        assert_eq!(dark, "\"dark\"");
    }
}
