use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Descriptive fields copied from a project card when its dialog opens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub image_url: String,
    pub live_url: Option<String>,
    pub code_url: Option<String>,
}

/// Dialog visibility plus whatever was last shown. Closing keeps the payload
/// around; it is stale but harmless and gets replaced wholesale on the next
/// open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    open: bool,
    payload: Option<ProjectDetails>,
}

impl ModalState {
    pub fn show(&mut self, details: ProjectDetails) {
        self.payload = Some(details);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        self.payload.as_ref().map(|p| p.title.as_str()).unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.payload
            .as_ref()
            .map(|p| p.description.as_str())
            .unwrap_or("")
    }

    pub fn tech_line(&self) -> String {
        match self.payload.as_ref().map(|p| p.tech.as_str()) {
            Some(tech) if !tech.is_empty() => format!("Tech: {tech}"),
            _ => String::new(),
        }
    }

    pub fn image_url(&self) -> &str {
        self.payload
            .as_ref()
            .map(|p| p.image_url.as_str())
            .unwrap_or("")
    }

    pub fn live_href(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.live_url.as_deref())
            .unwrap_or("#")
    }

    pub fn code_href(&self) -> &str {
        self.payload
            .as_ref()
            .and_then(|p| p.code_url.as_deref())
            .unwrap_or("#")
    }
}

#[cfg(target_arch = "wasm32")]
struct KeyListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn ProjectModal() -> Element {
    let mut state = use_context::<Signal<ModalState>>();
    #[cfg(target_arch = "wasm32")]
    let mut content_ref = use_signal(|| None::<web_sys::HtmlElement>);
    #[cfg(target_arch = "wasm32")]
    let mut key_listener = use_signal(|| None::<KeyListener>);

    // Escape closes the dialog from anywhere on the page.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        if key_listener.read().is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let mut state = state;
        let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let open = state.read().is_open();
            if open && key_event.key() == "Escape" {
                tracing::debug!("modal: escape pressed");
                state.write().close();
            }
        }) as Box<dyn FnMut(_)>));
        let _ = document.add_event_listener_with_callback(
            "keydown",
            closure.as_ref().as_ref().unchecked_ref(),
        );
        key_listener.set(Some(KeyListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let key_listener = key_listener;
        use_drop(move || {
            let binding = key_listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                use wasm_bindgen::JsCast;
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    // Focus lands inside the dialog whenever it opens.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if !state.read().is_open() {
            return;
        }
        let Some(content) = content_ref.read().as_ref().cloned() else {
            return;
        };
        let _ = content.focus();
    });

    let modal = state();

    rsx! {
        div {
            id: "projectModal",
            class: "modal",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: if modal.is_open() { "false" } else { "true" },
            onclick: move |_| {
                tracing::debug!("modal: backdrop clicked");
                state.write().close();
            },
            div {
                class: "modal-content",
                tabindex: "-1",
                // Clicks inside the content bubble no further, so only true
                // backdrop clicks reach the close handler above.
                onclick: move |event| event.stop_propagation(),
                onmounted: move |_event| {
                    #[cfg(target_arch = "wasm32")]
                    {
                        use dioxus::web::WebEventExt;
                        use wasm_bindgen::JsCast;

                        let element = _event.data.as_ref().as_web_event();
                        if let Ok(node) = element.dyn_into::<web_sys::HtmlElement>() {
                            content_ref.set(Some(node));
                        }
                    }
                },
                button {
                    id: "modalClose",
                    r#type: "button",
                    class: "modal-close",
                    aria_label: "Close project details",
                    onclick: move |_| state.write().close(),
                    "✕"
                }
                img { id: "modalImg", src: "{modal.image_url()}", alt: "{modal.title()}" }
                h3 { id: "modalTitle", "{modal.title()}" }
                p { id: "modalDesc", "{modal.description()}" }
                p { id: "modalTech", class: "project-tech", "{modal.tech_line()}" }
                div { class: "modal-links",
                    a {
                        id: "modalLive",
                        href: "{modal.live_href()}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Live demo"
                    }
                    a {
                        id: "modalCode",
                        href: "{modal.code_href()}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Source code"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> ProjectDetails {
        ProjectDetails {
            title: "X".to_string(),
            description: "Y".to_string(),
            tech: "Rust, WASM".to_string(),
            image_url: "/assets/projects/x.webp".to_string(),
            live_url: Some("https://x.example".to_string()),
            code_url: None,
        }
    }

    #[test]
    fn show_replaces_payload_and_opens() {
        let mut state = ModalState::default();
        state.show(sample_details());
        assert!(state.is_open());
        assert_eq!(state.title(), "X");
        assert_eq!(state.description(), "Y");
        assert_eq!(state.tech_line(), "Tech: Rust, WASM");
    }

    #[test]
    fn close_keeps_the_payload() {
        let mut state = ModalState::default();
        state.show(sample_details());
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.title(), "X");
        assert_eq!(state.description(), "Y");
    }

    #[test]
    fn missing_fields_render_as_placeholders() {
        let mut state = ModalState::default();
        state.show(ProjectDetails::default());
        assert_eq!(state.title(), "");
        assert_eq!(state.tech_line(), "");
        assert_eq!(state.live_href(), "#");
        assert_eq!(state.code_href(), "#");
    }

    #[test]
    fn reopen_replaces_stale_payload_wholesale() {
        let mut state = ModalState::default();
        state.show(sample_details());
        state.close();
        state.show(ProjectDetails {
            title: "Z".to_string(),
            ..ProjectDetails::default()
        });
        assert!(state.is_open());
        assert_eq!(state.title(), "Z");
        assert_eq!(state.live_href(), "#");
    }

    #[test]
    fn empty_state_renders_blank_dialog() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.title(), "");
        assert_eq!(state.image_url(), "");
        assert_eq!(state.live_href(), "#");
    }
}
