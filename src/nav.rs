use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

use crate::config::SiteConfig;
#[cfg(target_arch = "wasm32")]
use crate::reveal::{observe_element, ObserverHandle};
use crate::theme::ThemeToggle;

/// Widest viewport at which the collapsible mobile menu is in effect.
pub const NAV_BREAKPOINT_PX: f64 = 920.0;

/// Visibility ratio a section must reach to be considered in focus.
pub const ACTIVE_SECTION_RATIO: f64 = 0.45;

pub struct SectionLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub static SECTIONS: [SectionLink; 5] = [
    SectionLink { id: "home", label: "Home" },
    SectionLink { id: "about", label: "About" },
    SectionLink { id: "skills", label: "Skills" },
    SectionLink { id: "projects", label: "Projects" },
    SectionLink { id: "contact", label: "Contact" },
];

/// Menu visibility plus the single section currently highlighted in the nav.
///
/// `visible` and `expanded` travel together for user-initiated changes, but a
/// resize to desktop width shows the bar without announcing an expanded menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub visible: bool,
    pub expanded: bool,
    pub active_section: Option<&'static str>,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.expanded = self.visible;
    }

    /// Link activation collapses the menu only on narrow viewports; desktop
    /// clicks leave the always-visible bar alone.
    pub fn collapse_on_navigate(&mut self, viewport_width: f64) {
        if viewport_width <= NAV_BREAKPOINT_PX {
            self.visible = false;
            self.expanded = false;
        }
    }

    pub fn apply_resize(&mut self, viewport_width: f64) {
        if viewport_width > NAV_BREAKPOINT_PX {
            self.visible = true;
            self.expanded = false;
        } else {
            self.visible = false;
        }
    }

    pub fn set_active(&mut self, id: &'static str) {
        self.active_section = Some(id);
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == Some(id)
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_width() -> Option<f64> {
    None
}

/// Rewrites the address fragment without creating a history entry.
#[cfg(target_arch = "wasm32")]
fn replace_fragment(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
}

#[derive(Clone, Copy)]
pub struct ActiveSectionHandle {
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl ActiveSectionHandle {
    pub fn on_mounted(&self, event: &MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            use dioxus::web::WebEventExt;
            use wasm_bindgen::JsCast;

            let element = event.data.as_ref().as_web_event();
            if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                let mut target = self.target;
                target.set(Some(node));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = event;
    }
}

/// Watches a section at the 45% ratio and marks it active on every
/// intersecting crossing. Simultaneous crossings resolve to whichever event
/// the environment delivers last.
pub fn use_active_section(id: &'static str) -> ActiveSectionHandle {
    let nav = use_context::<Signal<NavState>>();
    #[cfg(target_arch = "wasm32")]
    let target = use_signal(|| None::<web_sys::Element>);
    #[cfg(target_arch = "wasm32")]
    let mut observer_handle = use_signal(|| None::<ObserverHandle>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(element) = target.read().as_ref().cloned() else {
            return;
        };
        if observer_handle.read().is_some() {
            return;
        }
        let mut nav = nav;
        let handle = observe_element(element, ACTIVE_SECTION_RATIO, move |entry, _observer| {
            if entry.is_intersecting() {
                tracing::debug!("nav: section {id} in focus");
                nav.write().set_active(id);
                replace_fragment(id);
            }
        });
        observer_handle.set(handle);
    });

    #[cfg(target_arch = "wasm32")]
    {
        let observer_handle = observer_handle;
        use_drop(move || {
            if let Some(handle) = observer_handle.read().as_ref() {
                handle.observer.unobserve(&handle.target);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, nav);

    ActiveSectionHandle {
        #[cfg(target_arch = "wasm32")]
        target,
    }
}

#[cfg(target_arch = "wasm32")]
struct ResizeListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<SiteConfig>();
    let mut nav = use_context::<Signal<NavState>>();
    #[cfg(target_arch = "wasm32")]
    let mut resize_listener = use_signal(|| None::<ResizeListener>);
    #[cfg(not(target_arch = "wasm32"))]
    let _resize_listener = ();

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        if resize_listener.read().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        tracing::debug!("nav: attach resize listener");
        let mut nav = nav;
        if let Some(width) = viewport_width() {
            nav.write().apply_resize(width);
        }
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(width) = viewport_width() {
                nav.write().apply_resize(width);
            }
        }) as Box<dyn FnMut(_)>));
        let _ = window.add_event_listener_with_callback(
            "resize",
            closure.as_ref().as_ref().unchecked_ref(),
        );
        resize_listener.set(Some(ResizeListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let resize_listener = resize_listener;
        use_drop(move || {
            let binding = resize_listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                use wasm_bindgen::JsCast;
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    let state = nav();

    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "#home", "{config.owner_name}" }
            nav { class: "nav", aria_label: "Primary",
                button {
                    id: "navToggle",
                    r#type: "button",
                    class: "nav-toggle",
                    aria_label: "Toggle navigation menu",
                    aria_expanded: if state.expanded { "true" } else { "false" },
                    onclick: move |_| {
                        tracing::debug!("nav: menu toggled");
                        nav.write().toggle();
                    },
                    "☰"
                }
                ul {
                    id: "primaryNav",
                    class: "nav-links",
                    "data-visible": if state.visible { "true" } else { "false" },
                    for link in SECTIONS.iter() {
                        li { key: "{link.id}",
                            a {
                                class: if state.is_active(link.id) { "nav-link active" } else { "nav-link" },
                                href: "#{link.id}",
                                onclick: move |_| {
                                    if let Some(width) = viewport_width() {
                                        nav.write().collapse_on_navigate(width);
                                    }
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
                ThemeToggle {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility_and_expanded_together() {
        let mut state = NavState::default();
        state.toggle();
        assert!(state.visible);
        assert!(state.expanded);
        state.toggle();
        assert!(!state.visible);
        assert!(!state.expanded);
    }

    #[test]
    fn link_click_collapses_only_narrow_viewports() {
        let mut state = NavState { visible: true, expanded: true, active_section: None };
        state.collapse_on_navigate(800.0);
        assert!(!state.visible);
        assert!(!state.expanded);

        let mut state = NavState { visible: true, expanded: true, active_section: None };
        state.collapse_on_navigate(1200.0);
        assert!(state.visible);
    }

    #[test]
    fn breakpoint_is_inclusive_on_the_narrow_side() {
        let mut state = NavState { visible: true, expanded: true, active_section: None };
        state.collapse_on_navigate(NAV_BREAKPOINT_PX);
        assert!(!state.visible);
    }

    #[test]
    fn resize_to_desktop_forces_bar_open_and_unexpanded() {
        for prior in [NavState::default(), NavState { visible: true, expanded: true, active_section: None }] {
            let mut state = prior;
            state.apply_resize(921.0);
            assert!(state.visible);
            assert!(!state.expanded);
        }
    }

    #[test]
    fn resize_to_narrow_hides_menu() {
        let mut state = NavState { visible: true, expanded: false, active_section: None };
        state.apply_resize(800.0);
        assert!(!state.visible);
    }

    #[test]
    fn exactly_one_section_is_active() {
        let mut state = NavState::default();
        state.set_active("about");
        assert!(state.is_active("about"));
        state.set_active("skills");
        assert!(state.is_active("skills"));
        assert!(!state.is_active("about"));
    }

    #[test]
    fn last_crossing_in_a_batch_wins() {
        let mut state = NavState::default();
        for id in ["about", "skills", "projects"] {
            state.set_active(id);
        }
        assert_eq!(state.active_section, Some("projects"));
    }
}
