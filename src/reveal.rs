use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Visibility ratio that counts as "appeared" for sections and cards.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Ratio for the independent project-tile stagger pass.
pub const APPEAR_THRESHOLD: f64 = 0.25;

const STAGGER_STEP_MS: u32 = 120;

/// Per-element reveal lifecycle. The transition is one-way: once an element
/// has appeared it stays revealed no matter how often it scrolls back out of
/// view. Observer deregistration is layered on top of this flag, not the
/// other way around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RevealTracker {
    phase: RevealPhase,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Feeds one intersection event into the tracker. Returns true exactly
    /// once, on the first intersecting event; everything afterwards is
    /// ignored.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if intersecting && self.phase == RevealPhase::Pending {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }
}

/// Transition delay for the n-th project tile in the stagger pass.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

#[cfg(target_arch = "wasm32")]
pub(crate) struct ObserverHandle {
    pub observer: web_sys::IntersectionObserver,
    pub target: web_sys::Element,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// Wires an IntersectionObserver to a single element at the given threshold.
/// The handle keeps the callback closure alive; dropping it without
/// unobserving leaks the observation, so callers stash it and detach in
/// `use_drop`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn observe_element(
    target: web_sys::Element,
    threshold: f64,
    mut on_entry: impl FnMut(web_sys::IntersectionObserverEntry, &web_sys::IntersectionObserver) + 'static,
) -> Option<ObserverHandle> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let closure = Rc::new(Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entry = entries.get(0);
            if entry.is_null() || entry.is_undefined() {
                return;
            }
            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
            on_entry(entry, &observer);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        closure.as_ref().as_ref().unchecked_ref(),
        &options,
    ) else {
        return None;
    };
    observer.observe(&target);
    Some(ObserverHandle {
        observer,
        target,
        _closure: closure,
    })
}

#[derive(Clone, Copy)]
pub struct RevealHandle {
    revealed: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl RevealHandle {
    pub fn is_revealed(&self) -> bool {
        (self.revealed)()
    }

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

/// Fire-once reveal observation for the element the returned handle is
/// mounted on. The element starts pre-reveal; the first crossing past
/// `threshold` flips the handle's signal and detaches the observation.
pub fn use_reveal(threshold: f64) -> RevealHandle {
    let revealed = use_signal(|| false);
    let tracker = use_signal(RevealTracker::new);
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
        let mut revealed = revealed;
        let mut tracker = tracker;
        let handle = observe_element(element, threshold, move |entry, observer| {
            if tracker.write().on_intersection(entry.is_intersecting()) {
                tracing::debug!("reveal: element appeared");
                revealed.set(true);
                observer.unobserve(&entry.target());
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
    let _ = (threshold, tracker);

    RevealHandle {
        revealed,
        #[cfg(target_arch = "wasm32")]
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.is_revealed());
        assert!(tracker.on_intersection(true));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn non_intersecting_events_are_ignored_while_pending() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection(false));
        assert!(!tracker.is_revealed());
    }

    #[test]
    fn reveal_never_reverts() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.on_intersection(true));
        // Scroll out and back in: no second firing, no reset.
        assert!(!tracker.on_intersection(false));
        assert!(!tracker.on_intersection(true));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn stagger_grows_by_120ms_per_tile() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 120);
        assert_eq!(stagger_delay_ms(4), 480);
    }
}
