use leptos::html;
use leptos::prelude::*;

use crate::lifecycle::{RevealEntry, RevealOptions};

/// Fades its children in the first time they scroll into view.
///
/// `delay` only staggers the CSS transition; detection happens as soon as the
/// block qualifies. Thresholds come from the `RevealOptions` in context.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let options = use_context::<RevealOptions>().unwrap_or_default();
    let node = NodeRef::<html::Div>::new();
    let entry = StoredValue::new(RevealEntry::new(delay));
    let visible = RwSignal::new(false);
    let transition_delay = entry.with_value(|e| e.transition_delay());

    #[cfg(feature = "hydrate")]
    watch_viewport(node, entry, visible, options);
    #[cfg(not(feature = "hydrate"))]
    let _ = options;

    view! {
        <div
            node_ref=node
            class=format!("scroll-reveal {class}")
            class:visible=move || visible.get()
            style=format!("transition-delay: {transition_delay}")
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn watch_viewport(
    node: NodeRef<html::Div>,
    entry: StoredValue<RevealEntry>,
    visible: RwSignal<bool>,
    options: RevealOptions,
) {
    use crate::lifecycle::RevealAction;
    use viewport::ViewportWatch;

    let watch = StoredValue::new_local(None::<ViewportWatch>);

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        if watch.with_value(Option::is_some) || !entry.with_value(RevealEntry::is_watching) {
            return;
        }

        let on_sample = move |sample| {
            let action = entry
                .try_update_value(|e| e.observe(sample, &options))
                .unwrap_or(RevealAction::Ignore);
            if action == RevealAction::Reveal {
                visible.try_set(true);
            }
            action == RevealAction::Reveal
        };

        match ViewportWatch::observe(&el, &options, on_sample) {
            Ok(w) => watch.set_value(Some(w)),
            Err(err) => {
                log::warn!("intersection observer unavailable, revealing immediately: {err:?}");
                if entry.try_update_value(RevealEntry::force_reveal) == Some(RevealAction::Reveal) {
                    visible.set(true);
                }
            }
        }
    });

    on_cleanup(move || {
        if entry.try_update_value(RevealEntry::teardown) == Some(true) {
            log::trace!("released viewport watch of an unrevealed block");
        }
        // Dropping the guard disconnects the observer.
        drop(watch.try_update_value(Option::take));
    });
}

#[cfg(feature = "hydrate")]
mod viewport {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::lifecycle::{IntersectionSample, RevealOptions};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// A live `IntersectionObserver` on one element. Disconnects on drop.
    pub struct ViewportWatch {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl ViewportWatch {
        /// `on_sample` returns true once it is done with the target, which
        /// is then unobserved.
        pub fn observe(
            target: &Element,
            options: &RevealOptions,
            mut on_sample: impl FnMut(IntersectionSample) -> bool + 'static,
        ) -> Result<Self, JsValue> {
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let sample = IntersectionSample {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        };
                        if on_sample(sample) {
                            observer.unobserve(&entry.target());
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold()));
            init.set_root_margin(&options.root_margin());

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(target);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for ViewportWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
