use leptos::prelude::*;

use crate::components::IconSvg;
use crate::models::{Brand, Icon};

#[cfg(any(feature = "hydrate", test))]
const SCROLLED_AFTER_PX: f64 = 50.0;

/// Whether the bar should switch to its solid, compact style.
#[cfg(any(feature = "hydrate", test))]
fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLLED_AFTER_PX
}

#[component]
pub fn Navbar(brand: &'static Brand) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or(0.0);
            set_scrolled.set(is_scrolled(offset));
        });
        on_cleanup(move || listener.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    let (first, rest) = brand.name_parts();

    view! {
        <nav class="main-nav" class:scrolled=move || scrolled.get()>
            <div class="container nav-inner">
                <div class="nav-brand">
                    {first}" "<span class="text-gold">{rest}</span>
                </div>
                <a href="#booking" class="nav-book" aria-label="Book Now">
                    <IconSvg icon=Icon::Calendar class="icon-sm"/>
                </a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_style_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
