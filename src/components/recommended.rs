use leptos::prelude::*;

use crate::components::{IconSvg, Reveal};
use crate::models::Icon;

#[component]
pub fn RecommendedFor(audiences: &'static [String]) -> impl IntoView {
    view! {
        <section class="section section-light">
            <div class="container narrow">
                <Reveal>
                    <div class="recommended-panel">
                        <div class="recommended-circle"></div>
                        <h2 class="section-title center">"Recommended For"</h2>
                        <div class="recommended-grid">
                            {audiences
                                .iter()
                                .map(|text| {
                                    view! {
                                        <div class="recommended-item">
                                            <IconSvg icon=Icon::CheckCircle class="text-gold"/>
                                            <span>{text.as_str()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
