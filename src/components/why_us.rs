use leptos::prelude::*;

use crate::components::{IconSvg, Reveal};
use crate::models::{Brand, Feature};

const FEATURE_STAGGER_MS: u32 = 150;

#[component]
pub fn WhyUs(brand: &'static Brand, features: &'static [Feature]) -> impl IntoView {
    view! {
        <section class="section section-dark">
            <div class="container">
                <Reveal>
                    <div class="section-heading">
                        <h2 class="section-title light">"Why " {brand.name.as_str()} "?"</h2>
                        <div class="rule left"></div>
                    </div>
                </Reveal>

                <div class="card-grid four">
                    {features
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            let delay = FEATURE_STAGGER_MS * i as u32;
                            view! {
                                <Reveal delay=delay>
                                    <div class="feature-card">
                                        <div class="feature-icon">
                                            <IconSvg icon=feature.icon/>
                                        </div>
                                        <h3>{feature.title.as_str()}</h3>
                                        <p>{feature.description.as_str()}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
