use leptos::prelude::*;

use crate::components::{IconSvg, Reveal};
use crate::models::{Brand, HeroContent, Icon};

#[component]
pub fn Hero(brand: &'static Brand, hero: &'static HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=hero.background_image.as_str() alt=hero.background_alt.as_str()/>
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content">
                <Reveal delay=200>
                    <p class="hero-eyebrow">{hero.eyebrow.as_str()}</p>
                </Reveal>
                <Reveal delay=400>
                    <h1 class="hero-title">
                        {brand.name.as_str()}
                        <span class="hero-location">{brand.location.as_str()}</span>
                    </h1>
                </Reveal>
                <Reveal delay=600>
                    <p class="hero-lead">{hero.lead.as_str()}</p>
                </Reveal>
                <Reveal delay=800>
                    <div class="hero-actions">
                        <a href="#menu" class="btn btn-outline">"View Experiences"</a>
                        <a href="#booking" class="btn btn-gold">"Book Now"</a>
                    </div>
                    <div class="hero-venue">
                        <IconSvg icon=Icon::MapPin class="icon-sm"/>
                        <a href="#access">{hero.venue_label.as_str()}</a>
                    </div>
                </Reveal>
            </div>

            <div class="hero-scroll-hint">
                <IconSvg icon=Icon::ChevronDown/>
            </div>
        </section>
    }
}
