use leptos::prelude::*;

use crate::components::{ExternalLink, IconSvg, Reveal};
use crate::models::{Experience, Icon};

/// Stagger between neighbouring cards.
const CARD_STAGGER_MS: u32 = 200;

#[component]
pub fn ExperienceMenu(experiences: &'static [Experience]) -> impl IntoView {
    view! {
        <section id="menu" class="section section-menu">
            <div class="container">
                <Reveal>
                    <div class="section-heading center">
                        <h2 class="section-title">"Experience Menu"</h2>
                        <div class="rule"></div>
                        <p class="section-lead">
                            "Discover authentic Japanese traditions with professional guidance"
                        </p>
                    </div>
                </Reveal>

                <div class="card-grid two">
                    {experiences
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            let delay = CARD_STAGGER_MS * (i as u32 + 1);
                            view! {
                                <Reveal delay=delay>
                                    <ExperienceCard experience=exp/>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(experience: &'static Experience) -> impl IntoView {
    let accent = experience.accent.class();

    view! {
        <article class=format!("experience-card {accent}")>
            <div class="card-image">
                <img src=experience.image.as_str() alt=experience.image_alt.as_str()/>
            </div>
            <div class="card-body">
                <h3 class="card-title">{experience.title.as_str()}</h3>
                <p class="card-tagline">{experience.tagline.as_str()}</p>

                <ul class="check-list">
                    {experience
                        .highlights
                        .iter()
                        .map(|line| {
                            view! {
                                <li>
                                    <IconSvg icon=Icon::CheckCircle class="icon-sm"/>
                                    {line.as_str()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="card-meta">
                    <div class="card-duration">
                        <IconSvg icon=Icon::Clock class="icon-sm"/>
                        <span>{experience.duration.as_str()}</span>
                    </div>
                    <div class="card-price">
                        {experience.price.to_string()}
                        <span class="per-person">" / person"</span>
                    </div>
                </div>

                <ExternalLink href=experience.booking_url.as_str() class="btn btn-dark block">
                    {experience.reserve_label.as_str()}
                </ExternalLink>
            </div>
        </article>
    }
}
