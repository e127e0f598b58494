use leptos::prelude::*;

use crate::components::{ExternalLink, IconSvg, Reveal};
use crate::models::{Icon, Promotion, PromotionGroup};

const RATING_STARS: usize = 5;

/// Dark feature section for one promotional plan.
#[component]
pub fn PromoPlan(promotion: &'static Promotion) -> impl IntoView {
    view! {
        <section id=format!("plan-{}", promotion.id) class="section section-promo">
            <div class="promo-glow top"></div>
            <div class="promo-glow left"></div>
            <div class="promo-glow right"></div>

            <div class="container">
                <Reveal>
                    <div class="section-heading center">
                        <span class="promo-badge">{promotion.badge.as_str()}</span>
                        <h2 class="section-title light">{promotion.title.as_str()}</h2>
                        <p class="promo-intro">{lines(&promotion.intro)}</p>
                    </div>
                </Reveal>

                <Reveal delay=200>
                    <div class="promo-card">
                        <div class="promo-banner">
                            <img src=promotion.image.as_str() alt=promotion.image_alt.as_str()/>
                            <div class="promo-banner-shade"></div>
                            <div class="promo-banner-copy">
                                <div class="stars">
                                    {(0..RATING_STARS)
                                        .map(|_| view! { <IconSvg icon=Icon::Star class="icon-sm filled"/> })
                                        .collect_view()}
                                </div>
                                <p class="promo-banner-title">{promotion.banner_title.as_str()}</p>
                                <p class="promo-banner-subtitle">{promotion.banner_subtitle.as_str()}</p>
                            </div>
                        </div>

                        <div class="promo-body">
                            <h3 class="promo-included">
                                <IconSvg icon=Icon::Crown/>
                                "What's Included"
                            </h3>
                            <div class="promo-groups">
                                {promotion.groups.iter().map(group).collect_view()}
                            </div>

                            <div class="promo-footer">
                                <div>
                                    <p class="promo-price-label">"Package Price"</p>
                                    <p class="promo-price">
                                        {promotion.price.to_string()}
                                        <span class="per-person">" / person"</span>
                                    </p>
                                </div>
                                <ExternalLink href=promotion.booking_url.as_str() class="btn btn-gold">
                                    {promotion.booking_label.as_str()}
                                </ExternalLink>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn group(group: &'static PromotionGroup) -> impl IntoView {
    view! {
        <div class="promo-group">
            <h4><span class="dot"></span>{group.heading.as_str()}</h4>
            {(!group.body.is_empty())
                .then(|| view! { <p class="promo-group-body">{lines(&group.body)}</p> })}
            {(!group.items.is_empty()).then(|| {
                view! {
                    <ul class="promo-items">
                        {group
                            .items
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <IconSvg icon=Icon::Utensils class="icon-sm"/>
                                        {item.as_str()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            })}
        </div>
    }
}

/// Text lines separated by hard breaks.
fn lines(lines: &'static [String]) -> impl IntoView {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {(i > 0).then(|| view! { <br/> })}
                {line.as_str()}
            }
        })
        .collect_view()
}
