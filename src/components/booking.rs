use leptos::prelude::*;

use crate::components::{ExternalLink, IconSvg, Reveal};
use crate::models::{BookingInfo, BookingOption, CardStyle, Icon};

#[component]
pub fn Booking(info: &'static BookingInfo, options: Vec<BookingOption<'static>>) -> impl IntoView {
    view! {
        <section id="booking" class="section section-dark anchored">
            <div class="container wide center">
                <Reveal>
                    <h2 class="booking-title">{info.heading.as_str()}</h2>
                    <p class="booking-cutoff">{info.cutoff_note.as_str()}</p>
                    <div class="booking-contact">
                        <IconSvg icon=Icon::Phone class="icon-sm"/>
                        {info.contact_note.as_str()}
                    </div>

                    <div class="card-grid three">
                        {options.into_iter().map(|option| view! { <BookingCard option=option/> }).collect_view()}
                    </div>

                    <div class="booking-tax">
                        <IconSvg icon=Icon::CheckCircle class="icon-sm text-green"/>
                        {info.tax_note.as_str()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn card_class(style: CardStyle) -> String {
    match style {
        CardStyle::Popular => "booking-card popular".to_string(),
        CardStyle::Standard(accent) => format!("booking-card {}", accent.class()),
        CardStyle::Premium => "booking-card premium".to_string(),
    }
}

#[component]
fn BookingCard(option: BookingOption<'static>) -> impl IntoView {
    let premium = option.style == CardStyle::Premium;

    view! {
        <div class=card_class(option.style)>
            {(option.style == CardStyle::Popular)
                .then(|| view! { <div class="booking-ribbon">"Popular"</div> })}
            {premium
                .then(|| {
                    view! {
                        <div class="booking-crest">
                            <IconSvg icon=Icon::Crown/>
                        </div>
                    }
                })}
            <h3 class="booking-card-title">{option.title}</h3>
            <p class="booking-card-summary">{option.summary}</p>
            <p class="booking-card-price">
                {option.price.to_string()}
                <span class="per-person">" / person"</span>
            </p>
            <ExternalLink href=option.url class="btn booking-cta">
                <IconSvg icon=option.icon class="icon-md"/>
                {option.label}
            </ExternalLink>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Accent;

    #[test]
    fn card_class_follows_style() {
        assert_eq!(card_class(CardStyle::Popular), "booking-card popular");
        assert_eq!(
            card_class(CardStyle::Standard(Accent::Matcha)),
            "booking-card accent-matcha"
        );
        assert_eq!(card_class(CardStyle::Premium), "booking-card premium");
    }
}
