use leptos::prelude::*;

use crate::components::{
    Access, Booking, ExperienceMenu, Faq, Footer, Hero, LoadingScreen, Navbar, PromoPlan,
    RecommendedFor, WhyUs,
};
use crate::models::{self, SiteContent};

#[component]
pub fn HomePage() -> impl IntoView {
    match models::bundled() {
        Ok(content) => view! { <Landing content=content/> }.into_any(),
        Err(err) => {
            log::error!("site content failed to load: {err}");
            view! {
                <div class="content-error">
                    <h1>"We'll be right back"</h1>
                    <p>"The page could not be loaded. Please try again shortly."</p>
                </div>
            }
            .into_any()
        }
    }
}

/// Splash first, then the full page once the splash reports completion.
#[component]
fn Landing(content: &'static SiteContent) -> impl IntoView {
    provide_context(content.reveal);

    let (loading, set_loading) = signal(true);
    let on_complete = Callback::new(move |_: ()| set_loading.set(false));
    let today = models::kyoto_today();

    view! {
        <div class="landing">
            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! {
                        <LoadingScreen
                            brand=&content.brand
                            timing=content.splash
                            on_complete=on_complete
                        />
                    }
                }
            >
                <div class="page-shell fade-in">
                    <Navbar brand=&content.brand/>
                    <Hero brand=&content.brand hero=&content.hero/>
                    <ExperienceMenu experiences=content.experiences.as_slice()/>
                    {content
                        .active_promotions(today)
                        .into_iter()
                        .map(|promotion| view! { <PromoPlan promotion=promotion/> })
                        .collect_view()}
                    <WhyUs brand=&content.brand features=content.features.as_slice()/>
                    <RecommendedFor audiences=content.recommended_for.as_slice()/>
                    <Access access=&content.access/>
                    <Faq faqs=content.faqs.as_slice()/>
                    <Booking info=&content.booking options=content.booking_options(today)/>
                    <Footer brand=&content.brand links=&content.footer/>
                </div>
            </Show>
        </div>
    }
}
