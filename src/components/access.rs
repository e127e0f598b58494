use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::AccessInfo;

#[component]
pub fn Access(access: &'static AccessInfo) -> impl IntoView {
    view! {
        <section id="access" class="section section-muted anchored">
            <div class="container">
                <Reveal>
                    <h2 class="section-title center">"Access"</h2>
                    <p class="section-lead center">{access.note.as_str()}</p>
                </Reveal>

                <div class="access-card">
                    <div class="access-map">
                        <iframe
                            src=access.map_embed_url.as_str()
                            title="Map"
                            referrerpolicy="no-referrer-when-downgrade"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <div class="access-details">
                        <div>
                            <h3 class="text-gold">{access.venue.as_str()}</h3>
                            <p class="address">
                                {access
                                    .address_lines
                                    .iter()
                                    .map(|line| view! { {line.as_str()}<br/> })
                                    .collect_view()}
                            </p>
                        </div>
                        <div>
                            <h3>"Venue Info"</h3>
                            <p>{access.venue_info.as_str()}</p>
                            <img
                                class="access-exterior"
                                src=access.exterior_image.as_str()
                                alt=access.exterior_alt.as_str()
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
