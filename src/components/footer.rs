use leptos::prelude::*;

use crate::components::ExternalLink;
use crate::models::{kyoto_year, Brand, FooterLinks};

#[component]
pub fn Footer(brand: &'static Brand, links: &'static FooterLinks) -> impl IntoView {
    let year = kyoto_year();

    view! {
        <footer class="site-footer">
            <div class="container center">
                <h4 class="footer-brand">{brand.name.as_str()}</h4>
                <div class="footer-links">
                    <ExternalLink href=links.instagram_url.as_str()>"Instagram"</ExternalLink>
                    <ExternalLink href=links.contact_url.as_str()>"Contact"</ExternalLink>
                </div>
                <p class="footer-copyright">
                    {format!("© {year} {}-{}. All rights reserved.", brand.name, brand.location)}
                </p>
            </div>
        </footer>
    }
}
