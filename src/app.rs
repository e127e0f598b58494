use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/samurai-experiences.css"/>
        <Title text="Samurai Restaurant Kyoto - Sushi & Matcha Experiences"/>
        <Meta
            name="description"
            content="Make your own sushi and discover the art of matcha with a professional chef in Kyoto"
        />

        <Router>
            <main>
                <Routes fallback=|| view! { <h1 class="not-found">"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
