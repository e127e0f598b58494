#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), samurai_experiences::config::ServerError> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use samurai_experiences::{
        config::{ServerConfig, ServerError},
        App,
    };
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;

    // Load env vars
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    config.init_tracing()?;

    // Parse the bundled content once up front
    if let Err(err) = samurai_experiences::models::bundled() {
        tracing::error!("bundled site content is invalid: {err}");
    }

    // Leptos config
    let conf = get_configuration(config.leptos_config_path.as_deref())
        .map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // Build router
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use samurai_experiences::App;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
