use content::{Notifications, ThemePreference};
use dioxus::prelude::*;

use ui::{load_site_config, load_theme_from_storage, ThemeSignal};
use views::{
    AdminLayout, AdminProjects, AdminServices, AdminSettings, AdminTestimonials, Dashboard, Home,
    NotFound,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[layout(AdminLayout)]
        #[route("/admin")]
        Dashboard {},
        #[route("/admin/testimonials")]
        AdminTestimonials {},
        #[route("/admin/projects")]
        AdminProjects {},
        #[route("/admin/services")]
        AdminServices {},
        #[route("/admin/settings")]
        AdminSettings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower::ServiceBuilder;
    use tower_http::compression::CompressionLayer;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dx may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // The site renders without a database; testimonials fall back client-side.
    match api::db::get_pool().await {
        Ok(pool) => {
            if let Err(e) = api::db::migrate(pool).await {
                tracing::error!("Failed to run migrations: {}", e);
            }
        }
        Err(e) => tracing::warn!("Database unavailable, serving without testimonials: {}", e),
    }

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        );

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server stopped: {}", e);
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_site_config);
    let mut theme: ThemeSignal =
        use_context_provider(|| Signal::new(ThemePreference::default()));
    use_context_provider(|| Signal::new(Notifications::seeded()));

    // Local storage only exists after hydration.
    use_effect(move || load_theme_from_storage(&mut theme));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: ui::BASE_CSS }
        document::Stylesheet { href: MAIN_CSS }

        Router::<Route> {}
    }
}
