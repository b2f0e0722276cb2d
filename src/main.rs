#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::portfolio::*;
    use portfolio_site::app::*;
    use portfolio_site::fileserv::file_and_error_handler;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None).await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to read leptos configuration");
        std::process::exit(1);
    });
    let leptos_options = conf.leptos_options;

    let port = std::env::var("PORT").ok();
    let addr = listen_addr(port.as_deref(), leptos_options.site_addr).unwrap_or_else(|err| {
        tracing::error!(port = ?port, error = %err, "PORT is not a valid port number");
        std::process::exit(1);
    });

    let config = ApiConfig::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "backend is not configured");
        std::process::exit(1);
    });
    tracing::info!(
        api_base = config.api_base(),
        timeout_secs = config.timeout().as_secs(),
        "using portfolio backend",
    );

    let client = PortfolioClient::new(config).unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to build http client");
        std::process::exit(1);
    });
    let client = Arc::new(client);

    let cloned_leptos_options = leptos_options.clone();
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || {
                provide_context(client.clone());
                provide_context(cloned_leptos_options.clone());
            },
            App,
        )
        .fallback(file_and_error_handler)
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("listening on http://{}", &addr);
    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %err, "server stopped");
        std::process::exit(1);
    }
}

/// `PORT` binds every interface; without it the configured site address is used.
#[cfg(feature = "ssr")]
fn listen_addr(
    port: Option<&str>,
    site_addr: std::net::SocketAddr,
) -> Result<std::net::SocketAddr, std::num::ParseIntError> {
    use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

    match port {
        Some(port) => {
            let port = port.trim().parse::<u16>()?;
            Ok(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)))
        }
        None => Ok(site_addr),
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point
}
