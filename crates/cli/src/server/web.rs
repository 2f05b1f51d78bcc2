use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware, Router,
};
use hostcache_api::{create_api_routes, domain_cache_control, AppState};
use hostcache_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;

/// Build the site router: `/api` plus static files from `static_dir`.
///
/// Static responses carry `public, max-age=<default_max_age>` unless the
/// file service already set a `Cache-Control`; the domain rule hook then
/// rewrites whatever is cacheable.
pub fn create_app(config: &ServerConfig, state: AppState) -> anyhow::Result<Router> {
    let default_cache_control =
        HeaderValue::from_str(&format!("public, max-age={}", config.default_max_age))?;

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            default_cache_control,
        ))
        .service(ServeDir::new(&config.static_dir));

    let annotate = state.annotate.clone();

    Ok(Router::new()
        .nest("/api", create_api_routes(state))
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(annotate, domain_cache_control))
        .layer(TraceLayer::new_for_http()))
}

pub async fn start_web_server(
    config: &ServerConfig,
    app: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.web_port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!(
        bind_address = %addr,
        static_dir = %config.static_dir,
        "Web server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Web server stopped");
    Ok(())
}
