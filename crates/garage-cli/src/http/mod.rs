//! JSON HTTP API over the garage service.
//!
//! Routes mirror the CLI subcommands:
//!
//! | Method | Path | Handler |
//! |:-------|:-----|:--------|
//! | GET | `/` | welcome message |
//! | GET, POST | `/garages` | list (`?city=`), create |
//! | GET | `/garages/dailyAvailabilityReport` | daily availability |
//! | GET, PUT, DELETE | `/garages/{garage_id}` | show, replace, delete |
//! | GET, POST | `/cars` | list, create |
//! | GET, PUT, DELETE | `/cars/{car_id}` | show, replace, delete |
//! | GET, POST | `/maintenance` | list, create |
//! | GET | `/maintenance/monthlyRequestsReport` | monthly requests |
//! | GET, PUT, DELETE | `/maintenance/{maintenance_id}` | show, replace, delete |

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use garage_core::GarageService;
use log::{debug, info};
use tower_http::cors::{AllowOrigin, CorsLayer};

mod errors;
mod handlers;


/// Settings for `garage serve`.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind: SocketAddr,
    pub cors_origins: Vec<String>,
}

/// Builds the application router without CORS.
pub fn router(service: GarageService) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/garages",
            get(handlers::list_garages).post(handlers::create_garage),
        )
        .route(
            "/garages/dailyAvailabilityReport",
            get(handlers::daily_availability_report),
        )
        .route(
            "/garages/{garage_id}",
            get(handlers::get_garage)
                .put(handlers::update_garage)
                .delete(handlers::delete_garage),
        )
        .route("/cars", get(handlers::list_cars).post(handlers::create_car))
        .route(
            "/cars/{car_id}",
            get(handlers::get_car)
                .put(handlers::update_car)
                .delete(handlers::delete_car),
        )
        .route(
            "/maintenance",
            get(handlers::list_maintenances).post(handlers::create_maintenance),
        )
        .route(
            "/maintenance/monthlyRequestsReport",
            get(handlers::monthly_requests_report),
        )
        .route(
            "/maintenance/{maintenance_id}",
            get(handlers::get_maintenance)
                .put(handlers::update_maintenance)
                .delete(handlers::delete_maintenance),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(service)
}

/// CORS policy allowing credentialed requests from the given origins.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    debug!("{method} {uri} -> {}", response.status());
    response
}

/// Serves the API until SIGINT or SIGTERM.
pub async fn serve(service: GarageService, config: ServeConfig) -> Result<()> {
    let app = router(service).layer(cors_layer(&config.cors_origins)?);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
