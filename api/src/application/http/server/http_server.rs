use std::sync::Arc;

use crate::application::http::food_search::router::food_search_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use mealbook_core::{application::create_service, domain::common::MealbookConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Value of `Access-Control-Allow-Headers` on every response.
pub const CORS_ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let mealbook_config: MealbookConfig = MealbookConfig::from(args.as_ref().clone());
    debug!("Upstream config: {:?}", mealbook_config.upstream);

    let service = create_service(mealbook_config)?;

    Ok(AppState::new(args, service))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}

///  Returns the [`Router`] of this application.
///
/// With metrics enabled this installs a process-wide Prometheus recorder, so it
/// can only be called once per process; a second call panics.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    // Pre-flight requests are answered here without reaching any handler.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    // CorsLayer only sends the allowed headers on pre-flight responses.
    let allow_headers = SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOWED_HEADERS),
    );

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(food_search_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback(not_found);

    if state.args.server.metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(trace_layer)
        .layer(cors)
        .layer(allow_headers)
        .with_state(state);
    Ok(router)
}
