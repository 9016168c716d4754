use crate::cli::Args;
use crate::models::insight::{ ConfigReply, ErrorBody, GenerateRequest };
use crate::server::gateway::{ GatewayError, InsightGateway };

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    response::{ IntoResponse, Response },
    http::{ HeaderMap, HeaderValue, StatusCode },
    Json,
};
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, warn, error };

pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<InsightGateway>,
    pub public_demo: bool,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/config", get(config_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    args: &Args,
    state: AppState
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = args.server_addr.parse::<SocketAddr>()?;
    let app = router(state);

    if args.enable_tls {
        match (&args.tls_cert_path, &args.tls_key_path) {
            (Some(cert_path), Some(key_path)) => {
                let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                    cert_path,
                    key_path
                ).await?;

                info!("Starting HTTPS API server on: https://{}", addr);
                axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
            }
            _ => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("Missing TLS certificate or key path".into());
            }
        }
    } else {
        info!("Starting HTTP API server on: http://{}", addr);
        let listener = tokio::net::TcpListener
            ::bind(addr).await
            .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

/// Resolve the rate-limit identifier from forwarding headers. Clients with no
/// forwarding header all land in the shared "unknown" bucket.
fn client_identifier(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    "unknown".to_string()
}

async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>
) -> Response {
    let client = client_identifier(&headers);

    match state.gateway.generate(&request, &client).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(err) => {
            let status = match &err {
                GatewayError::MissingFields => StatusCode::BAD_REQUEST,
                GatewayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                GatewayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };

            if let GatewayError::RateLimited { .. } = &err {
                warn!("Rate limit exceeded for client '{}'", client);
            }

            let mut response = (
                status,
                Json(ErrorBody { error: err.to_string() }),
            ).into_response();

            if let GatewayError::RateLimited { reset_at_ms } = err {
                if let Ok(value) = HeaderValue::from_str(&reset_at_ms.to_string()) {
                    response.headers_mut().insert(RATE_LIMIT_RESET_HEADER, value);
                }
            }

            response
        }
    }
}

async fn config_handler(State(state): State<AppState>) -> Json<ConfigReply> {
    Json(ConfigReply { demo: state.public_demo })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_wins_and_takes_the_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_identifier(&headers), "203.0.113.7");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_identifier(&headers), "198.51.100.2");
    }

    #[test]
    fn missing_headers_map_to_the_shared_bucket() {
        assert_eq!(client_identifier(&HeaderMap::new()), "unknown");
    }
}
