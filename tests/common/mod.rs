#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use swot_explorer::llm::CompletionProvider;
use swot_explorer::models::insight::{ BusinessObjective, Product, Segment };
use swot_explorer::server::api::{ router, AppState };
use swot_explorer::server::gateway::InsightGateway;
use swot_explorer::server::limiter::FixedWindowLimiter;

pub fn setup_logger(level: &str) {
    let _ = env_logger::Builder
        ::from_env(env_logger::Env::default().default_filter_or(level))
        .is_test(true)
        .try_init();
}

pub struct GatewayOptions {
    pub limit: u32,
    pub window_ms: i64,
    pub demo_mode: bool,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            window_ms: 60_000,
            demo_mode: false,
        }
    }
}

pub fn build_gateway(
    provider: Option<Arc<dyn CompletionProvider>>,
    options: GatewayOptions
) -> InsightGateway {
    InsightGateway::new(
        FixedWindowLimiter::new(options.limit, options.window_ms),
        provider,
        "gpt-4o-mini".to_string(),
        options.demo_mode,
        Duration::ZERO
    )
}

pub async fn spawn_app(gateway: InsightGateway, public_demo: bool) -> SocketAddr {
    let state = AppState {
        gateway: Arc::new(gateway),
        public_demo,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(state).into_make_service()).await.unwrap();
    });

    addr
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn objective(id: &str, name: &str) -> BusinessObjective {
    BusinessObjective {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn segment(id: &str, name: &str) -> Segment {
    Segment {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}
