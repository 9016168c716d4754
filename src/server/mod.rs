pub mod api;
pub mod demo;
pub mod gateway;
pub mod limiter;

use crate::cli::Args;
use crate::llm::CompletionProvider;
use crate::server::api::AppState;
use crate::server::gateway::InsightGateway;
use crate::server::limiter::FixedWindowLimiter;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    args: Args,
    state: AppState,
}

impl Server {
    pub fn new(args: Args, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        let limit = if args.demo_mode { args.demo_rate_limit } else { args.rate_limit };
        let limiter = FixedWindowLimiter::new(limit, args.rate_window_ms);

        let gateway = InsightGateway::new(
            limiter,
            provider,
            args.chat_model.clone(),
            args.demo_mode,
            Duration::from_millis(args.demo_delay_ms)
        );

        let state = AppState {
            gateway: Arc::new(gateway),
            public_demo: args.public_demo_mode,
        };

        Self { args, state }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(&self.args, self.state.clone()).await
    }
}
