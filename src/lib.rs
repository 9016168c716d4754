pub mod cli;
pub mod client;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use llm::CompletionProvider;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model);
    info!("Demo Mode: {}", args.demo_mode);
    if args.demo_mode {
        info!("Rate Limit: {} requests / {} ms (demo)", args.demo_rate_limit, args.rate_window_ms);
        info!("Demo Response Delay: {} ms", args.demo_delay_ms);
    } else {
        info!("Rate Limit: {} requests / {} ms", args.rate_limit, args.rate_window_ms);
    }
    info!("Provider Timeout: {} s", args.provider_timeout_secs);
    info!("-------------------------");

    let provider: Option<Arc<dyn CompletionProvider>> = if args.demo_mode {
        None
    } else {
        Some(llm::new_provider(&args)?)
    };

    let server = Server::new(args, provider);
    server.run().await
}
