use std::env;
use transit_sssp::web::server::{start_server_with_config, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [max_sessions]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = args
        .get(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(defaults.port);
    let max_sessions = args
        .get(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(defaults.max_sessions);

    let config = ServerConfig {
        port,
        max_sessions,
        ..defaults
    };

    println!("🔧 Starting Transit SSSP Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
