use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mock_server::Store;

/// In-memory todo service for local development of the board client.
#[derive(Debug, Parser)]
#[command(name = "mock-server", version)]
struct Args {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Start with the three demo todos.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    let store = if args.seed {
        Store::with_samples()
    } else {
        Store::default()
    };

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seeded = args.seed, "listening");
    mock_server::run_with(listener, store).await
}
