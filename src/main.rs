use clap::Parser;
use contas::application::engine::{EngineConfig, LedgerEngine};
use contas::application::statement::StatementAssembler;
use contas::infrastructure::in_memory::InMemoryAccounts;
use contas::infrastructure::registry::AccountRegistry;
use contas::interfaces::http::{self, AppState};
use miette::{IntoDiagnostic, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address the HTTP gateway listens on
    #[arg(long, env = "CONTAS_LISTEN", default_value = "0.0.0.0:9999")]
    listen: SocketAddr,

    /// How long a request may wait for an account's lock, in milliseconds
    #[arg(long, env = "CONTAS_LOCK_TIMEOUT_MS", default_value_t = 5000)]
    lock_timeout_ms: u64,

    /// How many times lock acquisition is retried before giving up
    #[arg(long, env = "CONTAS_LOCK_RETRIES", default_value_t = 2)]
    lock_retries: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contas=info".into()),
        )
        .init();

    let registry = Arc::new(AccountRegistry::provisioned());
    let accounts = Arc::new(InMemoryAccounts::provision(&registry));
    let config = EngineConfig {
        lock_timeout: Duration::from_millis(cli.lock_timeout_ms),
        lock_retries: cli.lock_retries,
    };

    let state = AppState {
        registry: registry.clone(),
        ledger: Arc::new(LedgerEngine::with_config(accounts.clone(), config)),
        statements: Arc::new(StatementAssembler::with_config(accounts, config)),
    };
    let app = http::router(state);

    tracing::info!(listen = %cli.listen, accounts = registry.len(), "starting ledger gateway");

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
