use allio::commands::Cli;
use anyhow::Result;

fn main() -> Result<()> {
    // Message macros route through tracing when RUST_LOG is set, so the
    // subscriber only exists in that mode.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu()
}
