use anyhow::Result;
use clap::Parser;
use sky_backdrop::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // tracing stays silent unless the caller opts in; stderr keeps the
    // alternate screen clean
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    sky_backdrop::run(cli).await
}
