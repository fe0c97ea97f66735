use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tenant_directory::{TenantService, TenantServiceOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = TenantServiceOptions::parse();

    tracing::info!("Configuration: {:?}", opts);

    let service = TenantService::new(opts);
    service.run().await?;

    Ok(())
}
