//! Dexera runner - shows one creature for an optional version and prints the view as JSON.
//!
//! ```text
//! dexera <subject> [version]
//! ```

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dexera_engine::use_cases::{DexOutcome, DexRequest};
use dexera_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root, then the working directory.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dexera_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let subject = args.next().context("usage: dexera <subject> [version]")?;
    let version = args.next();

    let config = EngineConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting Dexera");
    let app = App::from_config(&config)
        .await
        .context("failed to open the resource cache")?;

    let mut request = DexRequest::new(subject);
    if let Some(version) = version {
        request = request.with_version(version);
    }
    let outcome = app.dex.show(request).await;

    let state = app.dex.current().await;
    println!("{}", serde_json::to_string_pretty(&state)?);

    if outcome == DexOutcome::Failed {
        std::process::exit(1);
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
