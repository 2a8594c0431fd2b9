//! Headless simulation binary.
//!
//! Loads content from `CRAWLER_CONTENT_DIR`, lets the bot (or nobody) play
//! for `CRAWLER_TICKS` ticks and prints the run summary as JSON on stdout.
//! Logs go to stderr; filter them with `RUST_LOG`.
//!
//! ```bash
//! CRAWLER_SEED=7 RUST_LOG=crawler_core=debug cargo run -p crawler-runtime --bin crawler-sim
//! ```

use anyhow::{Context, Result};
use crawler_content::ContentFactory;
use crawler_runtime::{AutoAttackProvider, IdleProvider, Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    tracing::info!(
        content_dir = %config.content_dir.display(),
        seed = config.seed,
        ticks = ?config.ticks,
        auto_play = config.auto_play,
        "Starting crawler simulation"
    );

    let game = ContentFactory::new(&config.content_dir)
        .build_game(config.seed)
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    let builder = Runtime::builder().config(config.clone()).game(game);
    let builder = if config.auto_play {
        builder.provider(AutoAttackProvider)
    } else {
        builder.provider(IdleProvider)
    };
    let mut runtime = builder.build().await?;

    let summary = runtime.run().await?;
    runtime.shutdown().await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
