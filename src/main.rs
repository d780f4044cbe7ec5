use anyhow::Context;
use clap::Parser;
use ses_suppress::config::aws::build_suppression_api;
use ses_suppress::utils::{error, logger};
use ses_suppress::{
    CliConfig, CommandOutcome, LineConfirmation, RetryPolicy, SuppressionEngine, TomlConfig,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ses-suppress");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(err) = run(&config).await {
        let exit_code = error::report(&err, &mut std::io::stdout(), &mut std::io::stderr());
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let policy = match &config.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?
            .retry_policy(),
        None => RetryPolicy::default(),
    };
    tracing::debug!("Delete retry policy: {:?}", policy);

    // 在任何 API 呼叫之前先確認 region
    let api = build_suppression_api().await?;
    let engine = SuppressionEngine::with_policy(api, policy);

    let mut confirmation = LineConfirmation::stdin();
    let mut out = std::io::stdout();

    match engine
        .run(&config.command, &mut confirmation, &mut out)
        .await?
    {
        CommandOutcome::Listed { count } => tracing::info!("✅ Listed {} destinations", count),
        CommandOutcome::Summarized(summary) => {
            tracing::info!("✅ Summarized {} destinations", summary.total)
        }
        CommandOutcome::Deleted(report) => tracing::info!(
            "✅ Deleted suppressed destinations: {}/{}",
            report.processed,
            report.total
        ),
    }

    Ok(())
}
