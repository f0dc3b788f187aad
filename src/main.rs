use clap::Parser;
use recall_etl::utils::{logger, validation::Validate};
use recall_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, RecallPipeline};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.debug);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli).await {
        Ok(output_path) => {
            tracing::info!("📁 Output saved to: {}", output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &CliConfig) -> Result<String, EtlError> {
    let config = cli.resolve()?;
    config.validate()?;

    let pipeline = RecallPipeline::new(LocalStorage::default(), config);
    EtlEngine::new(pipeline).run().await
}
