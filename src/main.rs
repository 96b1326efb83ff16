use anyhow::Context;
use clap::Parser;
use gml_demo::utils::{logger, validation::Validate};
use gml_demo::{CliConfig, ShowcaseRunner, ShowcaseScript, SystemBrowser, TokioPauser};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let script = ShowcaseScript::embedded().context("Failed to load built-in showcase script")?;
    script
        .validate()
        .context("Built-in showcase script is invalid")?;

    let runner = ShowcaseRunner::new(script, SystemBrowser, TokioPauser);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = runner.run(&mut out).await {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
