use anyhow::Context;
use catalog_page::domain::ports::ConfigProvider;
use catalog_page::utils::{logger, validation::Validate};
use catalog_page::{
    CatalogPipeline, CliConfig, LocalStorage, PageError, PrismicClient, RenderEngine, SiteConfig,
};
use clap::Parser;
use std::process::ExitCode;

fn report_failure(e: &anyhow::Error) -> ExitCode {
    let Some(page_error) = e.downcast_ref::<PageError>() else {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        return ExitCode::FAILURE;
    };

    tracing::error!(
        "❌ {:#} (Category: {:?}, Severity: {:?})",
        e,
        page_error.category(),
        page_error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", page_error.recovery_suggestion());

    eprintln!("❌ {}", page_error.user_friendly_message());
    eprintln!("💡 {}", page_error.recovery_suggestion());

    ExitCode::from(exit_code(e))
}

/// Process exit status for a failed run; never 0.
fn exit_code(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<PageError>()
        .map(|page_error| page_error.severity().exit_code().max(1))
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}

fn display_config_summary(config: &SiteConfig) {
    println!("📋 Configuration");
    println!("   Endpoint:         {}", config.api_endpoint());
    println!("   Ref:              {}", config.ref_override().unwrap_or("master"));
    println!(
        "   Access token:     {}",
        if config.access_token().is_some() {
            "set"
        } else {
            "none"
        }
    );
    println!("   Page size:        {}", config.page_size());
    println!("   Timeout:          {}s", config.timeout_seconds());
    println!("   Output path:      {}", config.output_path());
    println!("   Include articles: {}", config.include_articles());
    println!("   Template:         {}", config.template_path().unwrap_or("built-in"));
    if !config.exports().is_empty() {
        println!("   Exports:          {}", config.exports().join(", "));
    }
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.resolve().context("Configuration failed")?;
    config.validate().context("Configuration failed")?;

    if cli.dry_run {
        tracing::info!("🔍 Dry run, nothing will be fetched");
        display_config_summary(&config);
        return Ok(());
    }

    let source = PrismicClient::new(&config).context("HTTP client setup failed")?;
    let storage = LocalStorage::new(config.output_path());
    let pipeline =
        CatalogPipeline::new(storage, source, config).context("Template loading failed")?;

    let engine = RenderEngine::new(pipeline);
    let output_path = engine.run().await.context("Page render failed")?;

    tracing::info!("✅ Page rendered successfully");
    println!("✅ Page rendered successfully!");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting catalog-page");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}
