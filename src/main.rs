use anyhow::Context;
use clap::Parser;
use roster::utils::{logger, validation::Validate};
use roster::{
    print_report, CliConfig, JsonPrinter, LinePrinter, OutputFormat, RosterConfig, RosterError,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting roster CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證名冊種子檔
    let seed = match RosterConfig::from_file(&config.config) {
        Ok(seed) => seed,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = seed.validate() {
        tracing::error!("Seed validation failed: {}", e);
        exit_with(&e);
    }

    let roster = match seed.build_roster() {
        Ok(roster) => roster,
        Err(e) => exit_with(&e),
    };

    let stdout = std::io::stdout();
    let result = match config.format {
        OutputFormat::Line => print_report(
            &roster,
            config.student,
            config.averages,
            &mut LinePrinter::new(stdout.lock()),
        ),
        OutputFormat::Json => print_report(
            &roster,
            config.student,
            config.averages,
            &mut JsonPrinter::new(stdout.lock()),
        ),
    };
    if let Err(e) = result {
        tracing::error!("Printing failed: {} (Category: {:?})", e, e.category());
        exit_with(&e);
    }

    roster.destroy();
    std::io::stdout().flush().context("flushing stdout")?;
    Ok(())
}

fn exit_with(e: &RosterError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
