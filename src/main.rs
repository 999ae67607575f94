use anyhow::Context;
use clap::Parser;
use example_library::utils::{logger, validation::Validate};
use example_library::{print_number, AppConfig, CliArgs, EXAMPLE_LIBRARY};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path),
        None => Ok(AppConfig::default()),
    };
    let config = match config.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(&config.logging, args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if args.describe {
        let json = serde_json::to_string_pretty(&EXAMPLE_LIBRARY)
            .context("failed to serialize module metadata")?;
        println!("{}", json);
        return Ok(());
    }

    let Some(number) = args.number else {
        anyhow::bail!("a number is required unless --describe is given");
    };

    if let Err(e) = print_number(number) {
        tracing::error!(
            "print_number failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
