use anyhow::Context;
use clap::Parser;
use query_drills::config::toml_config::TomlConfig;
use query_drills::utils::{logger, render::ConsoleSink, validation::Validate};
use query_drills::{CliConfig, Dataset, DrillRunner, DRILLS};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting query-drills CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file {}", path))?;
        if let Err(e) = file.validate() {
            tracing::error!("❌ Config file validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        config.merge_toml(&file);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    if config.list {
        for (name, description) in DRILLS {
            println!("{:<24} {}", name, description);
        }
        return Ok(());
    }

    let dataset = match &config.dataset {
        Some(path) => Dataset::from_file(path)
            .with_context(|| format!("failed to load dataset from {}", path))?,
        None => Dataset::sample(),
    };
    tracing::info!(
        "Dataset loaded: {} customers, {} products, {} suppliers",
        dataset.customers.len(),
        dataset.products.len(),
        dataset.suppliers.len(),
    );

    let params = config.drill_params();
    let mut runner = DrillRunner::new(dataset, ConsoleSink::new(), params).with_json(config.json);

    let result = if config.drills.is_empty() {
        runner.run_all()
    } else {
        config.drills.iter().try_for_each(|name| runner.run(name))
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ All drills completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Drill run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
