use clap::Parser;
use support_triage::config::rules::RulesConfig;
use support_triage::core::sentiment::LexiconScorer;
use support_triage::utils::{logger, validation::Validate};
use support_triage::{CliConfig, LocalStorage, RunOutcome, TriageEngine, TriagePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting support-triage");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("ERROR: {}", e);
        std::process::exit(2);
    }

    let rules = RulesConfig::resolve(config.rules_file.as_deref()).and_then(|rules| {
        let rule_set = rules.rule_set()?;
        Ok((rule_set, rules.thresholds()))
    });
    let (rule_set, thresholds) = match rules {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Failed to load classification rules: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(2);
        }
    };

    let scorer = LexiconScorer::new();
    let storage = LocalStorage::new();
    let pipeline = TriagePipeline::new(storage, config, rule_set, thresholds, Box::new(scorer));
    let engine = TriageEngine::new(pipeline);

    match engine.run().await {
        Ok(RunOutcome::Completed { summary }) => {
            tracing::info!("Triage run completed: {}", summary);
        }
        Ok(RunOutcome::Empty) => {
            println!("No messages were processed.");
        }
        Err(e) => {
            tracing::error!("Triage run failed: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
