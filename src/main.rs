use clap::Parser;
use visit_counter::config::Command;
use visit_counter::utils::{logger, validation::Validate};
use visit_counter::{
    CliConfig, Handler, JsonFileStore, LocalClock, ReadVisitCount, VisitError, WriteVisitRecord,
};

async fn run(config: &CliConfig, store_path: String) -> Result<String, VisitError> {
    let store = JsonFileStore::new(store_path);
    tracing::info!("📁 Using store: {}", store.path().display());

    let handler: Box<dyn Handler> = match config.command {
        Command::Count => Box::new(ReadVisitCount::new(store, LocalClock)),
        Command::Add { .. } => Box::new(WriteVisitRecord::new(store, LocalClock)),
    };

    let response = handler.handle(config.event()).await?;
    Ok(serde_json::to_string_pretty(&response)?)
}

fn fail(e: &VisitError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, file_config.log_level());
    tracing::debug!("CLI config: {:?}", config);

    let store_path = config.resolve_store_path(&file_config);

    match run(&config, store_path).await {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}
