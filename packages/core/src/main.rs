use std::io;

use clap::Parser;
use dotenvy::dotenv;

use news_reports::cli::Cli;
use news_reports::config::Config;
use news_reports::error::AppError;
use news_reports::executor::QueryExecutor;
use news_reports::logging::init_logging;
use news_reports::report::{run_reports, run_reports_json};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()
        .and_then(|config| config.with_cli(&cli))
        .map_err(AppError::Config)
        .unwrap_or_else(|err| fail(err));

    tracing::info!("Generating reports with config: {:?}", config);

    let executor = QueryExecutor::new(config.database.clone());
    let mut stdout = io::stdout();

    let result = if cli.json {
        run_reports_json(&executor, &config, &mut stdout).await
    } else {
        run_reports(&executor, &config, &mut stdout).await
    };

    if let Err(err) = result {
        fail(err);
    }
}

fn fail(err: AppError) -> ! {
    tracing::error!("{}", err);
    let _ = err.write_diagnostic(&mut io::stderr());
    std::process::exit(1);
}
