use std::process::ExitCode;

use agarthan_devtools::reports::{self, PushConfig};
use agarthan_devtools::{logging, EXIT_FAILURE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    logging::init();

    let matches = reports::config::command().get_matches();
    let config = match PushConfig::from_matches(&matches, |name| std::env::var(name).ok()) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    let mut stdout = std::io::stdout();
    match reports::run_push(&config, &mut stdout).await {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
