use std::process::ExitCode;

use agarthan_devtools::db::seed::run_seed;
use agarthan_devtools::seed::{config, datasets, SeedConfig};
use agarthan_devtools::{logging, EXIT_OK};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    logging::init();

    let matches = config::command(
        "seed-users-lite",
        "Seed user accounts into a database whose roles and departments already exist.",
    )
    .get_matches();

    let result = match SeedConfig::from_matches(&matches) {
        Ok(config) => run_seed(&config, &datasets::LITE).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
