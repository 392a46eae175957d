use std::process::ExitCode;

use agarthan_devtools::db::seed::run_seed;
use agarthan_devtools::seed::{config, datasets, SeedConfig};
use agarthan_devtools::{logging, EXIT_OK};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    logging::init();

    let matches = config::command(
        "seed-users",
        "Seed roles, departments, report categories and users directly into the database.",
    )
    .get_matches();

    let result = match SeedConfig::from_matches(&matches) {
        Ok(config) => run_seed(&config, &datasets::REFERENCE).await,
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
