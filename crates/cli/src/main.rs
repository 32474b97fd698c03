use std::env;
use std::io::stdout;
use std::process::ExitCode;

use log::{debug, error};

use kde1d_cli::{describe_error, run};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    debug!("Arguments: {args:?}");

    match run(&args, &mut stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_usage_error() {
                error!("Failed to report settings: {e}");
            }
            eprintln!("{}", describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
