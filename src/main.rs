use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = check_gpu_env::cli::Cli::parse();
    match check_gpu_env::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
