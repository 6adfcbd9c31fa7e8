use buildspec_runner::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the CLI and map the outcome to the process exit code
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
