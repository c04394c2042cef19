use clap::Parser;
use gameinfo_server::{args::Args, run, setup_logging};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    setup_logging();
    let args = Args::parse();

    match run(args.host).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server exited with error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
