// src/main.rs

use vox_demucs::{cli, exit_code_for, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("vox-demucs error: {err:?}");
        std::process::exit(exit_code_for(&err));
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
