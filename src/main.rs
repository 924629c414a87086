use std::io;

use clap::Parser;
use tracing::error;

use referral_desk_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use referral_desk_lib::cli::{self, Cli};
use rd_infra::DirsAppDirsAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = bootstrap::resolve_config(args.config.clone(), &DirsAppDirsAdapter::new())?;
    init_tracing_subscriber(Some(&config.log_dir), args.verbose)?;

    let runtime = bootstrap::build_runtime(&config).await.inspect_err(|err| {
        error!(error = %err, "failed to start");
    })?;

    let mut stdout = io::stdout().lock();
    cli::run(args.command, &runtime, &mut stdout).await
}
