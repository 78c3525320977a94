use std::{env, io, process};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::runner::SystemRunner;

mod driver;
mod runner;
mod toolchain;

fn main() {
    // Diagnostics go to stderr so the status messages own stdout.
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = env::args().collect::<Vec<String>>();
    let args = args.iter().map(|v| v.as_str()).collect::<Vec<_>>();

    let outcome = driver::run(&args, &mut SystemRunner);
    process::exit(outcome.exit_code());
}
