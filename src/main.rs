use std::process::{self, ExitCode};

use clap::{CommandFactory, Parser};
use tracing::{debug, error, warn};

mod cli;
mod clock;
mod events;
mod logging;
mod probe;
mod target;
mod waiter;

use cli::Args;
use clock::SystemClock;
use events::TracingSink;
use probe::TcpProber;
use waiter::Waiter;


fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);

    let Some(input) = args.targets() else {
        if let Err(error) = Args::command().print_help() {
            error!(%error, "failed to print help");
        }
        return ExitCode::FAILURE;
    };

    let targets = match target::parse_targets(input) {
        Ok(targets) => targets,
        Err(error) => {
            error!(%error, "failed to parse targets");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = ctrlc::set_handler(|| {
        warn!("interrupted before all hosts became available");
        process::exit(1);
    }) {
        warn!(%error, "failed to install interrupt handler");
    }

    let mut waiter = Waiter::new(
        TcpProber::default(),
        SystemClock,
        TracingSink,
        args.wait_settings(),
    );

    let outcome = waiter.wait_for_all(&targets);
    for (target, status) in &outcome.statuses {
        debug!(host = %target.host, port = %target.port, %status, "final status");
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
