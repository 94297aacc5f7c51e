use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing::info;

use crate::{cli::Cli, config::Config, session::Session};

mod cli;
mod config;
mod errors;
mod logging;
mod session;

fn main() -> Result<ExitCode> {
    errors::init()?;
    logging::init()?;

    let args = Cli::parse();
    let config = Config::new()?;
    let capacity = args.capacity.unwrap_or(config.capacity);
    let format = args.format.unwrap_or(config.format);
    info!(capacity, %format, "starting");

    let mut session = Session::new(
        capacity,
        format,
        config.messages,
        BufWriter::new(io::stdout().lock()),
    );
    if args.absent {
        session.send(None)?;
    }
    for command in &args.commands {
        session.send(Some(command.as_bytes()))?;
    }
    if args.commands.is_empty() && !args.absent {
        session.feed(io::stdin().lock())?;
    }

    let calls = session.calls();
    let failures = session.failures();
    session.finish()?;
    info!(calls, failures, "done");

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
