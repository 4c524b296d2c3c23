use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tail::{Settings, Tail};

mod cli;
mod logger;
mod tail;
mod timestamp_mode;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initiate logger
    let level = logger::level_from_verbosity(cli.debug);
    logger::setup(cli.log.as_deref(), level)?;

    // Initiate the window
    let mut tail = Tail::new(Settings {
        ttl: cli.ttl,
        since: cli.since,
        timestamp: cli.timestamp,
        show: cli.show,
    })?;

    // Count events until the input is exhausted
    let input = utils::fs::open_input(cli.input.as_deref()).with_context(|| {
        format!(
            "Failed to open input {}",
            cli.input.as_deref().unwrap_or("<stdin>")
        )
    })?;
    let stdout = std::io::stdout();
    tail.run(input, &mut stdout.lock())?;

    Ok(())
}
