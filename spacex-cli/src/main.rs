//! SpaceX CLI - prints the dashboard's chart figures as JSON.

mod cmd;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spacex-cli",
    version,
    about = "Inspect SpaceX launch dashboard figures"
)]
struct Cli {
    /// Launch records CSV (defaults to the bundled data set)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command, cli.data.as_deref())
}
