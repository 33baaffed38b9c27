mod app;
mod cli;
mod cli_cmds;
mod logging;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
