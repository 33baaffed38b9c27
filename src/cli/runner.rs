use anyhow::Result;
use clap::Parser;

use super::{Cli, Commands};
use crate::app::{self, SourceRequest};
use crate::cli_cmds::*;
use crate::logging::{self, LogTarget};

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = if cli.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    logging::init_tracing(target);

    let config = app::Config::load_from(cli.config.as_deref())?;
    let request = SourceRequest {
        dir: cli.dir,
        manifest: cli.manifest,
        gallery: cli.gallery,
    };
    let galleries = app::load_galleries(&config, &request)?;

    match cli.command {
        Some(Commands::Tags) => {
            cmd_tags(&first(galleries)?);
        }
        Some(Commands::List { tag, json }) => {
            cmd_list(&first(galleries)?, tag.as_deref(), json)?;
        }
        Some(Commands::Replay { events, json }) => {
            cmd_replay(first(galleries)?, &events, json)?;
        }
        None => {
            app::run_tui(config, galleries)?;
        }
    }

    Ok(())
}

/// Subcommands work on a single gallery: the named one, or the first.
fn first(galleries: Vec<tessera::Gallery>) -> Result<tessera::Gallery> {
    galleries
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no gallery to work on"))
}
