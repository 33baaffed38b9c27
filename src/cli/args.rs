use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(author = "MrMattias")]
#[command(version)]
#[command(about = "Tag-filterable media gallery with a lightbox viewer")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Media directory to scan (tags come from subdirectories)
    #[arg(short, long, global = true)]
    pub(crate) dir: Option<PathBuf>,

    /// Gallery manifest (.toml or .json); takes precedence over --dir
    #[arg(short, long, global = true)]
    pub(crate) manifest: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Only use the manifest gallery with this name
    #[arg(short, long, global = true)]
    pub(crate) gallery: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the tags of the gallery with item counts
    Tags,
    /// List the items matching a tag
    List {
        /// Tag to filter by ("all" for everything)
        #[arg(short, long)]
        tag: Option<String>,

        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run scripted interactions and print every presentation command
    Replay {
        /// Events: open:<id>, next, prev, close, tag:<name>, tag:all
        #[arg(required = true)]
        events: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
