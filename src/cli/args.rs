//! CLI argument definitions using clap derive

use clap::Parser;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Interactive inventory editor for parts and products")]
#[command(
    long_about = "An interactive terminal editor for a session-local inventory of parts (in-house or outsourced) and products assembled from parts."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Skip confirmation prompts for save, delete, and exit actions
    #[arg(long, short = 'y')]
    pub yes: bool,
}
