use std::path::PathBuf;

use clap::Parser;

/// pitchsite: renders the investor pitch-deck site from a configuration
/// document.
#[derive(Parser, Debug)]
#[command(name = "pitchsite")]
#[command(about = "Render the pitch-deck site from a JSON configuration document")]
pub struct Args {
    /// Configuration document: a file path or an http(s) URL
    #[arg(short, long)]
    pub config: String,

    /// Output directory for index.html and its assets
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,
}
