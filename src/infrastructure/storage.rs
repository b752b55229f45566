use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::error::Result;
use crate::infrastructure::template::{DECK_CSS, DECK_JS};

/// Writes the rendered page and its static assets into the output directory.
pub fn write_site(out_dir: &Path, html: &str) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let index = out_dir.join("index.html");
    fs::write(&index, html)?;
    fs::write(out_dir.join("deck.css"), DECK_CSS)?;
    fs::write(out_dir.join("deck.js"), DECK_JS)?;
    info!(path = %index.display(), "Site written");
    Ok(index)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
