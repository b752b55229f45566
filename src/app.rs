use clap::Parser;
use tracing::{error, info};

use crate::application::populate_page;
use crate::domain::error::Result;
use crate::infrastructure::loader::{self, ConfigSource};
use crate::infrastructure::storage::write_site;
use crate::infrastructure::template::{render_error_page, render_page};
use crate::interfaces::cli::Args;

pub async fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let args = Args::parse();
    let source = ConfigSource::parse(&args.config)?;

    match loader::load(&source).await {
        Ok(config) => {
            let view = populate_page(&config);
            let index = write_site(&args.out, &render_page(&view))?;
            info!(path = %index.display(), company = %config.company.name, "Deck rendered");
            Ok(())
        }
        Err(err) => {
            // Load failure is the single top-level error class: the output
            // page is fully replaced by the static notice, nothing partial.
            error!(error = %err, "Config load failed, writing error page");
            write_site(&args.out, &render_error_page())?;
            Err(err)
        }
    }
}
