use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use certforge_service::{CertService, Config};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Certificate number of the record to render
    #[arg(short, long)]
    pub certificate_no: String,

    /// Output directory for the PDF
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub async fn execute(pool: PgPool, config: Config, args: RenderArgs) -> Result<()> {
    let service = CertService::new(pool, config);

    println!("🚀 Rendering card for: {}", args.certificate_no);

    let record = service
        .find_by_certificate(&args.certificate_no)
        .await
        .context("Failed to fetch the certificate record")?;

    let document = service
        .render_card(&record)
        .await
        .context("Card rendering failed")?;

    fs::create_dir_all(&args.output)?;
    let path = args.output.join(&document.filename);
    fs::write(&path, &document.bytes)?;

    println!("📄 Card written to {}", path.display());
    Ok(())
}
