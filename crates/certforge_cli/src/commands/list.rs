use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use certforge_core::models::certificate::format_card_date;
use certforge_service::{CertService, Config};

#[derive(Debug, Args)]
pub struct ListArgs {}

pub async fn execute(pool: PgPool, config: Config, _args: ListArgs) -> Result<()> {
    let service = CertService::new(pool, config);

    let records = service
        .list_certificates()
        .await
        .context("Failed to list certificates")?;

    if records.is_empty() {
        println!("No certificate records found.");
        return Ok(());
    }

    println!("{} record(s):", records.len());
    for record in records {
        println!(
            "  {}  ref={}  {}  ({} – {})",
            record.certificate_no,
            record.reference_no,
            record.name,
            format_card_date(record.issued_date),
            format_card_date(record.valid_until),
        );
    }

    Ok(())
}
