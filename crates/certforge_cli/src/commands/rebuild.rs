use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

#[derive(Debug, Args)]
pub struct RebuildArgs {}

pub async fn execute(pool: PgPool, _args: RebuildArgs) -> Result<()> {
    println!("🔄 Applying embedded schema...");
    certforge_db::schema::rebuild_database(&pool)
        .await
        .context("Failed to apply schema")?;
    println!("✅ Schema is up to date");
    Ok(())
}
