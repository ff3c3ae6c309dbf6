use anyhow::Result;
use clap::Args;
use sqlx::PgPool;

use certforge_service::{CertService, Config, ServiceError};

#[derive(Debug, Args)]
pub struct CreateAdminArgs {
    /// Login name for the admin account
    #[arg(short, long, default_value = "admin")]
    pub username: String,

    /// Password for the admin account
    #[arg(short, long)]
    pub password: String,
}

pub async fn execute(pool: PgPool, config: Config, args: CreateAdminArgs) -> Result<()> {
    let service = CertService::new(pool, config);

    println!("🚀 Creating admin user '{}'...", args.username);

    match service.create_admin(&args.username, &args.password).await {
        Ok(profile) => {
            println!("✅ Admin user created: {} ({})", profile.username, profile.id);
            println!("⚠️  Change these credentials in production!");
        }
        Err(ServiceError::Conflict(_)) => {
            println!("Admin user '{}' already exists!", args.username);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
