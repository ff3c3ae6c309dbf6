use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;

use certforge_cli::commands;
use certforge_service::Config;

#[derive(Parser)]
#[command(name = "certforge")]
#[command(about = "Certificate issuance and verification toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the embedded database schema
    Rebuild(commands::rebuild::RebuildArgs),

    /// Create an admin login account
    CreateAdmin(commands::create_admin::CreateAdminArgs),

    /// List all certificate records, newest first
    List(commands::list::ListArgs),

    /// Render a certificate card to a PDF on disk
    Render(commands::render::RenderArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load Config (Fails fast if invalid)
    let config = Config::from_env()?;

    // 2. Parse arguments and route to the correct command
    let cli = Cli::parse();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    match cli.command {
        Commands::Rebuild(args) => {
            commands::rebuild::execute(pool, args).await?;
        }
        Commands::CreateAdmin(args) => {
            commands::create_admin::execute(pool, config, args).await?;
        }
        Commands::List(args) => {
            commands::list::execute(pool, config, args).await?;
        }
        Commands::Render(args) => {
            commands::render::execute(pool, config, args).await?;
        }
    }

    Ok(())
}
