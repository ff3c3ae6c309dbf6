use rust_embed::RustEmbed;
use sqlx::{Executor, PgPool};
use std::str;

#[derive(RustEmbed)]
#[folder = "schema/"]
struct SchemaAssets;

/// Reads the build order and applies all SQL files in a single transaction.
/// Every statement is idempotent, so binaries can run this on startup to
/// ensure the schema exists.
pub async fn rebuild_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    // 1. Read the Manifest
    let manifest =
        get_file_content("00_build_order.sql").ok_or_else(|| missing("00_build_order.sql"))?;

    // 2. Parse and Aggregate SQL
    let mut full_script = String::new();

    for line in manifest.lines() {
        let trimmed = line.trim();

        // Parse: -- @include folder/file.sql
        if let Some(path) = parse_include_directive(trimmed) {
            tracing::info!("including schema file: {}", path);
            let content = get_file_content(path).ok_or_else(|| missing(path))?;
            full_script.push_str(&content);
            full_script.push('\n');
        } else if !trimmed.starts_with("--") {
            // Keep normal lines (if any), ignore comments
            full_script.push_str(line);
            full_script.push('\n');
        }
    }

    // 3. Execute
    (&mut *tx).execute(full_script.as_str()).await?;
    tx.commit().await?;

    Ok(())
}

fn missing(path: &str) -> sqlx::Error {
    sqlx::Error::Configuration(format!("missing embedded schema file: {}", path).into())
}

fn get_file_content(path: &str) -> Option<String> {
    SchemaAssets::get(path).and_then(|f| str::from_utf8(f.data.as_ref()).ok().map(String::from))
}

fn parse_include_directive(line: &str) -> Option<&str> {
    if line.starts_with("--") && line.contains("@include") {
        line.split_whitespace().last()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_directives_are_parsed() {
        assert_eq!(
            parse_include_directive("-- @include 01_tables/certificates.sql"),
            Some("01_tables/certificates.sql")
        );
        assert_eq!(parse_include_directive("CREATE TABLE foo ();"), None);
        assert_eq!(parse_include_directive("-- just a comment"), None);
    }

    #[test]
    fn manifest_and_tables_are_embedded() {
        let manifest = get_file_content("00_build_order.sql").expect("manifest embedded");
        let includes: Vec<&str> = manifest
            .lines()
            .filter_map(|l| parse_include_directive(l.trim()))
            .collect();
        assert!(!includes.is_empty());
        for path in includes {
            assert!(
                get_file_content(path).is_some(),
                "manifest references missing file: {}",
                path
            );
        }
    }
}
