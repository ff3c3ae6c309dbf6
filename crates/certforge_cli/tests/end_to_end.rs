//! Full record lifecycle against a live Postgres. Run with:
//!
//!   DATABASE_URL=postgres://... cargo test -p certforge_cli -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

use certforge_core::models::certificate::CertificateInput;
use certforge_service::{CertService, Config, ServiceError};

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn record_lifecycle_and_lookup_symmetry() {
    let config = Config::from_env().expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .expect("connect to Postgres");
    certforge_db::schema::rebuild_database(&pool)
        .await
        .expect("apply schema");

    let service = CertService::new(pool, config);

    let suffix = unique_suffix();
    let certificate_no = format!("148-2026-3212931-EN-{}", suffix);
    let reference_no = format!("PRIVATE-21642-{}", suffix);

    let input = CertificateInput {
        certificate_no: certificate_no.clone(),
        reference_no: reference_no.clone(),
        name: "Atta Ullah Khan".to_string(),
        id_no: "2626862110".to_string(),
        company: "Private".to_string(),
        issuance_no: "1".to_string(),
        issued_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        valid_until: NaiveDate::from_ymd_opt(2027, 1, 10).unwrap(),
        kind: "RIGGER LEVEL III".to_string(),
        model: None,
        trainer: None,
        location: None,
        image_url: "https://images.example.com/e-verification/users/atta.jpg".to_string(),
    };

    // 1. Create
    let created = service
        .create_certificate(input.clone())
        .await
        .expect("create succeeds");
    assert_eq!(created.certificate_no, certificate_no);
    assert_eq!(created.kind, "RIGGER LEVEL III");

    // 2. Both lookup paths resolve the same row
    let by_reference = service
        .find_by_reference(&reference_no)
        .await
        .expect("reference lookup");
    assert_eq!(by_reference.id, created.id);

    let by_certificate = service
        .find_by_certificate(&certificate_no)
        .await
        .expect("certificate lookup");
    assert_eq!(by_certificate.id, created.id);

    // 3. An unused key is a clean miss, not a default record
    let miss = service
        .find_by_reference(&format!("UNUSED-{}", suffix))
        .await;
    assert!(matches!(miss, Err(ServiceError::NotFound)));

    // 4. Duplicate certificate/reference numbers are rejected
    let duplicate = service.create_certificate(input.clone()).await;
    assert!(matches!(duplicate, Err(ServiceError::Conflict(_))));

    // 5. Update is a full-field replace
    let mut changed = input.clone();
    changed.company = "Updated Co".to_string();
    changed.model = Some("Grove GMK5250L".to_string());
    let updated = service
        .update_certificate(created.id, changed)
        .await
        .expect("update succeeds");
    assert_eq!(updated.company, "Updated Co");
    assert_eq!(updated.model.as_deref(), Some("Grove GMK5250L"));
    assert_eq!(updated.created_at, created.created_at);

    // 6. Hard delete; lookups miss afterwards
    service
        .delete_certificate(created.id)
        .await
        .expect("delete succeeds");
    let gone = service.find_by_certificate(&certificate_no).await;
    assert!(matches!(gone, Err(ServiceError::NotFound)));
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn blocking_validation_rejects_before_the_store() {
    let config = Config::from_env().expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .expect("connect to Postgres");
    certforge_db::schema::rebuild_database(&pool)
        .await
        .expect("apply schema");

    let service = CertService::new(pool, config);

    let suffix = unique_suffix();
    let input = CertificateInput {
        certificate_no: format!("BAD {}", suffix), // spaces are not URL-safe
        reference_no: format!("REF-{}", suffix),
        name: "Jane Roe".to_string(),
        id_no: "1".to_string(),
        company: "Acme".to_string(),
        issuance_no: "1".to_string(),
        issued_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        valid_until: NaiveDate::from_ymd_opt(2027, 1, 10).unwrap(),
        kind: "FORKLIFT".to_string(),
        model: None,
        trainer: None,
        location: None,
        image_url: "https://images.example.com/p.jpg".to_string(),
    };

    let rejected = service.create_certificate(input).await;
    assert!(matches!(rejected, Err(ServiceError::Validation(_))));
}
