use sqlx::PgPool;
use uuid::Uuid;

use certforge_core::models::admin::AdminAccount;
use certforge_core::models::certificate::{CertificateInput, CertificateRecord};

use crate::error::{map_write_error, Error, Result};

const RECORD_COLUMNS: &str = "id, certificate_no, reference_no, name, id_no, company, \
     issuance_no, issued_date, valid_until, kind, model, trainer, location, image_url, \
     created_at, updated_at";

pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new record. The store enforces uniqueness of both the
    /// certificate number and the reference number; a collision on either
    /// comes back as [`Error::Conflict`].
    pub async fn create(&self, input: &CertificateInput) -> Result<CertificateRecord> {
        let record = sqlx::query_as::<_, CertificateRecord>(&format!(
            r#"
            INSERT INTO certificates
            (id, certificate_no, reference_no, name, id_no, company, issuance_no,
             issued_date, valid_until, kind, model, trainer, location, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&input.certificate_no)
        .bind(&input.reference_no)
        .bind(&input.name)
        .bind(&input.id_no)
        .bind(&input.company)
        .bind(&input.issuance_no)
        .bind(input.issued_date)
        .bind(input.valid_until)
        .bind(&input.kind)
        .bind(&input.model)
        .bind(&input.trainer)
        .bind(&input.location)
        .bind(&input.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(record)
    }

    /// Full-field replace by id. Timestamps: `updated_at` moves, `created_at`
    /// stays put.
    pub async fn update(&self, id: Uuid, input: &CertificateInput) -> Result<CertificateRecord> {
        let record = sqlx::query_as::<_, CertificateRecord>(&format!(
            r#"
            UPDATE certificates SET
                certificate_no = $2, reference_no = $3, name = $4, id_no = $5,
                company = $6, issuance_no = $7, issued_date = $8, valid_until = $9,
                kind = $10, model = $11, trainer = $12, location = $13,
                image_url = $14, updated_at = now()
            WHERE id = $1
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.certificate_no)
        .bind(&input.reference_no)
        .bind(&input.name)
        .bind(&input.id_no)
        .bind(&input.company)
        .bind(&input.issuance_no)
        .bind(input.issued_date)
        .bind(input.valid_until)
        .bind(&input.kind)
        .bind(&input.model)
        .bind(&input.trainer)
        .bind(&input.location)
        .bind(&input.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        record.ok_or(Error::NotFound)
    }

    /// Hard delete. There is no soft-delete or audit trail; a deleted record
    /// is gone.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Admin listing, newest first.
    pub async fn list_all(&self) -> Result<Vec<CertificateRecord>> {
        let records = sqlx::query_as::<_, CertificateRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM certificates ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Self-service lookup path (the public search box).
    pub async fn get_by_reference(&self, reference_no: &str) -> Result<CertificateRecord> {
        let record = sqlx::query_as::<_, CertificateRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM certificates WHERE reference_no = $1"
        ))
        .bind(reference_no)
        .fetch_optional(&self.pool)
        .await?;

        record.ok_or(Error::NotFound)
    }

    /// QR-scan verification path.
    pub async fn get_by_certificate(&self, certificate_no: &str) -> Result<CertificateRecord> {
        let record = sqlx::query_as::<_, CertificateRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM certificates WHERE certificate_no = $1"
        ))
        .bind(certificate_no)
        .fetch_optional(&self.pool)
        .await?;

        record.ok_or(Error::NotFound)
    }
}

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, username: &str, password_hash: &str) -> Result<AdminAccount> {
        let account = sqlx::query_as::<_, AdminAccount>(
            r#"
            INSERT INTO admins (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<AdminAccount> {
        let account = sqlx::query_as::<_, AdminAccount>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        account.ok_or(Error::NotFound)
    }
}
