use uuid::Uuid;

use certforge_core::models::certificate::{CertificateInput, CertificateRecord};
use certforge_core::standard_validator;
use certforge_db::repository::CertificateRepository;

use crate::{CertService, ServiceError};

impl CertService {
    fn certificates(&self) -> CertificateRepository {
        CertificateRepository::new(self.pool.clone())
    }

    /// Runs the standard rule set. Blocking violations reject the write;
    /// warnings are logged and let through (date ordering is the caller's
    /// responsibility, by contract).
    fn check_input(&self, input: &CertificateInput) -> Result<(), ServiceError> {
        let errors = standard_validator().run(input);

        for warning in errors.iter().filter(|e| !e.is_blocking()) {
            tracing::warn!(code = %warning.code, "{}", warning.message);
        }

        let blocking: Vec<_> = errors.into_iter().filter(|e| e.is_blocking()).collect();
        if !blocking.is_empty() {
            return Err(ServiceError::Validation(blocking));
        }
        Ok(())
    }

    pub async fn create_certificate(
        &self,
        input: CertificateInput,
    ) -> Result<CertificateRecord, ServiceError> {
        self.check_input(&input)?;
        let record = self.certificates().create(&input).await?;
        tracing::info!(certificate_no = %record.certificate_no, "certificate created");
        Ok(record)
    }

    pub async fn update_certificate(
        &self,
        id: Uuid,
        input: CertificateInput,
    ) -> Result<CertificateRecord, ServiceError> {
        self.check_input(&input)?;
        let record = self.certificates().update(id, &input).await?;
        tracing::info!(certificate_no = %record.certificate_no, "certificate updated");
        Ok(record)
    }

    pub async fn delete_certificate(&self, id: Uuid) -> Result<(), ServiceError> {
        self.certificates().delete(id).await?;
        tracing::info!(%id, "certificate deleted");
        Ok(())
    }

    pub async fn list_certificates(&self) -> Result<Vec<CertificateRecord>, ServiceError> {
        Ok(self.certificates().list_all().await?)
    }

    /// Self-service lookup by the holder's reference number.
    pub async fn find_by_reference(
        &self,
        reference_no: &str,
    ) -> Result<CertificateRecord, ServiceError> {
        Ok(self.certificates().get_by_reference(reference_no).await?)
    }

    /// Scan-verification lookup by certificate number.
    pub async fn find_by_certificate(
        &self,
        certificate_no: &str,
    ) -> Result<CertificateRecord, ServiceError> {
        Ok(self.certificates().get_by_certificate(certificate_no).await?)
    }
}
