use crate::models::certificate::CertificateInput;
use crate::validation::{ValidationError, ValidationRule, SEVERITY_HIGH, SEVERITY_WARNING};

// =========================================================================
// RULE: CERT-001
// "Every required text field must be present and non-blank."
// =========================================================================
pub struct RuleRequiredFields;

impl ValidationRule for RuleRequiredFields {
    fn rule_id(&self) -> &str {
        "CERT-001"
    }

    fn check(&self, input: &CertificateInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let required = [
            ("certificate_no", &input.certificate_no),
            ("reference_no", &input.reference_no),
            ("name", &input.name),
            ("id_no", &input.id_no),
            ("company", &input.company),
            ("issuance_no", &input.issuance_no),
            ("type", &input.kind),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError {
                    code: self.rule_id().to_string(),
                    severity: SEVERITY_HIGH.to_string(),
                    message: format!("Field '{}' is required and cannot be empty", field),
                    field: Some(field.to_string()),
                });
            }
        }
        errors
    }
}

// =========================================================================
// RULE: CERT-002
// "Certificate numbers must be URL-safe."
// The number is embedded verbatim in the verification URL and the QR code,
// so it is restricted to unreserved URL characters by convention.
// =========================================================================
pub struct RuleUrlSafeCertificateNo;

impl ValidationRule for RuleUrlSafeCertificateNo {
    fn rule_id(&self) -> &str {
        "CERT-002"
    }

    fn check(&self, input: &CertificateInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let url_safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~');

        if !input.certificate_no.is_empty() && !input.certificate_no.chars().all(url_safe) {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: SEVERITY_HIGH.to_string(),
                message: format!(
                    "Certificate number '{}' contains characters that are not URL-safe",
                    input.certificate_no
                ),
                field: Some("certificate_no".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: CERT-003
// "A hosted photo URL is required before a record can be submitted."
// The card renderer fails closed without a fetchable photo, so the URL
// must at least be present and http(s).
// =========================================================================
pub struct RulePhotoUrl;

impl ValidationRule for RulePhotoUrl {
    fn rule_id(&self) -> &str {
        "CERT-003"
    }

    fn check(&self, input: &CertificateInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let url = input.image_url.trim();
        if url.is_empty() {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: SEVERITY_HIGH.to_string(),
                message: "A hosted photo URL is required".to_string(),
                field: Some("image_url".to_string()),
            });
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: SEVERITY_HIGH.to_string(),
                message: format!("Photo reference '{}' is not an http(s) URL", url),
                field: Some("image_url".to_string()),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: CERT-004
// "Issued date should not be after the expiry date."
// The store does not enforce this ordering; it is the caller's
// responsibility. We surface a warning only and never block on it.
// =========================================================================
pub struct RuleDateOrder;

impl ValidationRule for RuleDateOrder {
    fn rule_id(&self) -> &str {
        "CERT-004"
    }

    fn check(&self, input: &CertificateInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if input.issued_date > input.valid_until {
            errors.push(ValidationError {
                code: self.rule_id().to_string(),
                severity: SEVERITY_WARNING.to_string(),
                message: format!(
                    "Issued date {} is after the expiry date {}",
                    input.issued_date, input.valid_until
                ),
                field: Some("issued_date".to_string()),
            });
        }
        errors
    }
}
