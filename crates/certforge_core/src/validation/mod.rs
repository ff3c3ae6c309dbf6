use crate::models::certificate::CertificateInput;
use serde::Serialize;

pub mod rules;

pub const SEVERITY_HIGH: &str = "High Error";
pub const SEVERITY_WARNING: &str = "Warning";

// The structure of a failure
#[derive(Debug, Serialize, Clone)]
pub struct ValidationError {
    pub code: String,     // e.g., "CERT-002"
    pub severity: String, // "High Error", "Warning"
    pub message: String,
    pub field: Option<String>, // Which field failed?
}

impl ValidationError {
    /// High Errors block the write; warnings are reported and let through.
    pub fn is_blocking(&self) -> bool {
        self.severity == SEVERITY_HIGH
    }
}

// The contract every rule must fulfill
pub trait ValidationRule {
    fn check(&self, input: &CertificateInput) -> Vec<ValidationError>;
    fn rule_id(&self) -> &str;
}

// The Engine that holds the registry of all rules
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, input: &CertificateInput) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let mut rule_errors = rule.check(input);
            errors.append(&mut rule_errors);
        }
        errors
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
