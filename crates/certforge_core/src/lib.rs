pub mod models;
pub mod validation;

use validation::{rules, ValidationEngine};

/// The rule set applied to every create/update before it reaches the store.
pub fn standard_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(rules::RuleRequiredFields)
        .add_rule(rules::RuleUrlSafeCertificateNo)
        .add_rule(rules::RulePhotoUrl)
        .add_rule(rules::RuleDateOrder)
}
