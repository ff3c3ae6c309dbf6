use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// The unit of truth: one issued certificate.
// `certificate_no` is the public verification key (embedded in the QR code),
// `reference_no` is the holder's self-service lookup key. Both are unique.
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CertificateRecord {
    pub id: Uuid,
    pub certificate_no: String,
    pub reference_no: String,
    pub name: String,
    pub id_no: String,
    pub company: String,
    pub issuance_no: String,
    pub issued_date: NaiveDate,
    pub valid_until: NaiveDate,
    // "type" on the wire; free text, e.g. "RIGGER LEVEL III"
    #[serde(rename = "type")]
    pub kind: String,
    pub model: Option<String>,
    pub trainer: Option<String>,
    pub location: Option<String>,
    // URL of the hosted holder photo. The record never carries image bytes.
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The admin-supplied fields of a record. Create assigns the id and
/// timestamps; update is a full-field replace of everything here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateInput {
    pub certificate_no: String,
    pub reference_no: String,
    pub name: String,
    pub id_no: String,
    pub company: String,
    pub issuance_no: String,
    pub issued_date: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: Option<String>,
    pub trainer: Option<String>,
    pub location: Option<String>,
    pub image_url: String,
}

/// Day/month/year, two-digit day and month, regardless of locale.
/// Every rendered surface uses this format.
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_card_date(d), "05/03/2026");
    }

    #[test]
    fn kind_serializes_as_type() {
        let input = CertificateInput {
            certificate_no: "C-1".to_string(),
            reference_no: "R-1".to_string(),
            name: "Jane Roe".to_string(),
            id_no: "123".to_string(),
            company: "Acme".to_string(),
            issuance_no: "1".to_string(),
            issued_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2027, 1, 10).unwrap(),
            kind: "FORKLIFT OPERATOR".to_string(),
            model: None,
            trainer: None,
            location: None,
            image_url: "https://img.example.com/p.jpg".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "FORKLIFT OPERATOR");
        assert!(json.get("kind").is_none());

        let back: CertificateInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, "FORKLIFT OPERATOR");
    }
}
