//! Declarative face templates.
//!
//! A face is a flat list of element descriptors in a fixed layout space of
//! 1012.5 x 637.5 units (the proportions of an 85.6 x 53.98 mm card). The
//! generic rasterizer in [`crate::draw`] consumes the list; templates never
//! draw anything themselves, which keeps front and back on one code path.

use image::Rgba;

use certforge_core::models::certificate::{format_card_date, CertificateRecord};

pub const LAYOUT_WIDTH: f32 = 1012.5;
pub const LAYOUT_HEIGHT: f32 = 637.5;

/// Integer raster scale. Layout units land on exact pixels: the canvas is
/// 2025 x 1275 px (~600 DPI on the physical card).
pub const RASTER_SCALE: u32 = 2;

pub const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
/// Accent used for the certificate number and holder name.
pub const ACCENT: Rgba<u8> = Rgba([0x3b, 0x4a, 0x9d, 0xff]);
/// Warning red of the back-face verification banner.
pub const WARNING: Rgba<u8> = Rgba([0xdc, 0x26, 0x26, 0xff]);

const DISCLAIMER_LINES: [&str; 5] = [
    "This card does not relieve the operator from responsibilities related to the safe handling,",
    "operation, or reliability of the listed equipment. Only contracted parties can hold the",
    "issuing company liable for errors/omissions related to this card. The issuing company is not",
    "liable for any mistakes, negligence, judgement or fault committed by the person holding",
    "this card. Any operating license remains the client's responsibility.",
];

/// Fixed text that comes from configuration, not the record.
#[derive(Debug, Clone)]
pub struct CardStatics {
    pub completion_line: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub banner_lead: String,
    pub verify_domain: String,
}

impl Default for CardStatics {
    fn default() -> Self {
        Self {
            completion_line: "This certifies that the above mentioned person has successfully \
                              completed the safety course. Refer to backside for details."
                .to_string(),
            contact_phone: "For any queries: Tel. 00966 13 99439017".to_string(),
            contact_email: "certificates@example.com".to_string(),
            banner_lead: "Scan QR code to verify this certificate at".to_string(),
            verify_domain: "https://e-certificates.example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Logo,
    Photo,
    Qr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Scale to the box, ignoring aspect ratio.
    Stretch,
    /// Center-crop the source to the box aspect, then scale to fill.
    Cover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Pen starts at this x.
    Left { x: f32 },
    /// The whole run is centered on the canvas midline.
    Center,
}

#[derive(Debug, Clone)]
pub struct TextSpan {
    pub text: String,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba<u8>,
    pub underline: bool,
}

#[derive(Debug, Clone)]
pub enum Element {
    Fill {
        color: Rgba<u8>,
    },
    ImageBox {
        slot: ImageSlot,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fit: FitMode,
        opacity: f32,
    },
    /// One or more spans drawn on a shared baseline, left to right.
    Text {
        anchor: TextAnchor,
        baseline: f32,
        spans: Vec<TextSpan>,
    },
    Rule {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba<u8>,
    },
}

#[derive(Debug, Clone)]
pub struct Face {
    pub elements: Vec<Element>,
}

impl Face {
    /// All span texts, in draw order. Handy for asserting on content.
    pub fn texts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text { spans, .. } => Some(spans.iter().map(|s| s.text.as_str())),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

fn span(text: impl Into<String>, size: f32, weight: FontWeight, color: Rgba<u8>) -> TextSpan {
    TextSpan {
        text: text.into(),
        size,
        weight,
        color,
        underline: false,
    }
}

fn text_at(x: f32, baseline: f32, s: TextSpan) -> Element {
    Element::Text {
        anchor: TextAnchor::Left { x },
        baseline,
        spans: vec![s],
    }
}

fn text_centered(baseline: f32, spans: Vec<TextSpan>) -> Element {
    Element::Text {
        anchor: TextAnchor::Center,
        baseline,
        spans,
    }
}

fn divider(y: f32) -> Element {
    Element::Rule {
        x: 37.0,
        y,
        width: LAYOUT_WIDTH - 74.0,
        height: 3.0,
        color: BLACK,
    }
}

/// The front face: header block with certificate identifiers, holder photo,
/// identity block between divider rules, completion sentence and contact
/// footer, all over a low-opacity logo watermark.
pub fn front_face(record: &CertificateRecord, statics: &CardStatics) -> Face {
    use FontWeight::{Bold, Regular};

    let mut elements = vec![
        Element::Fill { color: WHITE },
        // Watermark behind all other content
        Element::ImageBox {
            slot: ImageSlot::Logo,
            x: (LAYOUT_WIDTH - 525.0) / 2.0,
            y: (LAYOUT_HEIGHT - 525.0) / 2.0,
            width: 525.0,
            height: 525.0,
            fit: FitMode::Stretch,
            opacity: 0.25,
        },
        // Header: logo thumbnail and certificate identifiers
        Element::ImageBox {
            slot: ImageSlot::Logo,
            x: 37.0,
            y: 24.0,
            width: 120.0,
            height: 120.0,
            fit: FitMode::Stretch,
            opacity: 1.0,
        },
        text_at(186.0, 50.0, span("Certificate No:", 26.0, Bold, BLACK)),
        text_at(186.0, 95.0, span(&record.certificate_no, 34.0, Bold, ACCENT)),
        text_at(
            186.0,
            125.0,
            span(format!("Ref.# {}", record.reference_no), 18.0, Regular, BLACK),
        ),
        text_at(
            186.0,
            150.0,
            span(
                format!("Issued on: {}", format_card_date(record.issued_date)),
                18.0,
                Regular,
                BLACK,
            ),
        ),
        text_at(
            186.0,
            170.0,
            span(
                format!("Valid until: {}", format_card_date(record.valid_until)),
                18.0,
                Regular,
                BLACK,
            ),
        ),
        // Holder photo, top right, cover-cropped into a portrait frame
        Element::ImageBox {
            slot: ImageSlot::Photo,
            x: LAYOUT_WIDTH - 197.0,
            y: 24.0,
            width: 160.0,
            height: 197.0,
            fit: FitMode::Cover,
            opacity: 1.0,
        },
        // Identity block between thick rules
        divider(239.0),
        text_at(37.0, 275.0, span("Name:", 28.0, Bold, BLACK)),
        text_at(
            145.0,
            275.0,
            span(record.name.to_uppercase(), 28.0, Bold, ACCENT),
        ),
        text_at(
            37.0,
            310.0,
            span(format!("ID No: {}", record.id_no), 24.0, Bold, BLACK),
        ),
        text_at(
            37.0,
            340.0,
            span(format!("Company: {}", record.company), 24.0, Bold, BLACK),
        ),
        text_at(
            37.0,
            370.0,
            span(
                format!("Issuance No.: {}", record.issuance_no),
                24.0,
                Bold,
                BLACK,
            ),
        ),
        divider(387.0),
    ];

    // Footer: completion sentence and contact block, centered
    elements.push(text_centered(
        420.0,
        vec![span(&statics.completion_line, 17.0, Bold, BLACK)],
    ));
    elements.push(divider(430.0));
    elements.push(text_centered(
        465.0,
        vec![span(&statics.contact_phone, 16.0, Regular, BLACK)],
    ));
    elements.push(text_centered(
        490.0,
        vec![span(&statics.contact_email, 16.0, Regular, BLACK)],
    ));

    Face { elements }
}

/// The back face: QR code centered in the left half; certificate number,
/// type and the optional detail lines on the right; disclaimer paragraph;
/// red verification banner along the bottom edge.
///
/// Absent optional fields are omitted entirely. That is the policy
/// everywhere: no placeholder text is ever rendered for them.
pub fn back_face(record: &CertificateRecord, statics: &CardStatics) -> Face {
    use FontWeight::{Bold, Regular};

    const QR_SIZE: f32 = 420.0;
    let right_x = LAYOUT_WIDTH / 2.0 + 25.0;

    let mut elements = vec![
        Element::Fill { color: WHITE },
        Element::ImageBox {
            slot: ImageSlot::Qr,
            x: (LAYOUT_WIDTH / 2.0 - QR_SIZE) / 2.0,
            y: (LAYOUT_HEIGHT - QR_SIZE) / 2.0,
            width: QR_SIZE,
            height: QR_SIZE,
            fit: FitMode::Stretch,
            opacity: 1.0,
        },
    ];

    let mut y = 120.0;
    elements.push(text_at(
        right_x,
        y,
        span("CERTIFICATE NO.:", 14.0, Regular, BLACK),
    ));
    y += 25.0;
    elements.push(text_at(
        right_x,
        y,
        span(&record.certificate_no, 22.0, Bold, ACCENT),
    ));
    y += 40.0;
    elements.push(text_at(
        right_x,
        y,
        span(format!("TYPE: {}", record.kind), 16.0, Regular, BLACK),
    ));
    y += 30.0;

    let optional_lines = [
        ("MODEL", record.model.as_deref()),
        ("TRAINER", record.trainer.as_deref()),
        ("LOCATION", record.location.as_deref()),
    ];
    for (label, value) in optional_lines {
        if let Some(value) = value {
            elements.push(text_at(
                right_x,
                y,
                span(format!("{}: {}", label, value), 16.0, Regular, BLACK),
            ));
            y += 30.0;
        }
    }

    y += 30.0;
    for line in DISCLAIMER_LINES {
        elements.push(text_at(right_x, y, span(line, 14.0, Regular, BLACK)));
        y += 20.0;
    }

    // Bottom banner, centered as one run; trailing space on the lead span
    // separates it from the underlined domain.
    let mut domain = span(&statics.verify_domain, 16.0, Bold, WARNING);
    domain.underline = true;
    elements.push(text_centered(
        LAYOUT_HEIGHT - 20.0,
        vec![
            span(format!("{} ", statics.banner_lead), 16.0, Bold, WARNING),
            domain,
        ],
    ));

    Face { elements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn sample_record() -> CertificateRecord {
        CertificateRecord {
            id: Uuid::nil(),
            certificate_no: "148-2026-3212931-EN".to_string(),
            reference_no: "PRIVATE-21642".to_string(),
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
            image_url: "https://img.example.com/holder.jpg".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn front_face_uppercases_name_in_accent() {
        let face = front_face(&sample_record(), &CardStatics::default());
        let has_upper_name = face.elements.iter().any(|e| match e {
            Element::Text { spans, .. } => spans
                .iter()
                .any(|s| s.text == "ATTA ULLAH KHAN" && s.color == ACCENT),
            _ => false,
        });
        assert!(has_upper_name);
    }

    #[test]
    fn front_face_formats_dates_day_month_year() {
        let face = front_face(&sample_record(), &CardStatics::default());
        let texts = face.texts();
        assert!(texts.contains(&"Issued on: 10/01/2026"));
        assert!(texts.contains(&"Valid until: 10/01/2027"));
    }

    #[test]
    fn front_face_watermark_precedes_content() {
        let face = front_face(&sample_record(), &CardStatics::default());
        assert!(matches!(face.elements[0], Element::Fill { .. }));
        match &face.elements[1] {
            Element::ImageBox { slot, opacity, .. } => {
                assert_eq!(*slot, ImageSlot::Logo);
                assert!((opacity - 0.25).abs() < f32::EPSILON);
            }
            other => panic!("expected watermark, got {:?}", other),
        }
    }

    #[test]
    fn back_face_omits_absent_optional_fields() {
        let face = back_face(&sample_record(), &CardStatics::default());
        let texts = face.texts().join("\n");
        assert!(!texts.contains("MODEL:"));
        assert!(!texts.contains("TRAINER:"));
        assert!(!texts.contains("LOCATION:"));
        assert!(!texts.contains("N/A"));
    }

    #[test]
    fn back_face_renders_present_optional_fields() {
        let mut record = sample_record();
        record.model = Some("Grove GMK5250L".to_string());
        record.trainer = Some("J. Smith".to_string());
        record.location = Some("Dammam".to_string());
        let face = back_face(&record, &CardStatics::default());
        let texts = face.texts().join("\n");
        assert!(texts.contains("MODEL: Grove GMK5250L"));
        assert!(texts.contains("TRAINER: J. Smith"));
        assert!(texts.contains("LOCATION: Dammam"));
    }

    #[test]
    fn back_face_centers_qr_in_left_half() {
        let face = back_face(&sample_record(), &CardStatics::default());
        let qr = face
            .elements
            .iter()
            .find_map(|e| match e {
                Element::ImageBox {
                    slot: ImageSlot::Qr,
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .expect("back face has a QR box");
        assert_eq!(qr, (43.125, 108.75, 420.0, 420.0));
    }

    #[test]
    fn back_face_banner_underlines_domain_only() {
        let face = back_face(&sample_record(), &CardStatics::default());
        let banner = face
            .elements
            .iter()
            .rev()
            .find_map(|e| match e {
                Element::Text {
                    anchor: TextAnchor::Center,
                    spans,
                    ..
                } => Some(spans),
                _ => None,
            })
            .expect("back face has a centered banner");
        assert_eq!(banner.len(), 2);
        assert!(!banner[0].underline);
        assert!(banner[1].underline);
        assert!(banner.iter().all(|s| s.color == WARNING));
    }
}
