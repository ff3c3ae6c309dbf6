//! Two-page PDF assembly. Each rasterized face becomes a full-page JPEG on a
//! page sized exactly to the physical card.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::RenderError;

/// 85.6 mm in PDF points (1 pt = 1/72 in).
pub const CARD_WIDTH_PT: f32 = 242.6457;
/// 53.98 mm in PDF points.
pub const CARD_HEIGHT_PT: f32 = 153.0142;

/// The canvases are already rasterized, so lossy compression is fine;
/// quality 95 keeps the QR crisp.
const JPEG_QUALITY: u8 = 95;

/// `Certificate_{certificateNo}_{name}.pdf` with whitespace runs in the name
/// collapsed to single underscores, keeping the filename filesystem-safe.
pub fn card_filename(certificate_no: &str, name: &str) -> String {
    let safe_name = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Certificate_{}_{}.pdf", certificate_no, safe_name)
}

/// Composes front and back into one document: page 1 front, page 2 back,
/// both 85.6 x 53.98 mm landscape. Output is a pure function of the two
/// bitmaps, so repeated assembly is byte-identical.
pub fn assemble_card(front: &RgbaImage, back: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for face in [front, back] {
        let page_id = add_face_page(&mut doc, pages_id, face)?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Document(e.to_string()))?;
    Ok(bytes)
}

fn add_face_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    face: &RgbaImage,
) -> Result<lopdf::ObjectId, RenderError> {
    let jpeg = encode_jpeg(face)?;

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => face.width() as i64,
            "Height" => face.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    // Scale the image XObject's unit square up to the full page
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    CARD_WIDTH_PT.into(),
                    0.into(),
                    0.into(),
                    CARD_HEIGHT_PT.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content
        .encode()
        .map_err(|e| RenderError::Document(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(CARD_WIDTH_PT),
            Object::Real(CARD_HEIGHT_PT),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });
    Ok(page_id)
}

fn encode_jpeg(face: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let rgb = DynamicImage::ImageRgba8(face.clone()).to_rgb8();
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn test_faces() -> (RgbaImage, RgbaImage) {
        let front = RgbaImage::from_pixel(40, 25, Rgba([200, 10, 10, 255]));
        let back = RgbaImage::from_pixel(40, 25, Rgba([10, 10, 200, 255]));
        (front, back)
    }

    #[test]
    fn document_has_exactly_two_card_sized_pages() {
        let (front, back) = test_faces();
        let bytes = assemble_card(&front, &back).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        for (_, page_id) in pages {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            assert_eq!(media_box[0].as_float().unwrap(), 0.0);
            assert_eq!(media_box[1].as_float().unwrap(), 0.0);
            assert!((media_box[2].as_float().unwrap() - CARD_WIDTH_PT).abs() < 0.01);
            assert!((media_box[3].as_float().unwrap() - CARD_HEIGHT_PT).abs() < 0.01);
        }
    }

    #[test]
    fn assembly_is_deterministic() {
        let (front, back) = test_faces();
        let first = assemble_card(&front, &back).unwrap();
        let second = assemble_card(&front, &back).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn filename_collapses_whitespace_to_underscores() {
        assert_eq!(
            card_filename("148-2026-3212931-EN", "Atta Ullah Khan"),
            "Certificate_148-2026-3212931-EN_Atta_Ullah_Khan.pdf"
        );
        assert_eq!(
            card_filename("C-1", "  Jane\t Roe "),
            "Certificate_C-1_Jane_Roe.pdf"
        );
    }
}
