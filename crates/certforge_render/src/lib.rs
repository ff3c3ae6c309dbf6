//! The card rendering pipeline: QR encoding, declarative face layout,
//! rasterization, and PDF assembly.
//!
//! Rendering is deterministic: the same record, photo bytes, and assets
//! produce byte-identical output. Nothing here touches the network or the
//! database; callers hand in decoded bitmaps and get a finished document
//! back.

pub mod assemble;
pub mod assets;
pub mod draw;
pub mod error;
pub mod layout;
pub mod qr;

pub use error::RenderError;

use certforge_core::models::certificate::CertificateRecord;
use image::RgbaImage;

use assets::RenderAssets;
use layout::CardStatics;

/// Rasterizes both faces for a record. The photo and QR bitmaps must already
/// be decoded; asset or fetch failures abort before this point, so a partial
/// card is never produced.
pub fn render_card_faces(
    record: &CertificateRecord,
    statics: &CardStatics,
    assets: &RenderAssets,
    photo: &RgbaImage,
    qr: &RgbaImage,
) -> (RgbaImage, RgbaImage) {
    let images = draw::FaceImages {
        logo: &assets.logo,
        photo,
        qr,
    };
    let front = draw::render_face(&layout::front_face(record, statics), &images, &assets.fonts);
    let back = draw::render_face(&layout::back_face(record, statics), &images, &assets.fonts);
    (front, back)
}
