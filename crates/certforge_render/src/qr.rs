use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::RenderError;

/// Target edge length before the quiet margin is added. High enough that a
/// printed card at ~300 DPI scans reliably.
pub const QR_TARGET_PX: u32 = 400;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The URL a scanner lands on. Certificate numbers are restricted to
/// URL-safe characters by validation, so the number is embedded verbatim.
pub fn verification_url(origin: &str, certificate_no: &str) -> String {
    format!("{}/verify/{}", origin.trim_end_matches('/'), certificate_no)
}

/// Encodes `url` at error-correction level H with a quiet margin of exactly
/// one module on every side. The module grid is emitted directly so the
/// margin stays under our control.
pub fn encode_qr(url: &str) -> Result<RgbaImage, RenderError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)
        .map_err(|e| RenderError::Qr(e.to_string()))?;

    let modules = code.width() as u32;
    let colors = code.to_colors();

    let module_px = (QR_TARGET_PX / modules).max(1);
    let side = module_px * (modules + 2); // +1 quiet module left/top and right/bottom

    let mut img = RgbaImage::from_pixel(side, side, LIGHT);
    for my in 0..modules {
        for mx in 0..modules {
            if colors[(my * modules + mx) as usize] == Color::Dark {
                let px0 = (mx + 1) * module_px;
                let py0 = (my + 1) * module_px;
                for py in py0..py0 + module_px {
                    for px in px0..px0 + module_px {
                        img.put_pixel(px, py, DARK);
                    }
                }
            }
        }
    }

    Ok(img)
}
