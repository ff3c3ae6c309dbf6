use std::path::Path;

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::draw::FontSet;
use crate::error::RenderError;

pub const LOGO_FILE: &str = "logo.jpeg";
pub const FONT_REGULAR_FILE: &str = "DejaVuSans.ttf";
pub const FONT_BOLD_FILE: &str = "DejaVuSans-Bold.ttf";

/// The fixed artwork a card needs besides the record itself: the issuer logo
/// and the two font faces. Loaded from the assets directory per render so a
/// missing file fails that render closed instead of the whole process.
pub struct RenderAssets {
    pub logo: RgbaImage,
    pub fonts: FontSet,
}

impl RenderAssets {
    pub fn load(dir: &Path) -> Result<Self, RenderError> {
        let logo_path = dir.join(LOGO_FILE);
        let logo = image::open(&logo_path)
            .map_err(|e| RenderError::Asset(format!("logo {}: {}", logo_path.display(), e)))?
            .to_rgba8();

        let fonts = FontSet {
            regular: load_font(dir, FONT_REGULAR_FILE)?,
            bold: load_font(dir, FONT_BOLD_FILE)?,
        };

        Ok(Self { logo, fonts })
    }
}

fn load_font(dir: &Path, file: &str) -> Result<FontVec, RenderError> {
    let path = dir.join(file);
    let bytes = std::fs::read(&path)
        .map_err(|e| RenderError::Asset(format!("font {}: {}", path.display(), e)))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| RenderError::Asset(format!("font {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_fail_closed() {
        match RenderAssets::load(Path::new("/nonexistent/assets")) {
            Err(RenderError::Asset(_)) => {}
            Err(other) => panic!("expected an asset error, got {:?}", other),
            Ok(_) => panic!("load must fail without assets"),
        }
    }
}
