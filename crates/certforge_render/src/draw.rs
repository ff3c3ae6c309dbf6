//! The generic face rasterizer. Consumes the element lists produced by
//! [`crate::layout`]; knows nothing about certificates.

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::layout::{
    Element, Face, FitMode, FontWeight, ImageSlot, TextAnchor, TextSpan, LAYOUT_HEIGHT,
    LAYOUT_WIDTH, RASTER_SCALE, WHITE,
};

/// Regular and bold faces of the single card font family.
pub struct FontSet {
    pub regular: FontVec,
    pub bold: FontVec,
}

impl FontSet {
    fn get(&self, weight: FontWeight) -> &FontVec {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// The decoded bitmaps a face may reference.
pub struct FaceImages<'a> {
    pub logo: &'a RgbaImage,
    pub photo: &'a RgbaImage,
    pub qr: &'a RgbaImage,
}

pub fn canvas_size() -> (u32, u32) {
    (
        (LAYOUT_WIDTH * RASTER_SCALE as f32) as u32,
        (LAYOUT_HEIGHT * RASTER_SCALE as f32) as u32,
    )
}

/// Layout units -> raster pixels.
fn px(v: f32) -> f32 {
    v * RASTER_SCALE as f32
}

pub fn render_face(face: &Face, images: &FaceImages<'_>, fonts: &FontSet) -> RgbaImage {
    let (width, height) = canvas_size();
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);

    for element in &face.elements {
        match element {
            Element::Fill { color } => {
                draw_filled_rect_mut(
                    &mut canvas,
                    Rect::at(0, 0).of_size(width, height),
                    *color,
                );
            }
            Element::Rule {
                x,
                y,
                width,
                height,
                color,
            } => {
                draw_filled_rect_mut(
                    &mut canvas,
                    Rect::at(px(*x).round() as i32, px(*y).round() as i32).of_size(
                        (px(*width).round() as u32).max(1),
                        (px(*height).round() as u32).max(1),
                    ),
                    *color,
                );
            }
            Element::ImageBox {
                slot,
                x,
                y,
                width,
                height,
                fit,
                opacity,
            } => {
                let source = match slot {
                    ImageSlot::Logo => images.logo,
                    ImageSlot::Photo => images.photo,
                    ImageSlot::Qr => images.qr,
                };
                let target_w = (px(*width).round() as u32).max(1);
                let target_h = (px(*height).round() as u32).max(1);

                let resized = match fit {
                    FitMode::Stretch => {
                        imageops::resize(source, target_w, target_h, FilterType::Triangle)
                    }
                    FitMode::Cover => {
                        let (cx, cy, cw, ch) =
                            cover_crop_rect(source.width(), source.height(), target_w, target_h);
                        let cropped = imageops::crop_imm(source, cx, cy, cw, ch).to_image();
                        imageops::resize(&cropped, target_w, target_h, FilterType::Triangle)
                    }
                };

                overlay_with_opacity(
                    &mut canvas,
                    &resized,
                    px(*x).round() as i64,
                    px(*y).round() as i64,
                    *opacity,
                );
            }
            Element::Text {
                anchor,
                baseline,
                spans,
            } => {
                draw_text_run(&mut canvas, fonts, anchor, *baseline, spans);
            }
        }
    }

    canvas
}

fn draw_text_run(
    canvas: &mut RgbaImage,
    fonts: &FontSet,
    anchor: &TextAnchor,
    baseline: f32,
    spans: &[TextSpan],
) {
    let total: f32 = spans
        .iter()
        .map(|s| text_width(fonts.get(s.weight), px(s.size), &s.text))
        .sum();

    let mut pen = match anchor {
        TextAnchor::Left { x } => px(*x),
        TextAnchor::Center => (canvas.width() as f32 - total) / 2.0,
    };
    let baseline_px = px(baseline);

    for s in spans {
        let font = fonts.get(s.weight);
        let size = px(s.size);
        let scaled = font.as_scaled(PxScale::from(size));
        // fillText semantics: y is the alphabetic baseline
        let top = baseline_px - scaled.ascent();

        draw_text_mut(
            canvas,
            s.color,
            pen.round() as i32,
            top.round() as i32,
            PxScale::from(size),
            font,
            &s.text,
        );

        let width = text_width(font, size, &s.text);
        if s.underline {
            draw_filled_rect_mut(
                canvas,
                Rect::at(pen.round() as i32, (baseline_px + px(2.0)).round() as i32)
                    .of_size((width.round() as u32).max(1), RASTER_SCALE),
                s.color,
            );
        }
        pen += width;
    }
}

/// Advance width of `text` at `size` pixels, kerning included. Used for
/// centering and underlines; must agree with what `draw_text_mut` lays down.
pub fn text_width(font: &FontVec, size: f32, text: &str) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    width
}

/// The centered source region whose aspect matches the target box. The
/// caller crops to this and scales to fill, so nothing is stretched.
pub fn cover_crop_rect(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32, u32, u32) {
    let src_aspect = src_w as f32 / src_h as f32;
    let target_aspect = target_w as f32 / target_h as f32;

    if src_aspect > target_aspect {
        // source is wider: crop the sides
        let crop_w = ((src_h as f32 * target_aspect).round() as u32)
            .clamp(1, src_w);
        ((src_w - crop_w) / 2, 0, crop_w, src_h)
    } else {
        // source is taller: crop top and bottom
        let crop_h = ((src_w as f32 / target_aspect).round() as u32)
            .clamp(1, src_h);
        (0, (src_h - crop_h) / 2, src_w, crop_h)
    }
}

/// Alpha-composites `top` onto `canvas` at (`ox`, `oy`), scaling the source
/// alpha by `opacity`. One code path for watermarks and opaque images keeps
/// blending deterministic.
fn overlay_with_opacity(canvas: &mut RgbaImage, top: &RgbaImage, ox: i64, oy: i64, opacity: f32) {
    let (cw, ch) = (canvas.width() as i64, canvas.height() as i64);
    for (x, y, pixel) in top.enumerate_pixels() {
        let cx = ox + x as i64;
        let cy = oy + y as i64;
        if cx < 0 || cy < 0 || cx >= cw || cy >= ch {
            continue;
        }
        let alpha = (pixel[3] as f32 / 255.0) * opacity;
        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        for c in 0..3 {
            dst[c] = (pixel[c] as f32 * alpha + dst[c] as f32 * (1.0 - alpha)).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn canvas_is_exactly_double_layout_space() {
        assert_eq!(canvas_size(), (2025, 1275));
    }

    #[test]
    fn cover_crop_keeps_full_image_when_aspects_match() {
        assert_eq!(cover_crop_rect(320, 394, 160, 197), (0, 0, 320, 394));
    }

    #[test]
    fn cover_crop_trims_sides_of_wide_sources() {
        let (x, y, w, h) = cover_crop_rect(400, 200, 100, 100);
        assert_eq!((y, h), (0, 200));
        assert_eq!(w, 200);
        assert_eq!(x, 100); // centered
    }

    #[test]
    fn cover_crop_trims_top_and_bottom_of_tall_sources() {
        let (x, y, w, h) = cover_crop_rect(200, 400, 100, 100);
        assert_eq!((x, w), (0, 200));
        assert_eq!(h, 200);
        assert_eq!(y, 100);
    }

    #[test]
    fn opacity_blend_mixes_toward_background() {
        let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let top = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        overlay_with_opacity(&mut canvas, &top, 0, 0, 0.25);
        let px = canvas.get_pixel(0, 0);
        // 25% black over white: 255 * 0.75 = 191
        assert_eq!(px[0], 191);
        assert_eq!(px[1], 191);
        assert_eq!(px[2], 191);
    }

    #[test]
    fn opacity_blend_clips_outside_canvas() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let top = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        overlay_with_opacity(&mut canvas, &top, -2, -2, 1.0);
        assert_eq!(canvas.get_pixel(0, 0)[0], 0);
        assert_eq!(canvas.get_pixel(2, 2)[0], 255);
    }
}
