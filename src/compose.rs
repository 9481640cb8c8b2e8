//! Alpha compositing onto solid backgrounds.
//!
//! Used to flatten masked icons for output formats that cannot store
//! transparency.

use image::{Rgba, RgbaImage};

/// Opaque white.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Composites `src` over a solid `background`, returning a new image.
pub fn flatten_onto(src: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(src.width(), src.height(), background);
    for (dst, src) in out.pixels_mut().zip(src.pixels()) {
        *dst = alpha_blend(*src, *dst);
    }
    out
}

/// Composites `src` over opaque white. Every output pixel has alpha 255.
pub fn flatten_onto_white(src: &RgbaImage) -> RgbaImage {
    flatten_onto(src, WHITE)
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}
