//! Shared synthetic fixtures for image-based unit tests.

use image::{GrayImage, Luma};

/// Smooth deterministic texture, distinct per seed. Values stay inside
/// [42, 178] so tests can brighten by 40 without saturating.
pub(crate) fn textured_image(width: u32, height: u32, seed: u32) -> GrayImage {
    let fx = 0.23 + seed as f64 * 0.011;
    let fy = 0.31 + seed as f64 * 0.007;
    GrayImage::from_fn(width, height, |x, y| {
        let px = x as f64 * fx;
        let py = y as f64 * fy;
        let v = 110.0 + 60.0 * px.sin() * py.cos() + 8.0 * ((px + py) * 0.5).sin();
        Luma([v.clamp(40.0, 180.0) as u8])
    })
}

/// Paste `patch` into `target` with its top-left corner at `(x, y)`.
pub(crate) fn embed(target: &mut GrayImage, patch: &GrayImage, x: u32, y: u32) {
    image::imageops::replace(target, patch, x as i64, y as i64);
}
