//! Zero-mean normalized cross-correlation scoring.
//!
//! Scores a template against every anchored window of a search image. The
//! zero-mean formulation subtracts each side's mean before correlating, so a
//! constant brightness offset between template and window does not move the
//! score; normalizing by both deviations bounds it to [-1, 1], with 1
//! meaning the window is an affine remap of the template and -1 its
//! inversion.

use image::{GrayImage, ImageBuffer, Luma};

/// Score map produced by [`score_map`]: one `f32` per anchor position.
pub type ScoreMap = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Squared deviations below this count as flat (zero-variance) content.
const VAR_EPSILON: f64 = 1e-10;

/// A template prepared for repeated scoring: zero-mean pixel values plus
/// their squared norm.
#[derive(Debug, Clone)]
pub struct TemplatePlan {
    width: u32,
    height: u32,
    /// Template pixels minus the template mean, row-major.
    values: Vec<f32>,
    /// Sum of squared zero-mean values.
    norm_sq: f64,
}

impl TemplatePlan {
    /// Precompute the zero-mean form of `template`.
    pub fn new(template: &GrayImage) -> Self {
        let (width, height) = template.dimensions();
        let raw = template.as_raw();
        let mean = if raw.is_empty() {
            0.0
        } else {
            raw.iter().map(|&v| v as f64).sum::<f64>() / raw.len() as f64
        };
        let values: Vec<f32> = raw.iter().map(|&v| (v as f64 - mean) as f32).collect();
        let norm_sq: f64 = values.iter().map(|&t| t as f64 * t as f64).sum();
        Self {
            width,
            height,
            values,
            norm_sq,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Correlate `plan` against every window of `image`.
///
/// Returns a `(W - tw + 1) x (H - th + 1)` map where cell `(x, y)` holds
/// the zero-mean normalized correlation between the template and the window
/// anchored at `(x, y)`. Flat windows and flat templates score 0.0 instead
/// of dividing by zero. Accumulation runs in f64; the map stores f32.
///
/// # Panics
///
/// Panics if the template is larger than the image in either dimension.
pub fn score_map(image: &GrayImage, plan: &TemplatePlan) -> ScoreMap {
    let (iw, ih) = image.dimensions();
    let (tw, th) = plan.dimensions();
    assert!(
        tw <= iw && th <= ih,
        "template {tw}x{th} does not fit image {iw}x{ih}"
    );

    let out_w = iw - tw + 1;
    let out_h = ih - th + 1;
    let mut out = ScoreMap::new(out_w, out_h);

    let pixels = image.as_raw();
    let n = tw as f64 * th as f64;

    for oy in 0..out_h {
        for ox in 0..out_w {
            let mut dot = 0.0f64;
            let mut sum = 0.0f64;
            let mut sum_sq = 0.0f64;

            for ty in 0..th {
                let img_row = (oy + ty) as usize * iw as usize + ox as usize;
                let tpl_row = ty as usize * tw as usize;
                for tx in 0..tw as usize {
                    let v = pixels[img_row + tx] as f64;
                    dot += plan.values[tpl_row + tx] as f64 * v;
                    sum += v;
                    sum_sq += v * v;
                }
            }

            // sum((v - mean)^2) = sum_sq - sum^2 / n
            let window_dev = sum_sq - sum * sum / n;
            let score = if plan.norm_sq <= VAR_EPSILON || window_dev <= VAR_EPSILON {
                0.0
            } else {
                dot / (plan.norm_sq * window_dev).sqrt()
            };
            out.put_pixel(ox, oy, Luma([score as f32]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::textured_image;

    fn crop(img: &GrayImage, x: u32, y: u32, w: u32, h: u32) -> GrayImage {
        image::imageops::crop_imm(img, x, y, w, h).to_image()
    }

    #[test]
    fn exact_window_scores_one_at_its_anchor() {
        let img = textured_image(64, 48, 7);
        let tpl = crop(&img, 20, 10, 16, 12);
        let scores = score_map(&img, &TemplatePlan::new(&tpl));

        assert_eq!(scores.dimensions(), (64 - 16 + 1, 48 - 12 + 1));
        let at = scores.get_pixel(20, 10)[0];
        assert!((at - 1.0).abs() < 1e-5, "exact window scored {at}");
    }

    #[test]
    fn scores_stay_within_unit_range() {
        let img = textured_image(40, 40, 3);
        let tpl = crop(&img, 5, 5, 9, 9);
        let scores = score_map(&img, &TemplatePlan::new(&tpl));
        for (x, y, px) in scores.enumerate_pixels() {
            assert!(
                (-1.0 - 1e-4..=1.0 + 1e-4).contains(&px[0]),
                "score {} at ({x}, {y}) out of range",
                px[0]
            );
        }
    }

    #[test]
    fn brightness_offset_does_not_change_the_score() {
        let img = textured_image(48, 48, 11);
        let mut brightened = img.clone();
        for px in brightened.pixels_mut() {
            px[0] += 40; // fixture stays below 216, no saturation
        }

        let tpl = crop(&img, 12, 8, 10, 10);
        let plan = TemplatePlan::new(&tpl);
        let base = score_map(&img, &plan).get_pixel(12, 8)[0];
        let shifted = score_map(&brightened, &plan).get_pixel(12, 8)[0];

        assert!((base - 1.0).abs() < 1e-5);
        assert!((shifted - 1.0).abs() < 1e-4, "offset window scored {shifted}");
    }

    #[test]
    fn inverted_content_scores_minus_one() {
        let img = textured_image(32, 32, 5);
        let mut inverted = crop(&img, 4, 6, 8, 8);
        for px in inverted.pixels_mut() {
            px[0] = 255 - px[0];
        }

        let score = score_map(&img, &TemplatePlan::new(&inverted)).get_pixel(4, 6)[0];
        assert!((score + 1.0).abs() < 1e-5, "inverted template scored {score}");
    }

    #[test]
    fn flat_content_scores_zero() {
        let flat = GrayImage::from_pixel(30, 30, Luma([128]));
        let tpl = textured_image(8, 8, 2);
        let scores = score_map(&flat, &TemplatePlan::new(&tpl));
        assert!(scores.pixels().all(|p| p[0] == 0.0));

        let img = textured_image(30, 30, 2);
        let flat_tpl = GrayImage::from_pixel(8, 8, Luma([77]));
        let scores = score_map(&img, &TemplatePlan::new(&flat_tpl));
        assert!(scores.pixels().all(|p| p[0] == 0.0));
    }
}
