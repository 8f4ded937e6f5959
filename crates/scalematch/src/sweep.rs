//! Multi-scale candidate generation.
//!
//! The template is resized to each configured scale, scored against the
//! screenshot, and every window at or above the threshold becomes a
//! candidate box at that scale's dimensions. Scales are independent, so
//! with the `parallel` feature they are scored on the rayon pool; the
//! per-scale results are flattened in scale order either way, keeping the
//! candidate list deterministic.

use image::imageops::{self, FilterType};
use image::GrayImage;
use tracing::debug;

use crate::bbox::BBox;
use crate::config::MatchConfig;
use crate::ncc::{self, TemplatePlan};

/// Score one resized template against the screenshot and collect every
/// window at or above `threshold`.
fn scan_scale(
    screenshot: &GrayImage,
    template: &GrayImage,
    scale: f64,
    threshold: f32,
) -> Vec<BBox> {
    let (sw, sh) = screenshot.dimensions();
    let (tw, th) = template.dimensions();
    let rw = (tw as f64 * scale) as u32;
    let rh = (th as f64 * scale) as u32;

    // A scale is skipped when the resized template degenerates or no
    // longer fits inside the screenshot.
    if rw == 0 || rh == 0 || rw > sw || rh > sh {
        debug!(scale, rw, rh, "scale skipped");
        return Vec::new();
    }

    let resized = imageops::resize(template, rw, rh, FilterType::Triangle);
    let plan = TemplatePlan::new(&resized);
    let scores = ncc::score_map(screenshot, &plan);

    let mut hits = Vec::new();
    for (x, y, px) in scores.enumerate_pixels() {
        if px[0] >= threshold {
            hits.push(BBox::new(x, y, rw, rh));
        }
    }
    debug!(scale, hits = hits.len(), "scale scanned");
    hits
}

/// Run the full scale sweep and return every candidate above `threshold`,
/// in scale order and row-major within each scale.
pub fn sweep(
    screenshot: &GrayImage,
    template: &GrayImage,
    threshold: f32,
    config: &MatchConfig,
) -> Vec<BBox> {
    let scales = config.scales();

    #[cfg(feature = "parallel")]
    let per_scale: Vec<Vec<BBox>> = {
        use rayon::prelude::*;
        scales
            .par_iter()
            .map(|&scale| scan_scale(screenshot, template, scale, threshold))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_scale: Vec<Vec<BBox>> = scales
        .iter()
        .map(|&scale| scan_scale(screenshot, template, scale, threshold))
        .collect();

    per_scale.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{embed, textured_image};

    #[test]
    fn embedded_template_is_found_at_its_own_size() {
        // The 20-step grid holds no exact 1.0, but the scale just above it
        // truncates a small template back to its original dimensions, so
        // the embedding site scores a perfect window.
        let template = textured_image(24, 18, 9);
        let mut screenshot = textured_image(120, 90, 1);
        embed(&mut screenshot, &template, 40, 30);

        let hits = sweep(&screenshot, &template, 0.999, &MatchConfig::default());
        assert!(
            hits.contains(&BBox::new(40, 30, 24, 18)),
            "expected an exact hit at the embedding site, got {hits:?}"
        );
    }

    #[test]
    fn no_candidate_exceeds_screenshot_bounds() {
        let template = textured_image(36, 36, 3);
        let mut screenshot = textured_image(60, 60, 2);
        embed(&mut screenshot, &template, 5, 5);

        let hits = sweep(&screenshot, &template, 0.7, &MatchConfig::default());
        assert!(!hits.is_empty());
        for hit in &hits {
            assert!(hit.right() <= 60 && hit.bottom() <= 60, "{hit:?} leaks past the edge");
        }
    }

    #[test]
    fn one_pixel_template_produces_no_candidates() {
        // Scales below 1.0 shrink a 1x1 template to zero size and are
        // skipped; the remaining scales leave it flat, which scores zero.
        let template = textured_image(1, 1, 4);
        let screenshot = textured_image(30, 30, 5);
        let hits = sweep(&screenshot, &template, 0.5, &MatchConfig::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn threshold_one_rejects_inexact_content() {
        let template = textured_image(20, 20, 6);
        let screenshot = textured_image(80, 80, 8);
        assert!(sweep(&screenshot, &template, 1.0, &MatchConfig::default()).is_empty());
    }

    #[test]
    fn sweep_is_deterministic() {
        let template = textured_image(16, 16, 11);
        let mut screenshot = textured_image(100, 100, 12);
        embed(&mut screenshot, &template, 20, 60);

        let first = sweep(&screenshot, &template, 0.9, &MatchConfig::default());
        let second = sweep(&screenshot, &template, 0.9, &MatchConfig::default());
        assert_eq!(first, second);
    }
}
