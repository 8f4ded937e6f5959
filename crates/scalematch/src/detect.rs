//! End-to-end match detection.
//!
//! Stages:
//! 1. Load both images and collapse them to grayscale.
//! 2. Sweep the template across the configured scale range and collect
//!    every window scoring at or above the threshold.
//! 3. Suppress overlapping candidates.
//! 4. Order survivors by their top edge and select one by index.

use std::path::Path;

use image::GrayImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bbox::BBox;
use crate::config::MatchConfig;
use crate::{nms, sweep, Error, ImageRole, Result};

/// The match a caller asked for, plus how many matches survived overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSelection {
    /// Center of the selected box, `[x, y]`, integer division of the span.
    pub center: [u32; 2],
    /// Width and height of the selected box.
    pub size: [u32; 2],
    /// Total number of matches after suppression.
    pub matches_count: usize,
}

/// Detect every match of `template` in `screenshot` at or above
/// `threshold`, deduplicated and sorted by ascending top edge.
pub fn find_matches(
    screenshot: &GrayImage,
    template: &GrayImage,
    threshold: f32,
    config: &MatchConfig,
) -> Vec<BBox> {
    let candidates = sweep::sweep(screenshot, template, threshold, config);
    info!("{} candidates above threshold {}", candidates.len(), threshold);

    let mut matches = nms::suppress(&candidates, config.overlap_threshold);
    matches.sort_by_key(|b| b.y);
    info!("{} matches kept after suppression", matches.len());
    matches
}

/// Pick the `match_index`-th match. An index past the end clamps to the
/// last match; only an empty list yields `None`.
pub fn select_match(matches: &[BBox], match_index: usize) -> Option<MatchSelection> {
    if matches.is_empty() {
        return None;
    }
    let chosen = &matches[match_index.min(matches.len() - 1)];
    Some(MatchSelection {
        center: chosen.center(),
        size: [chosen.width, chosen.height],
        matches_count: matches.len(),
    })
}

/// Load both images from disk, run the full pipeline, and return the
/// selected match.
pub fn locate(
    screenshot_path: &Path,
    template_path: &Path,
    threshold: f32,
    match_index: usize,
    config: &MatchConfig,
) -> Result<MatchSelection> {
    // Both paths are checked before either file is decoded.
    ensure_exists(screenshot_path, ImageRole::Screenshot)?;
    ensure_exists(template_path, ImageRole::Template)?;
    let screenshot = decode_gray(screenshot_path, ImageRole::Screenshot)?;
    let template = decode_gray(template_path, ImageRole::Template)?;

    let matches = find_matches(&screenshot, &template, threshold, config);
    select_match(&matches, match_index).ok_or(Error::NoMatch { threshold })
}

fn ensure_exists(path: &Path, role: ImageRole) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::ImageNotFound { role, path: path.to_path_buf() })
    }
}

fn decode_gray(path: &Path, role: ImageRole) -> Result<GrayImage> {
    let decoded = image::open(path).map_err(|source| Error::ImageDecode {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_luma8())
}
