//! scalematch — multi-scale template matching for UI automation.
//!
//! Given a screenshot and a smaller template image, the crate reports
//! where the template appears even when the on-screen rendering is
//! scaled. The pipeline:
//!
//! 1. **Scale sweep**: resize the template to each scale in the
//!    configured range ([`MatchConfig::scales`]).
//! 2. **Scoring**: slide each resized template over the screenshot and
//!    compute a zero-mean normalized cross-correlation per window
//!    ([`ncc::score_map`]), which makes the score invariant to uniform
//!    brightness shifts.
//! 3. **Thresholding**: windows scoring at or above the caller's
//!    threshold become candidate boxes.
//! 4. **Suppression**: overlapping candidates are deduplicated
//!    ([`nms::suppress`]).
//! 5. **Selection**: survivors are ordered by their top edge and one is
//!    picked by index ([`select_match`]).
//!
//! # Public API
//!
//! [`locate`] runs the whole pipeline from two image paths and is what
//! the CLI wraps. [`find_matches`] does the same from already-decoded
//! grayscale images, for callers that capture screenshots in memory.
//! [`Report`] renders either outcome as a single JSON line.

use std::fmt;
use std::path::PathBuf;

pub mod bbox;
pub mod config;
pub mod detect;
pub mod ncc;
pub mod nms;
pub mod report;
mod sweep;

#[cfg(test)]
mod test_utils;

pub use bbox::BBox;
pub use config::MatchConfig;
pub use detect::{find_matches, locate, select_match, MatchSelection};
pub use report::Report;

/// Which of the two input images an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Screenshot,
    Template,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Screenshot => f.write_str("screenshot"),
            ImageRole::Template => f.write_str("template"),
        }
    }
}

/// Errors produced by the matching pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input path does not exist on disk.
    #[error("{role} file not found: {}", .path.display())]
    ImageNotFound { role: ImageRole, path: PathBuf },

    /// An input file exists but cannot be decoded as an image.
    #[error("cannot decode {role} {}: {source}", .path.display())]
    ImageDecode {
        role: ImageRole,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The sweep finished without a single surviving match.
    #[error("no match found above threshold {threshold}")]
    NoMatch { threshold: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
