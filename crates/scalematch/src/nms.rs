//! Greedy suppression of overlapping candidates.
//!
//! The policy is deliberately not IoU-based. Candidates are sorted by
//! ascending top edge; each greedy step keeps the last remaining candidate
//! (greatest `y`, latest among ties) and drops every other candidate whose
//! *own* area is covered beyond the threshold. Normalizing by the
//! candidate's area rather than the union means a small candidate mostly
//! inside a kept box is dropped even when it covers little of that box.
//! This changes which box survives in ambiguous cases, so it must not be
//! swapped for IoU.

use crate::bbox::BBox;

/// Deduplicate `boxes`, dropping candidates whose overlap ratio against an
/// already kept box exceeds `overlap_threshold`.
///
/// The ratio for candidate `j` against kept box `i` is
/// `intersection_area(i, j) / area(j)`. Survivors come out in pick order
/// (descending along the sorted top edges); callers wanting presentation
/// order re-sort by `y`.
pub fn suppress(boxes: &[BBox], overlap_threshold: f64) -> Vec<BBox> {
    if boxes.is_empty() {
        return Vec::new();
    }

    // Stable ascending-y order; ties keep emission order.
    let mut remaining: Vec<usize> = (0..boxes.len()).collect();
    remaining.sort_by_key(|&i| boxes[i].y);

    let mut kept = Vec::new();
    while let Some(i) = remaining.pop() {
        kept.push(boxes[i]);
        remaining.retain(|&j| {
            let covered = boxes[i].intersection_area(&boxes[j]) as f64 / boxes[j].area() as f64;
            covered <= overlap_threshold
        });
    }
    kept
}
