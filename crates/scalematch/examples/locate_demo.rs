//! Synthesizes a screenshot with an embedded widget, writes both images
//! to a temp directory, then locates the widget from disk.
//!
//! Run with `cargo run --example locate_demo`.

use image::{imageops, GrayImage, Luma};
use scalematch::{locate, MatchConfig, Report};

/// Smooth texture with per-seed frequencies, so different seeds yield
/// patterns that stay decorrelated across the whole scale sweep.
fn textured(width: u32, height: u32, seed: u32) -> GrayImage {
    let fx = 0.23 + seed as f64 * 0.011;
    let fy = 0.31 + seed as f64 * 0.007;
    GrayImage::from_fn(width, height, |x, y| {
        let v = 128.0 + 80.0 * (x as f64 * fx).sin() * (y as f64 * fy).cos();
        Luma([v.clamp(0.0, 255.0) as u8])
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = std::env::temp_dir().join("scalematch-demo");
    std::fs::create_dir_all(&out)?;

    let template = textured(36, 24, 30);
    let mut screenshot = textured(320, 240, 1);
    imageops::replace(&mut screenshot, &template, 120, 90);

    let screenshot_path = out.join("screenshot.png");
    let template_path = out.join("template.png");
    screenshot.save(&screenshot_path)?;
    template.save(&template_path)?;

    // The widget's top-left corner is at (120, 90), so the reported
    // center lands at (138, 102).
    let selection = locate(&screenshot_path, &template_path, 0.9, 0, &MatchConfig::default())?;
    println!("{}", Report::success(&selection).to_json_line());
    Ok(())
}
