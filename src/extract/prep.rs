use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::io::Cursor;

/// Longest image side submitted to the engine. Larger scans are downscaled
/// before submission; detection quality does not improve past this and the
/// engine gets unstable on very large inputs.
pub const MAX_SIDE: u32 = 1600;

/// Decode the uploaded bytes, downscale so the longest side is at most
/// `max_side` (Lanczos3), and re-encode as PNG. Images already within bounds
/// are re-encoded as-is so the engine always receives PNG bytes.
pub fn prepare_image(bytes: &[u8], max_side: u32) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).context("decoding input image")?;
    let (w, h) = (img.width(), img.height());
    let img = if w.max(h) > max_side {
        img.resize(max_side, max_side, FilterType::Lanczos3)
    } else {
        img
    };
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encoding PNG for engine")?;
    Ok(out.into_inner())
}
