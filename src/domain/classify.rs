//! Pixel-statistics material classification.
//!
//! The demo's "scan" reduces to this: average the sampled pixels, match the
//! mean color against the catalog, and damp the score when the patch is too
//! noisy to be a single material.

use serde::Serialize;

use crate::domain::catalog::MaterialCatalog;
use crate::domain::material::MaterialId;

/// Cap on sampled pixels; larger inputs are strided over.
const MAX_SAMPLES: usize = 4096;

/// Maximum RGB euclidean distance (sqrt(3 * 255^2))
const MAX_COLOR_DIST: f32 = 441.673;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub material_id: MaterialId,
    pub key: String,
    pub confidence: f32,
}

/// Classify an RGBA8 pixel buffer against the catalog.
///
/// Returns the nearest-color material and a confidence in [0, 1].
pub fn classify_rgba(
    catalog: &MaterialCatalog,
    rgba: &[u8],
    width: u32,
    height: u32,
) -> Result<ScanResult, String> {
    let pixel_count = (width as usize) * (height as usize);
    if pixel_count == 0 {
        return Err("empty scan region".to_string());
    }
    if rgba.len() < pixel_count * 4 {
        return Err(format!(
            "pixel buffer too short: need {} bytes, got {}",
            pixel_count * 4,
            rgba.len()
        ));
    }
    if catalog.material_count() == 0 {
        return Err("catalog is empty".to_string());
    }

    let stride = (pixel_count / MAX_SAMPLES).max(1);

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_luma = 0.0f64;
    let mut sum_luma_sq = 0.0f64;
    let mut samples = 0.0f64;

    for p in (0..pixel_count).step_by(stride) {
        let o = p * 4;
        let r = rgba[o] as f64;
        let g = rgba[o + 1] as f64;
        let b = rgba[o + 2] as f64;
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;

        sum_r += r;
        sum_g += g;
        sum_b += b;
        sum_luma += luma;
        sum_luma_sq += luma * luma;
        samples += 1.0;
    }

    let mean_r = (sum_r / samples) as f32;
    let mean_g = (sum_g / samples) as f32;
    let mean_b = (sum_b / samples) as f32;
    let mean_luma = sum_luma / samples;
    let variance = (sum_luma_sq / samples - mean_luma * mean_luma).max(0.0);
    let std_dev = variance.sqrt() as f32;

    let mut best: Option<(MaterialId, f32)> = None;
    for idx in 0..catalog.material_count() {
        let id = idx as MaterialId;
        let color = match catalog.props(id) {
            Some(p) => p.color,
            None => continue,
        };
        let r = ((color >> 16) & 0xFF) as f32;
        let g = ((color >> 8) & 0xFF) as f32;
        let b = (color & 0xFF) as f32;

        let dr = r - mean_r;
        let dg = g - mean_g;
        let db = b - mean_b;
        let dist = (dr * dr + dg * dg + db * db).sqrt();

        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((id, dist)),
        }
    }

    let (material_id, dist) = best.ok_or_else(|| "catalog is empty".to_string())?;
    let material = catalog
        .material(material_id)
        .ok_or_else(|| format!("missing material id {}", material_id))?;

    let color_score = 1.0 - (dist / MAX_COLOR_DIST).min(1.0);
    let uniformity = (1.0 - std_dev / 128.0).clamp(0.0, 1.0);
    let confidence =
        ((0.6 * color_score + 0.4 * uniformity) * material.confidence).clamp(0.0, 1.0);

    Ok(ScanResult {
        material_id,
        key: material.key.clone(),
        confidence,
    })
}
