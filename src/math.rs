//! Channel math — conversions between the 0–255 display scale and the
//! normalized 0.0–1.0 internal scale, plus track gradient rasterization.

/// Upper bound of the display scale.
pub const DISPLAY_MAX: f64 = 255.0;

/// Clamp to 0.0–1.0. NaN maps to 0.0.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Internal → display: `round(v * 255)`.
pub(crate) fn to_display(v: f64) -> u8 {
    (clamp_unit(v) * DISPLAY_MAX).round() as u8
}

/// Display → internal: `d / 255`, clamped to 0.0–1.0.
pub(crate) fn from_display(d: f64) -> f64 {
    clamp_unit(d / DISPLAY_MAX)
}

/// Integer display text with no decimals, e.g. `"128"`.
pub(crate) fn format_display(v: f64) -> String {
    format!("{}", to_display(v))
}

/// Rasterize a horizontal gradient through `stops` (evenly spaced, left to
/// right) into an RGBA8 buffer.
#[cfg_attr(not(feature = "gradient"), allow(dead_code))]
pub(crate) fn rasterize_stops(width: u32, height: u32, stops: &[(f64, f64, f64)]) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    if stops.is_empty() {
        return buf;
    }
    let segments = (stops.len() - 1).max(1) as f64;
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(stops.len().saturating_sub(2));
        let (r, g, b) = if stops.len() == 1 {
            stops[0]
        } else {
            let f = pos - i as f64;
            let (r0, g0, b0) = stops[i];
            let (r1, g1, b1) = stops[i + 1];
            (r0 + (r1 - r0) * f, g0 + (g1 - g0) * f, b0 + (b1 - b0) * f)
        };
        let cr = (r * 255.0 + 0.5) as u8;
        let cg = (g * 255.0 + 0.5) as u8;
        let cb = (b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}
