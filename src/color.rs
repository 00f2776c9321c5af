//! SolidColor and Fill — the color values exchanged with the host.
//!
//! `SolidColor` stores RGBA as f64 values in 0.0–1.0 range. `Fill` is what a
//! host hands the panel; only solid fills decompose into RGB channels.

use crate::error::DecompositionError;
use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: math::from_display(r as f64),
            g: math::from_display(g as f64),
            b: math::from_display(b as f64),
            a: 1.0,
        }
    }

    /// Create from f64 RGBA (all 0.0–1.0). Out-of-range components are clamped.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp_unit(r),
            g: math::clamp_unit(g),
            b: math::clamp_unit(b),
            a: math::clamp_unit(a),
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            math::to_display(self.r),
            math::to_display(self.g),
            math::to_display(self.b),
        )
    }

    /// Parse a 6-char hex string, with or without `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
        let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
        let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
        Some(Self::from_rgb(r, g, b))
    }

    /// Format as uppercase RRGGBB hex (no `#` prefix). Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// A paint supplied by the host when presenting the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(SolidColor),
    /// A color in a grayscale-only space.
    Gray { white: f64, alpha: f64 },
    /// A pattern image, identified by name.
    Pattern(String),
}

impl Fill {
    /// Split the fill into independent RGBA channels.
    ///
    /// Only solid fills are representable; grayscale and pattern fills are
    /// reported as [`DecompositionError`] so the caller can keep its
    /// previous state.
    pub fn decompose(&self) -> Result<SolidColor, DecompositionError> {
        match self {
            Fill::Solid(c) => Ok(*c),
            Fill::Gray { .. } => Err(DecompositionError::Grayscale),
            Fill::Pattern(name) => Err(DecompositionError::Pattern(name.clone())),
        }
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Solid(SolidColor::WHITE)
    }
}

impl From<SolidColor> for Fill {
    fn from(c: SolidColor) -> Self {
        Fill::Solid(c)
    }
}
