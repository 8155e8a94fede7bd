//! Event color derivation.
//!
//! Events without an explicit color get one derived from their label, so the
//! same label always paints the same hue. Event blocks are filled with a
//! translucent tint of the resolved color while the border keeps it opaque.

/// Fallback used when neither a color nor a label is available
pub const DEFAULT_FALLBACK_COLOR: &str = "#03a9f4";

const SATURATION: f64 = 70.0;
const LIGHTNESS: f64 = 45.0;

/// Alpha suffix appended to hex colors (0x40 ≈ 25%)
const HEX_TINT_ALPHA: &str = "40";
const RGBA_TINT_ALPHA: &str = "0.25";

/// Resolves event colors against a theme-provided fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssigner {
    fallback: String,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_COLOR)
    }
}

impl ColorAssigner {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    /// Color for an event: the explicit color when set, otherwise derived from the label.
    pub fn resolve(&self, explicit: Option<&str>, label: &str) -> String {
        match explicit.map(str::trim).filter(|c| !c.is_empty()) {
            Some(color) => color.to_string(),
            None => self.color_for(Some(label)),
        }
    }

    /// Derive a stable `rgb(r, g, b)` color from a label.
    ///
    /// Empty or missing labels get the fallback color.
    pub fn color_for(&self, label: Option<&str>) -> String {
        match label.filter(|l| !l.is_empty()) {
            Some(label) => {
                let hue = (label_hash(label).unsigned_abs() % 360) as f64;
                let (r, g, b) = hsl_to_rgb(hue, SATURATION, LIGHTNESS);
                format!("rgb({}, {}, {})", r, g, b)
            }
            None => self.fallback.clone(),
        }
    }
}

/// Rolling `c + (h << 5) - h` hash over UTF-16 code units.
///
/// The shift operates on the low 32 bits of the accumulator while the
/// subtraction and addition do not, so the accumulator may leave the i32
/// range between steps.
fn label_hash(label: &str) -> i64 {
    label.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        i64::from(unit) + (shifted - hash)
    })
}

/// Analytic HSL to RGB. `h` in degrees, `s` and `l` in percent.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let l = l / 100.0;
    let k = |n: f64| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| l - a * (-1.0f64).max((k(n) - 3.0).min((9.0 - k(n)).min(1.0)));
    let channel = |n: f64| (255.0 * f(n)).round().clamp(0.0, 255.0) as u8;
    (channel(0.0), channel(8.0), channel(4.0))
}

/// Translucent fill for an event block.
///
/// Hex colors get an alpha suffix, `rgb(...)` becomes `rgba(..., 0.25)`;
/// any other syntax is returned as-is.
pub fn tint_for(color: &str) -> String {
    let color = color.trim();
    if color.starts_with('#') {
        return format!("{}{}", color, HEX_TINT_ALPHA);
    }
    if let Some(channels) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return format!("rgba({}, {})", channels.trim(), RGBA_TINT_ALPHA);
    }
    color.to_string()
}
