/// Converts an RGB triple in `[0, 1]` into `#rrggbb`.
///
/// Out-of-range channels are clamped and non-finite channels read as zero,
/// so the result always has six lowercase hex digits.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// `#rrggbb` with an alpha byte in front (`#aarrggbb`), the form Android
/// color parsers accept for translucent colors.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    format!("#{:02x}{}", channel(alpha), hex.trim_start_matches('#'))
}

fn channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
