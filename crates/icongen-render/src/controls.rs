//! Control model for the generated preview page.
//!
//! The preview page lets a developer try a color override and a rotation on
//! the selected icon. The conversions and wrapping rules live here as the
//! single definition; the page renderer splices the constants into the
//! emitted script so the browser-side controls and this model agree.
//!
//! # Examples
//!
//! ```
//! use icongen_render::controls::{normalize_rotation, Rgb};
//!
//! let color = Rgb::parse_hex("#1af").unwrap();
//! assert_eq!(color.to_hex(), "#11aaff");
//! assert_eq!(color.to_css(), "rgb(17, 170, 255)");
//!
//! assert_eq!(normalize_rotation(315), 315);
//! assert_eq!(normalize_rotation(360), 0);
//! ```

/// Degrees added or subtracted per rotation button press.
pub const ROTATE_STEP_DEG: i32 = 45;

/// Rotation magnitude at which the angle wraps back to zero.
pub const ROTATE_LIMIT_DEG: i32 = 360;

/// Default swatch shown as the color input placeholder.
pub const DEFAULT_SWATCH: Rgb = Rgb::new(0x38, 0xbd, 0xf8);

/// An RGB triple with channels in `[0, 255]`.
///
/// Parses from either of the two interchangeable input formats the preview
/// accepts - `#RGB`/`#RRGGBB` hex and `rgb(r, g, b)` - and renders back to
/// both. Out-of-range textual channels are clamped on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from exact channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from arbitrary channel numbers, clamping to `[0, 255]`.
    #[must_use]
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parses a `#RGB` or `#RRGGBB` hex string (leading `#` optional).
    ///
    /// Returns `None` for any other length or for non-hex digits.
    #[must_use]
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().trim_start_matches('#');
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
            6 => hex.to_owned(),
            _ => return None,
        };
        let value = u32::from_str_radix(&expanded, 16).ok()?;
        Some(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Parses an `rgb(r, g, b)` string.
    ///
    /// Whitespace is ignored, the prefix is matched case-insensitively, and
    /// an `rgba(...)` trailing alpha component is tolerated and discarded.
    /// Channels longer than three digits are rejected; in-range parsing is
    /// clamped to `[0, 255]`.
    #[must_use]
    pub fn parse_css(input: &str) -> Option<Self> {
        let compact: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
        let lower = compact.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        let parts: Vec<&str> = body.split(',').collect();
        let channels = match parts.as_slice() {
            [r, g, b] => [*r, *g, *b],
            // Alpha is accepted but ignored.
            [r, g, b, alpha] if alpha.parse::<f64>().is_ok() => [*r, *g, *b],
            _ => return None,
        };

        let mut parsed = [0_i64; 3];
        for (slot, channel) in parsed.iter_mut().zip(channels) {
            if channel.is_empty() || channel.len() > 3 {
                return None;
            }
            *slot = channel.parse().ok()?;
        }

        Some(Self::from_channels(parsed[0], parsed[1], parsed[2]))
    }

    /// Renders the canonical lowercase 6-digit hex form, e.g. `#38bdf8`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Renders the `rgb(r, g, b)` form, e.g. `rgb(56, 189, 248)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Normalizes a rotation angle to stay within `(-360, 360)` degrees.
///
/// A value reaching the limit in either direction wraps to zero; anything
/// strictly inside the range passes through unchanged.
#[must_use]
pub const fn normalize_rotation(deg: i32) -> i32 {
    if deg >= ROTATE_LIMIT_DEG || deg <= -ROTATE_LIMIT_DEG {
        0
    } else {
        deg
    }
}

/// Applies a rotation step and normalizes the result.
#[must_use]
pub const fn step_rotation(current: i32, delta: i32) -> i32 {
    normalize_rotation(current.saturating_add(delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_canonicalizes() {
        let short = Rgb::parse_hex("#1af").expect("3-digit hex parses");
        assert_eq!(short.to_hex(), "#11aaff");

        let long = Rgb::parse_hex("38BDF8").expect("6-digit hex parses");
        assert_eq!(long.to_hex(), "#38bdf8");
        assert_eq!(Rgb::parse_hex(&long.to_hex()), Some(long));
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(Rgb::parse_hex("#12"), None);
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#gggggg"), None);
        assert_eq!(Rgb::parse_hex(""), None);
    }

    #[test]
    fn test_css_round_trip() {
        let color = Rgb::new(56, 189, 248);
        let text = color.to_css();
        assert_eq!(text, "rgb(56, 189, 248)");
        assert_eq!(Rgb::parse_css(&text), Some(color));
    }

    #[test]
    fn test_css_parse_tolerates_whitespace_and_case() {
        assert_eq!(
            Rgb::parse_css("RGB( 1 , 2 , 3 )"),
            Some(Rgb::new(1, 2, 3))
        );
        assert_eq!(
            Rgb::parse_css("rgba(1,2,3,0.5)"),
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn test_css_parse_clamps_out_of_range() {
        assert_eq!(
            Rgb::parse_css("rgb(300, 999, 0)"),
            Some(Rgb::new(255, 255, 0))
        );
    }

    #[test]
    fn test_css_rejects_bad_input() {
        assert_eq!(Rgb::parse_css("rgb(1, 2)"), None);
        assert_eq!(Rgb::parse_css("rgb(1, 2, 3, x)"), None);
        assert_eq!(Rgb::parse_css("rgb(1234, 2, 3)"), None);
        assert_eq!(Rgb::parse_css("hsl(1, 2%, 3%)"), None);
    }

    #[test]
    fn test_from_channels_clamps() {
        assert_eq!(Rgb::from_channels(-5, 0, 999), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_rotation_passes_through_in_range() {
        assert_eq!(normalize_rotation(0), 0);
        assert_eq!(normalize_rotation(359), 359);
        assert_eq!(normalize_rotation(-359), -359);
    }

    #[test]
    fn test_rotation_wraps_at_limit() {
        assert_eq!(normalize_rotation(360), 0);
        assert_eq!(normalize_rotation(-360), 0);
        assert_eq!(normalize_rotation(720), 0);
    }

    #[test]
    fn test_repeated_steps_wrap_instead_of_growing() {
        let mut deg = 0;
        for _ in 0..16 {
            deg = step_rotation(deg, ROTATE_STEP_DEG);
            assert!(deg.abs() < ROTATE_LIMIT_DEG);
        }
        // 8 steps of 45 reach 360 and wrap, so two full laps end at zero.
        assert_eq!(deg, 0);
    }
}
