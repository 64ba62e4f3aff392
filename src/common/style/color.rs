use std::fmt;
use std::str::FromStr;

use crate::ooxml::error::OoxmlError;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// This is the value carried by a DrawingML `a:srgbClr` element.
///
/// # Examples
///
/// ```rust
/// use sheetchart::common::RGBColor;
///
/// let red = RGBColor::new(255, 0, 0);
/// assert_eq!(RGBColor::from_hex("#FF0000"), Some(red));
/// assert_eq!(red.to_hex(), "FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` or `AARRGGBB` (the alpha byte is dropped), with an
    /// optional leading `#`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetchart::common::RGBColor;
    ///
    /// assert_eq!(RGBColor::from_hex("3C2F80"), Some(RGBColor::new(0x3C, 0x2F, 0x80)));
    /// assert_eq!(RGBColor::from_hex("FF3C2F80"), Some(RGBColor::new(0x3C, 0x2F, 0x80)));
    /// assert_eq!(RGBColor::from_hex("red"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let rgb = match hex.len() {
            6 => hex,
            8 => hex.get(2..)?,
            _ => return None,
        };
        if !rgb.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&rgb[0..2], 16).ok()?;
        let g = u8::from_str_radix(&rgb[2..4], 16).ok()?;
        let b = u8::from_str_radix(&rgb[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without `#` prefix, as written to `srgbClr@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| OoxmlError::InvalidFormat(format!("invalid color '{}'", s)))
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
