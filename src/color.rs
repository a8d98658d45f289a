use crate::Scalar;
use bytemuck::{Pod, Zeroable};
use std::{fmt, str::FromStr};

/// ARGB color packed as u32 value, alpha occupies the most significant byte
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x00000000);
    pub const BLACK: Argb = Argb(0xff000000);
    pub const WHITE: Argb = Argb(0xffffffff);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Components in `[a, r, g, b]` order
    pub const fn to_argb(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl From<StopColor> for Argb {
    /// Channels are rounded and clamped to `[0, 255]`
    fn from(color: StopColor) -> Self {
        let quantize = |value: Scalar| (value + 0.5).clamp(0.0, 255.0) as u8;
        Argb::new(
            quantize(color.a),
            quantize(color.r),
            quantize(color.g),
            quantize(color.b),
        )
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({})", self)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, r, g, b] = self.to_argb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        if color.starts_with('#') && (color.len() == 7 || color.len() == 9) {
            // #RRGGBB(AA)
            let bytes: &[u8] = color[1..].as_ref();
            let digit = |byte| match byte {
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(ColorError::HexExpected),
            };
            let mut hex = bytes
                .chunks(2)
                .map(|pair| Ok((digit(pair[0])? << 4) | digit(pair[1])?));
            let r = hex.next().unwrap_or(Ok(0))?;
            let g = hex.next().unwrap_or(Ok(0))?;
            let b = hex.next().unwrap_or(Ok(0))?;
            let a = hex.next().unwrap_or(Ok(255))?;
            Ok(Argb::new(a, r, g, b))
        } else {
            Err(ColorError::HexExpected)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let color = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        color.parse().map_err(serde::de::Error::custom)
    }
}

/// Color of a gradient stop, channels are in `[0, 255]` range and not premultiplied
///
/// Channels are kept as floating point values, blending results are not
/// rounded before they reach the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StopColor {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
    pub a: Scalar,
}

impl StopColor {
    pub fn new(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Self {
        Self { r, g, b, a }
    }

    /// Weighted sum `self * factor + other * (1 - factor)` of each channel
    pub fn weighted(self, other: Self, factor: Scalar) -> Self {
        let mix = |c0: Scalar, c1: Scalar| c0 * factor + c1 * (1.0 - factor);
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Linear interpolation between self (`t = 0`) and other (`t = 1`)
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        other.weighted(self, t)
    }

    /// Convert sRGB encoded color channels into linear light, alpha is untouched
    pub fn into_linear(self) -> Self {
        let conv = |c: Scalar| srgb_to_linear(c / 255.0) * 255.0;
        Self::new(conv(self.r), conv(self.g), conv(self.b), self.a)
    }

    /// Convert linear light color channels into sRGB encoding, alpha is untouched
    pub fn into_srgb(self) -> Self {
        let conv = |c: Scalar| linear_to_srgb(c / 255.0) * 255.0;
        Self::new(conv(self.r), conv(self.g), conv(self.b), self.a)
    }
}

impl From<Argb> for StopColor {
    fn from(color: Argb) -> Self {
        let [a, r, g, b] = color.to_argb();
        Self::new(r as Scalar, g as Scalar, b as Scalar, a as Scalar)
    }
}

/// Convert Linear RGB color component into a SRGB color component.
#[inline]
pub fn linear_to_srgb(value: Scalar) -> Scalar {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert SRGB color component into a Linear RGB color component.
#[inline]
pub fn srgb_to_linear(value: Scalar) -> Scalar {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Debug, Clone)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB(AA) in hexidemical format")
            }
        }
    }
}

impl std::error::Error for ColorError {}
