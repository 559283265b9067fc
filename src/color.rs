//! Colour values as they arrive from a colour table, and their normalised form.
//!
//! A colour table entry can hold one of several raw shapes:
//! - a 3-component float tuple in `[0, 1]` (matplotlib's `BASE_COLORS`)
//! - a 3-component tuple already in `[0, 255]`
//! - a 7-character `#RRGGBB` hex string (`CSS4_COLORS`, `XKCD_COLORS`)
//!
//! Every accepted shape normalises to a [`ColorTriplet`] of `u8` channels.
//!
//! # Examples
//!
//! ```
//! use named_color_consts::color::{ColorTriplet, RawColor, normalize_color};
//!
//! let hex = RawColor::hex("#1a2b3c");
//! assert_eq!(normalize_color(&hex).unwrap(), ColorTriplet::new(26, 43, 60));
//!
//! let unit = RawColor::unit(1.0, 0.0, 0.0);
//! assert_eq!(normalize_color(&unit).unwrap().hex(), "#FF0000");
//! ```

use std::fmt;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the uppercase hex form `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the integer tuple form `(r, g, b)`.
    #[must_use]
    pub fn int_tuple(&self) -> String {
        format!("({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Returns the debug form `(r = R, g = G, b = B)`.
    #[must_use]
    pub fn debug_string(&self) -> String {
        format!("(r = {}, g = {}, b = {})", self.red, self.green, self.blue)
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Returns the float tuple form, each channel rounded to two decimals.
    ///
    /// Channels always print with at least one decimal digit: `(1.0, 0.5, 0.0)`.
    #[must_use]
    pub fn float_tuple(&self) -> String {
        let (r, g, b) = self.normalized();
        format!(
            "({:?}, {:?}, {:?})",
            round_2(r),
            round_2(g),
            round_2(b)
        )
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for ColorTriplet {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Range of the channels of a numeric colour tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TupleScale {
    /// Channels are floats in `[0, 1]` and get multiplied by 255.
    #[default]
    Unit,
    /// Channels are already in `[0, 255]`.
    Byte,
}

impl TupleScale {
    const fn factor(self) -> f64 {
        match self {
            Self::Unit => 255.0,
            Self::Byte => 1.0,
        }
    }
}

/// A colour value exactly as a colour table holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawColor {
    /// A 3-component numeric tuple.
    Tuple { channels: [f64; 3], scale: TupleScale },
    /// A string, expected to be `#RRGGBB`.
    Hex(String),
    /// Any other value; `type_name` names its runtime type for diagnostics.
    Other { type_name: String },
}

impl RawColor {
    /// A tuple with channels in `[0, 1]`.
    #[must_use]
    pub const fn unit(red: f64, green: f64, blue: f64) -> Self {
        Self::Tuple {
            channels: [red, green, blue],
            scale: TupleScale::Unit,
        }
    }

    /// A tuple with channels in `[0, 255]`.
    #[must_use]
    pub const fn byte(red: f64, green: f64, blue: f64) -> Self {
        Self::Tuple {
            channels: [red, green, blue],
            scale: TupleScale::Byte,
        }
    }

    /// A hex string value.
    #[must_use]
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Hex(value.into())
    }

    /// A value of some other runtime type.
    #[must_use]
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::Other {
            type_name: type_name.into(),
        }
    }

    /// Name of the runtime type of this value.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Tuple { .. } => "tuple",
            Self::Hex(_) => "str",
            Self::Other { type_name } => type_name,
        }
    }
}

impl From<ColorTriplet> for RawColor {
    fn from(triplet: ColorTriplet) -> Self {
        Self::byte(
            f64::from(triplet.red),
            f64::from(triplet.green),
            f64::from(triplet.blue),
        )
    }
}

/// Error type for colour normalisation.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
    /// Neither a numeric 3-tuple nor a 7-character `#` string.
    UnrecognizedShape {
        type_name: String,
        /// The offending text, when the value was a string.
        value: Option<String>,
    },
    /// A `#RRGGBB`-shaped string with non-hex digits.
    InvalidHex(String),
    /// A tuple channel outside `[0, 255]` after scaling, or not finite.
    ChannelOutOfRange { channel: usize, value: f64 },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedShape { type_name, value } => {
                write!(f, "Unrecognized colour value, type = {type_name}")?;
                match value {
                    Some(value) => write!(f, ": {value:?}"),
                    None => Ok(()),
                }
            }
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
            Self::ChannelOutOfRange { channel, value } => {
                write!(f, "Channel {channel} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Normalise a raw colour value to integer channels.
///
/// # Errors
///
/// - `UnrecognizedShape` for strings that are not 7 characters starting with
///   `#`, and for [`RawColor::Other`]
/// - `InvalidHex` if a `#RRGGBB` string contains non-hex digits
/// - `ChannelOutOfRange` if a scaled tuple channel is not in `[0, 255]`
pub fn normalize_color(raw: &RawColor) -> Result<ColorTriplet, ColorParseError> {
    match raw {
        RawColor::Tuple { channels, scale } => {
            let [r, g, b] = channels;
            Ok(ColorTriplet::new(
                scale_channel(0, *r, *scale)?,
                scale_channel(1, *g, *scale)?,
                scale_channel(2, *b, *scale)?,
            ))
        }
        RawColor::Hex(value) => parse_hex(value),
        RawColor::Other { type_name } => Err(ColorParseError::UnrecognizedShape {
            type_name: type_name.clone(),
            value: None,
        }),
    }
}

fn scale_channel(channel: usize, value: f64, scale: TupleScale) -> Result<u8, ColorParseError> {
    let scaled = value * scale.factor();
    if !(0.0..=255.0).contains(&scaled) {
        return Err(ColorParseError::ChannelOutOfRange {
            channel,
            value: scaled,
        });
    }
    // Truncate toward zero: 0.5 * 255 = 127.5 -> 127.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "verified 0 <= scaled <= 255"
    )]
    let byte = scaled as u8;
    Ok(byte)
}

fn parse_hex(value: &str) -> Result<ColorTriplet, ColorParseError> {
    let Some(hex) = value.strip_prefix('#').filter(|hex| hex.len() == 6) else {
        return Err(ColorParseError::UnrecognizedShape {
            type_name: "str".to_string(),
            value: Some(value.to_string()),
        });
    };
    // from_str_radix alone would accept a leading `+`.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(value.to_string()));
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Ok(ColorTriplet::new(r, g, b)),
        _ => Err(ColorParseError::InvalidHex(value.to_string())),
    }
}

/// Uppercase `#RRGGBB` for an integer triple.
#[must_use]
pub fn to_hex(triplet: impl Into<ColorTriplet>) -> String {
    triplet.into().hex()
}
