use crate::errors::WibarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bar dimension, either absolute or relative to the screen it lives on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "SizeToken", into = "SizeToken")]
pub enum Size {
    Pixel(u32),
    /// Whole percent of the matching screen dimension.
    Percentage(u32),
}

/// How a size is written in a config file: `24` or `"24"` or `"40%"`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
enum SizeToken {
    Number(u32),
    Text(String),
}

impl Size {
    /// Turn the size into an absolute value, the pixel value
    /// will be returned as is, the percentage value is taken
    /// of the provided `whole`, rounded down and clamped to `u32::MAX`.
    #[must_use]
    pub fn into_absolute(self, whole: i32) -> u32 {
        match self {
            Size::Pixel(x) => x,
            Size::Percentage(p) => {
                let whole = u64::from(whole.max(0).unsigned_abs());
                u32::try_from(whole * u64::from(p) / 100).unwrap_or(u32::MAX)
            }
        }
    }
}

impl FromStr for Size {
    type Err = WibarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || WibarError::InvalidSize(s.to_owned());
        let (digits, percent) = match token.strip_suffix('%') {
            Some(digits) => (digits, true),
            None => (token, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = digits.parse::<u32>().map_err(|_| invalid())?;
        Ok(if percent {
            Size::Percentage(value)
        } else {
            Size::Pixel(value)
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Pixel(x) => write!(f, "{x}"),
            Size::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

impl TryFrom<SizeToken> for Size {
    type Error = WibarError;

    fn try_from(token: SizeToken) -> Result<Self, Self::Error> {
        match token {
            SizeToken::Number(x) => Ok(Size::Pixel(x)),
            SizeToken::Text(text) => text.parse(),
        }
    }
}

impl From<Size> for SizeToken {
    fn from(size: Size) -> Self {
        match size {
            Size::Pixel(x) => SizeToken::Number(x),
            Size::Percentage(_) => SizeToken::Text(size.to_string()),
        }
    }
}
