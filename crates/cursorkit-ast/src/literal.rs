// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Literal values.
//!
//! Integer literals keep their bit width; they are stored as raw bits and
//! interpreted as signed when rendered. Floating literals keep their IEEE
//! format and render with the front end's float layout.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AstError, Result};

// ============================================================================
// ApInt
// ============================================================================

/// A fixed-width integer of 1 to 128 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ApIntRepr", into = "ApIntRepr")]
pub struct ApInt {
    width: u32,
    bits: u128,
}

/// JSON form: the width plus the value as a decimal string.
#[derive(Serialize, Deserialize)]
struct ApIntRepr {
    width: u32,
    value: String,
}

fn mask(width: u32) -> u128 {
    if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

fn check_width(width: u32) -> Result<()> {
    if (1..=128).contains(&width) {
        Ok(())
    } else {
        Err(AstError::IntegerWidth { width })
    }
}

impl ApInt {
    pub const MAX_WIDTH: u32 = 128;

    /// A 32-bit value; always representable.
    pub fn from_i32(value: i32) -> Self {
        ApInt {
            width: 32,
            bits: u128::from(value as u32),
        }
    }

    /// A value of the given width.
    ///
    /// Accepts anything representable as either a signed or an unsigned
    /// `width`-bit integer, so `255` and `-1` are both valid 8-bit values
    /// (with the same bits).
    pub fn from_i128(value: i128, width: u32) -> Result<Self> {
        check_width(width)?;
        let fits = match width {
            128 => true,
            127 => value >= -(1i128 << 126),
            w => value >= -(1i128 << (w - 1)) && value < (1i128 << w),
        };
        if !fits {
            return Err(AstError::IntegerOverflow {
                value: value.to_string(),
                width,
            });
        }
        Ok(ApInt {
            width,
            bits: (value as u128) & mask(width),
        })
    }

    /// An unsigned value of the given width.
    pub fn from_u128(value: u128, width: u32) -> Result<Self> {
        check_width(width)?;
        if value & !mask(width) != 0 {
            return Err(AstError::IntegerOverflow {
                value: value.to_string(),
                width,
            });
        }
        Ok(ApInt { width, bits: value })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The raw bits, zero-extended.
    pub fn to_unsigned(&self) -> u128 {
        self.bits
    }

    /// The value interpreted as two's complement.
    pub fn to_signed(&self) -> i128 {
        let shift = 128 - self.width;
        ((self.bits << shift) as i128) >> shift
    }

    pub fn is_negative(&self) -> bool {
        self.to_signed() < 0
    }
}

impl fmt::Display for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

impl TryFrom<ApIntRepr> for ApInt {
    type Error = AstError;

    fn try_from(repr: ApIntRepr) -> Result<Self> {
        let text = repr.value.trim();
        if let Ok(value) = text.parse::<i128>() {
            return ApInt::from_i128(value, repr.width);
        }
        match text.parse::<u128>() {
            Ok(value) => ApInt::from_u128(value, repr.width),
            Err(_) => Err(AstError::IntegerOverflow {
                value: repr.value,
                width: repr.width,
            }),
        }
    }
}

impl From<ApInt> for ApIntRepr {
    fn from(value: ApInt) -> Self {
        ApIntRepr {
            width: value.width,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// FloatValue
// ============================================================================

/// Zeros written out before switching to scientific notation.
const MAX_PADDING: i32 = 3;

/// Significant decimal digits that round-trip each format.
const SINGLE_PRECISION_DIGITS: i32 = 9;
const DOUBLE_PRECISION_DIGITS: i32 = 17;

/// A floating literal value in its IEEE format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatValue {
    Single(f32),
    Double(f64),
}

impl FloatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            FloatValue::Single(v) => f64::from(v),
            FloatValue::Double(v) => v,
        }
    }
}

impl From<f64> for FloatValue {
    fn from(value: f64) -> Self {
        FloatValue::Double(value)
    }
}

impl From<f32> for FloatValue {
    fn from(value: f32) -> Self {
        FloatValue::Single(value)
    }
}

/// Renders like the front end's float printer: shortest round-trip digits,
/// plain notation while at most three padding zeros are needed, otherwise
/// `d.dddE+N`.
impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, special, digits, precision) = match *self {
            FloatValue::Single(v) => (
                v.is_sign_negative(),
                special_spelling(v.is_nan(), v.is_infinite(), v == 0.0, v.is_sign_negative()),
                format!("{:e}", v.abs()),
                SINGLE_PRECISION_DIGITS,
            ),
            FloatValue::Double(v) => (
                v.is_sign_negative(),
                special_spelling(v.is_nan(), v.is_infinite(), v == 0.0, v.is_sign_negative()),
                format!("{:e}", v.abs()),
                DOUBLE_PRECISION_DIGITS,
            ),
        };
        if let Some(special) = special {
            return f.write_str(special);
        }
        if negative {
            f.write_str("-")?;
        }
        f.write_str(&layout(&digits, precision))
    }
}

fn special_spelling(nan: bool, infinite: bool, zero: bool, negative: bool) -> Option<&'static str> {
    match (nan, infinite, zero, negative) {
        (true, ..) => Some("NaN"),
        (_, true, _, true) => Some("-Inf"),
        (_, true, _, false) => Some("+Inf"),
        (_, _, true, true) => Some("-0"),
        (_, _, true, false) => Some("0"),
        _ => None,
    }
}

/// Lay out a positive value given in Rust's `{:e}` form (`"1.25e-3"`).
fn layout(scientific: &str, precision: i32) -> String {
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let leading_exp: i32 = exponent.parse().unwrap_or(0);
    let ndigits = digits.len() as i32;
    // Power of ten of the last digit.
    let exp = leading_exp - (ndigits - 1);

    let use_scientific = if exp >= 0 {
        exp > MAX_PADDING || ndigits + exp > precision
    } else {
        leading_exp < 0 && -leading_exp > MAX_PADDING
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if use_scientific {
        out.push_str(&digits[..1]);
        out.push('.');
        if ndigits == 1 {
            out.push('0');
        } else {
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push(if leading_exp >= 0 { '+' } else { '-' });
        out.push_str(&leading_exp.unsigned_abs().to_string());
    } else if exp >= 0 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take(exp as usize));
    } else {
        let whole = leading_exp + 1;
        if whole > 0 {
            let split = whole as usize;
            out.push_str(&digits[..split]);
            out.push('.');
            out.push_str(&digits[split..]);
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(whole.unsigned_abs() as usize));
            out.push_str(&digits);
        }
    }
    out
}

// ============================================================================
// Character and string encodings
// ============================================================================

/// Encoding prefix of a character literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    #[default]
    Ascii,
    Wide,
    Utf8,
    Utf16,
    Utf32,
}

/// Encoding prefix of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
    #[default]
    Ordinary,
    Wide,
    Utf8,
    Utf16,
    Utf32,
}

impl StringKind {
    /// Bytes per code unit.
    pub fn char_byte_width(self) -> usize {
        match self {
            StringKind::Ordinary | StringKind::Utf8 => 1,
            StringKind::Utf16 => 2,
            StringKind::Wide | StringKind::Utf32 => 4,
        }
    }
}
