// Dweve DataNote - Unified Semi-Structured Data Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Number literals.
//!
//! A [`Number`] keeps the literal text it was read from. Equality and
//! hashing are textual, so `1E0`, `1.0` and `1` are distinct values;
//! numeric interpretation happens only on request through
//! [`Number::to_f64`], [`Number::to_decimal`] and [`Number::to_i64`].

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::lex::numbers::{self, decompose, Literal, NumberSyntax};

/// Shift bound beyond which hexadecimal fractions are evaluated through `f64`.
const MAX_EXACT_SHIFT: i64 = 4096;

/// A validated number literal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(String);

impl Number {
    /// Reads `text` under `syntax`.
    pub fn parse_with(text: &str, syntax: NumberSyntax) -> Result<Self, &'static str> {
        numbers::normalize(text, syntax).map(Number)
    }

    /// Reads `text` accepting every literal extension.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with(text, NumberSyntax::EXTENDED).ok()
    }

    /// Converts a float, spelling non-finite values as `NaN`, `Infinity`
    /// and `-Infinity`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number("NaN".to_string())
        } else if value.is_infinite() {
            Number(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
        } else {
            Number(format!("{value:?}"))
        }
    }

    /// The stored literal.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the literal is valid under `syntax` as stored.
    pub fn conforms_to(&self, syntax: NumberSyntax) -> bool {
        numbers::conforms(&self.0, syntax)
    }

    /// True for `Infinity`, `NaN` and radix literals.
    pub fn is_extended(&self) -> bool {
        !matches!(decompose(&self.0), Literal::Decimal(_))
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        match decompose(&self.0) {
            Literal::Decimal(text) => text.parse().unwrap_or(f64::NAN),
            Literal::Infinity { negative: false } => f64::INFINITY,
            Literal::Infinity { negative: true } => f64::NEG_INFINITY,
            Literal::NaN => f64::NAN,
            Literal::Radix {
                negative,
                radix,
                integer,
                fraction,
                exponent,
            } => {
                let Some(mantissa) = mantissa(radix, integer, fraction) else {
                    return f64::NAN;
                };
                let shift = binary_shift(fraction, exponent);
                let magnitude = mantissa.to_f64().unwrap_or(f64::INFINITY)
                    * 2f64.powi(shift.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
                if negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }

    /// Exact decimal value; `None` for `Infinity` and `NaN`.
    pub fn to_decimal(&self) -> Option<BigDecimal> {
        match decompose(&self.0) {
            Literal::Decimal(text) => BigDecimal::from_str(text).ok(),
            Literal::Infinity { .. } | Literal::NaN => None,
            Literal::Radix {
                negative,
                radix,
                integer,
                fraction,
                exponent,
            } => {
                let mantissa = mantissa(radix, integer, fraction)?;
                let sign = if negative { Sign::Minus } else { Sign::Plus };
                let shift = binary_shift(fraction, exponent);
                if shift.abs() > MAX_EXACT_SHIFT {
                    return BigDecimal::from_f64(self.to_f64());
                }
                let value = BigInt::from_biguint(sign, mantissa);
                if shift >= 0 {
                    Some(BigDecimal::new(value << shift as usize, 0))
                } else {
                    // m * 2^-k == m * 5^k / 10^k
                    let k = (-shift) as u32;
                    Some(BigDecimal::new(value * BigInt::from(5u32).pow(k), k as i64))
                }
            }
        }
    }

    /// Integral value if the literal denotes one that fits in `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        match decompose(&self.0) {
            Literal::Decimal(text) => {
                if let Ok(value) = text.parse::<i64>() {
                    return Some(value);
                }
                // |i64| < 10^19; anything outside never reaches BigDecimal
                match decimal_magnitude(text) {
                    None => Some(0),
                    Some(k) if (0..19).contains(&k) => self.integral_decimal()?.to_i64(),
                    Some(_) => None,
                }
            }
            Literal::Radix {
                fraction: "",
                exponent: 0,
                negative,
                radix,
                integer,
            } => {
                let value = BigInt::from_biguint(
                    if negative { Sign::Minus } else { Sign::Plus },
                    BigUint::parse_bytes(integer.as_bytes(), radix)?,
                );
                value.to_i64()
            }
            _ => self.integral_decimal()?.to_i64(),
        }
    }

    /// Non-negative integral value, used to address array elements.
    pub fn to_index(&self) -> Option<usize> {
        usize::try_from(self.to_i64()?).ok()
    }

    /// True for any literal whose value is zero.
    pub fn is_zero(&self) -> bool {
        self.to_f64() == 0.0
    }

    fn integral_decimal(&self) -> Option<BigDecimal> {
        self.to_decimal().filter(|d| d.is_integer())
    }
}

/// Decimal order of magnitude of a plain decimal literal: `Some(k)` when
/// `10^k <= |value| < 10^(k+1)`, `None` when the value is zero. An
/// exponent too long to read saturates.
fn decimal_magnitude(text: &str) -> Option<i64> {
    let unsigned = text.trim_start_matches('-');
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], &unsigned[at + 1..]),
        None => (unsigned, "0"),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let first = integer
        .bytes()
        .chain(fraction.bytes())
        .position(|b| b != b'0')?;
    let exponent = exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
        i64::MIN / 2
    } else {
        i64::MAX / 2
    });
    Some(exponent.saturating_add(integer.len() as i64 - first as i64 - 1))
}

fn mantissa(radix: u32, integer: &str, fraction: &str) -> Option<BigUint> {
    let digits = format!("{integer}{fraction}");
    BigUint::parse_bytes(digits.as_bytes(), radix)
}

/// Power of two applied to the mantissa of a hexadecimal fraction.
fn binary_shift(fraction: &str, exponent: i32) -> i64 {
    exponent as i64 - 4 * fraction.len() as i64
}

impl FromStr for Number {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, NumberSyntax::EXTENDED)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

macro_rules! number_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number(value.to_string())
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from_f64(value as f64)
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number(value.to_string())
    }
}
