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

//! Number literal grammar.
//!
//! Standard literals follow the JSON grammar:
//!
//! ```text
//! number   := '-'? int frac? exp?
//! int      := '0' | [1-9] [0-9]*
//! frac     := '.' [0-9]+
//! exp      := [eE] [+-]? [0-9]+
//! ```
//!
//! [`NumberSyntax`] switches on three extensions:
//!
//! - `plus_sign`: a leading `+`, dropped from the stored literal
//! - `underscores`: `_` between two digits, dropped from the stored literal
//! - `extended`: signed `Infinity` and `NaN`, integers with a `0b`, `0q`,
//!   `0o` or `0x` radix prefix, and hexadecimal fractions with a binary
//!   exponent (`0x1.8p3`)
//!
//! Nothing else is normalised: `1E0`, `1.0` and `1` stay three different
//! literals.

/// Which number literal extensions a grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberSyntax {
    pub plus_sign: bool,
    pub underscores: bool,
    pub extended: bool,
}

impl NumberSyntax {
    /// Plain JSON numbers.
    pub const JSON: Self = Self {
        plus_sign: false,
        underscores: false,
        extended: false,
    };

    /// JEXIS numbers: JSON plus the lexical sugar.
    pub const JEXIS: Self = Self {
        plus_sign: true,
        underscores: true,
        extended: false,
    };

    /// Every extension.
    pub const EXTENDED: Self = Self {
        plus_sign: true,
        underscores: true,
        extended: true,
    };

    /// Returns a copy with the extended literal forms switched on or off.
    pub const fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }
}

/// Words that are numbers under the extended syntax.
pub const EXTENDED_WORDS: [&str; 2] = ["Infinity", "NaN"];

/// True if `c` may start a number literal under `syntax`.
///
/// Extended words start with a letter and are recognised by the word
/// scanner instead.
#[inline]
pub fn is_number_start(c: char, syntax: NumberSyntax) -> bool {
    c.is_ascii_digit() || c == '-' || (c == '+' && syntax.plus_sign)
}

/// True if `c` may continue a number literal; `prev` is the character
/// before it. Signs only continue a literal right after an exponent marker.
#[inline]
pub fn is_number_continue(prev: char, c: char) -> bool {
    match c {
        '+' | '-' => matches!(prev, 'e' | 'E' | 'p' | 'P'),
        _ => c.is_ascii_alphanumeric() || c == '_' || c == '.',
    }
}

/// Validates `text` under `syntax` and returns the stored literal.
///
/// The error is a short reason suitable for
/// [`LexError::InvalidNumber`](crate::lex::LexError::InvalidNumber).
pub fn normalize(text: &str, syntax: NumberSyntax) -> Result<String, &'static str> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') if syntax.plus_sign => (false, &text[1..]),
        Some(b'+') => return Err("plus sign not allowed"),
        Some(_) => (false, text),
        None => return Err("empty literal"),
    };

    let mut out = String::with_capacity(text.len());
    if body == "NaN" {
        if !syntax.extended {
            return Err("extended numbers not enabled");
        }
        out.push_str("NaN");
        return Ok(out);
    }
    if negative {
        out.push('-');
    }
    if body == "Infinity" {
        if !syntax.extended {
            return Err("extended numbers not enabled");
        }
        out.push_str(body);
        return Ok(out);
    }

    let bytes = body.as_bytes();
    if let [b'0', marker, rest @ ..] = bytes {
        if let Some(radix) = radix_of(*marker) {
            if !syntax.extended {
                return Err("radix literals need extended numbers");
            }
            out.push('0');
            out.push(*marker as char);
            scan_radix(rest, radix, syntax, &mut out)?;
            return Ok(out);
        }
    }
    scan_decimal(bytes, syntax, &mut out)?;
    Ok(out)
}

/// True if `literal` is a stored literal that `syntax` could have produced.
pub fn conforms(literal: &str, syntax: NumberSyntax) -> bool {
    normalize(literal, syntax).map_or(false, |n| n == literal)
}

fn radix_of(marker: u8) -> Option<u32> {
    match marker {
        b'b' | b'B' => Some(2),
        b'q' | b'Q' => Some(4),
        b'o' | b'O' => Some(8),
        b'x' | b'X' => Some(16),
        _ => None,
    }
}

fn digit_run(
    bytes: &[u8],
    radix: u32,
    syntax: NumberSyntax,
    out: &mut String,
) -> Result<usize, &'static str> {
    let mut i = 0;
    let mut after_digit = false;
    while i < bytes.len() {
        let b = bytes[i];
        if (b as char).is_digit(radix) {
            out.push(b as char);
            after_digit = true;
        } else if b == b'_' {
            if !syntax.underscores {
                return Err("digit separators not allowed");
            }
            if !after_digit {
                return Err("misplaced digit separator");
            }
            after_digit = false;
        } else {
            break;
        }
        i += 1;
    }
    if i == 0 {
        return Err("missing digits");
    }
    if !after_digit {
        return Err("misplaced digit separator");
    }
    Ok(i)
}

fn exponent(
    bytes: &[u8],
    syntax: NumberSyntax,
    out: &mut String,
) -> Result<usize, &'static str> {
    let mut i = 0;
    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        out.push(sign as char);
        i = 1;
    }
    Ok(i + digit_run(&bytes[i..], 10, syntax, out)?)
}

fn scan_decimal(bytes: &[u8], syntax: NumberSyntax, out: &mut String) -> Result<(), &'static str> {
    let mut i = match bytes.first() {
        Some(b'0') => {
            out.push('0');
            if matches!(bytes.get(1), Some(b) if b.is_ascii_digit() || *b == b'_') {
                return Err("leading zero");
            }
            1
        }
        Some(b) if b.is_ascii_digit() => digit_run(bytes, 10, syntax, out)?,
        _ => return Err("missing digits"),
    };
    if bytes.get(i) == Some(&b'.') {
        out.push('.');
        i += 1;
        i += digit_run(&bytes[i..], 10, syntax, out)?;
    }
    if let Some(&marker @ (b'e' | b'E')) = bytes.get(i) {
        out.push(marker as char);
        i += 1;
        i += exponent(&bytes[i..], syntax, out)?;
    }
    if i != bytes.len() {
        return Err("unexpected character in number");
    }
    Ok(())
}

fn scan_radix(
    bytes: &[u8],
    radix: u32,
    syntax: NumberSyntax,
    out: &mut String,
) -> Result<(), &'static str> {
    let mut i = digit_run(bytes, radix, syntax, out)?;
    if radix == 16 {
        let mut fraction = false;
        if bytes.get(i) == Some(&b'.') {
            out.push('.');
            i += 1;
            i += digit_run(&bytes[i..], 16, syntax, out)?;
            fraction = true;
        }
        if let Some(&marker @ (b'p' | b'P')) = bytes.get(i) {
            out.push(marker as char);
            i += 1;
            i += exponent(&bytes[i..], syntax, out)?;
        } else if fraction {
            return Err("hexadecimal fraction needs a binary exponent");
        }
    }
    if i != bytes.len() {
        return Err("unexpected character in number");
    }
    Ok(())
}

/// A stored literal split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal<'a> {
    Decimal(&'a str),
    Infinity { negative: bool },
    NaN,
    Radix {
        negative: bool,
        radix: u32,
        integer: &'a str,
        fraction: &'a str,
        exponent: i32,
    },
}

/// Splits a literal produced by [`normalize`].
pub(crate) fn decompose(literal: &str) -> Literal<'_> {
    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    match body {
        "Infinity" => return Literal::Infinity { negative },
        "NaN" => return Literal::NaN,
        _ => {}
    }
    let bytes = body.as_bytes();
    let radix = match bytes {
        [b'0', marker, ..] => radix_of(*marker),
        _ => None,
    };
    let Some(radix) = radix else {
        return Literal::Decimal(literal);
    };

    let rest = &body[2..];
    let (mantissa, exponent) = match rest.find(|c| c == 'p' || c == 'P') {
        Some(at) => {
            let text = &rest[at + 1..];
            let saturated = if text.starts_with('-') { i32::MIN } else { i32::MAX };
            (&rest[..at], text.parse::<i32>().unwrap_or(saturated))
        }
        None => (rest, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    Literal::Radix {
        negative,
        radix,
        integer,
        fraction,
        exponent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(text: &str) -> Result<String, &'static str> {
        normalize(text, NumberSyntax::JSON)
    }

    fn ext(text: &str) -> Result<String, &'static str> {
        normalize(text, NumberSyntax::EXTENDED)
    }

    // ==================== JSON grammar tests ====================

    #[test]
    fn test_json_valid_literals() {
        for text in ["0", "-0", "1", "1024", "1.0", "1E0", "1e+5", "-2.5e-3", "0.125"] {
            assert_eq!(json(text).as_deref(), Ok(text), "{text}");
        }
    }

    #[test]
    fn test_json_invalid_literals() {
        for text in ["", "-", "01", "1.", ".5", "1e", "+1", "1_0", "0x10", "Infinity", "1.2.3", "1a"] {
            assert!(json(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn test_json_reasons() {
        assert_eq!(json("01"), Err("leading zero"));
        assert_eq!(json("+1"), Err("plus sign not allowed"));
        assert_eq!(json("1_0"), Err("digit separators not allowed"));
    }

    // ==================== Sugar tests ====================

    #[test]
    fn test_plus_sign_dropped() {
        assert_eq!(normalize("+1", NumberSyntax::JEXIS).as_deref(), Ok("1"));
        assert_eq!(normalize("+1.5E+2", NumberSyntax::JEXIS).as_deref(), Ok("1.5E+2"));
    }

    #[test]
    fn test_underscores_dropped() {
        assert_eq!(normalize("1_024", NumberSyntax::JEXIS).as_deref(), Ok("1024"));
        assert_eq!(normalize("1_000.000_1", NumberSyntax::JEXIS).as_deref(), Ok("1000.0001"));
    }

    #[test]
    fn test_misplaced_underscores() {
        for text in ["1__0", "10_", "1_.0", "1._0", "1e_5"] {
            assert!(normalize(text, NumberSyntax::JEXIS).is_err(), "{text}");
        }
    }

    // ==================== Extended tests ====================

    #[test]
    fn test_extended_words() {
        assert_eq!(ext("Infinity").as_deref(), Ok("Infinity"));
        assert_eq!(ext("+Infinity").as_deref(), Ok("Infinity"));
        assert_eq!(ext("-Infinity").as_deref(), Ok("-Infinity"));
        assert_eq!(ext("NaN").as_deref(), Ok("NaN"));
        assert_eq!(ext("-NaN").as_deref(), Ok("NaN"));
    }

    #[test]
    fn test_extended_radix() {
        assert_eq!(ext("0b1010").as_deref(), Ok("0b1010"));
        assert_eq!(ext("0q0123").as_deref(), Ok("0q0123"));
        assert_eq!(ext("0o777").as_deref(), Ok("0o777"));
        assert_eq!(ext("0xFF_FF").as_deref(), Ok("0xFFFF"));
        assert_eq!(ext("-0x10").as_deref(), Ok("-0x10"));
        assert_eq!(ext("0x400P0").as_deref(), Ok("0x400P0"));
        assert_eq!(ext("0x1.8p-3").as_deref(), Ok("0x1.8p-3"));
    }

    #[test]
    fn test_extended_radix_invalid() {
        for text in ["0b102", "0q4", "0o8", "0x", "0x1.8", "0xGG", "0b1p3"] {
            assert!(ext(text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_conforms() {
        assert!(conforms("1.0", NumberSyntax::JSON));
        assert!(!conforms("0x10", NumberSyntax::JSON));
        assert!(!conforms("NaN", NumberSyntax::JSON));
        assert!(conforms("NaN", NumberSyntax::EXTENDED));
    }

    // ==================== Decompose tests ====================

    #[test]
    fn test_decompose() {
        assert_eq!(decompose("1.5"), Literal::Decimal("1.5"));
        assert_eq!(decompose("-Infinity"), Literal::Infinity { negative: true });
        assert_eq!(decompose("NaN"), Literal::NaN);
        assert_eq!(
            decompose("-0x1.8p-3"),
            Literal::Radix {
                negative: true,
                radix: 16,
                integer: "1",
                fraction: "8",
                exponent: -3
            }
        );
    }

    #[test]
    fn test_scanner_predicates() {
        assert!(is_number_start('-', NumberSyntax::JSON));
        assert!(!is_number_start('+', NumberSyntax::JSON));
        assert!(is_number_start('+', NumberSyntax::JEXIS));
        assert!(is_number_continue('e', '-'));
        assert!(!is_number_continue('1', '-'));
        assert!(is_number_continue('0', 'x'));
    }
}
