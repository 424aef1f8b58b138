//! Quantity token parsing.
//!
//! Turns a numeral as it appears in recipe text ("1.5", "3/4", "¾") into a
//! numeric value. Three notations are accepted: decimals, ASCII fractions and
//! single Unicode vulgar fraction glyphs. Anything else is rejected outright;
//! there is no best-effort partial parse.

use crate::error::QuantityError;

/// Which notation a numeral was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Decimal,
    AsciiFraction,
    UnicodeFraction,
}

/// A parsed numeral together with the text it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericToken<'a> {
    pub raw: &'a str,
    pub notation: Notation,
    /// Always finite and non-negative.
    pub value: f64,
}

/// An exact non-negative rational, kept in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numer: u64,
    denom: u64,
}

impl Fraction {
    /// Build a reduced fraction. Returns `None` for a zero denominator.
    pub fn new(numer: u64, denom: u64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let divisor = gcd(numer, denom);
        Some(Self {
            numer: numer / divisor,
            denom: denom / divisor,
        })
    }

    pub fn numer(&self) -> u64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    /// The only lossy step: a single division of the reduced terms.
    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // gcd(0, d) == d, which is non-zero whenever callers get here
    a.max(1)
}

/// Unicode vulgar fraction glyphs and their exact values.
const UNICODE_FRACTIONS: &[(char, u64, u64)] = &[
    ('¼', 1, 4),
    ('½', 1, 2),
    ('¾', 3, 4),
    ('⅐', 1, 7),
    ('⅑', 1, 9),
    ('⅒', 1, 10),
    ('⅓', 1, 3),
    ('⅔', 2, 3),
    ('⅕', 1, 5),
    ('⅖', 2, 5),
    ('⅗', 3, 5),
    ('⅘', 4, 5),
    ('⅙', 1, 6),
    ('⅚', 5, 6),
    ('⅛', 1, 8),
    ('⅜', 3, 8),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
];

/// All supported vulgar fraction glyphs, in table order.
pub fn unicode_fraction_glyphs() -> impl Iterator<Item = char> {
    UNICODE_FRACTIONS.iter().map(|&(glyph, _, _)| glyph)
}

/// Look up the exact value of a Unicode vulgar fraction glyph.
pub fn unicode_fraction(glyph: char) -> Option<Fraction> {
    UNICODE_FRACTIONS
        .iter()
        .find(|&&(g, _, _)| g == glyph)
        .and_then(|&(_, numer, denom)| Fraction::new(numer, denom))
}

/// Parse a single numeral.
///
/// Handles:
/// - Decimals: "12" → 12.0, "1.5" → 1.5, ".5" → 0.5
/// - ASCII fractions: "3/4" → 0.75, "3 / 4" → 0.75
/// - Unicode fractions: "¾" → 0.75, "⅐" → 1/7
pub fn parse_quantity(token: &str) -> Result<NumericToken<'_>, QuantityError> {
    let raw = token.trim();
    if raw.is_empty() {
        return Err(QuantityError::Empty);
    }

    if raw.contains('/') {
        let fraction = parse_ascii_fraction(raw)?;
        return Ok(NumericToken {
            raw,
            notation: Notation::AsciiFraction,
            value: fraction.to_f64(),
        });
    }

    let mut chars = raw.chars();
    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        if let Some(fraction) = unicode_fraction(glyph) {
            return Ok(NumericToken {
                raw,
                notation: Notation::UnicodeFraction,
                value: fraction.to_f64(),
            });
        }
    }

    let value = parse_decimal(raw)?;
    Ok(NumericToken {
        raw,
        notation: Notation::Decimal,
        value,
    })
}

/// Parse "<int>/<int>" (whitespace allowed around the slash) exactly.
fn parse_ascii_fraction(s: &str) -> Result<Fraction, QuantityError> {
    let unrecognized = || QuantityError::Unrecognized(s.to_string());

    let (numer, denom) = s.split_once('/').ok_or_else(unrecognized)?;
    let (numer, denom) = (numer.trim(), denom.trim());
    if !is_digits(numer) || !is_digits(denom) {
        return Err(unrecognized());
    }

    let out_of_range = |_| QuantityError::OutOfRange(s.to_string());
    let numer: u64 = numer.parse().map_err(out_of_range)?;
    let denom: u64 = denom.parse().map_err(out_of_range)?;

    Fraction::new(numer, denom).ok_or_else(|| QuantityError::ZeroDenominator(s.to_string()))
}

/// Parse an optional integer part followed by an optional fractional part.
fn parse_decimal(s: &str) -> Result<f64, QuantityError> {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let well_formed = (int_part.is_empty() || is_digits(int_part))
        && (frac_part.is_empty() || is_digits(frac_part))
        && !(int_part.is_empty() && frac_part.is_empty());
    if !well_formed {
        return Err(QuantityError::Unrecognized(s.to_string()));
    }

    let value: f64 = s
        .parse()
        .map_err(|_| QuantityError::Unrecognized(s.to_string()))?;
    if !value.is_finite() {
        return Err(QuantityError::OutOfRange(s.to_string()));
    }
    Ok(value)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
