//! Volume unit conversion between milliliters and fluid ounces.
//!
//! Uses a flat 30 ml per fluid ounce, which keeps bar measures round
//! (1 oz = 30 ml, ¾ oz = 23 ml) at the cost of ~1.4% against the exact 29.5735.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

pub const ML_PER_FL_OZ: f64 = 30.0;

/// Significant digits shown for fluid ounce amounts.
const OZ_SIGNIFICANT_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "oz")]
    FluidOunce,
}

impl VolumeUnit {
    /// The label written after converted amounts.
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::FluidOunce => "oz",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(VolumeUnit::Milliliter)
            }
            "oz" | "fl oz" | "fl. oz" | "fluid ounce" | "fluid ounces" | "ounce" | "ounces" => {
                Ok(VolumeUnit::FluidOunce)
            }
            _ => Err(UnitError::Unknown(s.to_string())),
        }
    }
}

/// An amount in a specific unit, displayed per that unit's rounding rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedAmount {
    pub value: f64,
    pub unit: VolumeUnit,
}

impl fmt::Display for ConvertedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            VolumeUnit::FluidOunce => write!(
                f,
                "{} oz",
                format_significant(self.value, OZ_SIGNIFICANT_DIGITS)
            ),
            VolumeUnit::Milliliter => write!(f, "{} ml", format_whole(self.value)),
        }
    }
}

/// Convert a raw value between units.
pub fn convert_value(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    match (from, to) {
        (VolumeUnit::Milliliter, VolumeUnit::FluidOunce) => value / ML_PER_FL_OZ,
        (VolumeUnit::FluidOunce, VolumeUnit::Milliliter) => value * ML_PER_FL_OZ,
        _ => value,
    }
}

/// Produce the replacement text for one measurement.
///
/// `original` is returned untouched when no conversion is needed, so text
/// already in the target unit keeps its exact spelling.
pub fn convert_measurement(original: &str, value: f64, from: VolumeUnit, to: VolumeUnit) -> String {
    if from == to {
        return original.to_string();
    }
    ConvertedAmount {
        value: convert_value(value, from, to),
        unit: to,
    }
    .to_string()
}

/// Round to the nearest whole number, ties away from zero.
fn format_whole(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Format with a fixed number of significant digits in positional notation.
///
/// Digit selection goes through `{:e}` formatting, which rounds correctly
/// (ties to even on the exact binary value). Trailing zeros are trimmed.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let sign = if mantissa.starts_with('-') { "-" } else { "" };
    let mantissa_digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let point = exponent + 1;
    let len = mantissa_digits.len() as i32;

    let positional = if point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), mantissa_digits)
    } else if point >= len {
        format!("{}{}", mantissa_digits, "0".repeat((point - len) as usize))
    } else {
        let (whole, fraction) = mantissa_digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    };

    let trimmed = if positional.contains('.') {
        positional.trim_end_matches('0').trim_end_matches('.')
    } else {
        positional.as_str()
    };
    format!("{}{}", sign, trimmed)
}
