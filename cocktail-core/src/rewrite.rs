//! In-place rewriting of volume measurements inside free text.
//!
//! Scans generated recipe markdown for `<quantity><unit>` mentions such as
//! "1.5 oz", "3/4 oz" or "¾oz", and rewrites each one into the target unit.
//! Everything that is not a recognized mention is copied through untouched.
//!
//! The work is split into three stages so each can be tested on its own:
//! recognition ([`find_measurements`]), value parsing
//! ([`crate::quantity::parse_quantity`]) and formatting
//! ([`crate::units::convert_measurement`]).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::quantity::parse_quantity;
use crate::units::{convert_measurement, convert_value, VolumeUnit};

/// Quantity followed by an `ml` or `oz` label.
///
/// The ASCII fraction alternative comes first so that "3/4" is never split
/// into a bare "3" and a "4 oz" match.
static MEASUREMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<quantity>[0-9]+\s*/\s*[0-9]+|[0-9]*\.?[0-9]+|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*(?P<unit>ml|oz)\b",
    )
    .expect("Invalid measurement regex")
});

/// A measurement mention located in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementMatch<'a> {
    /// Byte offset of the mention in the scanned text.
    pub start: usize,
    pub end: usize,
    /// The whole mention, e.g. "3 / 4 Oz".
    pub text: &'a str,
    /// Just the numeral, e.g. "3 / 4".
    pub quantity: &'a str,
    pub unit: VolumeUnit,
}

impl<'a> MeasurementMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let quantity = caps.name("quantity")?;
        let unit = caps.name("unit")?.as_str().parse().ok()?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str(),
            quantity: quantity.as_str(),
            unit,
        })
    }
}

/// Find every measurement mention, left to right, without overlaps.
pub fn find_measurements(text: &str) -> Vec<MeasurementMatch<'_>> {
    MEASUREMENT_REGEX
        .captures_iter(text)
        .filter_map(|caps| MeasurementMatch::from_captures(&caps))
        .collect()
}

/// Rewrite every measurement mention in `text` into `target` units.
///
/// Mentions already in `target` are left exactly as written. Replacement text
/// is never re-scanned. This never fails: a mention whose numeral cannot be
/// evaluated (such as "1/0 oz") is left as is.
pub fn convert_quantities(text: &str, target: VolumeUnit) -> String {
    MEASUREMENT_REGEX
        .replace_all(text, |caps: &Captures| rewrite_mention(caps, target))
        .into_owned()
}

fn rewrite_mention(caps: &Captures, target: VolumeUnit) -> String {
    let Some(mention) = MeasurementMatch::from_captures(caps) else {
        return caps[0].to_string();
    };

    match parse_quantity(mention.quantity) {
        Ok(token) if !convert_value(token.value, mention.unit, target).is_finite() => {
            tracing::debug!(
                measurement = mention.text,
                "Leaving measurement unchanged, converted value overflows"
            );
            mention.text.to_string()
        }
        Ok(token) => convert_measurement(mention.text, token.value, mention.unit, target),
        Err(e) => {
            tracing::debug!(
                measurement = mention.text,
                error = %e,
                "Leaving unparseable measurement unchanged"
            );
            mention.text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::ConvertedAmount;

    #[test]
    fn test_ml_to_oz() {
        assert_eq!(
            convert_quantities("Add 30 ml of gin", VolumeUnit::FluidOunce),
            "Add 1 oz of gin"
        );
    }

    #[test]
    fn test_decimal_oz_to_ml() {
        assert_eq!(
            convert_quantities("Add 1.5 oz of vermouth", VolumeUnit::Milliliter),
            "Add 45 ml of vermouth"
        );
    }

    #[test]
    fn test_unicode_fraction_rounds_half_up() {
        // 0.75 * 30 = 22.5
        assert_eq!(
            convert_quantities("Add ¾ oz of lime juice", VolumeUnit::Milliliter),
            "Add 23 ml of lime juice"
        );
    }

    #[test]
    fn test_ascii_fraction_matches_unicode() {
        assert_eq!(
            convert_quantities("Add 3/4 oz of syrup", VolumeUnit::Milliliter),
            "Add 23 ml of syrup"
        );
        assert_eq!(
            convert_quantities("Add 3 / 4 oz of syrup", VolumeUnit::Milliliter),
            "Add 23 ml of syrup"
        );
    }

    #[test]
    fn test_no_measurements_unchanged() {
        for target in [VolumeUnit::Milliliter, VolumeUnit::FluidOunce] {
            assert_eq!(
                convert_quantities("Stir for 10 seconds", target),
                "Stir for 10 seconds"
            );
            assert_eq!(convert_quantities("", target), "");
            assert_eq!(
                convert_quantities("Garnish with 2 cherries", target),
                "Garnish with 2 cherries"
            );
        }
    }

    #[test]
    fn test_trailing_duplicate_label() {
        // "1 oz" is itself a complete mention; the dangling "oz" is plain text.
        assert_eq!(
            convert_quantities("2 oz gin, 1 oz oz", VolumeUnit::Milliliter),
            "60 ml gin, 30 ml oz"
        );
    }

    #[test]
    fn test_same_unit_is_untouched() {
        let text = "- 1.50 OZ gin\n- ¾oz lime\n- 3 / 4 Oz syrup";
        assert_eq!(convert_quantities(text, VolumeUnit::FluidOunce), text);

        let text = "Pour 22.5ml of cordial and 100 ML soda";
        assert_eq!(convert_quantities(text, VolumeUnit::Milliliter), text);
    }

    #[test]
    fn test_grammar_coverage() {
        let numerals = [("1.5", 1.5), ("3/4", 0.75), ("¾", 0.75), ("12", 12.0)];
        let labels = [
            ("ml", VolumeUnit::Milliliter),
            ("ML", VolumeUnit::Milliliter),
            ("Ml", VolumeUnit::Milliliter),
            ("oz", VolumeUnit::FluidOunce),
            ("OZ", VolumeUnit::FluidOunce),
            ("Oz", VolumeUnit::FluidOunce),
        ];

        for (numeral, value) in numerals {
            for (label, unit) in labels {
                let target = match unit {
                    VolumeUnit::Milliliter => VolumeUnit::FluidOunce,
                    VolumeUnit::FluidOunce => VolumeUnit::Milliliter,
                };
                let expected = ConvertedAmount {
                    value: crate::units::convert_value(value, unit, target),
                    unit: target,
                }
                .to_string();

                for text in [
                    format!("{} {}", numeral, label),
                    format!("{}{}", numeral, label),
                ] {
                    assert_eq!(
                        convert_quantities(&text, target),
                        expected,
                        "converting {:?}",
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn test_word_boundary_after_label() {
        assert_eq!(
            convert_quantities("2 ozone generators", VolumeUnit::Milliliter),
            "2 ozone generators"
        );
        assert_eq!(
            convert_quantities("30 mlx", VolumeUnit::FluidOunce),
            "30 mlx"
        );
        assert_eq!(
            convert_quantities("Add 2 oz.", VolumeUnit::Milliliter),
            "Add 60 ml."
        );
    }

    #[test]
    fn test_mixed_numbers_are_not_a_single_mention() {
        assert_eq!(
            convert_quantities("1 1/2 oz rye", VolumeUnit::Milliliter),
            "1 15 ml rye"
        );
    }

    #[test]
    fn test_overflowing_conversion_left_unchanged() {
        let huge = format!("1{} oz", "0".repeat(308));
        let text = format!("{} of rum, 1 oz lime", huge);
        assert_eq!(
            convert_quantities(&text, VolumeUnit::Milliliter),
            format!("{} of rum, 30 ml lime", huge)
        );
    }

    #[test]
    fn test_zero_denominator_left_unchanged() {
        assert_eq!(
            convert_quantities("1/0 oz of mystery, 1 oz gin", VolumeUnit::Milliliter),
            "1/0 oz of mystery, 30 ml gin"
        );
    }

    #[test]
    fn test_markdown_is_preserved() {
        let text = "### Daiquiri\n\n**Ingredients:**\n- 60 ml white rum\n- 22.5 ml lime juice\n- 15 ml simple syrup\n\n**Instructions:** Shake with ice for 10 seconds. Strain.\n";
        let expected = "### Daiquiri\n\n**Ingredients:**\n- 2 oz white rum\n- 0.75 oz lime juice\n- 0.5 oz simple syrup\n\n**Instructions:** Shake with ice for 10 seconds. Strain.\n";
        assert_eq!(convert_quantities(text, VolumeUnit::FluidOunce), expected);
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // "1 oz" becomes "30 ml"; converting to ml must not see "30 ml" as input.
        let converted = convert_quantities("1 oz then 30 ml", VolumeUnit::Milliliter);
        assert_eq!(converted, "30 ml then 30 ml");
    }

    #[test]
    fn test_round_trip_within_display_step() {
        let volumes: [f64; 14] = [
            5.0, 7.0, 10.0, 15.0, 20.0, 22.0, 25.0, 45.0, 50.0, 75.0, 100.0, 120.0, 150.0, 750.0,
        ];
        for ml in volumes {
            let text = format!("{} ml", ml);
            let oz = convert_quantities(&text, VolumeUnit::FluidOunce);
            let back = convert_quantities(&oz, VolumeUnit::Milliliter);
            let back_value: f64 = back
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap();

            let oz_value = ml / 30.0;
            let oz_step = 10f64.powf(oz_value.log10().floor() - 1.0);
            let tolerance = oz_step * 30.0 / 2.0 + 0.5;
            assert!(
                (back_value - ml).abs() <= tolerance,
                "{} -> {} -> {} (tolerance {})",
                text,
                oz,
                back,
                tolerance
            );
        }
    }

    #[test]
    fn test_find_measurements_positions() {
        let text = "Add ½ oz honey and 30ML lemon, stir 10 seconds";
        let found = find_measurements(text);
        assert_eq!(found.len(), 2);

        assert_eq!(found[0].text, "½ oz");
        assert_eq!(found[0].quantity, "½");
        assert_eq!(found[0].unit, VolumeUnit::FluidOunce);
        assert_eq!(&text[found[0].start..found[0].end], "½ oz");

        assert_eq!(found[1].text, "30ML");
        assert_eq!(found[1].quantity, "30");
        assert_eq!(found[1].unit, VolumeUnit::Milliliter);
    }
}
