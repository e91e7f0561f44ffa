use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Formats a raw series value the way it is printed next to bars and in legends.
///
/// Integral values print without a fractional part (`30`), everything else
/// keeps the shortest round-trip representation (`12.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Formats a percentage with one decimal place (`16.7`).
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}")
}

#[cfg(test)]
mod tests {
    use super::{format_percentage, format_value};

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(-4.0), "-4");
        assert_eq!(format_value(12.5), "12.5");
    }

    #[test]
    fn percentages_keep_one_decimal() {
        assert_eq!(format_percentage(100.0 / 6.0), "16.7");
        assert_eq!(format_percentage(50.0), "50.0");
        assert_eq!(format_percentage(0.0), "0.0");
    }
}
