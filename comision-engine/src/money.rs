//! Money precision utilities
//!
//! All monetary math runs through `Decimal` and is rounded to 2 decimal
//! places at the point of computation, not at display time, so repeated
//! summation of already-rounded values does not drift. Values are stored
//! and serialized as `f64`.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Rounding for compliance percentages (internal precision)
const COMPLIANCE_PLACES: u32 = 4;

/// Embedded IVA factor: sales totals carry 19% tax
pub const IVA_FACTOR: f64 = 1.19;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round to currency precision (2 decimal places, half-up)
#[inline]
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Round to compliance precision (4 decimal places, half-up)
#[inline]
pub fn round4(value: f64) -> f64 {
    to_decimal(value)
        .round_dp_with_strategy(COMPLIANCE_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum already-rounded monetary values without floating-point residue
pub fn sum2<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    to_f64(values.into_iter().map(to_decimal).sum::<Decimal>())
}

/// Strip the embedded 19% IVA to get the commission-bearing base
#[inline]
pub fn base_sale(total: f64) -> f64 {
    to_f64(to_decimal(total) / to_decimal(IVA_FACTOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(-10.005), -10.01);
    }

    #[test]
    fn test_round2_idempotent() {
        for v in [0.0, 0.015, 840_336.128, 1_000_000.0 / 3.0, -5.555] {
            let once = round2(v);
            assert_eq!(round2(once), once);
        }
    }

    #[test]
    fn test_base_sale_strips_iva() {
        // 1,000,000 / 1.19 = 840,336.1344... → 840,336.13
        assert_eq!(base_sale(1_000_000.0), 840_336.13);
        // 2,000,000 / 1.19 = 1,680,672.268... → 1,680,672.27
        assert_eq!(base_sale(2_000_000.0), 1_680_672.27);
        assert_eq!(base_sale(0.0), 0.0);
    }

    #[test]
    fn test_round4_keeps_internal_precision() {
        assert_eq!(round4(33.333333), 33.3333);
        assert_eq!(round4(100.0), 100.0);
    }

    #[test]
    fn test_sum2_has_no_residue() {
        // 0.1 + 0.2 accumulates residue in plain f64 summation
        assert_eq!(sum2([0.1, 0.2]), 0.3);
        assert_eq!(sum2([375_000.0, 375_000.0, 250_000.0]), 1_000_000.0);
        assert_eq!(sum2(std::iter::empty::<f64>()), 0.0);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }
}
