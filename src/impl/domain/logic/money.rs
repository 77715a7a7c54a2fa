use rust_decimal::Decimal;

/// Round to whole cents the way the practice software does: a bias of
/// 0.0001 is added on the cent scale before rounding to the nearest whole
/// cent, so exact half cents round up (and negative half cents toward
/// zero). Every accumulation step in decomposition and allocation goes
/// through this.
pub(crate) fn round_cents(n: Decimal) -> Decimal {
    let bias = Decimal::new(1, 4);
    ((n * Decimal::ONE_HUNDRED + bias).round()) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(round_cents(dec!(10.004)), dec!(10.00));
        assert_eq!(round_cents(dec!(10.006)), dec!(10.01));
        assert_eq!(round_cents(dec!(10.01)), dec!(10.01));
    }

    #[test]
    fn half_cents_round_up() {
        assert_eq!(round_cents(dec!(2.675)), dec!(2.68));
        assert_eq!(round_cents(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn negative_half_cents_round_toward_zero() {
        assert_eq!(round_cents(dec!(-0.125)), dec!(-0.12));
        assert_eq!(round_cents(dec!(-0.13)), dec!(-0.13));
    }

    #[test]
    fn idempotent_on_cent_values() {
        let v = dec!(123.45);
        assert_eq!(round_cents(round_cents(v)), round_cents(v));
    }
}
